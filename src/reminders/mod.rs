//! Local reminder synchronization
//!
//! Keeps the platform's recurring alarms in step with the current medication
//! list. Alarms are keyed by a deterministic id, so re-running a sync is a
//! no-op and a dose can never fire twice.

use std::collections::HashSet;

use chrono::{NaiveTime, Timelike};
use tracing::debug;

use crate::models::Medication;

/// A desired recurring alarm for one dose time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoseAlarm {
    /// Deterministic identifier, see [`alarm_id`]
    pub id: String,
    pub medication: String,
    pub time: NaiveTime,
}

/// Platform notification scheduler seam.
///
/// The real implementation talks to the OS; tests use an in-memory double.
pub trait NotificationScheduler {
    /// Identifiers of alarms currently scheduled
    fn scheduled_ids(&self) -> Vec<String>;
    /// Register a recurring alarm
    fn schedule(&mut self, alarm: &DoseAlarm);
    /// Cancel an alarm by identifier
    fn cancel(&mut self, id: &str);
}

/// Outcome of one sync pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub created: usize,
    pub canceled: usize,
    pub unchanged: usize,
}

/// Deterministic alarm identifier: `NAME_H_M`, name uppercased with
/// whitespace runs collapsed to underscores.
pub fn alarm_id(medication: &str, time: NaiveTime) -> String {
    let name = medication
        .to_uppercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("{}_{}_{}", name, time.hour(), time.minute())
}

/// One alarm per (medication, dose time) for structured schedules.
///
/// Medications with unstructured or unspecified schedules contribute
/// nothing; there is no time to fire at.
pub fn desired_alarms(medications: &[Medication]) -> Vec<DoseAlarm> {
    let mut seen = HashSet::new();
    let mut alarms = Vec::new();
    for med in medications {
        for &time in med.dose_schedule.times() {
            let id = alarm_id(&med.name, time);
            if seen.insert(id.clone()) {
                alarms.push(DoseAlarm {
                    id,
                    medication: med.name.clone(),
                    time,
                });
            }
        }
    }
    alarms
}

/// Synchronize the platform's alarms with the desired set.
///
/// Missing alarms are created, stale ones canceled, and alarms present on
/// both sides are left untouched. Syncing the same desired set twice does
/// no work the second time.
pub fn sync_alarms<S: NotificationScheduler>(scheduler: &mut S, desired: &[DoseAlarm]) -> SyncReport {
    let existing: HashSet<String> = scheduler.scheduled_ids().into_iter().collect();
    let wanted: HashSet<&str> = desired.iter().map(|a| a.id.as_str()).collect();

    let mut report = SyncReport::default();
    for alarm in desired {
        if existing.contains(&alarm.id) {
            report.unchanged += 1;
        } else {
            scheduler.schedule(alarm);
            report.created += 1;
        }
    }
    for id in &existing {
        if !wanted.contains(id.as_str()) {
            scheduler.cancel(id);
            report.canceled += 1;
        }
    }

    debug!(
        created = report.created,
        canceled = report.canceled,
        unchanged = report.unchanged,
        "alarm sync complete"
    );
    report
}
