//! Dose time computation
//!
//! Derives a day's dose times from a first-intake anchor and a frequency
//! string like "cada 8 horas". Timing data is clinician-entered free text,
//! so every degraded combination of inputs maps to a usable variant.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

use super::duration::first_uint;

/// Maximum dose times surfaced per medication (anchor plus three repetitions)
pub const MAX_DOSE_TIMES: usize = 4;

/// A medication's dose timing for the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DoseSchedule {
    /// Computed wall-clock times, ordered, between 1 and 4 entries
    Times(Vec<NaiveTime>),
    /// Frequency text with no anchor time; a display label, never a time
    Unstructured(String),
    /// No timing information at all
    Unspecified,
}

impl DoseSchedule {
    /// Computed times, empty for the unstructured/unspecified variants
    pub fn times(&self) -> &[NaiveTime] {
        match self {
            DoseSchedule::Times(times) => times,
            _ => &[],
        }
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, DoseSchedule::Unspecified)
    }
}

impl fmt::Display for DoseSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoseSchedule::Times(times) => {
                let labels: Vec<String> =
                    times.iter().map(|t| t.format("%H:%M").to_string()).collect();
                write!(f, "{}", labels.join(", "))
            }
            DoseSchedule::Unstructured(text) => write!(f, "{}", text),
            DoseSchedule::Unspecified => write!(f, "schedule not specified"),
        }
    }
}

/// Compute the day's dose schedule.
///
/// With an anchor time and a frequency containing an integer hour interval,
/// the result is the anchor plus three repetitions at `(hour + F*i) mod 24`
/// with the minute unchanged. The hour wraps past midnight without advancing
/// the calendar day; a dose landing at 00:00 still belongs to the same day's
/// list. This matches the behavior the rest of the system was built around.
///
/// Degraded inputs:
/// - anchor only, or anchor with a numberless frequency: single-entry `Times`
/// - frequency only: `Unstructured` with the raw text
/// - neither: `Unspecified`
pub fn compute_dose_schedule(
    first_intake: Option<NaiveTime>,
    frequency_text: Option<&str>,
) -> DoseSchedule {
    match (first_intake, frequency_text) {
        (Some(anchor), Some(frequency)) => {
            let Some(interval) = first_uint(frequency) else {
                return DoseSchedule::Times(vec![anchor]);
            };

            let mut times = Vec::with_capacity(MAX_DOSE_TIMES);
            times.push(anchor);
            for i in 1..MAX_DOSE_TIMES as u64 {
                let hour = (u64::from(anchor.hour()) + u64::from(interval) * i) % 24;
                if let Some(time) = NaiveTime::from_hms_opt(hour as u32, anchor.minute(), 0) {
                    times.push(time);
                }
            }
            DoseSchedule::Times(times)
        }
        (Some(anchor), None) => DoseSchedule::Times(vec![anchor]),
        (None, Some(frequency)) => DoseSchedule::Unstructured(frequency.to_string()),
        (None, None) => DoseSchedule::Unspecified,
    }
}
