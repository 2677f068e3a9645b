//! Medication model
//!
//! A normalized medication entry for the in-memory session. Built once from
//! the wire record when a prescription is fetched and replaced wholesale on
//! the next fetch; derived fields (end date, dose schedule) are computed at
//! normalization time, never incrementally updated.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::Serialize;

use crate::api::MedicamentoRecord;
use crate::schedule::{
    compute_dose_schedule, parse_duration_days, DoseSchedule, DEFAULT_DURATION_DAYS,
    LOW_STOCK_THRESHOLD,
};

/// A normalized medication entry
#[derive(Debug, Clone, Serialize)]
pub struct Medication {
    pub name: String,
    /// Free-text dose, e.g. "500mg"
    pub dose: String,
    /// Free-text recurrence, e.g. "cada 8 horas"
    pub frequency_text: Option<String>,
    /// Anchor time for the first dose of the day
    pub first_intake: Option<NaiveTime>,
    pub instructions: Option<String>,
    /// Day the prescription became active (its issue date)
    pub start_date: NaiveDate,
    /// Free-text duration, e.g. "10 días"
    pub duration_text: Option<String>,
    /// `start_date + parsed duration`; always on or after `start_date`
    pub end_date: NaiveDate,
    /// Derived dose times, computed once per medication
    pub dose_schedule: DoseSchedule,
    /// Remaining units, when the prescription recorded an initial quantity
    pub stock_remaining: Option<i32>,
}

impl Medication {
    /// Normalize a wire record into a session medication.
    ///
    /// `issued_on` is the prescription's issue date and becomes the start
    /// date. Malformed duration or timing text never fails; the lenient
    /// parsers resolve it to defaults.
    pub fn from_record(record: &MedicamentoRecord, issued_on: NaiveDate) -> Self {
        let duration_days = parse_duration_days(record.duracion.as_deref());
        // A day count past NaiveDate's range falls back to the default
        let end_date = issued_on
            .checked_add_signed(Duration::days(i64::from(duration_days)))
            .unwrap_or_else(|| issued_on + Duration::days(i64::from(DEFAULT_DURATION_DAYS)));
        let first_intake = record
            .primera_ingesta
            .as_deref()
            .and_then(parse_intake_time);
        let dose_schedule = compute_dose_schedule(first_intake, record.frecuencia.as_deref());

        Self {
            name: record.nombre_medicamento.trim().to_string(),
            dose: record.dosis.clone(),
            frequency_text: record.frecuencia.clone(),
            first_intake,
            instructions: record.instrucciones.clone(),
            start_date: issued_on,
            duration_text: record.duracion.clone(),
            end_date,
            dose_schedule,
            stock_remaining: record.cantidad_inicial,
        }
    }

    /// Whether this medication is active on the given calendar day.
    /// Bounds inclusive, midnight granularity.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Whether remaining stock is known and under the warning threshold
    pub fn is_low_stock(&self) -> bool {
        matches!(self.stock_remaining, Some(n) if n < LOW_STOCK_THRESHOLD)
    }
}

/// Parse a first-intake time like "08:00" (seconds tolerated, ignored)
fn parse_intake_time(s: &str) -> Option<NaiveTime> {
    let trimmed = s.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        duracion: Option<&str>,
        frecuencia: Option<&str>,
        primera_ingesta: Option<&str>,
    ) -> MedicamentoRecord {
        MedicamentoRecord {
            nombre_medicamento: "Amoxicilina".to_string(),
            dosis: "500mg".to_string(),
            frecuencia: frecuencia.map(String::from),
            primera_ingesta: primera_ingesta.map(String::from),
            duracion: duracion.map(String::from),
            instrucciones: None,
            cantidad_inicial: Some(30),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_date_from_duration() {
        let med = Medication::from_record(
            &record(Some("10 días"), Some("cada 8 horas"), Some("08:00")),
            date(2025, 1, 1),
        );
        assert_eq!(med.start_date, date(2025, 1, 1));
        assert_eq!(med.end_date, date(2025, 1, 11));
        assert!(med.is_active_on(date(2025, 1, 5)));
        assert!(!med.is_active_on(date(2025, 1, 12)));
    }

    #[test]
    fn test_missing_duration_defaults_to_thirty_days() {
        let med = Medication::from_record(&record(None, None, None), date(2025, 1, 1));
        assert_eq!(med.end_date, date(2025, 1, 31));
        assert!(med.end_date >= med.start_date);
    }

    #[test]
    fn test_enormous_duration_falls_back_to_default() {
        // A day count that would push end_date past the calendar's range
        // must resolve to the default, never panic
        let med = Medication::from_record(
            &record(Some("4000000000 días"), None, None),
            date(2025, 1, 1),
        );
        assert_eq!(med.end_date, date(2025, 1, 31));

        let weeks = Medication::from_record(
            &record(Some("700000000 semanas"), None, None),
            date(2025, 1, 1),
        );
        assert_eq!(weeks.end_date, date(2025, 1, 31));
    }

    #[test]
    fn test_dose_schedule_derived_at_normalization() {
        let med = Medication::from_record(
            &record(Some("10 días"), Some("cada 8 horas"), Some("08:00")),
            date(2025, 1, 1),
        );
        let labels: Vec<String> = med
            .dose_schedule
            .times()
            .iter()
            .map(|t| t.format("%H:%M").to_string())
            .collect();
        assert_eq!(labels, vec!["08:00", "16:00", "00:00", "08:00"]);
    }

    #[test]
    fn test_unreadable_intake_time_degrades() {
        let med = Medication::from_record(
            &record(None, Some("cada 8 horas"), Some("por la mañana")),
            date(2025, 1, 1),
        );
        assert!(med.first_intake.is_none());
        assert_eq!(
            med.dose_schedule,
            DoseSchedule::Unstructured("cada 8 horas".to_string())
        );
    }

    #[test]
    fn test_low_stock_flag() {
        let mut med = Medication::from_record(&record(None, None, None), date(2025, 1, 1));
        assert!(!med.is_low_stock());
        med.stock_remaining = Some(4);
        assert!(med.is_low_stock());
        med.stock_remaining = Some(5);
        assert!(!med.is_low_stock());
        med.stock_remaining = None;
        assert!(!med.is_low_stock());
    }

    #[test]
    fn test_intake_time_formats() {
        assert_eq!(
            parse_intake_time("08:30"),
            NaiveTime::from_hms_opt(8, 30, 0)
        );
        assert_eq!(
            parse_intake_time(" 22:00:00 "),
            NaiveTime::from_hms_opt(22, 0, 0)
        );
        assert_eq!(parse_intake_time("mediodía"), None);
    }
}
