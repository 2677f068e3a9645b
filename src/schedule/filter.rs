//! Active-medication and low-stock filtering
//!
//! Day filtering runs on every date selection, so both functions are pure
//! over an immutable snapshot of the medication list.

use chrono::NaiveDate;

use crate::models::Medication;

/// Remaining-stock threshold below which a medication is flagged
pub const LOW_STOCK_THRESHOLD: i32 = 5;

/// Medications whose date range includes `date`, bounds inclusive.
///
/// Comparison is at midnight granularity: time-of-day never affects whether
/// a medication is active on a calendar day.
pub fn active_on(medications: &[Medication], date: NaiveDate) -> Vec<&Medication> {
    medications
        .iter()
        .filter(|med| med.is_active_on(date))
        .collect()
}

/// Medications with a known stock count under the threshold.
///
/// Evaluated over the full list, not the selected day's subset, so a
/// medication can be flagged even on days it is not displayed.
pub fn low_stock(medications: &[Medication]) -> Vec<&Medication> {
    medications.iter().filter(|med| med.is_low_stock()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::DoseSchedule;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn med(name: &str, start: NaiveDate, end: NaiveDate, stock: Option<i32>) -> Medication {
        Medication {
            name: name.to_string(),
            dose: "500mg".to_string(),
            frequency_text: None,
            first_intake: None,
            instructions: None,
            start_date: start,
            duration_text: None,
            end_date: end,
            dose_schedule: DoseSchedule::Unspecified,
            stock_remaining: stock,
        }
    }

    #[test]
    fn test_active_range_bounds_inclusive() {
        let meds = vec![med("A", date(2025, 1, 1), date(2025, 1, 11), None)];

        assert_eq!(active_on(&meds, date(2025, 1, 1)).len(), 1);
        assert_eq!(active_on(&meds, date(2025, 1, 5)).len(), 1);
        assert_eq!(active_on(&meds, date(2025, 1, 11)).len(), 1);
        assert!(active_on(&meds, date(2024, 12, 31)).is_empty());
        assert!(active_on(&meds, date(2025, 1, 12)).is_empty());
    }

    #[test]
    fn test_active_filters_per_medication() {
        let meds = vec![
            med("A", date(2025, 1, 1), date(2025, 1, 10), None),
            med("B", date(2025, 1, 8), date(2025, 2, 8), None),
        ];

        let on_fifth = active_on(&meds, date(2025, 1, 5));
        assert_eq!(on_fifth.len(), 1);
        assert_eq!(on_fifth[0].name, "A");

        let on_ninth = active_on(&meds, date(2025, 1, 9));
        assert_eq!(on_ninth.len(), 2);
    }

    #[test]
    fn test_low_stock_threshold_is_strict() {
        let meds = vec![
            med("A", date(2025, 1, 1), date(2025, 1, 10), Some(4)),
            med("B", date(2025, 1, 1), date(2025, 1, 10), Some(5)),
            med("C", date(2025, 1, 1), date(2025, 1, 10), None),
        ];

        let flagged = low_stock(&meds);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].name, "A");
    }

    #[test]
    fn test_low_stock_ignores_active_window() {
        // Flagged even though the medication's range ended long ago
        let meds = vec![med("A", date(2024, 1, 1), date(2024, 1, 10), Some(2))];
        assert_eq!(low_stock(&meds).len(), 1);
    }
}
