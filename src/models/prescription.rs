//! Prescription model
//!
//! A clinician-issued prescription with its normalized medications.

use chrono::NaiveDate;
use serde::Serialize;

use crate::api::RecetaRecord;

use super::Medication;

/// A normalized prescription for the in-memory session
#[derive(Debug, Clone, Serialize)]
pub struct Prescription {
    pub id: i64,
    /// Issue date; doubles as the start date of every contained medication
    pub issued_on: NaiveDate,
    pub diagnosis: Option<String>,
    pub observations: Option<String>,
    pub doctor_name: Option<String>,
    pub medications: Vec<Medication>,
}

impl Prescription {
    /// Normalize a wire record.
    ///
    /// `today` is the fallback when the issue date is unreadable, so a
    /// malformed record still renders instead of being dropped.
    pub fn from_record(record: &RecetaRecord, today: NaiveDate) -> Self {
        let issued_on = parse_issue_date(&record.fecha_emision).unwrap_or(today);
        let medications = record
            .medicamentos
            .iter()
            .map(|m| Medication::from_record(m, issued_on))
            .collect();

        Self {
            id: record.id,
            issued_on,
            diagnosis: record.diagnostico.clone(),
            observations: record.observaciones.clone(),
            doctor_name: record.doctor_nombre.clone(),
            medications,
        }
    }
}

/// Parse an issue date, tolerating a trailing time component
fn parse_issue_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    // Datetime strings like "2025-01-01T09:15:00Z": the date is the prefix
    trimmed
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MedicamentoRecord;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn receta(fecha_emision: &str) -> RecetaRecord {
        RecetaRecord {
            id: 1,
            fecha_emision: fecha_emision.to_string(),
            diagnostico: Some("Faringitis".to_string()),
            observaciones: None,
            doctor_nombre: Some("Dra. Soto".to_string()),
            medicamentos: vec![MedicamentoRecord {
                nombre_medicamento: "Amoxicilina".to_string(),
                dosis: "500mg".to_string(),
                frecuencia: Some("cada 8 horas".to_string()),
                primera_ingesta: Some("08:00".to_string()),
                duracion: Some("10 días".to_string()),
                instrucciones: None,
                cantidad_inicial: Some(30),
            }],
        }
    }

    #[test]
    fn test_issue_date_becomes_medication_start() {
        let prescription = Prescription::from_record(&receta("2025-01-01"), date(2025, 6, 1));
        assert_eq!(prescription.issued_on, date(2025, 1, 1));
        assert_eq!(prescription.medications[0].start_date, date(2025, 1, 1));
        assert_eq!(prescription.medications[0].end_date, date(2025, 1, 11));
    }

    #[test]
    fn test_datetime_issue_string() {
        let prescription =
            Prescription::from_record(&receta("2025-01-01T09:15:00Z"), date(2025, 6, 1));
        assert_eq!(prescription.issued_on, date(2025, 1, 1));
    }

    #[test]
    fn test_unreadable_issue_date_falls_back_to_today() {
        let prescription = Prescription::from_record(&receta("ayer"), date(2025, 6, 1));
        assert_eq!(prescription.issued_on, date(2025, 6, 1));
    }
}
