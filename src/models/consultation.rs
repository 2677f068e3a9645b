//! Consultation model
//!
//! Consultation requests made by the patient and their review status.

use serde::{Deserialize, Serialize};

use crate::api::ConsultaRecord;

/// Status of a consultation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    Other,
}

impl ConsultationStatus {
    /// Lenient parse; the service sends free-form Spanish status strings
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pendiente" | "pending" => ConsultationStatus::Pending,
            "confirmada" | "confirmado" | "confirmed" => ConsultationStatus::Confirmed,
            "cancelada" | "cancelado" | "cancelled" | "canceled" => ConsultationStatus::Cancelled,
            "atendida" | "realizada" | "completed" => ConsultationStatus::Completed,
            _ => ConsultationStatus::Other,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ConsultationStatus::Pending => "Pendiente",
            ConsultationStatus::Confirmed => "Confirmada",
            ConsultationStatus::Cancelled => "Cancelada",
            ConsultationStatus::Completed => "Atendida",
            ConsultationStatus::Other => "Sin estado",
        }
    }
}

/// A consultation request as shown to the patient
#[derive(Debug, Clone, Serialize)]
pub struct Consultation {
    /// Requested date, as the service formats it
    pub date: String,
    /// Requested time, as the service formats it
    pub time: String,
    pub status: ConsultationStatus,
}

impl Consultation {
    pub fn from_record(record: &ConsultaRecord) -> Self {
        Self {
            date: record.fecha.clone(),
            time: record.hora.clone(),
            status: record
                .status
                .as_deref()
                .map(ConsultationStatus::from_str)
                .unwrap_or(ConsultationStatus::Other),
        }
    }
}

/// Payload for requesting a new consultation
#[derive(Debug, Clone, Serialize)]
pub struct ConsultationCreate {
    #[serde(rename = "pacienteId")]
    pub paciente_id: i64,
    pub fecha: String,
    pub hora: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivo: Option<String>,
}
