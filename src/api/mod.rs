//! Prescription service API
//!
//! Handles the HTTP action protocol and its wire records.

pub mod client;
pub mod types;

pub use client::{ApiError, ApiResult, PrescriptionService};
pub use types::{ConsultaRecord, MedicamentoRecord, RecetaRecord};
