//! Data models
//!
//! Normalized session entities built from the service's wire records.

mod consultation;
mod medication;
mod prescription;

pub use consultation::{Consultation, ConsultationCreate, ConsultationStatus};
pub use medication::Medication;
pub use prescription::Prescription;
