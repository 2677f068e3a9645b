//! Application state
//!
//! Explicit session state container passed to whatever screen needs it.
//! Mutations go through the methods here; there is no ambient global.
//! Prescriptions are replaced wholesale on each fetch, never diffed.

use thiserror::Error;

use crate::models::{Medication, Prescription};

/// Session error types
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No active session; sign in again")]
    NotLoggedIn,
}

/// The signed-in patient
#[derive(Debug, Clone)]
pub struct PatientSession {
    pub id: i64,
    pub name: Option<String>,
}

/// In-memory application state for one session
#[derive(Debug, Default)]
pub struct AppState {
    session: Option<PatientSession>,
    prescriptions: Vec<Prescription>,
    large_font: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, session: PatientSession) {
        self.session = Some(session);
    }

    /// Clear the session and everything cached for it
    pub fn logout(&mut self) {
        self.session = None;
        self.prescriptions.clear();
    }

    /// The signed-in patient, or the session error the UI surfaces
    pub fn session(&self) -> Result<&PatientSession, SessionError> {
        self.session.as_ref().ok_or(SessionError::NotLoggedIn)
    }

    /// Replace the cached prescriptions with a fresh fetch
    pub fn set_prescriptions(&mut self, prescriptions: Vec<Prescription>) {
        self.prescriptions = prescriptions;
    }

    pub fn prescriptions(&self) -> &[Prescription] {
        &self.prescriptions
    }

    /// All cached medications in prescription order
    pub fn medications(&self) -> impl Iterator<Item = &Medication> {
        self.prescriptions.iter().flat_map(|p| p.medications.iter())
    }

    /// Flip the accessibility large-font flag; returns the new value
    pub fn toggle_large_font(&mut self) -> bool {
        self.large_font = !self.large_font;
        self.large_font
    }

    pub fn large_font(&self) -> bool {
        self.large_font
    }
}
