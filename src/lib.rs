//! Mediplan Library
//!
//! Core functionality for the patient medication schedule client:
//! prescription fetching, dose scheduling, and reminder synchronization.

pub mod api;
pub mod build_info;
pub mod input;
pub mod models;
pub mod reminders;
pub mod schedule;
pub mod state;
