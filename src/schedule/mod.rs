//! Medication scheduling logic
//!
//! Pure functions deriving dose times, treatment durations, day filtering,
//! and display colors from prescription data. Everything here is synchronous
//! and side-effect-free; callers may re-run it on every render.

pub mod colors;
pub mod dose_times;
pub mod duration;
pub mod filter;

pub use colors::{ColorMap, PALETTE, UNASSIGNED_COLOR};
pub use dose_times::{compute_dose_schedule, DoseSchedule, MAX_DOSE_TIMES};
pub use duration::{parse_duration_days, DAYS_PER_MONTH, DAYS_PER_WEEK, DEFAULT_DURATION_DAYS};
pub use filter::{active_on, low_stock, LOW_STOCK_THRESHOLD};
