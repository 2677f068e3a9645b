//! Duration parsing
//!
//! Converts clinician-entered duration text ("10 días", "2 semanas", "1 mes")
//! into a day count. The text is free-form, so parsing is lenient: anything
//! unreadable resolves to the default instead of an error.

/// Fallback day count when the duration is absent or unparseable
pub const DEFAULT_DURATION_DAYS: u32 = 30;

/// Days per week
pub const DAYS_PER_WEEK: u32 = 7;
/// Days per month (calendar-agnostic, matches the prescription convention)
pub const DAYS_PER_MONTH: u32 = 30;

/// Extract the first contiguous run of digits from a string
pub(crate) fn first_uint(s: &str) -> Option<u32> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let rest = &s[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

/// Parse a duration string into a day count.
///
/// Rules:
/// - The first run of digits is the count; no digits means the default.
/// - A week keyword ("semana(s)"/"week(s)") multiplies the count by 7.
/// - A month keyword ("mes(es)"/"month(s)") multiplies the count by 30.
/// - Otherwise the count is already in days.
///
/// Absent input, no digits, an explicit zero, and counts too large to
/// multiply all resolve to [`DEFAULT_DURATION_DAYS`]. The result is always
/// at least 1, so a derived end date can never precede the start date.
pub fn parse_duration_days(text: Option<&str>) -> u32 {
    let Some(text) = text else {
        return DEFAULT_DURATION_DAYS;
    };

    let count = match first_uint(text) {
        Some(n) if n > 0 => n,
        _ => return DEFAULT_DURATION_DAYS,
    };

    let lower = text.to_lowercase();
    let multiplier = if lower.contains("semana") || lower.contains("week") {
        DAYS_PER_WEEK
    } else if lower.contains("mes") || lower.contains("month") {
        DAYS_PER_MONTH
    } else {
        1
    };

    count.checked_mul(multiplier).unwrap_or(DEFAULT_DURATION_DAYS)
}
