// Rust guideline compliant 2026-10-17

//! Seconds-to-hours conversion used by every report.

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Converts seconds to hours without rounding.
#[must_use]
pub fn seconds_to_hours(seconds: i64) -> f64 {
    seconds as f64 / SECONDS_PER_HOUR
}

/// Formats a duration in seconds as decimal hours.
///
/// Whole values keep one decimal place (`2.0`), fractional values are printed
/// in full (`1.3333333333333333`). With `show_unit` an `h` suffix is appended.
///
/// # Arguments
///
/// * `seconds` - Duration in seconds (may be negative)
/// * `show_unit` - Whether to append the `h` suffix
#[must_use]
pub fn format_hours(seconds: i64, show_unit: bool) -> String {
    let hours = format_decimal(seconds_to_hours(seconds));
    if show_unit {
        format!("{hours}h")
    } else {
        hours
    }
}

/// Formats an hour value already converted from seconds.
#[must_use]
pub fn format_decimal(hours: f64) -> String {
    if hours.fract() == 0.0 && hours.is_finite() {
        format!("{hours:.1}")
    } else {
        format!("{hours}")
    }
}
