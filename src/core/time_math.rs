//! Stateless conversions between playback positions, durations and slider progress.
//!
//! Positions and durations are milliseconds, progress is a ratio in `[0, 1]`.
//! None of these functions fail: degenerate input collapses to `"00:00"` or `0`.

/// Label shown for a missing, zero, negative or non-numeric time.
pub const ZERO_TIME: &str = "00:00";

/// Formats milliseconds as `MM:SS`.
///
/// Minutes are zero-padded to two digits but never wrap into hours, so an
/// hour-long track renders as `"60:00"` and longer ones as `"123:04"`.
///
/// # Arguments
/// * `milliseconds` - Elapsed or total time in milliseconds
///
/// # Returns
/// * `"00:00"` for zero, negative, NaN or infinite input, and for values whose
///   whole seconds do not fit in a `u64`
/// * The `MM:SS` label otherwise
pub fn format_time(milliseconds: f64) -> String {
    if !is_valid_time(milliseconds) {
        return ZERO_TIME.to_string();
    }

    let total_seconds = (milliseconds / 1000.0).floor() as u64;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}", minutes, seconds)
}

/// Same as [`format_time`], treating a missing value as zero.
pub fn format_time_opt(milliseconds: Option<f64>) -> String {
    milliseconds.map_or_else(|| ZERO_TIME.to_string(), format_time)
}

/// Returns the slider ratio for `position` within `duration`, clamped to `[0, 1]`.
///
/// Yields `0` when the duration is zero, negative or NaN.
pub fn get_progress(position: f64, duration: f64) -> f64 {
    if !is_valid_duration(duration) {
        return 0.0;
    }

    (position / duration).clamp(0.0, 1.0)
}

/// Inverse of [`get_progress`]: maps a slider ratio back to a position in milliseconds.
///
/// The result is clamped to `[0, duration]`, and is `0` when the duration is
/// zero, negative or NaN.
pub fn get_position_from_progress(progress: f64, duration: f64) -> f64 {
    if !is_valid_duration(duration) {
        return 0.0;
    }

    (progress * duration).clamp(0.0, duration)
}

// Past `u64::MAX` seconds the float-to-int cast saturates into a bogus clock.
fn is_valid_time(milliseconds: f64) -> bool {
    milliseconds.is_finite() && milliseconds > 0.0 && milliseconds / 1000.0 < u64::MAX as f64
}

// NaN fails the comparison, which keeps `clamp` away from a NaN bound.
fn is_valid_duration(duration: f64) -> bool {
    duration > 0.0
}
