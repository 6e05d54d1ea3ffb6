/// Format a duration in seconds as a compact human-readable label,
/// e.g. "2h 30m", "45m", "1m 30s", "30s".
///
/// Seconds are dropped once hours are present, but a zero-minute gap
/// between nonzero hours and nonzero seconds still renders "0m" so
/// "1h 5s" can never be misread as "1h 5m". Negative, NaN, or zero
/// input renders "0s".
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0s".to_string();
    }

    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let remaining_seconds = (seconds % 60.0).round() as u64;

    let mut parts = Vec::new();

    if hours > 0 {
        parts.push(format!("{hours}h"));
    }

    if minutes > 0 || (hours > 0 && remaining_seconds > 0) {
        parts.push(format!("{minutes}m"));
    }

    if remaining_seconds > 0 && hours == 0 {
        parts.push(format!("{remaining_seconds}s"));
    }

    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}
