//! Human-readable duration formatting shared by the cost and subagent
//! widgets.

/// Format a millisecond duration using the two most significant units.
///
/// Examples: 5000 -> "5s", 65000 -> "1m 5s", 3665000 -> "1h 1m",
/// 90000000 -> "1d 1h".
pub fn format_duration(ms: u64) -> String {
    let seconds = ms / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        let rem_hours = hours % 24;
        return if rem_hours > 0 {
            format!("{}d {}h", days, rem_hours)
        } else {
            format!("{}d", days)
        };
    }

    if hours > 0 {
        let rem_minutes = minutes % 60;
        return if rem_minutes > 0 {
            format!("{}h {}m", hours, rem_minutes)
        } else {
            format!("{}h", hours)
        };
    }

    if minutes > 0 {
        let rem_seconds = seconds % 60;
        return if rem_seconds > 0 {
            format!("{}m {}s", minutes, rem_seconds)
        } else {
            format!("{}m", minutes)
        };
    }

    format!("{}s", seconds)
}
