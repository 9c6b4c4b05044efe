//! Small shared helpers used across widgets and stores.

/// Milliseconds since the Unix epoch. A clock set before the epoch
/// yields 0 rather than an error.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Percentage of `value` over `total`, with a zero total mapping to 0
/// instead of a division by zero.
pub fn percent(value: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (value as f64 / total as f64) * 100.0
}
