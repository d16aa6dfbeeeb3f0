//! Human-readable byte and duration formatting.

use chrono::TimeDelta;

/// Formats bytes in human-readable form (e.g., "1.50 GB", "250.00 MB").
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    const GB: u64 = 1024 * MB;
    const TB: u64 = 1024 * GB;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Formats a time span in human-readable form (e.g., "10d 4h", "2h 30m").
#[must_use]
pub fn format_span(span: TimeDelta) -> String {
    let total_secs = span.num_seconds().max(0);
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    if days > 0 {
        if hours > 0 {
            format!("{days}d {hours}h")
        } else {
            format!("{days}d")
        }
    } else if hours > 0 {
        if minutes > 0 {
            format!("{hours}h {minutes}m")
        } else {
            format!("{hours}h")
        }
    } else if minutes > 0 {
        if seconds > 0 {
            format!("{minutes}m {seconds}s")
        } else {
            format!("{minutes}m")
        }
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(500), "500 B");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1_572_864), "1.50 MB");
        assert_eq!(format_bytes(1_610_612_736), "1.50 GB");
        assert_eq!(format_bytes(30_000_000), "28.61 MB");
    }

    #[test]
    fn test_format_span() {
        assert_eq!(format_span(TimeDelta::seconds(30)), "30s");
        assert_eq!(format_span(TimeDelta::seconds(90)), "1m 30s");
        assert_eq!(format_span(TimeDelta::minutes(10) + TimeDelta::seconds(30)), "10m 30s");
        assert_eq!(format_span(TimeDelta::minutes(45)), "45m");
        assert_eq!(format_span(TimeDelta::hours(2) + TimeDelta::minutes(30)), "2h 30m");
        assert_eq!(format_span(TimeDelta::days(10)), "10d");
        assert_eq!(format_span(TimeDelta::days(10) + TimeDelta::hours(4)), "10d 4h");
    }
}
