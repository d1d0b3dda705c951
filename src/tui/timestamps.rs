use chrono::{DateTime, Utc};

/// Relative age of `timestamp`: "just now", "5m ago", "3h ago", "2d ago", "6w ago", "1y ago"
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_relative_to(timestamp, &Utc::now())
}

/// [`format_timestamp`] against an explicit clock
pub fn format_relative_to(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(*timestamp).num_seconds();
    if seconds < 0 {
        // mtime in the future (clock skew, copied trees)
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    match days {
        365.. => format!("{}y ago", days / 365),
        30.. => format!("{}mo ago", days / 30),
        14.. => format!("{}w ago", days / 7),
        1.. => format!("{}d ago", days),
        _ if hours > 0 => format!("{}h ago", hours),
        _ if minutes > 0 => format!("{}m ago", minutes),
        _ => "just now".to_string(),
    }
}
