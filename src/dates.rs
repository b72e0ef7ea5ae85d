//! Date Utilities
//!
//! Display helpers for server-assigned timestamps.

use chrono::{DateTime, NaiveDate};

/// Render `date_posted` as e.g. "Mar 14, 2025".
/// Accepts ISO dates, RFC 3339 and RFC 2822 timestamps; anything else is shown as-is.
pub fn format_posted_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| DateTime::parse_from_rfc2822(raw).ok().map(|dt| dt.date_naive()));

    match date {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// "Posted on: ..." line of a job card; "Unknown" when the server sent no date
pub fn posted_line(date_posted: Option<&str>) -> String {
    match date_posted.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => format!("Posted on: {}", format_posted_date(raw)),
        None => "Posted on: Unknown".to_string(),
    }
}
