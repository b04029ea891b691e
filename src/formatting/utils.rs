use chrono::{NaiveDate, NaiveTime};
use colored::*;

use crate::models::EventType;

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// `2025-03-15` becomes `Mar 15, 2025`. Anything unparsable is shown as-is.
pub fn format_event_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// `14:30` becomes `2:30 PM`.
pub fn format_event_time(time: &str) -> String {
    match NaiveTime::parse_from_str(time, "%H:%M") {
        Ok(parsed) => parsed.format("%-I:%M %p").to_string(),
        Err(_) => time.to_string(),
    }
}

pub fn format_event_type(event_type: EventType) -> ColoredString {
    match event_type {
        EventType::Upcoming => event_type.label().green(),
        EventType::Past => event_type.label().dimmed(),
    }
}

pub fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

pub fn preview(text: &str, max_len: usize) -> String {
    let first_line = text
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");
    truncate(first_line.trim(), max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_and_times_are_humanized() {
        assert_eq!(format_event_date("2025-03-05"), "Mar 5, 2025");
        assert_eq!(format_event_date("soon"), "soon");
        assert_eq!(format_event_time("14:30"), "2:30 PM");
        assert_eq!(format_event_time("09:05"), "9:05 AM");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
        assert_eq!(truncate("äöüäöüäöü", 6), "äöü...");
    }

    #[test]
    fn preview_takes_first_non_empty_line() {
        assert_eq!(preview("\n\n  Hello world\nsecond", 40), "Hello world");
    }
}
