//! Date parsing and formatting helpers.
//!
//! Due dates are plain calendar days. Input accepts a small natural-language
//! vocabulary alongside ISO dates; output formats dates relative to today for
//! table display.

use chrono::{Datelike, Duration, NaiveDate};

/// Parse a human due-date input relative to `today`.
///
/// Supports:
/// - "today", "tomorrow", "yesterday"
/// - "in 3d", "in 2w"
/// - weekday names ("friday", "fri") for this week's occurrence,
///   "next <weekday>" for the following week
/// - "YYYY-MM-DD"
pub fn parse_due_input(s: &str, today: NaiveDate) -> Option<NaiveDate> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "today" => return Some(today),
        "tomorrow" => return Some(today + Duration::days(1)),
        "yesterday" => return Some(today - Duration::days(1)),
        _ => {}
    }

    if let Some(rest) = s.strip_prefix("in ") {
        if let Some(n) = rest.strip_suffix('d') {
            if let Ok(days) = n.trim().parse::<i64>() {
                return Some(today + Duration::days(days));
            }
        }
        if let Some(n) = rest.strip_suffix('w') {
            if let Ok(weeks) = n.trim().parse::<i64>() {
                return Some(today + Duration::weeks(weeks));
            }
        }
    }

    let weekdays = [
        ("monday", 0), ("tuesday", 1), ("wednesday", 2), ("thursday", 3),
        ("friday", 4), ("saturday", 5), ("sunday", 6),
        ("mon", 0), ("tue", 1), ("wed", 2), ("thu", 3),
        ("fri", 4), ("sat", 5), ("sun", 6),
    ];
    let current = today.weekday().num_days_from_monday() as i32;
    for (name, target) in weekdays {
        let ahead = (target + 7 - current) % 7;
        if s == name {
            return Some(today + Duration::days(ahead as i64));
        }
        if s == format!("next {name}") {
            let days = if ahead == 0 { 7 } else { ahead + 7 };
            return Some(today + Duration::days(days as i64));
        }
    }

    NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()
}

/// Format a due date relative to today ("today", "tomorrow", "in 3d", "2d late").
pub fn format_due_relative(due: Option<NaiveDate>, today: NaiveDate) -> String {
    match due {
        None => "-".into(),
        Some(d) => {
            let days = (d - today).num_days();
            if days == 0 {
                "today".into()
            } else if days == 1 {
                "tomorrow".into()
            } else if days > 1 {
                format!("in {days}d")
            } else {
                format!("{}d late", -days)
            }
        }
    }
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Normalise a tag: trim, lowercase, spaces to hyphens.
pub fn normalise_tag(s: &str) -> String {
    s.trim().to_lowercase().replace(' ', "-")
}

/// Split comma-separated tag inputs and normalise each tag, deduplicated and
/// sorted.
pub fn split_and_normalise_tags(inputs: &[String]) -> Vec<String> {
    let mut tags = Vec::new();
    for raw in inputs {
        for part in raw.split(',') {
            let tag = normalise_tag(part);
            if !tag.is_empty() {
                tags.push(tag);
            }
        }
    }
    tags.sort();
    tags.dedup();
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        // A Tuesday.
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    #[test]
    fn test_parse_relative_words() {
        assert_eq!(parse_due_input("today", today()), Some(today()));
        assert_eq!(
            parse_due_input("tomorrow", today()),
            Some(today() + Duration::days(1))
        );
        assert_eq!(
            parse_due_input("in 3d", today()),
            Some(today() + Duration::days(3))
        );
        assert_eq!(
            parse_due_input("in 2w", today()),
            Some(today() + Duration::weeks(2))
        );
    }

    #[test]
    fn test_parse_weekdays() {
        // Friday of the same week, three days out from Tuesday.
        assert_eq!(
            parse_due_input("friday", today()),
            Some(today() + Duration::days(3))
        );
        // "next tuesday" from a Tuesday is a week out.
        assert_eq!(
            parse_due_input("next tuesday", today()),
            Some(today() + Duration::days(7))
        );
    }

    #[test]
    fn test_parse_iso_and_garbage() {
        assert_eq!(
            parse_due_input("2026-04-01", today()),
            NaiveDate::from_ymd_opt(2026, 4, 1)
        );
        assert_eq!(parse_due_input("not a date", today()), None);
    }

    #[test]
    fn test_format_due_relative() {
        assert_eq!(format_due_relative(None, today()), "-");
        assert_eq!(format_due_relative(Some(today()), today()), "today");
        assert_eq!(
            format_due_relative(Some(today() + Duration::days(1)), today()),
            "tomorrow"
        );
        assert_eq!(
            format_due_relative(Some(today() + Duration::days(5)), today()),
            "in 5d"
        );
        assert_eq!(
            format_due_relative(Some(today() - Duration::days(2)), today()),
            "2d late"
        );
    }

    #[test]
    fn test_split_and_normalise_tags() {
        let tags = split_and_normalise_tags(&["Backend, API".into(), "backend".into()]);
        assert_eq!(tags, vec!["api".to_string(), "backend".to_string()]);
    }
}
