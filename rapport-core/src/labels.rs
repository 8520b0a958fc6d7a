//! Human-readable day labels.

use crate::constants::HIGHLIGHT_DAYS;

/// Label for a reminder that is `days_until` days away (never negative).
pub fn days_text(days_until: i64) -> String {
    match days_until {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        n => format!("{} days from now", n),
    }
}

/// Like [`days_text`] but also covers dates in the past, for event listings.
pub fn relative_days_text(days_until: i64) -> String {
    match days_until {
        -1 => "yesterday".to_string(),
        n if n < 0 => format!("{} days ago", n.unsigned_abs()),
        n => days_text(n),
    }
}

/// Whether a listing should emphasise an event this many days away.
pub fn is_highlighted(days_until: i64) -> bool {
    (0..=HIGHLIGHT_DAYS).contains(&days_until)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_text() {
        assert_eq!(days_text(0), "today");
        assert_eq!(days_text(1), "tomorrow");
        assert_eq!(days_text(2), "2 days from now");
        assert_eq!(days_text(30), "30 days from now");
    }

    #[test]
    fn test_relative_days_text_handles_past() {
        assert_eq!(relative_days_text(-1), "yesterday");
        assert_eq!(relative_days_text(-12), "12 days ago");
        assert_eq!(relative_days_text(0), "today");
        assert_eq!(relative_days_text(5), "5 days from now");
    }

    #[test]
    fn test_is_highlighted_window() {
        assert!(is_highlighted(0));
        assert!(is_highlighted(7));
        assert!(!is_highlighted(8));
        assert!(!is_highlighted(-1));
    }
}
