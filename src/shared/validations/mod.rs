//! Input format checks shared by the API layer and the core.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Region and service-type names: alphanumeric characters or '_' only.
pub fn is_valid_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Rate values on the wire: a non-negative decimal string (`12`, `0.5`, `3.25`).
pub fn is_valid_rate_string(s: &str) -> bool {
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next();
    if parts.next().is_some() {
        return false;
    }
    let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    all_digits(int_part) && frac_part.map_or(true, all_digits)
}

/// Effective dates on the wire: `dd/mm/yyyy`, interpreted as midnight UTC.
pub fn parse_day_month_year(s: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn identifiers_accept_alphanumerics_and_underscore() {
        assert!(is_valid_identifier("eu_west_1"));
        assert!(is_valid_identifier("Storage2"));
        assert!(is_valid_identifier("_"));
    }

    #[test]
    fn identifiers_reject_spaces_and_punctuation() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("eu west"));
        assert!(!is_valid_identifier("eu-west"));
        assert!(!is_valid_identifier("région"));
    }

    #[test]
    fn rate_strings_accept_integers_and_decimals() {
        assert!(is_valid_rate_string("0"));
        assert!(is_valid_rate_string("12"));
        assert!(is_valid_rate_string("0.5"));
        assert!(is_valid_rate_string("3.25"));
    }

    #[test]
    fn rate_strings_reject_signs_and_garbage() {
        assert!(!is_valid_rate_string(""));
        assert!(!is_valid_rate_string("-1"));
        assert!(!is_valid_rate_string("+1"));
        assert!(!is_valid_rate_string("1."));
        assert!(!is_valid_rate_string(".5"));
        assert!(!is_valid_rate_string("1.2.3"));
        assert!(!is_valid_rate_string("1e3"));
        assert!(!is_valid_rate_string("abc"));
    }

    #[test]
    fn dates_parse_day_month_year() {
        let parsed = parse_day_month_year("07/03/2024").unwrap();
        assert_eq!(parsed.day(), 7);
        assert_eq!(parsed.month(), 3);
        assert_eq!(parsed.year(), 2024);
    }

    #[test]
    fn dates_reject_other_formats() {
        assert!(parse_day_month_year("2024-03-07").is_none());
        assert!(parse_day_month_year("32/01/2024").is_none());
        assert!(parse_day_month_year("").is_none());
    }
}
