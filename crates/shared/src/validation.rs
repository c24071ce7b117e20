//! Common validation utilities.

use chrono::{NaiveDate, Utc};
use validator::ValidationError;

/// How far in the past a wedding date may lie (1 year, for post-event edits).
const WEDDING_DATE_PAST_LIMIT_DAYS: i64 = 365;

/// How far in the future a wedding date may lie (3 years).
const WEDDING_DATE_FUTURE_LIMIT_DAYS: i64 = 365 * 3;

/// Mobile prefixes accepted for RSVP contact numbers.
const MOBILE_PREFIXES: [&str; 6] = ["010", "011", "016", "017", "018", "019"];

/// Validates a `#RRGGBB` hex color string.
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    let rest = color.strip_prefix('#').unwrap_or("");
    if rest.len() == 6 && rest.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("hex_color");
        err.message = Some("Color must be in #RRGGBB format".into());
        Err(err)
    }
}

/// Validates that a wedding date is within a plausible scheduling window.
/// - Must not be more than 1 year in the past (post-event edits still allowed)
/// - Must not be more than 3 years in the future
pub fn validate_wedding_date(date: &NaiveDate) -> Result<(), ValidationError> {
    let today = Utc::now().date_naive();

    let past_limit = today - chrono::Duration::days(WEDDING_DATE_PAST_LIMIT_DAYS);
    if *date < past_limit {
        let mut err = ValidationError::new("wedding_date_past");
        err.message = Some("Wedding date cannot be more than a year in the past".into());
        return Err(err);
    }

    let future_limit = today + chrono::Duration::days(WEDDING_DATE_FUTURE_LIMIT_DAYS);
    if *date > future_limit {
        let mut err = ValidationError::new("wedding_date_future");
        err.message = Some("Wedding date cannot be more than 3 years in the future".into());
        return Err(err);
    }

    Ok(())
}

/// Validates an invitation slug: lowercase alphanumeric and hyphens, with no
/// leading or trailing hyphen.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let charset_ok = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if charset_ok && !slug.starts_with('-') && !slug.ends_with('-') {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_slug");
        err.message = Some(
            "Slug may only contain lowercase letters, digits, and inner hyphens".into(),
        );
        Err(err)
    }
}

/// Validates a Korean mobile number. Hyphens are optional; after stripping
/// them the number must be 10-11 digits starting with a mobile prefix.
pub fn validate_korean_mobile(phone: &str) -> Result<(), ValidationError> {
    let digits: String = phone.chars().filter(|c| *c != '-').collect();

    let well_formed = digits.chars().all(|c| c.is_ascii_digit())
        && (10..=11).contains(&digits.len())
        && MOBILE_PREFIXES.iter().any(|p| digits.starts_with(p));

    if well_formed {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_mobile");
        err.message = Some("Phone number must be a valid Korean mobile number".into());
        Err(err)
    }
}
