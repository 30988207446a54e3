use recipes_api::SearchFilter;

use crate::error::DashboardError;

pub const MAX_FILTER_LENGTH: usize = 100;
pub const MAX_RECIPE_ID_LENGTH: usize = 64;
pub const MAX_LIMIT: i64 = 100;

/// Comparison prefix the search endpoint understands on numeric filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    LessThan,
    AtMost,
    GreaterThan,
    AtLeast,
    Equal,
}

impl Comparison {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::LessThan => "<",
            Comparison::AtMost => "<=",
            Comparison::GreaterThan => ">",
            Comparison::AtLeast => ">=",
            Comparison::Equal => "",
        }
    }
}

/// Splits an optional comparison prefix off a numeric filter value.
///
/// Two-character operators are matched first, so `<=5` is `AtMost`, not `LessThan` of `=5`.
pub fn split_comparison(input: &str) -> (Comparison, &str) {
    let input = input.trim();
    for (prefix, comparison) in [
        ("<=", Comparison::AtMost),
        (">=", Comparison::AtLeast),
        ("<", Comparison::LessThan),
        (">", Comparison::GreaterThan),
    ] {
        if let Some(rest) = input.strip_prefix(prefix) {
            return (comparison, rest.trim());
        }
    }
    (Comparison::Equal, input)
}

/// Turn tabs and line breaks into spaces, strip the remaining ASCII control
/// characters, trim whitespace, and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, DashboardError> {
    if input.len() > max_len {
        return Err(DashboardError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter_map(|c| match c {
            '\t' | '\n' | '\r' => Some(' '),
            c if c.is_ascii_control() => None,
            c => Some(c),
        })
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(DashboardError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a search filter value before it is sent.
///
/// Text filters are sanitized. Numeric filters must be a number with an optional
/// comparison prefix; `total_time` only takes whole minutes.
pub fn validate_filter_value(filter: SearchFilter, input: &str) -> Result<String, DashboardError> {
    let value = sanitize_text(input, MAX_FILTER_LENGTH)?;
    if !filter.is_numeric() {
        return Ok(value);
    }
    let (_, number) = split_comparison(&value);
    let valid = match filter {
        SearchFilter::TotalTime => number.parse::<i64>().is_ok(),
        _ => number.parse::<f64>().map(f64::is_finite).unwrap_or(false),
    };
    if !valid {
        return Err(DashboardError::InvalidInput(format!(
            "{} filter '{}' must be a {} with an optional <, <=, >, >= prefix",
            filter,
            value,
            if filter == SearchFilter::TotalTime {
                "whole number of minutes"
            } else {
                "number"
            }
        )));
    }
    Ok(value)
}

/// Validate page number (must be >= 1).
pub fn validate_page(page: i64) -> Result<i64, DashboardError> {
    if page < 1 {
        return Err(DashboardError::InvalidInput(
            "page must be >= 1".to_string(),
        ));
    }
    Ok(page)
}

/// Validate page size (must be 1..=100).
pub fn validate_limit(limit: i64) -> Result<i64, DashboardError> {
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(DashboardError::InvalidInput(format!(
            "limit must be between 1 and {}",
            MAX_LIMIT
        )));
    }
    Ok(limit)
}

/// Validate a recipe identifier: non-empty, bounded, no control characters or slashes.
pub fn validate_recipe_id(input: &str) -> Result<String, DashboardError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DashboardError::InvalidInput(
            "recipe id is empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_RECIPE_ID_LENGTH {
        return Err(DashboardError::InvalidInput(format!(
            "recipe id exceeds maximum length of {} bytes",
            MAX_RECIPE_ID_LENGTH
        )));
    }
    if trimmed.chars().any(|c| c.is_control() || c == '/') {
        return Err(DashboardError::InvalidInput(format!(
            "recipe id '{}' contains invalid characters",
            trimmed.escape_default()
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Comparison prefixes --

    #[test]
    fn comparison_two_char_operators_first() {
        assert_eq!(split_comparison("<=30"), (Comparison::AtMost, "30"));
        assert_eq!(split_comparison(">=4.5"), (Comparison::AtLeast, "4.5"));
    }

    #[test]
    fn comparison_single_char_operators() {
        assert_eq!(split_comparison("<500"), (Comparison::LessThan, "500"));
        assert_eq!(split_comparison("> 3"), (Comparison::GreaterThan, "3"));
    }

    #[test]
    fn comparison_none() {
        assert_eq!(split_comparison(" 42 "), (Comparison::Equal, "42"));
        assert_eq!(Comparison::Equal.symbol(), "");
    }

    // -- Filter values --

    #[test]
    fn filter_text_is_sanitized() {
        assert_eq!(
            validate_filter_value(SearchFilter::Title, "  apple\tpie ").unwrap(),
            "apple pie"
        );
        assert_eq!(
            validate_filter_value(SearchFilter::Cuisine, "Thai").unwrap(),
            "Thai"
        );
    }

    #[test]
    fn sanitize_keeps_word_breaks() {
        assert_eq!(sanitize_text("sweet\npotato\r\npie", 100).unwrap(), "sweet potato  pie");
        assert_eq!(sanitize_text("pie\u{0}\u{7}", 100).unwrap(), "pie");
    }

    #[test]
    fn filter_text_empty() {
        assert!(validate_filter_value(SearchFilter::Title, "   ").is_err());
    }

    #[test]
    fn filter_rating_valid() {
        assert_eq!(validate_filter_value(SearchFilter::Rating, "4.5").unwrap(), "4.5");
        assert_eq!(validate_filter_value(SearchFilter::Rating, ">=4").unwrap(), ">=4");
    }

    #[test]
    fn filter_rating_invalid() {
        assert!(validate_filter_value(SearchFilter::Rating, "great").is_err());
        assert!(validate_filter_value(SearchFilter::Rating, ">=").is_err());
        assert!(validate_filter_value(SearchFilter::Rating, "NaN").is_err());
        assert!(validate_filter_value(SearchFilter::Rating, "inf").is_err());
    }

    #[test]
    fn filter_calories_accepts_decimals() {
        assert_eq!(
            validate_filter_value(SearchFilter::Calories, "<350.5").unwrap(),
            "<350.5"
        );
    }

    #[test]
    fn filter_total_time_requires_whole_minutes() {
        assert_eq!(
            validate_filter_value(SearchFilter::TotalTime, "<= 45").unwrap(),
            "<= 45"
        );
        assert!(validate_filter_value(SearchFilter::TotalTime, "30.5").is_err());
        assert!(validate_filter_value(SearchFilter::TotalTime, "an hour").is_err());
    }

    #[test]
    fn filter_too_long() {
        let long = "a".repeat(MAX_FILTER_LENGTH + 1);
        assert!(validate_filter_value(SearchFilter::Title, &long).is_err());
    }

    // -- Pagination --

    #[test]
    fn page_bounds() {
        assert_eq!(validate_page(1).unwrap(), 1);
        assert!(validate_page(0).is_err());
        assert!(validate_page(-3).is_err());
    }

    #[test]
    fn limit_bounds() {
        assert_eq!(validate_limit(15).unwrap(), 15);
        assert_eq!(validate_limit(100).unwrap(), 100);
        assert!(validate_limit(0).is_err());
        assert!(validate_limit(101).is_err());
    }

    // -- Recipe ids --

    #[test]
    fn recipe_id_valid() {
        assert_eq!(
            validate_recipe_id(" 65a1f0c2e4b0a1b2c3d4e5f6 ").unwrap(),
            "65a1f0c2e4b0a1b2c3d4e5f6"
        );
    }

    #[test]
    fn recipe_id_invalid() {
        assert!(validate_recipe_id("").is_err());
        assert!(validate_recipe_id("../etc").is_err());
        assert!(validate_recipe_id("abc\n").is_ok());
        assert!(validate_recipe_id("ab\u{7}c").is_err());
        assert!(validate_recipe_id(&"f".repeat(65)).is_err());
    }
}
