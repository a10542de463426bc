/// Utilities for date and number formatting
///
/// Dates come from the API as "YYYY-MM-DD" and are shown as "DD/MM/YYYY".

/// Placeholder for a missing date
pub const NO_DATE: &str = "N/A";

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let trimmed = date_str.trim();
    if trimmed.is_empty() {
        return NO_DATE.to_string();
    }
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    trimmed.to_string()
}

/// Same as [`format_date`] for an optional value.
pub fn format_optional_date(date_str: Option<&str>) -> String {
    date_str.map_or_else(|| NO_DATE.to_string(), format_date)
}

/// Completion percentage with one decimal: 42.0 -> "42.0%"
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_missing_date() {
        assert_eq!(format_date(""), NO_DATE);
        assert_eq!(format_date("   "), NO_DATE);
        assert_eq!(format_optional_date(None), NO_DATE);
        assert_eq!(format_optional_date(Some("2025-01-02")), "02/01/2025");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(42.0), "42.0%");
        assert_eq!(format_percent(12.34), "12.3%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
