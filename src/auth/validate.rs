use chrono::NaiveDate;

use crate::errors::AppError;

pub const MAX_NAME_LEN: usize = 120;
pub const MAX_THEME_LEN: usize = 200;
pub const MAX_MATERIALS_LEN: usize = 4000;

/// Validate a required text field with a max length. Returns the trimmed value.
pub fn validate_required<'a>(
    value: &'a str,
    field_name: &str,
    max_len: usize,
) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field_name} is required")));
    }
    if trimmed.chars().count() > max_len {
        return Err(AppError::Validation(format!(
            "{field_name} must be at most {max_len} characters"
        )));
    }
    Ok(trimmed)
}

/// Parse a required `YYYY-MM-DD` date (the format of `<input type="date">`).
pub fn validate_date(value: &str, field_name: &str) -> Result<NaiveDate, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field_name} is required")));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!("{field_name} must be a date in YYYY-MM-DD format"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trims_surrounding_whitespace() {
        assert_eq!(validate_required("  Book club ", "Name", 50).unwrap(), "Book club");
    }

    #[test]
    fn required_rejects_blank() {
        let err = validate_required("   ", "Name", 50).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Name is required"));
    }

    #[test]
    fn required_counts_characters_not_bytes() {
        assert!(validate_required("ééé", "Theme", 3).is_ok());
        assert!(validate_required("éééé", "Theme", 3).is_err());
    }

    #[test]
    fn date_accepts_iso_format() {
        let d = validate_date("2025-03-09", "Date").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
    }

    #[test]
    fn date_rejects_other_formats() {
        assert!(matches!(validate_date("09/03/2025", "Date"), Err(AppError::Validation(_))));
        assert!(matches!(validate_date("2025-02-30", "Date"), Err(AppError::Validation(_))));
        assert!(matches!(validate_date("", "Date"), Err(AppError::Validation(_))));
    }
}
