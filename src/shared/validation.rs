use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Regex for validating template type tags
    /// Must start with an alphanumeric character and contain only alphanumerics, hyphens and underscores
    /// - Valid: "weekly", "new_skill", "Milestone-2"
    /// - Invalid: "", "-weekly", "weekly summary", "weekly!"
    pub static ref TEMPLATE_TYPE_REGEX: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").unwrap();

    /// Regex matching text without NUL characters, which Postgres TEXT cannot store
    /// - Valid: "", "Lost 2kg", "line\nbreak"
    /// - Invalid: "u\u{0}1"
    pub static ref NO_NUL_REGEX: Regex = Regex::new(r"^[^\x00]*$").unwrap();
}

/// Rejects empty and whitespace-only strings
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}
