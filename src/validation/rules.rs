//! Common validation rules shared across request payloads.

use validator::ValidationError;

/// Validates a human-facing display name.
///
/// Requirements:
/// - Not blank (whitespace-only counts as blank)
/// - At most 100 characters
pub fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("name_blank"));
    }
    if name.chars().count() > 100 {
        return Err(ValidationError::new("name_too_long"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_rejects_blank() {
        assert!(validate_display_name("").is_err());
        assert!(validate_display_name("   ").is_err());
    }

    #[test]
    fn display_name_rejects_over_100_chars() {
        let long = "a".repeat(101);
        assert!(validate_display_name(&long).is_err());
        let exactly = "a".repeat(100);
        assert!(validate_display_name(&exactly).is_ok());
    }

    #[test]
    fn display_name_accepts_regular_names() {
        assert!(validate_display_name("Ama Serwaa").is_ok());
    }
}
