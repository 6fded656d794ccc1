use regex::Regex;
use std::sync::OnceLock;

const NAME_MIN_LEN: usize = 3;
const NUMBER_MIN_LEN: usize = 8;

// Two or three leading digits, a literal hyphen, then digits.
fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{2,3}-\d+$").expect("number pattern is valid"))
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("person validation failed: {}", .issues.join(", "))]
pub struct ValidationError {
    pub issues: Vec<String>,
}

/// Checks the field constraints for a phonebook entry. Runs on every write,
/// create and update alike, and needs no database connection.
pub fn validate_person(name: &str, number: &str) -> Result<(), ValidationError> {
    let mut issues = Vec::new();

    if name.chars().count() < NAME_MIN_LEN {
        issues.push(format!(
            "name must be at least {} characters long",
            NAME_MIN_LEN
        ));
    }

    if number.chars().count() < NUMBER_MIN_LEN {
        issues.push(format!(
            "number must be at least {} characters long",
            NUMBER_MIN_LEN
        ));
    } else if !number_pattern().is_match(number) {
        issues.push("number must be of the form 09-1234556 or 040-22334455".to_string());
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { issues })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_person() {
        assert!(validate_person("Arto Hellas", "040-123456").is_ok());
    }

    #[test]
    fn test_two_digit_prefix_accepted() {
        assert!(validate_person("Ada Lovelace", "09-12345").is_ok());
    }

    #[test]
    fn test_three_digit_prefix_accepted() {
        assert!(validate_person("Dan Abramov", "040-1234567").is_ok());
    }

    #[test]
    fn test_short_name_rejected() {
        let err = validate_person("Al", "040-123456").unwrap_err();
        assert!(err.to_string().contains("name must be at least 3"));
    }

    #[test]
    fn test_number_without_hyphen_rejected() {
        let err = validate_person("Arto Hellas", "12345678").unwrap_err();
        assert!(err.to_string().contains("number must be of the form"));
    }

    #[test]
    fn test_short_number_rejected() {
        let err = validate_person("Arto Hellas", "09-1234").unwrap_err();
        assert!(err.to_string().contains("number must be at least 8"));
    }

    #[test]
    fn test_four_digit_prefix_rejected() {
        let err = validate_person("Arto Hellas", "0400-12345").unwrap_err();
        assert!(err.to_string().contains("number must be of the form"));
    }

    #[test]
    fn test_non_digit_tail_rejected() {
        let err = validate_person("Arto Hellas", "040-12345a").unwrap_err();
        assert!(err.to_string().contains("number must be of the form"));
    }

    #[test]
    fn test_all_failing_fields_reported() {
        let err = validate_person("Al", "1234567").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("name must be at least 3"));
        assert!(message.contains("number must be at least 8"));
    }
}
