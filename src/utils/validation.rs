use crate::utils::error::{LifeWeeksError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LifeWeeksError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Accepts strings of at most `max_chars` characters (counted as `char`s, not bytes).
pub fn validate_max_chars(field_name: &str, value: &str, max_chars: usize) -> Result<()> {
    let count = value.chars().count();
    if count > max_chars {
        return Err(LifeWeeksError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!(
                "Value must be at most {} character(s), got {}",
                max_chars, count
            ),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(LifeWeeksError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("display.past_glyph", "#").is_ok());
        assert!(validate_non_empty_string("display.past_glyph", "").is_err());
        assert!(validate_non_empty_string("display.past_glyph", "   ").is_err());
    }

    #[test]
    fn test_validate_max_chars_counts_chars() {
        assert!(validate_max_chars("display.past_glyph", "■", 1).is_ok());
        assert!(validate_max_chars("display.thousands_separator", "", 1).is_ok());
        assert!(validate_max_chars("display.past_glyph", "##", 1).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        let levels = ["info", "debug"];
        assert!(validate_one_of("logging.level", "info", &levels).is_ok());
        match validate_one_of("logging.level", "loud", &levels) {
            Err(LifeWeeksError::InvalidConfigValue { field, reason, .. }) => {
                assert_eq!(field, "logging.level");
                assert!(reason.contains("info, debug"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
