use crate::utils::error::{PropertyError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| PropertyError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Value is required".to_string(),
        })
}

pub fn validate_absent_field<T>(field_name: &str, value: &Option<T>) -> Result<()> {
    if value.is_some() {
        return Err(PropertyError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Value is not allowed here".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PropertyError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(PropertyError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one entry is required".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_field() {
        let present = Some("convention 1".to_string());
        let missing: Option<String> = None;
        assert_eq!(
            validate_required_field("steps[0].value", &present).unwrap(),
            "convention 1"
        );
        assert!(validate_required_field("steps[0].value", &missing).is_err());
    }

    #[test]
    fn test_validate_absent_field() {
        assert!(validate_absent_field::<String>("steps[1].value", &None).is_ok());
        assert!(validate_absent_field("steps[1].value", &Some("x".to_string())).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("scenario.name", "conventions").is_ok());
        assert!(validate_non_empty_string("scenario.name", "   ").is_err());
    }

    #[test]
    fn test_validate_non_empty_list() {
        assert!(validate_non_empty_list::<u8>("steps", &[]).is_err());
        assert!(validate_non_empty_list("steps", &[1]).is_ok());
    }
}
