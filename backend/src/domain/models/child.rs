//! Validation rules for child profiles.

use chrono::NaiveDate;

pub const MAX_NAME_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChildValidationError {
    #[error("Child name cannot be empty")]
    EmptyName,
    #[error("Child name cannot exceed 100 characters (got {0})")]
    NameTooLong(usize),
    #[error("Date of birth {0} is in the future")]
    DateOfBirthInFuture(NaiveDate),
}

/// Check a new profile's name and date of birth against `today`
pub fn validate_child_profile(
    name: &str,
    date_of_birth: NaiveDate,
    today: NaiveDate,
) -> Result<(), ChildValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ChildValidationError::EmptyName);
    }

    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(ChildValidationError::NameTooLong(length));
    }

    if date_of_birth > today {
        return Err(ChildValidationError::DateOfBirthInFuture(date_of_birth));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_valid_profile() {
        let today = ymd(2024, 6, 1);
        assert!(validate_child_profile("Daniel", ymd(2024, 1, 15), today).is_ok());
        // Born today is allowed
        assert!(validate_child_profile("Noa", today, today).is_ok());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let today = ymd(2024, 6, 1);
        assert_eq!(
            validate_child_profile("   ", ymd(2024, 1, 15), today),
            Err(ChildValidationError::EmptyName)
        );
    }

    #[test]
    fn test_long_name_is_rejected() {
        let today = ymd(2024, 6, 1);
        let name = "א".repeat(101);
        assert_eq!(
            validate_child_profile(&name, ymd(2024, 1, 15), today),
            Err(ChildValidationError::NameTooLong(101))
        );
        assert!(validate_child_profile(&"a".repeat(100), ymd(2024, 1, 15), today).is_ok());
    }

    #[test]
    fn test_future_birth_date_is_rejected() {
        let today = ymd(2024, 6, 1);
        let tomorrow = ymd(2024, 6, 2);
        assert_eq!(
            validate_child_profile("Daniel", tomorrow, today),
            Err(ChildValidationError::DateOfBirthInFuture(tomorrow))
        );
    }
}
