use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};

/// Length bounds plus a minimal mix requirement. Deliberately not a
/// character-class zoo; length does most of the work.
pub struct BasicPasswordPolicy;

impl PasswordPolicy for BasicPasswordPolicy {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
        if password.len() < 8 {
            return Err(PasswordPolicyError::TooShort);
        }

        if password.len() > 128 {
            return Err(PasswordPolicyError::TooLong);
        }

        if !password.chars().any(|c| c.is_alphabetic()) {
            return Err(PasswordPolicyError::MissingLetter);
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_reasonable_password() {
        assert!(BasicPasswordPolicy.validate("correct horse 1").is_ok());
    }

    #[test]
    fn test_rejects_short_password() {
        assert_eq!(
            BasicPasswordPolicy.validate("ab1"),
            Err(PasswordPolicyError::TooShort)
        );
    }

    #[test]
    fn test_rejects_overlong_password() {
        let long = format!("a1{}", "x".repeat(130));
        assert_eq!(
            BasicPasswordPolicy.validate(&long),
            Err(PasswordPolicyError::TooLong)
        );
    }

    #[test]
    fn test_rejects_digits_only() {
        assert_eq!(
            BasicPasswordPolicy.validate("1234567890"),
            Err(PasswordPolicyError::MissingLetter)
        );
    }

    #[test]
    fn test_rejects_letters_only() {
        assert_eq!(
            BasicPasswordPolicy.validate("onlyletters"),
            Err(PasswordPolicyError::MissingDigit)
        );
    }
}
