//! Rule predicates used by the validator
//!
//! The checks are deliberately minimal: a structural email shape and a
//! length/character-class password policy, both ASCII-only.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::report::Violation;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

// one-or-more non-space-non-@, '@', same, '.', same
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Structural email check. Not RFC validation.
///
/// ```
/// use registration_form::rules::is_valid_email;
/// assert!(is_valid_email("a@b.c"));
/// assert!(!is_valid_email("a@b"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Password policy for a non-empty password.
///
/// Length is checked first; the character-class check only runs once the
/// length passes, so a short password yields only `PasswordTooShort`.
pub fn check_password(password: &str) -> Result<(), Violation> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(Violation::PasswordTooShort);
    }

    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !has_uppercase || !has_digit {
        return Err(Violation::PasswordTooWeak);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.c")]
    #[case("anna@rossi.it")]
    #[case("user+tag@mail.example.com")]
    #[case("a@b.c.d")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(is_valid_email(email), "{email} should pass");
    }

    #[rstest]
    #[case("abc")]
    #[case("a@b")]
    #[case("@b.c")]
    #[case("a b@c.d")]
    #[case("a@@b.c")]
    #[case("a@b.")]
    #[case("a@.c")]
    #[case("")]
    fn test_invalid_emails(#[case] email: &str) {
        assert!(!is_valid_email(email), "{email} should fail");
    }

    #[test]
    fn test_short_password_reports_length_only() {
        assert_eq!(check_password("short1A"), Err(Violation::PasswordTooShort));
        assert_eq!(check_password("abc"), Err(Violation::PasswordTooShort));
    }

    #[test]
    fn test_long_weak_password_reports_complexity_only() {
        assert_eq!(check_password("longenough"), Err(Violation::PasswordTooWeak));
        assert_eq!(check_password("LONGENOUGH"), Err(Violation::PasswordTooWeak));
        assert_eq!(check_password("longenough1"), Err(Violation::PasswordTooWeak));
    }

    #[test]
    fn test_strong_passwords() {
        assert_eq!(check_password("Longenough1"), Ok(()));
        assert_eq!(check_password("Password1"), Ok(()));
        assert_eq!(check_password("Abcdefg1"), Ok(()));
    }

    #[test]
    fn test_non_ascii_classes_do_not_count() {
        // 'É' is uppercase but not A-Z; '٣' is a digit but not 0-9
        assert_eq!(check_password("Éabcdefg1"), Err(Violation::PasswordTooWeak));
        assert_eq!(check_password("Abcdefgh٣"), Err(Violation::PasswordTooWeak));
    }

    #[test]
    fn test_length_counts_characters() {
        // 7 characters, more than 8 bytes
        assert_eq!(check_password("Àbcdéf1"), Err(Violation::PasswordTooShort));
    }
}
