use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::PasswordError;
use crate::domain::user::errors::UserError;

/// User aggregate entity.
///
/// Built only through [`User::create`], so every instance carries validated
/// value objects. The id is absent until a repository assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Option<String>,
    pub email: EmailAddress,
    pub password: Password,
}

impl User {
    /// Validate raw credentials into a User.
    ///
    /// The email is checked before the password; the first failure wins and
    /// the later check does not run.
    ///
    /// # Errors
    /// * `InvalidEmail` - Email does not match the expected shape
    /// * `InvalidPassword` - Password violates the fixed policy
    pub fn create(email: String, password: String) -> Result<Self, UserError> {
        let email = EmailAddress::new(email)?;
        let password = Password::new(password)?;
        Ok(Self {
            id: None,
            email,
            password,
        })
    }
}

/// Email address value type
///
/// Valid iff the string parses as an email and the domain part contains
/// a dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not of the shape `local@domain.tld`; carries the
    ///   offending value
    pub fn new(email: String) -> Result<Self, EmailError> {
        let parsed = email_address::EmailAddress::from_str(&email)
            .map_err(|_| EmailError::InvalidFormat(email.clone()))?;

        if !parsed.domain().contains('.') {
            return Err(EmailError::InvalidFormat(email));
        }

        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Password value type
///
/// Fixed policy: at least 8 characters, at least one digit, at least one
/// letter, checked in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;

    /// Create a new valid password.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 8 characters
    /// * `NoDigit` - No ASCII digit present
    /// * `NoLetter` - No letter present
    pub fn new(password: String) -> Result<Self, PasswordError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordError::NoDigit);
        }
        if !password.chars().any(|c| c.is_alphabetic()) {
            return Err(PasswordError::NoLetter);
        }
        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Raw user record as it crosses the repository port.
///
/// The password field holds the encoded form once persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub id: Option<String>,
    pub email: String,
    pub password: String,
}

/// Claims carried inside an access token.
///
/// Round-trips exactly through `TokenManager::sign`/`verify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub id: String,
}

/// Produced on successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationResult {
    pub id: String,
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let email = EmailAddress::new("any@mail.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "any@mail.com");
    }

    #[test]
    fn test_email_without_at_sign() {
        assert_eq!(
            EmailAddress::new("invalid_email".to_string()),
            Err(EmailError::InvalidFormat("invalid_email".to_string()))
        );
    }

    #[test]
    fn test_email_without_dot_in_domain() {
        assert!(EmailAddress::new("user@localhost".to_string()).is_err());
    }

    #[test]
    fn test_email_without_local_part() {
        assert!(EmailAddress::new("@mail.com".to_string()).is_err());
    }

    #[test]
    fn test_valid_password() {
        let password = Password::new("1validpassword".to_string()).unwrap();
        assert_eq!(password.as_str(), "1validpassword");
    }

    #[test]
    fn test_password_too_short() {
        assert_eq!(
            Password::new("1abc".to_string()),
            Err(PasswordError::TooShort { min: 8, actual: 4 })
        );
    }

    #[test]
    fn test_password_without_digit() {
        assert_eq!(
            Password::new("validpassword".to_string()),
            Err(PasswordError::NoDigit)
        );
    }

    #[test]
    fn test_password_without_letter() {
        assert_eq!(
            Password::new("12345678".to_string()),
            Err(PasswordError::NoLetter)
        );
    }

    #[test]
    fn test_create_user_with_valid_data() {
        let user = User::create("any@mail.com".to_string(), "1validpassword".to_string()).unwrap();
        assert_eq!(user.id, None);
        assert_eq!(user.email.as_str(), "any@mail.com");
        assert_eq!(user.password.as_str(), "1validpassword");
    }

    #[test]
    fn test_create_user_checks_email_first() {
        // Both values are invalid; the email failure must win.
        let err = User::create("invalid_email".to_string(), "1abc".to_string()).unwrap_err();
        assert!(matches!(err, UserError::InvalidEmail(_)));
    }

    #[test]
    fn test_create_user_with_invalid_password() {
        let err = User::create("any@mail.com".to_string(), "1abc".to_string()).unwrap_err();
        assert!(matches!(err, UserError::InvalidPassword(_)));
    }
}
