use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use auth::Identity;
use auth::Role;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::auth::errors::EmailError;
use crate::domain::auth::errors::UsernameError;
use crate::domain::auth::errors::ValidationError;

/// Persisted user record.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub user_name: Username,
    pub name: String,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Role-bearing projection used for tokens and authorization.
    pub fn identity(&self) -> Identity {
        Identity::new(self.id.0, self.user_name.as_str(), self.role)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name chosen at registration.
///
/// Between 3 and 32 characters (not bytes) drawn from letters, digits,
/// `_` and `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const LENGTH: RangeInclusive<usize> = 3..=32;

    pub fn new(raw: String) -> Result<Self, UsernameError> {
        let actual = raw.chars().count();
        if actual < *Self::LENGTH.start() {
            return Err(UsernameError::TooShort {
                min: *Self::LENGTH.start(),
                actual,
            });
        }
        if actual > *Self::LENGTH.end() {
            return Err(UsernameError::TooLong {
                max: *Self::LENGTH.end(),
                actual,
            });
        }
        if !raw.chars().all(Self::is_allowed) {
            return Err(UsernameError::InvalidCharacters);
        }
        Ok(Self(raw))
    }

    fn is_allowed(c: char) -> bool {
        c.is_alphanumeric() || matches!(c, '_' | '-')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// RFC 5322 checked email, stored with the casing the user typed.
///
/// Uniqueness comparisons go through [`EmailAddress::normalized`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(email: String) -> Result<Self, EmailError> {
        match email_address::EmailAddress::from_str(&email) {
            Ok(_) => Ok(Self(email)),
            Err(e) => Err(EmailError::InvalidFormat(e.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form used for case-insensitive uniqueness.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

/// Login input. Lives only for the duration of one authenticate call.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Validated registration input.
pub struct RegistrationRequest {
    pub email: EmailAddress,
    pub user_name: Username,
    pub password: String,
    pub name: String,
}

impl RegistrationRequest {
    /// Construct a registration request from validated parts.
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    pub fn new(
        email: EmailAddress,
        user_name: Username,
        password: String,
        name: String,
    ) -> Result<Self, ValidationError> {
        if password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }

        Ok(Self {
            email,
            user_name,
            password,
            name,
        })
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("email", &self.email)
            .field("user_name", &self.user_name)
            .field("password", &"[redacted]")
            .field("name", &self.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_validation() {
        assert!(Username::new("User1".to_string()).is_ok());
        assert!(Username::new("new-user_2".to_string()).is_ok());
        assert_eq!(
            Username::new("ab".to_string()),
            Err(UsernameError::TooShort { min: 3, actual: 2 })
        );
        assert_eq!(
            Username::new("a".repeat(33)),
            Err(UsernameError::TooLong {
                max: 32,
                actual: 33
            })
        );
        assert_eq!(
            Username::new("new user".to_string()),
            Err(UsernameError::InvalidCharacters)
        );
    }

    #[test]
    fn test_email_validation_keeps_casing() {
        let email = EmailAddress::new("User1@Example.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "User1@Example.com");
        assert_eq!(email.normalized(), "user1@example.com");

        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
    }

    #[test]
    fn test_registration_rejects_empty_password() {
        let result = RegistrationRequest::new(
            EmailAddress::new("newuser@example.com".to_string()).unwrap(),
            Username::new("NewUser".to_string()).unwrap(),
            String::new(),
            "New User".to_string(),
        );
        assert!(matches!(result, Err(ValidationError::EmptyPassword)));
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let credentials = Credentials::new("user1@example.com", "fakepassword");
        assert!(!format!("{:?}", credentials).contains("fakepassword"));

        let request = RegistrationRequest::new(
            EmailAddress::new("newuser@example.com".to_string()).unwrap(),
            Username::new("NewUser".to_string()).unwrap(),
            "newpassword".to_string(),
            "New User".to_string(),
        )
        .unwrap();
        assert!(!format!("{:?}", request).contains("newpassword"));
    }

    #[test]
    fn test_user_identity_projection() {
        let user = User {
            id: UserId::new(),
            user_name: Username::new("User2".to_string()).unwrap(),
            name: "User Two".to_string(),
            email: EmailAddress::new("user2@example.com".to_string()).unwrap(),
            password_hash: "hash".to_string(),
            role: Role::Admin,
            created_at: Utc::now(),
        };

        let identity = user.identity();
        assert_eq!(identity.id, user.id.0);
        assert_eq!(identity.user_name, "User2");
        assert_eq!(identity.role, Role::Admin);
    }
}
