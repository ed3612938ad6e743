use async_trait::async_trait;
use auth::ClaimSet;
use auth::Identity;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::RegistrationRequest;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and resolve the matching identity.
    ///
    /// # Arguments
    /// * `credentials` - Email (matched exactly as stored) and plaintext password
    ///
    /// # Returns
    /// Identity of the authenticated user
    ///
    /// # Errors
    /// * `AuthenticationFailed` - Unknown email or wrong password (indistinguishable)
    /// * `DatabaseError` - Database operation failed
    async fn authenticate(&self, credentials: Credentials) -> Result<Identity, AuthError>;

    /// Register a new reader account.
    ///
    /// # Arguments
    /// * `request` - Validated registration input
    ///
    /// # Returns
    /// Identity of the created user
    ///
    /// # Errors
    /// * `Validation(EmailInUse)` - Email already registered (any casing)
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, request: RegistrationRequest) -> Result<Identity, AuthError>;

    /// Resolve the identity behind a verified claim set.
    ///
    /// # Arguments
    /// * `claims` - Claims taken from an already validated token
    ///
    /// # Returns
    /// `None` when the subject claim is absent or the user no longer exists
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn get_current_user(&self, claims: &ClaimSet) -> Result<Option<Identity>, AuthError>;
}

/// Persistence operations for user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// The insert is atomic and enforces case-insensitive email uniqueness
    /// itself, so two concurrent registrations for one email cannot both
    /// succeed.
    ///
    /// # Errors
    /// * `Validation(EmailInUse)` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError>;

    /// Retrieve user by email, matching the stored value exactly.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Retrieve user by email ignoring case.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email_ignore_case(&self, email: &str) -> Result<Option<User>, AuthError>;
}

/// One-way password hashing capability.
pub trait PasswordHashing: Send + Sync + 'static {
    /// Hash a plaintext password; distinct calls produce distinct digests.
    ///
    /// # Errors
    /// * `Password` - Hashing failed
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// True iff `hash` was produced from `password`. Unparseable hashes
    /// yield false at the same cost as a mismatch.
    fn verify(&self, password: &str, hash: &str) -> bool;
}
