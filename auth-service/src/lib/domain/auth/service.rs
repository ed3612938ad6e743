use std::sync::Arc;

use async_trait::async_trait;
use auth::ClaimSet;
use auth::Identity;
use auth::Role;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::ValidationError;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::RegistrationRequest;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::PasswordHashing;
use crate::domain::auth::ports::UserRepository;

/// Domain service implementation for authentication operations.
///
/// Stateless: holds only its injected collaborators, so one instance can
/// serve concurrent requests.
pub struct AuthService<UR, PH>
where
    UR: UserRepository,
    PH: PasswordHashing,
{
    repository: Arc<UR>,
    password_hasher: Arc<PH>,
}

impl<UR, PH> AuthService<UR, PH>
where
    UR: UserRepository,
    PH: PasswordHashing,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `password_hasher` - Password hashing implementation
    pub fn new(repository: Arc<UR>, password_hasher: Arc<PH>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<UR, PH> AuthServicePort for AuthService<UR, PH>
where
    UR: UserRepository,
    PH: PasswordHashing,
{
    async fn authenticate(&self, credentials: Credentials) -> Result<Identity, AuthError> {
        let user = self.repository.find_by_email(&credentials.email).await?;

        // Unknown emails are verified against an empty hash so both failure
        // paths do the same hashing work.
        let stored_hash = user.as_ref().map_or("", |u| u.password_hash.as_str());
        let verified = self
            .password_hasher
            .verify(&credentials.password, stored_hash);

        match user {
            Some(user) if verified => {
                tracing::info!(user_id = %user.id, "User authenticated");
                Ok(user.identity())
            }
            _ => {
                tracing::warn!("Authentication failed: invalid credentials");
                Err(AuthError::AuthenticationFailed)
            }
        }
    }

    async fn register(&self, request: RegistrationRequest) -> Result<Identity, AuthError> {
        // Fast path only; the repository insert is what guarantees uniqueness.
        if self
            .repository
            .find_by_email_ignore_case(request.email.as_str())
            .await?
            .is_some()
        {
            tracing::info!("Registration rejected: email already in use");
            return Err(ValidationError::EmailInUse.into());
        }

        let password_hash = self.password_hasher.hash(&request.password)?;

        let user = User {
            id: UserId::new(),
            user_name: request.user_name,
            name: request.name,
            email: request.email,
            password_hash,
            role: Role::Reader,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user.identity())
    }

    async fn get_current_user(&self, claims: &ClaimSet) -> Result<Option<Identity>, AuthError> {
        let Some(user_id) = claims.subject_id() else {
            tracing::debug!("Claim set carries no usable subject identifier");
            return Ok(None);
        };

        let user = self.repository.find_by_id(&UserId(user_id)).await?;
        if user.is_none() {
            tracing::debug!(user_id = %user_id, "Token subject no longer exists");
        }

        Ok(user.map(|u| u.identity()))
    }
}
