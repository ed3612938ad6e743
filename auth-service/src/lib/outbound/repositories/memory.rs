use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::ValidationError;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::UserRepository;

/// Process-local user store.
///
/// The uniqueness check and the insert happen under one write lock, which
/// gives the same guarantee as the unique index in Postgres.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    async fn find(&self, predicate: impl Fn(&User) -> bool) -> Option<User> {
        self.users.read().await.iter().find(|u| predicate(u)).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, AuthError> {
        let mut users = self.users.write().await;

        let email = user.email.normalized();
        if users.iter().any(|u| u.email.normalized() == email) {
            return Err(ValidationError::EmailInUse.into());
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError> {
        Ok(self.find(|u| u.id == *id).await)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        Ok(self.find(|u| u.email.as_str() == email).await)
    }

    async fn find_by_email_ignore_case(&self, email: &str) -> Result<Option<User>, AuthError> {
        let email = email.to_lowercase();
        Ok(self.find(|u| u.email.normalized() == email).await)
    }
}
