use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::PasswordHashing;

impl PasswordHashing for auth::PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        auth::PasswordHasher::hash(self, password).map_err(AuthError::from)
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        auth::PasswordHasher::verify(self, password, hash)
    }
}
