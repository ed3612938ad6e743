use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::identity::Identity;
use crate::jwt::ClaimSet;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::KeyError;
use crate::jwt::SigningKey;
use crate::jwt::TokenClaims;
use crate::jwt::ValidationParameters;

/// Issues signed bearer tokens for identities and defines how they are validated.
///
/// Tokens are self-contained: validity is decided by signature and expiry
/// alone, there is no server-side session record.
pub struct TokenService {
    jwt_handler: JwtHandler,
    validation: ValidationParameters,
    lifetime: Duration,
}

impl TokenService {
    pub const DEFAULT_LIFETIME_DAYS: i64 = 7;

    /// Create a token service from a signing key.
    pub fn new(key: SigningKey) -> Self {
        Self {
            jwt_handler: JwtHandler::new(&key),
            validation: ValidationParameters::new(key),
            lifetime: Duration::days(Self::DEFAULT_LIFETIME_DAYS),
        }
    }

    /// Create a token service from a base64-encoded signing key.
    ///
    /// Meant to run once at startup; an error here is a configuration
    /// problem, not an authentication failure.
    ///
    /// # Errors
    /// * `KeyError` - Key is missing, not base64, or too short
    pub fn from_base64_key(encoded: &str) -> Result<Self, KeyError> {
        SigningKey::from_base64(encoded).map(Self::new)
    }

    /// Override the token lifetime (defaults to 7 days).
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Issue a token for an identity, expiring one lifetime from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn create_token(&self, identity: &Identity) -> Result<String, JwtError> {
        self.create_token_at(identity, Utc::now())
    }

    /// Issue a token as if it had been created at `issued_at`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed, the lifetime is not
    ///   positive, or the expiry is not representable
    pub fn create_token_at(
        &self,
        identity: &Identity,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        if self.lifetime <= Duration::zero() {
            return Err(JwtError::EncodingFailed(format!(
                "Token lifetime must be positive, got {}",
                self.lifetime
            )));
        }

        let expires_at = issued_at
            .checked_add_signed(self.lifetime)
            .ok_or_else(|| JwtError::EncodingFailed("Token expiry out of range".to_string()))?;
        let claims = TokenClaims::new(
            ClaimSet::from_identity(identity),
            issued_at.timestamp(),
            expires_at.timestamp(),
        );

        self.jwt_handler.encode(&claims)
    }

    /// Rules a verifier must apply to tokens from this service.
    pub fn validation_parameters(&self) -> &ValidationParameters {
        &self.validation
    }

    /// Verify signature, algorithm and expiry, then return the payload.
    ///
    /// # Errors
    /// * `TokenExpired` - Token is past its expiry
    /// * `InvalidToken` - Signature or algorithm mismatch, or `exp` missing
    /// * `DecodingFailed` - Token is malformed
    pub fn validate_token(&self, token: &str) -> Result<TokenClaims, JwtError> {
        self.jwt_handler.decode(token, &self.validation)
    }
}
