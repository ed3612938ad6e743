use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;
use super::key::SigningKey;
use super::validation::ValidationParameters;

/// JWT token handler for encoding and decoding tokens.
///
/// Generic over the claims type. Signs with HS512 (HMAC with SHA-512).
pub struct JwtHandler {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler.
    ///
    /// # Arguments
    /// * `key` - Symmetric signing key (at least 64 bytes)
    ///
    /// # Returns
    /// JwtHandler instance configured with HS512 algorithm
    pub fn new(key: &SigningKey) -> Self {
        Self {
            encoding_key: key.encoding_key(),
            algorithm: Algorithm::HS512,
        }
    }

    /// Encode claims into a JWT token.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode (must implement Serialize)
    ///
    /// # Returns
    /// JWT token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// # Arguments
    /// * `token` - JWT token string to decode
    /// * `params` - Key and rules to validate against
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `TokenExpired` - Token `exp` is in the past
    /// * `InvalidToken` - Signature, algorithm or required claims are wrong
    /// * `DecodingFailed` - Token is not a well-formed JWT
    pub fn decode<T: for<'de> Deserialize<'de>>(
        &self,
        token: &str,
        params: &ValidationParameters,
    ) -> Result<T, JwtError> {
        let token_data = decode::<T>(token, &params.decoding_key(), &params.to_validation())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                ErrorKind::InvalidSignature
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::MissingRequiredClaim(_)
                | ErrorKind::ImmatureSignature => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::DecodingFailed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}
