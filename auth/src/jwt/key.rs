use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;

use super::errors::KeyError;

/// Symmetric signing key for HMAC-SHA512 tokens.
#[derive(Clone)]
pub struct SigningKey {
    bytes: Vec<u8>,
}

impl SigningKey {
    /// HMAC-SHA512 keys shorter than the digest weaken the MAC.
    pub const MIN_LENGTH: usize = 64;

    /// Decode a base64 (standard alphabet, padded) signing key.
    ///
    /// # Errors
    /// * `Missing` - Value is empty or whitespace
    /// * `Malformed` - Value is not valid base64
    /// * `TooShort` - Decoded key is shorter than 64 bytes
    pub fn from_base64(encoded: &str) -> Result<Self, KeyError> {
        let encoded = encoded.trim();
        if encoded.is_empty() {
            return Err(KeyError::Missing);
        }

        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| KeyError::Malformed(e.to_string()))?;

        Self::from_bytes(bytes)
    }

    /// Wrap raw key bytes.
    ///
    /// # Errors
    /// * `TooShort` - Key is shorter than 64 bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, KeyError> {
        let bytes = bytes.into();
        if bytes.len() < Self::MIN_LENGTH {
            return Err(KeyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: bytes.len(),
            });
        }

        Ok(Self { bytes })
    }

    pub fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(&self.bytes)
    }

    pub fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(&self.bytes)
    }
}

// Never print key material.
impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_base64_success() {
        let encoded = STANDARD.encode([7u8; 64]);
        assert!(SigningKey::from_base64(&encoded).is_ok());
    }

    #[test]
    fn test_from_base64_missing() {
        assert!(matches!(SigningKey::from_base64(""), Err(KeyError::Missing)));
        assert!(matches!(
            SigningKey::from_base64("   "),
            Err(KeyError::Missing)
        ));
    }

    #[test]
    fn test_from_base64_malformed() {
        assert!(matches!(
            SigningKey::from_base64("not base64 at all!"),
            Err(KeyError::Malformed(_))
        ));
    }

    #[test]
    fn test_from_base64_too_short() {
        let encoded = STANDARD.encode([7u8; 32]);
        assert!(matches!(
            SigningKey::from_base64(&encoded),
            Err(KeyError::TooShort { min: 64, actual: 32 })
        ));
    }

    #[test]
    fn test_debug_hides_key_material() {
        let key = SigningKey::from_bytes(vec![42u8; 64]).unwrap();
        let debug = format!("{:?}", key);
        assert_eq!(debug, "SigningKey { len: 64 }");
    }
}
