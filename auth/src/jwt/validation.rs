use chrono::Duration;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::key::SigningKey;

/// Rules a token verifier must apply to tokens issued by [`crate::TokenService`].
///
/// Only HS512 is accepted; any other `alg` header (including `none`) is
/// rejected before the signature is checked. Issuer and audience are not
/// validated by default. Expiry is validated with no clock skew.
///
/// No issuer or audience value is configured, so turning either flag on
/// only makes the corresponding claim mandatory.
#[derive(Debug, Clone)]
pub struct ValidationParameters {
    pub issuer_signing_key: SigningKey,
    pub valid_algorithms: Vec<Algorithm>,
    pub validate_issuer: bool,
    pub validate_audience: bool,
    pub validate_lifetime: bool,
    pub clock_skew: Duration,
}

impl ValidationParameters {
    pub fn new(issuer_signing_key: SigningKey) -> Self {
        Self {
            issuer_signing_key,
            valid_algorithms: vec![Algorithm::HS512],
            validate_issuer: false,
            validate_audience: false,
            validate_lifetime: true,
            clock_skew: Duration::zero(),
        }
    }

    pub fn decoding_key(&self) -> DecodingKey {
        self.issuer_signing_key.decoding_key()
    }

    /// Translate into `jsonwebtoken` validation settings.
    pub fn to_validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS512);
        validation.algorithms = self.valid_algorithms.clone();
        validation.leeway = self.clock_skew.num_seconds().max(0) as u64;
        validation.validate_exp = self.validate_lifetime;
        validation.validate_nbf = false;
        validation.validate_aud = self.validate_audience;
        validation.aud = None;
        validation.iss = None;

        validation.required_spec_claims.clear();
        if self.validate_lifetime {
            validation.required_spec_claims.insert("exp".to_string());
        }
        if self.validate_issuer {
            validation.required_spec_claims.insert("iss".to_string());
        }
        if self.validate_audience {
            validation.required_spec_claims.insert("aud".to_string());
        }

        validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ValidationParameters {
        ValidationParameters::new(SigningKey::from_bytes(vec![1u8; 64]).unwrap())
    }

    #[test]
    fn test_defaults() {
        let params = params();

        assert_eq!(params.valid_algorithms, vec![Algorithm::HS512]);
        assert!(!params.validate_issuer);
        assert!(!params.validate_audience);
        assert!(params.validate_lifetime);
        assert_eq!(params.clock_skew, Duration::zero());
    }

    #[test]
    fn test_to_validation() {
        let validation = params().to_validation();

        assert_eq!(validation.algorithms, vec![Algorithm::HS512]);
        assert_eq!(validation.leeway, 0);
        assert!(validation.validate_exp);
        assert!(!validation.validate_aud);
        assert!(validation.iss.is_none());
        assert!(validation.required_spec_claims.contains("exp"));
        assert!(!validation.required_spec_claims.contains("iss"));
        assert!(!validation.required_spec_claims.contains("aud"));
    }

    #[test]
    fn test_issuer_flag_requires_iss_claim() {
        let params = ValidationParameters {
            validate_issuer: true,
            ..params()
        };

        let validation = params.to_validation();

        assert!(validation.required_spec_claims.contains("iss"));
        assert!(validation.iss.is_none());
    }
}
