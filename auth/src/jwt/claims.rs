use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::identity::Identity;

/// Identity facts carried inside a token.
///
/// Wire names follow the usual JWT mapping: `nameid` is the subject
/// identifier, `role` the platform role, and `sub` duplicates the
/// identifier for consumers that only read the registered claim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimSet {
    /// Subject identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameid: Option<String>,

    /// Role name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Subject (same value as `nameid`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}

impl ClaimSet {
    pub const NAME_IDENTIFIER: &'static str = "nameid";
    pub const ROLE: &'static str = "role";
    pub const SUBJECT: &'static str = "sub";

    /// Project an identity into its complete claim set.
    pub fn from_identity(identity: &Identity) -> Self {
        let id = identity.id.to_string();

        Self {
            nameid: Some(id.clone()),
            role: Some(identity.role.to_string()),
            sub: Some(id),
        }
    }

    /// Extract the subject identifier.
    ///
    /// Reads `nameid` and falls back to `sub`. Returns `None` when neither
    /// is present or the value is not a UUID.
    pub fn subject_id(&self) -> Option<Uuid> {
        self.nameid
            .as_deref()
            .or(self.sub.as_deref())
            .and_then(|id| Uuid::parse_str(id).ok())
    }

    /// Claims as ordered `(type, value)` pairs.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            (Self::NAME_IDENTIFIER, self.nameid.as_deref()),
            (Self::ROLE, self.role.as_deref()),
            (Self::SUBJECT, self.sub.as_deref()),
        ]
        .into_iter()
        .filter_map(|(kind, value)| value.map(|v| (kind, v)))
        .collect()
    }
}

impl From<&Identity> for ClaimSet {
    fn from(identity: &Identity) -> Self {
        Self::from_identity(identity)
    }
}

/// Full token payload: the claim set plus issuance and expiry (Unix seconds).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    #[serde(flatten)]
    pub claims: ClaimSet,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    pub fn new(claims: ClaimSet, issued_at: i64, expires_at: i64) -> Self {
        Self {
            claims,
            iat: issued_at,
            exp: expires_at,
        }
    }
}
