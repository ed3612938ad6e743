//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for the content platform:
//! - Password hashing (Argon2id)
//! - Role-bearing identities and their token claim projection
//! - Signed token issuance and validation (HS512)
//!
//! Services define their own ports and adapt these implementations.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Identity, Role, SigningKey, TokenService};
//!
//! let key = SigningKey::from_bytes(vec![42u8; 64]).unwrap();
//! let tokens = TokenService::new(key);
//!
//! let identity = Identity::new(uuid::Uuid::new_v4(), "alice", Role::Reader);
//! let token = tokens.create_token(&identity).unwrap();
//!
//! let decoded = tokens.validate_token(&token).unwrap();
//! assert_eq!(decoded.claims.subject_id(), Some(identity.id));
//! ```

pub mod identity;
pub mod jwt;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use identity::Identity;
pub use identity::Role;
pub use jwt::ClaimSet;
pub use jwt::JwtError;
pub use jwt::KeyError;
pub use jwt::SigningKey;
pub use jwt::TokenClaims;
pub use jwt::ValidationParameters;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenService;
