pub mod claims;
pub mod errors;
pub mod handler;
pub mod key;
pub mod validation;

pub use claims::ClaimSet;
pub use claims::TokenClaims;
pub use errors::JwtError;
pub use errors::KeyError;
pub use handler::JwtHandler;
pub use key::SigningKey;
pub use validation::ValidationParameters;
