//! Business services containing domain logic and use cases.

pub mod keys;
pub mod rotation;
pub mod token;

// Re-export commonly used types
pub use keys::{FileKeyProvider, KeyPair, KeyProvider, StaticKeyProvider};
pub use rotation::RotationService;
pub use token::{RefreshTokenGenerator, TokenServiceConfig, TokenSigner, TokenVerifier};
