//! Domain layer containing entities and value objects.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::{
    AccessClaims, Credential, TokenPair, User, DEFAULT_ACCESS_TOKEN_TTL_SECONDS, TOKEN_TYPE,
};
pub use value_objects::{SubjectId, SUBJECT_ID_LEN};
