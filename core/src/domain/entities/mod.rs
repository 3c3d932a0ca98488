//! Domain entities representing core business objects.

pub mod credential;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use credential::Credential;
pub use token::{AccessClaims, TokenPair, DEFAULT_ACCESS_TOKEN_TTL_SECONDS, TOKEN_TYPE};
pub use user::User;
