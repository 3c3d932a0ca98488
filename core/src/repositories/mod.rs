pub mod credential;
pub mod user;

pub use credential::{CredentialStore, InMemoryCredentialStore, RefreshHasher};
pub use user::{InMemoryUserRepository, UserRepository};
