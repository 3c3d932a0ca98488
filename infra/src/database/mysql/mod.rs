//! MySQL repository implementations

mod credential_store_impl;
mod user_repository_impl;

pub use credential_store_impl::MySqlCredentialStore;
pub use user_repository_impl::MySqlUserRepository;
