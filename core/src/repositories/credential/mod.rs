pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod hasher;
pub mod memory;


pub use hasher::RefreshHasher;
pub use memory::InMemoryCredentialStore;
pub use r#trait::CredentialStore;
