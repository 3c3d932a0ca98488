//! Signing key management
//!
//! The key pair is generated once, persisted as a PKCS#1 PEM private key and
//! an OpenSSH authorized-key public key, and loaded on demand behind a
//! read-through cache.

pub mod authorized_key;
mod key_pair;
mod provider;

#[cfg(test)]
mod tests;

pub use key_pair::{KeyPair, MIN_KEY_BITS, PUBLIC_KEY_COMMENT};
pub use provider::{FileKeyProvider, KeyProvider, StaticKeyProvider};
