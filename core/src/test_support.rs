//! Shared fixtures for unit tests

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::services::keys::KeyPair;

static TEST_KEY_PAIR: Lazy<Arc<KeyPair>> =
    Lazy::new(|| Arc::new(KeyPair::generate(2048).expect("failed to generate test key")));

static OTHER_KEY_PAIR: Lazy<Arc<KeyPair>> =
    Lazy::new(|| Arc::new(KeyPair::generate(2048).expect("failed to generate test key")));

/// Key pair shared by every test in the binary
pub(crate) fn test_key_pair() -> Arc<KeyPair> {
    TEST_KEY_PAIR.clone()
}

/// A second, unrelated key pair
pub(crate) fn other_key_pair() -> Arc<KeyPair> {
    OTHER_KEY_PAIR.clone()
}

/// Lowest bcrypt cost the library accepts
pub(crate) const TEST_HASH_COST: u32 = 4;
