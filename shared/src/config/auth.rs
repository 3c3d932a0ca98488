//! Signing key and token issuance configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// Location and shape of the RSA signing key pair
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct KeyConfig {
    /// PEM-encoded (PKCS#1) private key file
    #[serde(default = "default_private_key_path")]
    pub private_key_path: PathBuf,

    /// OpenSSH authorized-key formatted public key file
    #[serde(default = "default_public_key_path")]
    pub public_key_path: PathBuf,

    /// RSA modulus size used when generating a new pair
    #[serde(default = "default_bits")]
    #[validate(range(min = 2048))]
    pub bits: usize,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            private_key_path: default_private_key_path(),
            public_key_path: default_public_key_path(),
            bits: default_bits(),
        }
    }
}

impl KeyConfig {
    /// Create a key configuration for the given file pair
    pub fn new(private_key_path: impl Into<PathBuf>, public_key_path: impl Into<PathBuf>) -> Self {
        Self {
            private_key_path: private_key_path.into(),
            public_key_path: public_key_path.into(),
            ..Default::default()
        }
    }

    /// Set the modulus size for generated keys
    pub fn with_bits(mut self, bits: usize) -> Self {
        self.bits = bits;
        self
    }
}

/// Access token lifetime and refresh-token hashing parameters
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct TokenConfig {
    /// Access token lifetime in seconds
    #[serde(default = "default_access_token_ttl")]
    #[validate(range(min = 1))]
    pub access_token_ttl_seconds: i64,

    /// bcrypt cost for stored refresh-token hashes (4..=31)
    #[serde(default = "default_refresh_hash_cost")]
    #[validate(range(min = 4, max = 31))]
    pub refresh_hash_cost: u32,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            access_token_ttl_seconds: default_access_token_ttl(),
            refresh_hash_cost: default_refresh_hash_cost(),
        }
    }
}

impl TokenConfig {
    /// Set access token lifetime in minutes
    pub fn with_access_ttl_minutes(mut self, minutes: i64) -> Self {
        self.access_token_ttl_seconds = minutes * 60;
        self
    }
}

fn default_private_key_path() -> PathBuf {
    PathBuf::from("keys/private.pem")
}

fn default_public_key_path() -> PathBuf {
    PathBuf::from("keys/public.pub")
}

fn default_bits() -> usize {
    4096
}

fn default_access_token_ttl() -> i64 {
    300 // 5 minutes
}

fn default_refresh_hash_cost() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_config_default() {
        let config = KeyConfig::default();
        assert_eq!(config.bits, 4096);
        assert_eq!(config.private_key_path, PathBuf::from("keys/private.pem"));
        assert_eq!(config.public_key_path, PathBuf::from("keys/public.pub"));
    }

    #[test]
    fn test_token_config_builder() {
        let config = TokenConfig::default().with_access_ttl_minutes(10);
        assert_eq!(config.access_token_ttl_seconds, 600);
        assert_eq!(config.refresh_hash_cost, 10);
    }

    #[test]
    fn test_token_config_ranges() {
        assert!(TokenConfig::default().validate().is_ok());

        let expired = TokenConfig::default().with_access_ttl_minutes(0);
        assert!(expired.validate().is_err());

        for cost in [3, 32] {
            let config = TokenConfig {
                refresh_hash_cost: cost,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "cost {cost}");
        }
    }

    #[test]
    fn test_key_config_rejects_small_modulus() {
        assert!(KeyConfig::default().with_bits(1024).validate().is_err());
        assert!(KeyConfig::default().with_bits(2048).validate().is_ok());
    }
}
