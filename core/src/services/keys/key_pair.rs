//! RSA signing key pair and its on-disk encodings

use jsonwebtoken::{DecodingKey, EncodingKey};
use rand::rngs::OsRng;
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::errors::{DomainError, TokenError};

use super::authorized_key;

/// Comment written after generated public keys
pub const PUBLIC_KEY_COMMENT: &str = "tokenpair";

/// Smallest modulus accepted for generation
pub const MIN_KEY_BITS: usize = 2048;

/// RSA key pair used to sign and verify access tokens
///
/// Besides the parsed keys this keeps the exact bytes it was decoded from
/// (or encoded to), so two loads of the same files compare equal.
#[derive(Clone)]
pub struct KeyPair {
    private_key: RsaPrivateKey,
    public_key: RsaPublicKey,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    private_pem: Vec<u8>,
    public_authorized: Vec<u8>,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("bits", &self.bits())
            .finish_non_exhaustive()
    }
}

impl KeyPair {
    /// Generates a fresh pair from the OS random source
    ///
    /// # Arguments
    ///
    /// * `bits` - Modulus size, at least [`MIN_KEY_BITS`]
    ///
    /// # Returns
    ///
    /// * `Ok(KeyPair)` - Generated and validated pair
    /// * `Err(DomainError)` - `KeyUnavailable` if generation or validation fails
    pub fn generate(bits: usize) -> Result<Self, DomainError> {
        if bits < MIN_KEY_BITS {
            return Err(TokenError::key_unavailable(format!(
                "refusing to generate a {bits}-bit key"
            ))
            .into());
        }
        let private_key = RsaPrivateKey::new(&mut OsRng, bits)
            .map_err(|e| TokenError::key_unavailable(format!("key generation failed: {e}")))?;
        Self::from_private_key(private_key)
    }

    /// Wraps an existing private key, deriving the public half
    pub fn from_private_key(private_key: RsaPrivateKey) -> Result<Self, DomainError> {
        private_key
            .validate()
            .map_err(|e| TokenError::key_unavailable(format!("invalid private key: {e}")))?;

        let private_pem = private_key
            .to_pkcs1_pem(LineEnding::LF)
            .map_err(|e| TokenError::key_unavailable(format!("PEM encoding failed: {e}")))?;
        let public_key = private_key.to_public_key();
        let public_authorized = authorized_key::encode(&public_key, Some(PUBLIC_KEY_COMMENT));

        Self::assemble(
            private_key,
            public_key,
            private_pem.as_bytes().to_vec(),
            public_authorized.into_bytes(),
        )
    }

    /// Decodes a pair from file contents
    ///
    /// # Arguments
    ///
    /// * `private_pem` - PKCS#1 PEM private key
    /// * `public_authorized` - OpenSSH authorized-key line
    ///
    /// # Returns
    ///
    /// * `Ok(KeyPair)` - Both halves parsed and belong together
    /// * `Err(DomainError)` - `KeyUnavailable` otherwise
    pub fn from_encoded(private_pem: &[u8], public_authorized: &[u8]) -> Result<Self, DomainError> {
        if private_pem.is_empty() {
            return Err(TokenError::key_unavailable("private key file is empty").into());
        }
        if public_authorized.is_empty() {
            return Err(TokenError::key_unavailable("public key file is empty").into());
        }

        let public_text = std::str::from_utf8(public_authorized)
            .map_err(|_| TokenError::key_unavailable("public key is not UTF-8"))?;
        let public_key = authorized_key::decode(public_text)
            .map_err(|e| TokenError::key_unavailable(format!("public key: {e}")))?;

        let private_text = std::str::from_utf8(private_pem)
            .map_err(|_| TokenError::key_unavailable("private key is not UTF-8"))?;
        let private_key = RsaPrivateKey::from_pkcs1_pem(private_text)
            .map_err(|e| TokenError::key_unavailable(format!("private key: {e}")))?;

        if private_key.to_public_key() != public_key {
            return Err(
                TokenError::key_unavailable("public key does not match private key").into(),
            );
        }

        Self::assemble(
            private_key,
            public_key,
            private_pem.to_vec(),
            public_authorized.to_vec(),
        )
    }

    fn assemble(
        private_key: RsaPrivateKey,
        public_key: RsaPublicKey,
        private_pem: Vec<u8>,
        public_authorized: Vec<u8>,
    ) -> Result<Self, DomainError> {
        let encoding_key = EncodingKey::from_rsa_pem(&private_pem)
            .map_err(|e| TokenError::key_unavailable(format!("signing key: {e}")))?;
        let decoding_key = DecodingKey::from_rsa_raw_components(
            &public_key.n().to_bytes_be(),
            &public_key.e().to_bytes_be(),
        );

        Ok(Self {
            private_key,
            public_key,
            encoding_key,
            decoding_key,
            private_pem,
            public_authorized,
        })
    }

    /// Returns the encoding key for signing JWTs
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Returns the decoding key for verifying JWTs
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private_key
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }

    /// PKCS#1 PEM bytes of the private key
    pub fn private_pem(&self) -> &[u8] {
        &self.private_pem
    }

    /// Authorized-key bytes of the public key
    pub fn public_authorized(&self) -> &[u8] {
        &self.public_authorized
    }

    /// Modulus size in bits
    pub fn bits(&self) -> usize {
        self.public_key.size() * 8
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.private_pem == other.private_pem && self.public_authorized == other.public_authorized
    }
}

impl Eq for KeyPair {}
