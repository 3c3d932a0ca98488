//! OpenSSH authorized-key encoding for RSA public keys
//!
//! A line has the form `ssh-rsa <base64 blob> [comment]`. The blob is the SSH
//! wire encoding `string "ssh-rsa" || mpint e || mpint n`, where each field is
//! prefixed by its big-endian `u32` length.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPublicKey};
use thiserror::Error;

/// Key type tag for RSA keys
pub const SSH_RSA: &str = "ssh-rsa";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthorizedKeyError {
    #[error("authorized key is empty")]
    Empty,

    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(String),

    #[error("malformed authorized key: {0}")]
    Malformed(&'static str),

    #[error("invalid RSA public key: {0}")]
    InvalidKey(String),
}

/// Renders `key` as a single authorized-key line terminated by `\n`
pub fn encode(key: &RsaPublicKey, comment: Option<&str>) -> String {
    let mut blob = Vec::new();
    put_string(&mut blob, SSH_RSA.as_bytes());
    put_mpint(&mut blob, &key.e().to_bytes_be());
    put_mpint(&mut blob, &key.n().to_bytes_be());

    let mut line = format!("{} {}", SSH_RSA, STANDARD.encode(blob));
    if let Some(comment) = comment.filter(|c| !c.is_empty()) {
        line.push(' ');
        line.push_str(comment);
    }
    line.push('\n');
    line
}

/// Parses the first authorized-key line in `input`
pub fn decode(input: &str) -> Result<RsaPublicKey, AuthorizedKeyError> {
    let line = input
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.starts_with('#'))
        .ok_or(AuthorizedKeyError::Empty)?;

    let mut fields = line.split_whitespace();
    let key_type = fields.next().ok_or(AuthorizedKeyError::Empty)?;
    if key_type != SSH_RSA {
        return Err(AuthorizedKeyError::UnsupportedKeyType(key_type.to_string()));
    }
    let encoded = fields
        .next()
        .ok_or(AuthorizedKeyError::Malformed("missing key data"))?;
    let blob = STANDARD
        .decode(encoded)
        .map_err(|_| AuthorizedKeyError::Malformed("key data is not base64"))?;

    let mut reader = WireReader::new(&blob);
    let blob_type = reader.string()?;
    if blob_type != SSH_RSA.as_bytes() {
        return Err(AuthorizedKeyError::UnsupportedKeyType(
            String::from_utf8_lossy(blob_type).into_owned(),
        ));
    }
    let e = reader.mpint()?;
    let n = reader.mpint()?;
    if !reader.is_empty() {
        return Err(AuthorizedKeyError::Malformed("trailing bytes in key data"));
    }

    RsaPublicKey::new(BigUint::from_bytes_be(n), BigUint::from_bytes_be(e))
        .map_err(|e| AuthorizedKeyError::InvalidKey(e.to_string()))
}

fn put_string(buf: &mut Vec<u8>, data: &[u8]) {
    buf.extend_from_slice(&(data.len() as u32).to_be_bytes());
    buf.extend_from_slice(data);
}

fn put_mpint(buf: &mut Vec<u8>, magnitude: &[u8]) {
    let start = magnitude.iter().position(|b| *b != 0).unwrap_or(magnitude.len());
    let digits = &magnitude[start..];
    // Positive values with the top bit set need a leading zero byte
    if digits.first().is_some_and(|b| b & 0x80 != 0) {
        buf.extend_from_slice(&(digits.len() as u32 + 1).to_be_bytes());
        buf.push(0);
        buf.extend_from_slice(digits);
    } else {
        put_string(buf, digits);
    }
}

struct WireReader<'a> {
    data: &'a [u8],
}

impl<'a> WireReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn string(&mut self) -> Result<&'a [u8], AuthorizedKeyError> {
        if self.data.len() < 4 {
            return Err(AuthorizedKeyError::Malformed("truncated length prefix"));
        }
        let (len, rest) = self.data.split_at(4);
        let len = u32::from_be_bytes([len[0], len[1], len[2], len[3]]) as usize;
        if rest.len() < len {
            return Err(AuthorizedKeyError::Malformed("truncated field"));
        }
        let (field, rest) = rest.split_at(len);
        self.data = rest;
        Ok(field)
    }

    fn mpint(&mut self) -> Result<&'a [u8], AuthorizedKeyError> {
        let field = self.string()?;
        if field.first().is_some_and(|b| b & 0x80 != 0) {
            return Err(AuthorizedKeyError::Malformed("negative integer"));
        }
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_key_pair;

    #[test]
    fn test_encode_then_decode_recovers_key() {
        let public = test_key_pair().public_key().clone();
        let line = encode(&public, Some("tokenpair"));
        assert!(line.starts_with("ssh-rsa AAAAB3NzaC1yc2E"));
        assert!(line.ends_with(" tokenpair\n"));
        assert_eq!(decode(&line).unwrap(), public);
    }

    #[test]
    fn test_decode_tolerates_whitespace_and_missing_comment() {
        let public = test_key_pair().public_key().clone();
        let line = format!("\n  {}  \n", encode(&public, None).trim_end());
        assert_eq!(decode(&line).unwrap(), public);
    }

    #[test]
    fn test_mpint_prefixes_high_bit() {
        let mut buf = Vec::new();
        put_mpint(&mut buf, &[0x80, 0x01]);
        assert_eq!(buf, vec![0, 0, 0, 3, 0x00, 0x80, 0x01]);

        let mut buf = Vec::new();
        put_mpint(&mut buf, &[0x00, 0x01, 0x00, 0x01]);
        assert_eq!(buf, vec![0, 0, 0, 3, 0x01, 0x00, 0x01]);
    }

    #[test]
    fn test_decode_rejects_other_key_types() {
        let err = decode("ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIGd5 user@host").unwrap_err();
        assert_eq!(err, AuthorizedKeyError::UnsupportedKeyType("ssh-ed25519".into()));
    }

    #[test]
    fn test_decode_rejects_blob_type_mismatch() {
        let mut blob = Vec::new();
        put_string(&mut blob, b"ssh-dss");
        let line = format!("ssh-rsa {}", STANDARD.encode(blob));
        assert!(matches!(
            decode(&line),
            Err(AuthorizedKeyError::UnsupportedKeyType(_))
        ));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(decode("").unwrap_err(), AuthorizedKeyError::Empty);
        assert_eq!(decode("   \n\n").unwrap_err(), AuthorizedKeyError::Empty);
        assert!(matches!(
            decode("ssh-rsa"),
            Err(AuthorizedKeyError::Malformed(_))
        ));
        assert!(matches!(
            decode("ssh-rsa !!!notbase64"),
            Err(AuthorizedKeyError::Malformed(_))
        ));
        // Valid base64, truncated wire data
        assert!(matches!(
            decode("ssh-rsa AAAAB3NzaC1yc2EAAAAD"),
            Err(AuthorizedKeyError::Malformed(_))
        ));
    }
}
