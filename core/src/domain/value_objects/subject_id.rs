//! Subject identifier value object.
//!
//! Subjects are keyed in the identity store by a 12-byte identifier rendered
//! as 24 hexadecimal characters: a 4-byte big-endian Unix timestamp followed
//! by 8 random bytes. Everything above the store treats it as an opaque string.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Length of a rendered subject identifier
pub const SUBJECT_ID_LEN: usize = 24;

/// A well-formed identity-store key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubjectId(String);

impl SubjectId {
    /// Parses and normalises (lowercases) a subject identifier
    ///
    /// # Returns
    ///
    /// * `Ok(SubjectId)` - The identifier is 24 hexadecimal characters
    /// * `Err(DomainError::InvalidSubject)` - Anything else
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.len() != SUBJECT_ID_LEN {
            return Err(DomainError::InvalidSubject {
                subject: raw.to_string(),
            });
        }
        let bytes = hex::decode(raw).map_err(|_| DomainError::InvalidSubject {
            subject: raw.to_string(),
        })?;
        Ok(Self(hex::encode(bytes)))
    }

    /// Generates a fresh identifier stamped with the current time
    pub fn generate() -> Self {
        let mut bytes = [0u8; SUBJECT_ID_LEN / 2];
        let seconds = Utc::now().timestamp().clamp(0, i64::from(u32::MAX)) as u32;
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        rand::thread_rng().fill_bytes(&mut bytes[4..]);
        Self(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SubjectId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for SubjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SubjectId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SubjectId> for String {
    fn from(value: SubjectId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_hex_and_lowercases() {
        let id = SubjectId::parse("65A1F0C2B3D4E5F601234567").unwrap();
        assert_eq!(id.as_str(), "65a1f0c2b3d4e5f601234567");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in [
            "",
            "u1",
            "65a1f0c2b3d4e5f60123456",   // 23 chars
            "65a1f0c2b3d4e5f6012345678", // 25 chars
            "65a1f0c2b3d4e5f60123456z",
            " 5a1f0c2b3d4e5f601234567",
        ] {
            let err = SubjectId::parse(raw).unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidSubject { .. }),
                "expected InvalidSubject for {raw:?}"
            );
        }
    }

    #[test]
    fn test_generate_is_well_formed_and_unique() {
        let a = SubjectId::generate();
        let b = SubjectId::generate();
        assert_eq!(a.as_str().len(), SUBJECT_ID_LEN);
        assert_eq!(SubjectId::parse(a.as_str()).unwrap(), a);
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_embeds_timestamp() {
        let before = Utc::now().timestamp();
        let id = SubjectId::generate();
        let stamp = u32::from_str_radix(&id.as_str()[..8], 16).unwrap() as i64;
        assert!(stamp >= before && stamp <= Utc::now().timestamp());
    }

    #[test]
    fn test_serde_validates() {
        let id: SubjectId = serde_json::from_str(r#""65a1f0c2b3d4e5f601234567""#).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""65a1f0c2b3d4e5f601234567""#);
        assert!(serde_json::from_str::<SubjectId>(r#""nope""#).is_err());
    }
}
