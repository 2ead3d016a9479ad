//! Object identifier (SHA-1 digest)
//!
//! Object IDs are 20-byte SHA-1 digests of framed object content. They
//! uniquely identify every object in the store (blobs, trees, commits).
//!
//! ## Format
//!
//! - Raw: 20 bytes, the form kept in memory
//! - Full: 40 lowercase hex characters, the form used on disk and on the CLI
//! - Short: first 7 hex characters, used in human-facing messages
//!
//! ## The zero id
//!
//! The all-zero id is a sentinel meaning "no object". It never names a
//! stored object; commits use it internally to mark the absent parent of
//! the first snapshot.

use crate::artifacts::objects::{OBJECT_ID_HEX_LENGTH, OBJECT_ID_LENGTH};
use sha1::{Digest, Sha1};
use thiserror::Error;

/// Ways a textual object ID can fail to parse
#[derive(Debug, Error, PartialEq)]
pub enum ObjectIdError {
    #[error("invalid object id: expected {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("invalid object id: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Object identifier (SHA-1 digest)
///
/// Held as raw bytes; rendered as 40 lowercase hex characters wherever it
/// crosses into text (disk, CLI output, tree and commit payloads).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId([u8; OBJECT_ID_LENGTH]);

impl ObjectId {
    /// The "no object" sentinel
    pub const fn zero() -> Self {
        Self([0; OBJECT_ID_LENGTH])
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; OBJECT_ID_LENGTH]
    }

    /// Hash a framed object buffer into its id
    pub fn digest(data: &[u8]) -> Self {
        Self(Sha1::digest(data).into())
    }

    pub fn from_bytes(bytes: [u8; OBJECT_ID_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; OBJECT_ID_LENGTH] {
        &self.0
    }

    /// Parse and validate an object ID from its hex form
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated ObjectId or error if invalid length/characters
    pub fn try_parse(id: &str) -> Result<Self, ObjectIdError> {
        if id.len() != OBJECT_ID_HEX_LENGTH {
            return Err(ObjectIdError::InvalidLength {
                expected: OBJECT_ID_HEX_LENGTH,
                actual: id.len(),
            });
        }

        let raw = hex::decode(id)?;
        let mut bytes = [0; OBJECT_ID_LENGTH];
        bytes.copy_from_slice(&raw);

        Ok(Self(bytes))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get abbreviated form of the object ID
    ///
    /// # Returns
    ///
    /// First 7 hex characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.to_hex().split_at(7).0.to_string()
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ObjectId({})", self.to_short_oid())
    }
}
