//! Object envelope and framing
//!
//! On disk every object is its kind token, one NUL byte, then the raw
//! payload: `<kind>\0<payload>`. The object id is the SHA-1 of that whole
//! framed buffer, so the same payload stored under two different kinds
//! yields two different ids.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_kind::ObjectKind;
use bytes::Bytes;
use thiserror::Error;

/// Ways reading or writing the store can fail
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("object {0} not found in store")]
    NotFound(ObjectId),
    #[error("object {0} is corrupt: no kind separator")]
    InvalidObject(ObjectId),
    #[error("object {oid} has unknown kind '{token}'")]
    UnknownKind { oid: ObjectId, token: String },
    #[error("object {oid} is a {actual}, expected {expected}")]
    UnexpectedKind {
        oid: ObjectId,
        expected: ObjectKind,
        actual: ObjectKind,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A decoded object: its kind tag plus the raw payload bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub kind: ObjectKind,
    pub data: Bytes,
}

impl StoredObject {
    /// Build the framed on-disk buffer for a payload
    pub fn frame(kind: ObjectKind, payload: &[u8]) -> Vec<u8> {
        let token = kind.as_str().as_bytes();

        let mut framed = Vec::with_capacity(token.len() + 1 + payload.len());
        framed.extend_from_slice(token);
        framed.push(0);
        framed.extend_from_slice(payload);

        framed
    }

    /// Split a framed buffer read from disk back into kind and payload
    ///
    /// Only the first NUL separates kind from payload; payloads are free to
    /// contain NUL bytes of their own.
    pub fn unframe(oid: &ObjectId, framed: &[u8]) -> Result<StoredObject, StoreError> {
        let separator = framed
            .iter()
            .position(|&byte| byte == 0)
            .ok_or(StoreError::InvalidObject(*oid))?;

        let token = String::from_utf8_lossy(&framed[..separator]);
        let kind = ObjectKind::from_token(&token).ok_or_else(|| StoreError::UnknownKind {
            oid: *oid,
            token: token.to_string(),
        })?;

        Ok(StoredObject {
            kind,
            data: Bytes::copy_from_slice(&framed[separator + 1..]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framing_round_trips_a_payload() {
        let framed = StoredObject::frame(ObjectKind::Blob, b"hello world");
        let oid = ObjectId::digest(&framed);

        let object = StoredObject::unframe(&oid, &framed).unwrap();

        assert_eq!(object.kind, ObjectKind::Blob);
        assert_eq!(object.data, Bytes::from_static(b"hello world"));
    }

    #[test]
    fn payloads_may_contain_nul_bytes() {
        let framed = StoredObject::frame(ObjectKind::Blob, b"ab\0cd\0");
        let oid = ObjectId::digest(&framed);

        let object = StoredObject::unframe(&oid, &framed).unwrap();

        assert_eq!(object.data, Bytes::from_static(b"ab\0cd\0"));
    }

    #[test]
    fn a_buffer_without_separator_is_corrupt() {
        let oid = ObjectId::digest(b"whatever");

        let result = StoredObject::unframe(&oid, b"blob without separator");

        assert!(matches!(result, Err(StoreError::InvalidObject(bad)) if bad == oid));
    }

    #[test]
    fn an_unknown_kind_token_is_rejected() {
        let oid = ObjectId::digest(b"whatever");

        let result = StoredObject::unframe(&oid, b"chunk\0data");

        assert!(matches!(
            result,
            Err(StoreError::UnknownKind { token, .. }) if token == "chunk"
        ));
    }

    #[test]
    fn the_kind_participates_in_the_id() {
        let as_blob = ObjectId::digest(&StoredObject::frame(ObjectKind::Blob, b"same payload"));
        let as_tree = ObjectId::digest(&StoredObject::frame(ObjectKind::Tree, b"same payload"));

        assert_ne!(as_blob, as_tree);
    }

    #[test]
    fn an_empty_payload_frames_to_just_the_header() {
        let framed = StoredObject::frame(ObjectKind::Tree, b"");

        assert_eq!(framed, b"tree\0");
    }
}
