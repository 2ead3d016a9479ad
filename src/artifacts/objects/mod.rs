//! Object types and codecs
//!
//! The store holds exactly three kinds of object:
//!
//! - **Blob**: file content (raw bytes, stored as-is)
//! - **Tree**: a directory listing (kind, object id and name per entry)
//! - **Commit**: a snapshot record (tree id, optional parent id, message)
//!
//! Every object is framed on disk as `<kind>\0<payload>` and addressed by
//! the SHA-1 of that framed buffer, so the kind participates in the identity
//! of the object.

pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_kind;
pub mod tree;

/// Length of an object ID in raw bytes
pub const OBJECT_ID_LENGTH: usize = 20;

/// Length of an object ID in lowercase hexadecimal format
pub const OBJECT_ID_HEX_LENGTH: usize = OBJECT_ID_LENGTH * 2;
