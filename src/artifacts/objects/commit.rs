//! Commit objects (snapshot records)
//!
//! A commit names one tree, at most one parent and a free-form message.
//!
//! ## Format
//!
//! ```text
//! tree <tree-hex>
//! parent <parent-hex>
//!
//! <message>
//! ```
//!
//! The `parent` line is omitted for the first commit. A blank line separates
//! the header from the message, and encoding appends one newline after the
//! message. Decoding splits at the *first* blank line and strips exactly one
//! trailing newline, so any message round-trips byte-for-byte, blank lines
//! and all.

use crate::areas::refs::RefsError;
use crate::artifacts::objects::object::StoreError;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::TreeError;
use bytes::Bytes;
use thiserror::Error;

const TREE_KEY: &str = "tree";
const PARENT_KEY: &str = "parent";

/// Ways commit encoding, decoding or recording can fail
#[derive(Debug, Error)]
pub enum CommitError {
    #[error("invalid commit encoding: {0}")]
    InvalidEncoding(String),
    #[error("no commits yet")]
    NoHead,
    #[error("commit {oid} was stored but HEAD could not be moved to it")]
    HeadUpdateFailed {
        oid: ObjectId,
        #[source]
        source: RefsError,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error(transparent)]
    Refs(RefsError),
}

impl From<RefsError> for CommitError {
    fn from(err: RefsError) -> Self {
        match err {
            RefsError::NoHead => CommitError::NoHead,
            other => CommitError::Refs(other),
        }
    }
}

/// A snapshot record: tree id, optional parent id, message
///
/// The parent is held as a raw id with the zero id standing in for "no
/// parent"; [`Commit::parent`] exposes it as an `Option`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    oid: ObjectId,
    tree: ObjectId,
    parent: ObjectId,
    message: String,
}

impl Commit {
    /// A commit that has not been stored yet; the store assigns its id
    pub fn new(tree: ObjectId, parent: ObjectId, message: String) -> Self {
        Commit {
            oid: ObjectId::zero(),
            tree,
            parent,
            message,
        }
    }

    pub fn with_oid(mut self, oid: ObjectId) -> Self {
        self.oid = oid;
        self
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn tree(&self) -> &ObjectId {
        &self.tree
    }

    /// The parent commit, if any; the first commit has none
    pub fn parent(&self) -> Option<ObjectId> {
        (!self.parent.is_zero()).then_some(self.parent)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    /// Serialize into a commit payload
    pub fn encode(&self) -> Bytes {
        let mut lines = vec![format!("{} {}", TREE_KEY, self.tree)];
        if !self.parent.is_zero() {
            lines.push(format!("{} {}", PARENT_KEY, self.parent));
        }

        format!("{}\n\n{}\n", lines.join("\n"), self.message).into()
    }

    /// Parse a commit payload
    ///
    /// The decoded commit carries the zero id; callers that know which
    /// object the payload came from attach it with [`Commit::with_oid`].
    pub fn decode(data: &[u8]) -> Result<Commit, CommitError> {
        let text = String::from_utf8_lossy(data);
        let (header, message) = text.split_once("\n\n").ok_or_else(|| {
            CommitError::InvalidEncoding("missing blank line after header".to_string())
        })?;

        let mut tree = None;
        let mut parent = ObjectId::zero();

        for line in header.lines() {
            let fields = line.split(' ').collect::<Vec<_>>();
            let (key, value) = match fields.as_slice() {
                [key, value] => (*key, *value),
                _ => {
                    return Err(CommitError::InvalidEncoding(format!(
                        "header line '{}' is not a key-value pair",
                        line
                    )));
                }
            };

            match key {
                TREE_KEY => tree = Some(Self::parse_header_oid(line, value)?),
                PARENT_KEY => parent = Self::parse_header_oid(line, value)?,
                unknown => {
                    return Err(CommitError::InvalidEncoding(format!(
                        "unknown header key '{}'",
                        unknown
                    )));
                }
            }
        }

        let tree = tree
            .ok_or_else(|| CommitError::InvalidEncoding("missing tree header".to_string()))?;
        let message = message.strip_suffix('\n').unwrap_or(message).to_string();

        Ok(Commit {
            oid: ObjectId::zero(),
            tree,
            parent,
            message,
        })
    }

    fn parse_header_oid(line: &str, value: &str) -> Result<ObjectId, CommitError> {
        ObjectId::try_parse(value).map_err(|err| {
            CommitError::InvalidEncoding(format!("header line '{}': {}", line, err))
        })
    }
}
