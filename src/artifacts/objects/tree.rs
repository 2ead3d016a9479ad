//! Tree objects (directory listings)
//!
//! A tree's payload is plain text, one line per directory entry:
//!
//! ```text
//! <kind> <oid-hex> <name>
//! ```
//!
//! Lines are joined with `\n` and the payload carries no trailing newline.
//! An empty payload is the empty tree, which is an ordinary value here, not
//! an error. Only blobs and trees may appear as entries, and entry names are
//! single path components: no `/`, no `.` or `..`, no spaces or newlines.
//!
//! ## Determinism
//!
//! Entries added through [`Tree::add_entry`] are kept sorted by name, so
//! building the same directory twice produces byte-identical payloads and
//! therefore the same object id. Decoding preserves payload order as-is.

use crate::artifacts::objects::object::StoreError;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_kind::ObjectKind;
use bytes::Bytes;
use thiserror::Error;

/// Ways tree encoding, decoding or traversal can fail
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("malformed tree entry '{line}': {reason}")]
    MalformedEntry { line: String, reason: String },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A single directory entry inside a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    kind: ObjectKind,
    oid: ObjectId,
    name: String,
}

impl TreeEntry {
    pub fn blob(oid: ObjectId, name: String) -> Self {
        TreeEntry {
            kind: ObjectKind::Blob,
            oid,
            name,
        }
    }

    pub fn tree(oid: ObjectId, name: String) -> Self {
        TreeEntry {
            kind: ObjectKind::Tree,
            oid,
            name,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for TreeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.kind, self.oid, self.name)
    }
}

/// A directory listing, kept sorted by entry name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Insert an entry at its sorted position, validating the name
    pub fn add_entry(&mut self, entry: TreeEntry) -> Result<(), TreeError> {
        if let Err(reason) = validate_entry_name(&entry.name) {
            return Err(TreeError::MalformedEntry {
                line: entry.to_string(),
                reason,
            });
        }

        let index = self
            .entries
            .partition_point(|existing| existing.name < entry.name);
        self.entries.insert(index, entry);

        Ok(())
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the listing into a tree payload
    pub fn encode(&self) -> Bytes {
        let lines = self
            .entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();

        lines.join("\n").into()
    }

    /// Parse a tree payload back into a listing
    ///
    /// Strict about shape: every line must split into exactly three fields,
    /// a stray trailing newline included. Entry order in the payload is
    /// preserved.
    pub fn decode(data: &[u8]) -> Result<Tree, TreeError> {
        if data.is_empty() {
            return Ok(Tree::default());
        }

        let text = String::from_utf8_lossy(data);
        let mut entries = Vec::new();
        for line in text.split('\n') {
            entries.push(Self::parse_entry(line)?);
        }

        Ok(Tree { entries })
    }

    fn parse_entry(line: &str) -> Result<TreeEntry, TreeError> {
        let malformed = |reason: String| TreeError::MalformedEntry {
            line: line.to_string(),
            reason,
        };

        let fields = line.split(' ').collect::<Vec<_>>();
        let (token, hex, name) = match fields.as_slice() {
            [token, hex, name] => (*token, *hex, *name),
            _ => {
                return Err(malformed(format!(
                    "expected 3 space-separated fields, got {}",
                    fields.len()
                )));
            }
        };

        let kind = match ObjectKind::from_token(token) {
            Some(kind @ (ObjectKind::Blob | ObjectKind::Tree)) => kind,
            Some(other) => return Err(malformed(format!("a {} cannot appear in a tree", other))),
            None => return Err(malformed(format!("unknown entry kind '{}'", token))),
        };

        let oid = ObjectId::try_parse(hex).map_err(|err| malformed(err.to_string()))?;
        validate_entry_name(name).map_err(malformed)?;

        Ok(TreeEntry {
            kind,
            oid,
            name: name.to_string(),
        })
    }
}

fn validate_entry_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("entry name is empty".to_string());
    }
    if name == "." || name == ".." {
        return Err(format!("entry name '{}' is reserved", name));
    }
    if name.contains('/') {
        return Err(format!("entry name '{}' is not a single component", name));
    }
    if name.contains(' ') || name.contains('\n') {
        return Err(format!("entry name '{}' contains whitespace", name));
    }

    Ok(())
}
