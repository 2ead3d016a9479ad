//! HEAD reference management
//!
//! HEAD is the single reference in the system: a pointer to the latest
//! snapshot, consulted for the parent of the next one. There are no
//! branches or symbolic references.
//!
//! ## File Format
//!
//! HEAD lives directly inside the storage directory as a text file holding
//! one bare 40-character hex object id with no trailing newline. A missing
//! or empty file means no snapshot has been recorded yet, which is a benign
//! state and reported as [`RefsError::NoHead`].

use crate::artifacts::objects::object_id::{ObjectId, ObjectIdError};
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use thiserror::Error;

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Ways reading or moving HEAD can fail
///
/// `NoHead` is the expected state of a fresh repository; everything else is
/// a real fault.
#[derive(Debug, Error)]
pub enum RefsError {
    #[error("HEAD does not exist yet")]
    NoHead,
    #[error("HEAD is malformed: {0}")]
    MalformedHead(#[from] ObjectIdError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// HEAD reference manager
///
/// Handles reading and moving the HEAD pointer.
/// Writes go through an exclusive file lock.
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the storage directory holding the HEAD file
    path: Box<Path>,
}

impl Refs {
    /// Read the commit id HEAD points at
    pub fn read_head(&self) -> Result<ObjectId, RefsError> {
        let head_path = self.head_path();
        if !head_path.exists() {
            return Err(RefsError::NoHead);
        }

        let content = std::fs::read_to_string(&head_path)?;
        let content = content.trim();
        if content.is_empty() {
            return Err(RefsError::NoHead);
        }

        Ok(ObjectId::try_parse(content)?)
    }

    /// Point HEAD at a commit
    ///
    /// # Locking
    ///
    /// Takes an exclusive advisory lock on the HEAD file for the duration
    /// of the write, so concurrent updates serialize instead of interleaving.
    pub fn update_head(&self, oid: &ObjectId) -> Result<(), RefsError> {
        let mut head_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.head_path())?;
        let mut lock = file_guard::lock(&mut head_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(oid.to_hex().as_bytes())?;

        tracing::debug!(%oid, "HEAD updated");
        Ok(())
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }
}
