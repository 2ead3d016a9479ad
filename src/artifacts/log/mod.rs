//! Commit history traversal
//!
//! History is a single chain: each commit has at most one parent, so the
//! walk is a plain loop from a starting commit back to the root, newest
//! first.
//!
//! The walk is strict. A missing or undecodable commit anywhere along the
//! chain fails the whole walk rather than quietly truncating the history.

use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Commit, CommitError};
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// Parent-chain walker over stored commits
#[derive(new)]
pub struct History<'r> {
    repository: &'r Repository,
}

impl History<'_> {
    /// Walk from HEAD back to the root commit
    ///
    /// Fails with [`CommitError::NoHead`] when nothing has been committed.
    pub fn from_head(&self) -> Result<Vec<Commit>, CommitError> {
        let head = self.repository.refs().read_head()?;

        self.from_commit(head)
    }

    /// Walk from a specific commit back to the root
    pub fn from_commit(&self, start: ObjectId) -> Result<Vec<Commit>, CommitError> {
        let mut commits = Vec::new();

        let mut cursor = (!start.is_zero()).then_some(start);
        while let Some(oid) = cursor {
            let commit = self.repository.database().parse_commit(&oid)?;
            cursor = commit.parent();
            commits.push(commit);
        }

        Ok(commits)
    }
}
