//! Checkout engine
//!
//! Switching to a commit replaces the working area with that commit's
//! snapshot in four steps: flatten the commit's tree, clear the working
//! area, write every blob back out, advance HEAD. The clear-then-write
//! shape means a failure can leave the working area partially built.
//!
//! ## Recovery
//!
//! When the engine runs with `restore` armed and an attempt fails, it
//! re-materializes the commit HEAD still names, once, with `restore`
//! disarmed so a failing restore cannot recurse. The outcome reports both
//! what broke the attempt and how the recovery went.

use crate::areas::refs::RefsError;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Commit, CommitError};
use crate::artifacts::objects::object::StoreError;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_kind::ObjectKind;
use crate::artifacts::objects::tree::TreeError;
use crate::artifacts::snapshot::walk::TreeWalk;
use derive_new::new;
use thiserror::Error;

/// A single fault inside one checkout attempt
#[derive(Debug, Error)]
pub enum CheckoutFailure {
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Commit(#[from] CommitError),
    #[error(transparent)]
    Refs(#[from] RefsError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Outcome of a failed checkout, recovery included
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("checkout failed")]
    Failed(#[source] CheckoutFailure),
    #[error("checkout failed ({cause}); working area restored to {restored}")]
    Recovered {
        cause: CheckoutFailure,
        restored: ObjectId,
    },
    #[error("checkout failed ({cause}) and restoring the previous state failed too ({restore})")]
    RestoreFailed {
        cause: CheckoutFailure,
        restore: Box<CheckoutError>,
    },
}

/// Checkout engine over a repository
///
/// `restore` arms the one-shot recovery path.
#[derive(new)]
pub struct Checkout<'r> {
    repository: &'r Repository,
    restore: bool,
}

impl Checkout<'_> {
    /// Materialize a commit's snapshot and point HEAD at it
    pub fn run(&self, commit: &Commit) -> Result<(), CheckoutError> {
        match self.apply(commit) {
            Ok(()) => Ok(()),
            Err(cause) if self.restore => match self.restore_previous() {
                Ok(restored) => Err(CheckoutError::Recovered { cause, restored }),
                Err(restore) => Err(CheckoutError::RestoreFailed {
                    cause,
                    restore: Box::new(restore),
                }),
            },
            Err(cause) => Err(CheckoutError::Failed(cause)),
        }
    }

    fn apply(&self, commit: &Commit) -> Result<(), CheckoutFailure> {
        self.materialize(commit.tree())?;
        self.repository.refs().update_head(commit.oid())?;

        tracing::debug!(oid = %commit.oid(), "checkout complete");
        Ok(())
    }

    /// Clear the working area and write out every blob under a tree
    ///
    /// HEAD is left untouched, which is exactly what plumbing `read-tree`
    /// wants. Resolution happens before the clear, so a tree that does not
    /// even flatten never costs the working area anything.
    pub fn materialize(&self, tree: &ObjectId) -> Result<(), CheckoutFailure> {
        let files = TreeWalk::new(self.repository.database()).flatten(tree)?;

        self.repository.workspace().clear()?;
        for (path, oid) in &files {
            let data = self.repository.database().load_as(oid, ObjectKind::Blob)?;
            self.repository.workspace().write_file(path, &data)?;
        }

        tracing::debug!(%tree, files = files.len(), "snapshot materialized");
        Ok(())
    }

    fn restore_previous(&self) -> Result<ObjectId, CheckoutError> {
        let head = self
            .repository
            .refs()
            .read_head()
            .map_err(|err| CheckoutError::Failed(err.into()))?;
        let commit = self
            .repository
            .database()
            .parse_commit(&head)
            .map_err(|err| CheckoutError::Failed(err.into()))?;

        Checkout::new(self.repository, false).run(&commit)?;

        tracing::debug!(%head, "working area restored");
        Ok(head)
    }
}
