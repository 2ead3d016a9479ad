use crate::areas::refs::RefsError;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Commit, CommitError};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_kind::ObjectKind;
use crate::artifacts::snapshot::builder::TreeBuilder;
use std::io::Write;

impl Repository {
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let commit = self.save_current_tree(message)?;
        writeln!(self.writer(), "{}", commit.oid())?;

        Ok(())
    }

    /// Snapshot the working area and record it as a commit on top of HEAD
    ///
    /// The current HEAD, or the zero id in a fresh repository, becomes the
    /// parent; HEAD then advances to the new commit. Committing an empty
    /// working area is allowed and records the empty tree.
    pub fn save_current_tree(&self, message: &str) -> Result<Commit, CommitError> {
        let tree = TreeBuilder::new(self).write_tree(self.path())?;

        let parent = match self.refs().read_head() {
            Ok(head) => head,
            Err(RefsError::NoHead) => ObjectId::zero(),
            Err(err) => return Err(err.into()),
        };

        let commit = Commit::new(tree, parent, message.to_string());
        let oid = self
            .database()
            .store(&commit.encode(), ObjectKind::Commit)?;

        self.refs()
            .update_head(&oid)
            .map_err(|source| CommitError::HeadUpdateFailed { oid, source })?;

        tracing::debug!(%oid, "commit recorded");
        Ok(commit.with_oid(oid))
    }
}
