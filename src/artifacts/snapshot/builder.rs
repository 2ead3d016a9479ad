use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_kind::ObjectKind;
use crate::artifacts::objects::tree::{Tree, TreeEntry, TreeError};
use derive_new::new;
use std::path::Path;

/// Recursive snapshot builder: turns a directory into stored tree objects
///
/// Children are stored before their parent tree references them, so a
/// failure partway through leaves only unreferenced objects behind, never
/// a tree pointing at something missing.
#[derive(new)]
pub struct TreeBuilder<'r> {
    repository: &'r Repository,
}

impl TreeBuilder<'_> {
    /// Snapshot a directory and return the root tree's id
    ///
    /// The root tree is always stored, even when the directory holds
    /// nothing, so the caller gets a usable id either way. Empty
    /// subdirectories below the root leave no trace.
    pub fn write_tree(&self, dir_path: &Path) -> Result<ObjectId, TreeError> {
        let tree = self.build(dir_path)?;
        let oid = self
            .repository
            .database()
            .store(&tree.encode(), ObjectKind::Tree)?;

        tracing::debug!(%oid, entries = tree.len(), "snapshot root stored");
        Ok(oid)
    }

    fn build(&self, dir_path: &Path) -> Result<Tree, TreeError> {
        let mut tree = Tree::default();

        for entry in self.repository.workspace().list_dir(dir_path)? {
            if entry.file_type.is_dir() {
                let child = self.build(&entry.path)?;
                // a directory left with nothing after ignores is not recorded
                if child.is_empty() {
                    continue;
                }

                let oid = self
                    .repository
                    .database()
                    .store(&child.encode(), ObjectKind::Tree)?;
                tree.add_entry(TreeEntry::tree(oid, entry.name))?;
            } else if entry.file_type.is_file() {
                let data = std::fs::read(&entry.path)?;
                let oid = self.repository.database().store(&data, ObjectKind::Blob)?;
                tree.add_entry(TreeEntry::blob(oid, entry.name))?;
            }
            // non-regular entries (symlinks, sockets) are not snapshotted
        }

        Ok(tree)
    }
}
