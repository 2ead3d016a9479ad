use crate::areas::database::Database;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_kind::ObjectKind;
use crate::artifacts::objects::tree::TreeError;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Flattening walk over a stored tree
#[derive(new)]
pub struct TreeWalk<'d> {
    database: &'d Database,
}

impl TreeWalk<'_> {
    /// Flatten a stored tree into `(relative path, blob id)` pairs
    ///
    /// Depth-first in entry order. Paths are exactly the joined entry
    /// names, with no leading `./`. A child tree that decodes to zero
    /// entries contributes nothing.
    pub fn flatten(&self, oid: &ObjectId) -> Result<Vec<(PathBuf, ObjectId)>, TreeError> {
        let mut files = Vec::new();
        self.collect(oid, Path::new(""), &mut files)?;

        Ok(files)
    }

    fn collect(
        &self,
        oid: &ObjectId,
        prefix: &Path,
        files: &mut Vec<(PathBuf, ObjectId)>,
    ) -> Result<(), TreeError> {
        let tree = self.database.parse_tree(oid)?;

        for entry in tree.entries() {
            let path = prefix.join(entry.name());
            match entry.kind() {
                ObjectKind::Blob => files.push((path, *entry.oid())),
                ObjectKind::Tree => self.collect(entry.oid(), &path, files)?,
                // the tree codec admits only blob and tree entries
                ObjectKind::Commit => unreachable!(),
            }
        }

        Ok(())
    }
}
