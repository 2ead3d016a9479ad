use crate::areas::repository::Repository;
use crate::artifacts::snapshot::builder::TreeBuilder;
use anyhow::Context;
use std::io::Write;

impl Repository {
    pub fn write_tree(&mut self, dir: Option<&str>) -> anyhow::Result<()> {
        let dir_path = match dir {
            Some(dir) => self.path().join(dir),
            None => self.path().to_path_buf(),
        };

        let oid = TreeBuilder::new(self)
            .write_tree(&dir_path)
            .with_context(|| format!("failed to snapshot {}", dir_path.display()))?;
        writeln!(self.writer(), "{}", oid)?;

        Ok(())
    }
}
