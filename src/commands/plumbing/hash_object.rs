use crate::areas::repository::Repository;
use crate::artifacts::objects::object_kind::ObjectKind;
use anyhow::Context;
use std::io::Write;

impl Repository {
    pub fn hash_object(&mut self, file: &str) -> anyhow::Result<()> {
        // read the file relative to the workspace root
        let data = self
            .workspace()
            .read_file(file.as_ref())
            .with_context(|| format!("failed to read {}", file))?;

        let oid = self.database().store(&data, ObjectKind::Blob)?;
        writeln!(self.writer(), "{}", oid)?;

        Ok(())
    }
}
