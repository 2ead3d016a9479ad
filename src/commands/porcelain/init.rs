use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    pub fn init(&mut self) -> anyhow::Result<()> {
        let storage_path = self.storage_path();
        if storage_path.exists() {
            anyhow::bail!("{} already exists", storage_path.display());
        }

        fs::create_dir(&storage_path)
            .with_context(|| format!("failed to create {}", storage_path.display()))?;

        writeln!(
            self.writer(),
            "Initialized empty repository in {}",
            storage_path.display()
        )?;

        Ok(())
    }
}
