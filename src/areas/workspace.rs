use crate::areas::repository::STORAGE_DIR;
use bytes::Bytes;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Names every scan and clear skips by default
const IGNORED_PATHS: [&str; 2] = [STORAGE_DIR, ".git"];

/// A non-ignored child of a scanned directory
#[derive(Debug, Clone)]
pub struct WorkspaceEntry {
    pub name: String,
    pub path: PathBuf,
    pub file_type: std::fs::FileType,
}

/// The working directory: the files snapshots are built from and
/// materialized back into
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    ignored: Vec<String>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace {
            path,
            ignored: IGNORED_PATHS.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extend the ignore list; the name is skipped by every scan and clear
    pub fn add_ignored(&mut self, name: impl Into<String>) {
        self.ignored.push(name.into());
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored.iter().any(|ignored| ignored == name)
    }

    /// List the non-ignored children of a directory, sorted by name
    pub fn list_dir(&self, dir_path: &Path) -> std::io::Result<Vec<WorkspaceEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir_path)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.is_ignored(&name) {
                continue;
            }

            entries.push(WorkspaceEntry {
                name,
                path: entry.path(),
                file_type: entry.file_type()?,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(entries)
    }

    /// Read a file relative to the workspace root
    pub fn read_file(&self, file_path: &Path) -> std::io::Result<Bytes> {
        let content = std::fs::read(self.path.join(file_path))?;

        Ok(content.into())
    }

    /// Write blob data at a path relative to the workspace root, creating
    /// parent directories as needed
    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> std::io::Result<()> {
        let full_path = self.path.join(file_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&full_path)?;
        file.write_all(data)?;

        Ok(())
    }

    /// Delete everything under the workspace root except ignored names
    ///
    /// A directory that still holds ignored entries after its visible
    /// children are gone cannot be removed; the "directory not empty"
    /// failure from that remove is tolerated and the clear moves on.
    pub fn clear(&self) -> std::io::Result<()> {
        self.clear_dir(&self.path)
    }

    fn clear_dir(&self, dir_path: &Path) -> std::io::Result<()> {
        for entry in std::fs::read_dir(dir_path)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.is_ignored(&name) {
                continue;
            }

            let path = entry.path();
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                self.clear_dir(&path)?;
                match std::fs::remove_dir(&path) {
                    Err(err) if err.kind() == std::io::ErrorKind::DirectoryNotEmpty => {}
                    other => other?,
                }
            } else if file_type.is_file() {
                std::fs::remove_file(&path)?;
            }
            // non-regular entries (symlinks, sockets) are left alone, matching the scan side
        }

        Ok(())
    }
}
