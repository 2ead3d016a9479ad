use crate::artifacts::objects::commit::{Commit, CommitError};
use crate::artifacts::objects::object::{StoreError, StoredObject};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_kind::ObjectKind;
use crate::artifacts::objects::tree::{Tree, TreeError};
use bytes::Bytes;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Flat content-addressed object store
///
/// One file per object, named by the 40-hex id of its framed content, all
/// directly under the storage directory. Objects are immutable: the store
/// only ever adds files, never rewrites or removes them.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    fn object_path(&self, oid: &ObjectId) -> PathBuf {
        self.path.join(oid.to_hex())
    }

    /// Frame and store a payload, returning its id
    ///
    /// Storing the same payload under the same kind twice is free: an
    /// existing object file is trusted as-is, and a concurrent writer
    /// landing first is fine because it wrote identical content.
    pub fn store(&self, payload: &[u8], kind: ObjectKind) -> Result<ObjectId, StoreError> {
        let framed = StoredObject::frame(kind, payload);
        let oid = ObjectId::digest(&framed);
        let object_path = self.object_path(&oid);

        if object_path.exists() {
            return Ok(oid);
        }

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&object_path)
        {
            Ok(mut object_file) => object_file.write_all(&framed)?,
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {}
            Err(err) => return Err(err.into()),
        }

        tracing::debug!(%oid, kind = %kind, bytes = payload.len(), "stored object");
        Ok(oid)
    }

    /// Read an object back as its kind and raw payload
    pub fn load(&self, oid: &ObjectId) -> Result<StoredObject, StoreError> {
        let object_path = self.object_path(oid);
        let framed = std::fs::read(&object_path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => StoreError::NotFound(*oid),
            _ => StoreError::Io(err),
        })?;

        StoredObject::unframe(oid, &framed)
    }

    /// Read an object, insisting on a specific kind
    pub fn load_as(&self, oid: &ObjectId, expected: ObjectKind) -> Result<Bytes, StoreError> {
        let object = self.load(oid)?;
        if object.kind != expected {
            return Err(StoreError::UnexpectedKind {
                oid: *oid,
                expected,
                actual: object.kind,
            });
        }

        Ok(object.data)
    }

    pub fn parse_tree(&self, oid: &ObjectId) -> Result<Tree, TreeError> {
        let data = self.load_as(oid, ObjectKind::Tree)?;

        Tree::decode(&data)
    }

    pub fn parse_commit(&self, oid: &ObjectId) -> Result<Commit, CommitError> {
        let data = self.load_as(oid, ObjectKind::Commit)?;

        Ok(Commit::decode(&data)?.with_oid(*oid))
    }
}
