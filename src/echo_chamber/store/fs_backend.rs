use super::backend::StorageBackend;
use crate::error::{EchoError, Result};
use crate::model::Collection;
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Stores each collection as a JSON file directly under `root`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn collection_path(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.file_name())
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(EchoError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn prepare(&self) -> Result<()> {
        self.ensure_dir(&self.root)
    }

    fn collection_exists(&self, collection: Collection) -> bool {
        self.collection_path(collection).exists()
    }

    fn read_collection(&self, collection: Collection) -> Result<Option<Vec<u8>>> {
        match fs::read(self.collection_path(collection)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(EchoError::Io(e)),
        }
    }

    fn write_collection(&self, collection: Collection, bytes: &[u8]) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let target_path = self.collection_path(collection);

        // Atomic write; never leave the tmp file behind
        let tmp_path = self
            .root
            .join(format!(".{}-{}.tmp", collection, Uuid::new_v4()));
        let written =
            fs::write(&tmp_path, bytes).and_then(|_| fs::rename(&tmp_path, &target_path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(EchoError::Io(e));
        }

        debug!("wrote {} bytes to {}", bytes.len(), target_path.display());
        Ok(())
    }
}
