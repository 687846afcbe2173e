use crate::error::Result;
use crate::model::Collection;

/// Abstract interface for raw container I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecordStore handles the "what" (parsing, recovery, collection rules).
pub trait StorageBackend {
    /// Make the storage location usable (e.g. create the data directory).
    fn prepare(&self) -> Result<()>;

    /// Whether the container for `collection` exists at all.
    fn collection_exists(&self, collection: Collection) -> bool;

    /// Read the raw bytes of a container.
    /// Returns Ok(None) if the container does not exist.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_collection(&self, collection: Collection) -> Result<Option<Vec<u8>>>;

    /// Replace the whole container.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_collection(&self, collection: Collection, bytes: &[u8]) -> Result<()>;
}
