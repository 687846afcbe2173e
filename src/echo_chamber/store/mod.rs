//! # Storage Layer
//!
//! The storage layer persists two collections, reviews and friends, each as
//! one JSON container. It is split in two:
//!
//! - [`backend::StorageBackend`]: raw bytes in and out of a container.
//! - [`RecordStore`]: parsing, recovery and the collection rules.
//!
//! ## No Cache
//!
//! `RecordStore` keeps nothing in memory. Every operation loads the full
//! collection, changes it, and writes the full collection back. Opening
//! several stores on one directory is fine within a single thread; they all
//! see the same files.
//!
//! There is no locking. Two processes writing the same directory race and the
//! last writer wins.
//!
//! ## Recovery
//!
//! - **Missing container**: read as an empty collection.
//! - **Corrupt container** (not UTF-8 JSON, or the wrong shape): read as an
//!   empty collection. A warning is logged; the caller sees no error. The next
//!   write to that collection replaces the corrupt file.
//! - **Write failure**: returned to the caller as [`crate::error::EchoError`].
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production, one directory with atomic writes.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! $ECHO_CHAMBER_DATA/
//! ├── reviews.json        # [{"id", "friend", "topic", "review", "timestamp"}, ...]
//! └── friends.json        # ["name", ...]
//! ```
//!
//! Both files are pretty-printed with 2-space indentation and keep non-ASCII
//! characters as-is.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

pub use record_store::RecordStore;

/// A record store over JSON files on disk.
pub type FileRecordStore = RecordStore<fs_backend::FsBackend>;
