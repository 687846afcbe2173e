//! # Echo Chamber Storage
//!
//! Echo Chamber lets someone jot down what a friend said about a topic (a
//! "review") and keep a list of friends. This crate is the storage part of it:
//! a small, UI-agnostic library that a front-end calls directly.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front-end (not part of this crate)                         │
//! │  - Screens, input validation, sorting for display           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  RecordStore (store/record_store.rs)                        │
//! │  - add/query reviews, add/remove friends, clear             │
//! │  - read-modify-write of whole collections, no cache         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  StorageBackend (store/backend.rs)                          │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use echo_chamber::RecordStore;
//!
//! let store = RecordStore::open_default()?;
//! store.add_review("Alice", "App", "Good")?;
//! assert_eq!(store.get_reviews_by_topic("app")?.len(), 1);
//! assert!(store.get_all_friends()?.contains(&"Alice".to_string()));
//! # Ok::<(), echo_chamber::error::EchoError>(())
//! ```
//!
//! ## Input Validation
//!
//! None. The store keeps whatever strings it is given, empty ones included.
//! Rejecting blank input is the front-end's job.
//!
//! ## Module Overview
//!
//! - [`store`]: Storage abstraction and the record store
//! - [`model`]: Core data types (`Review`, `Friend`, `Collection`)
//! - [`config`]: Data directory resolution
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod model;
pub mod store;

pub use config::StoreConfig;
pub use error::{EchoError, Result};
pub use model::{Collection, Friend, Review};
pub use store::{FileRecordStore, RecordStore};
