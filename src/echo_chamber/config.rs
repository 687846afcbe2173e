//! # Configuration
//!
//! Store configuration is loaded with [`confique`], layering an optional TOML
//! file under environment variables.
//!
//! ## Resolution Order
//!
//! 1. **Environment**: `ECHO_CHAMBER_DATA` names the data directory.
//! 2. **Config File**: `data_dir` in a TOML file passed to
//!    [`StoreConfig::load_with_file`]. A missing file is ignored.
//! 3. **Default**: `.`, the current working directory.
//!
//! The directory is resolved once, when a store is opened. Changing the
//! environment afterwards does not move an open store.

use crate::error::Result;
use confique::Config;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "ECHO_CHAMBER_DATA";

#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding `reviews.json` and `friends.json`.
    #[config(env = "ECHO_CHAMBER_DATA", default = ".")]
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
        }
    }
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load from the environment, falling back to the default.
    pub fn load() -> Result<Self> {
        Ok(Self::builder().env().load()?)
    }

    /// Load from the environment, then `path`, then the default.
    pub fn load_with_file(path: &Path) -> Result<Self> {
        Ok(Self::builder().env().file(path).load()?)
    }

    /// The data directory, with an empty value meaning the current directory.
    pub fn data_dir(&self) -> PathBuf {
        if self.data_dir.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            self.data_dir.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.data_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_empty_data_dir_means_current_dir() {
        let config = StoreConfig::new("");
        assert_eq!(config.data_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_explicit_data_dir() {
        let config = StoreConfig::new("/tmp/reviews");
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/reviews"));
    }

    // The only test in this crate that touches the process environment.
    #[test]
    fn test_env_overrides_file_and_default() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("echo-chamber.toml");
        fs::write(&file, "data_dir = \"/from/file\"\n").unwrap();
        let missing = dir.path().join("absent.toml");

        std::env::remove_var(DATA_DIR_ENV);
        assert_eq!(StoreConfig::load().unwrap().data_dir(), PathBuf::from("."));
        assert_eq!(
            StoreConfig::load_with_file(&missing).unwrap().data_dir(),
            PathBuf::from(".")
        );
        assert_eq!(
            StoreConfig::load_with_file(&file).unwrap().data_dir(),
            PathBuf::from("/from/file")
        );

        std::env::set_var(DATA_DIR_ENV, "/from/env");
        let from_env = StoreConfig::load();
        let layered = StoreConfig::load_with_file(&file);

        let store_dir = dir.path().join("store");
        std::env::set_var(DATA_DIR_ENV, &store_dir);
        let store = RecordStore::open_default();
        std::env::remove_var(DATA_DIR_ENV);

        assert_eq!(from_env.unwrap().data_dir(), PathBuf::from("/from/env"));
        assert_eq!(layered.unwrap().data_dir(), PathBuf::from("/from/env"));

        let store = store.unwrap();
        assert_eq!(store.data_dir(), store_dir.as_path());
        store.add_friend("Alice").unwrap();
        assert!(store_dir.join("friends.json").exists());
    }
}
