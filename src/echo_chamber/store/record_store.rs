use super::backend::StorageBackend;
use super::fs_backend::FsBackend;
use super::FileRecordStore;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::model::{Collection, Friend, Review};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const EMPTY_CONTAINER: &[u8] = b"[]";

/// One entry of the reviews container.
///
/// Entries that do not fit [`Review`] (missing fields, wrong types) are kept
/// as raw JSON: they count towards the next id, survive every rewrite, and
/// are left out of query results.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ReviewRecord {
    Review(Review),
    Other(serde_json::Value),
}

/// Reviews and friends over a [`StorageBackend`].
///
/// Holds no cached state: every operation reads the whole collection it
/// touches and writes the whole collection back. Any number of handles may
/// point at the same backing directory.
pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl RecordStore<FsBackend> {
    /// Open (creating if needed) a store in `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<FileRecordStore> {
        let store = Self::with_backend(FsBackend::new(dir))?;
        info!("opened record store at {}", store.data_dir().display());
        Ok(store)
    }

    pub fn from_config(config: &StoreConfig) -> Result<FileRecordStore> {
        Self::open(config.data_dir())
    }

    /// Open the store in the directory named by `ECHO_CHAMBER_DATA`, or the
    /// current directory when unset.
    pub fn open_default() -> Result<FileRecordStore> {
        Self::from_config(&StoreConfig::load()?)
    }

    pub fn data_dir(&self) -> &Path {
        self.backend.root()
    }
}

impl<B: StorageBackend> RecordStore<B> {
    /// Prepare the backend and create every missing container as an empty list.
    pub fn with_backend(backend: B) -> Result<Self> {
        backend.prepare()?;
        for collection in Collection::ALL {
            if !backend.collection_exists(collection) {
                backend.write_collection(collection, EMPTY_CONTAINER)?;
            }
        }
        Ok(Self { backend })
    }

    /// Append a review and make sure its friend is known.
    ///
    /// Two steps, in order: the review is persisted, then the friend is added
    /// if missing. A failure in the second step leaves the review in place.
    pub fn add_review(&self, friend: &str, topic: &str, review_text: &str) -> Result<Review> {
        let mut records: Vec<ReviewRecord> = self.load(Collection::Reviews)?;
        let review = Review::new(records.len() as u64 + 1, friend, topic, review_text);
        records.push(ReviewRecord::Review(review.clone()));
        self.save(Collection::Reviews, &records)?;

        self.ensure_friend(friend)?;

        Ok(review)
    }

    pub fn get_all_reviews(&self) -> Result<Vec<Review>> {
        let records: Vec<ReviewRecord> = self.load(Collection::Reviews)?;
        let total = records.len();
        let reviews: Vec<Review> = records
            .into_iter()
            .filter_map(|record| match record {
                ReviewRecord::Review(review) => Some(review),
                ReviewRecord::Other(_) => None,
            })
            .collect();
        if reviews.len() < total {
            warn!("skipped {} unreadable review record(s)", total - reviews.len());
        }
        Ok(reviews)
    }

    /// Reviews whose friend matches exactly (case-sensitive).
    pub fn get_reviews_by_friend(&self, friend: &str) -> Result<Vec<Review>> {
        let reviews = self.get_all_reviews()?;
        Ok(reviews.into_iter().filter(|r| r.friend == friend).collect())
    }

    /// Reviews whose topic matches ignoring case.
    pub fn get_reviews_by_topic(&self, topic: &str) -> Result<Vec<Review>> {
        let reviews = self.get_all_reviews()?;
        Ok(reviews.into_iter().filter(|r| r.has_topic(topic)).collect())
    }

    /// Append `name` unless already present. Returns the resulting list.
    pub fn add_friend(&self, name: &str) -> Result<Vec<Friend>> {
        let mut friends: Vec<Friend> = self.load(Collection::Friends)?;

        if !friends.iter().any(|f| f == name) {
            friends.push(name.to_string());
            self.save(Collection::Friends, &friends)?;
        }

        Ok(friends)
    }

    /// Remove `name` if present. Returns the resulting list.
    pub fn remove_friend(&self, name: &str) -> Result<Vec<Friend>> {
        let mut friends: Vec<Friend> = self.load(Collection::Friends)?;

        if let Some(pos) = friends.iter().position(|f| f == name) {
            friends.remove(pos);
            self.save(Collection::Friends, &friends)?;
        }

        Ok(friends)
    }

    pub fn get_all_friends(&self) -> Result<Vec<Friend>> {
        self.load(Collection::Friends)
    }

    /// Reset both collections to empty.
    pub fn clear_all_data(&self) -> Result<()> {
        for collection in Collection::ALL {
            self.backend.write_collection(collection, EMPTY_CONTAINER)?;
        }
        Ok(())
    }

    /// Auto-add step of `add_review`.
    fn ensure_friend(&self, name: &str) -> Result<()> {
        let known = self.get_all_friends()?;
        if !known.iter().any(|f| f == name) {
            self.add_friend(name)?;
        }
        Ok(())
    }

    /// Missing and unparsable containers both read as empty.
    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        let Some(bytes) = self.backend.read_collection(collection)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_slice(&bytes) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!("{} container is unreadable, treating it as empty: {}", collection, e);
                Ok(Vec::new())
            }
        }
    }

    fn save<T: Serialize>(&self, collection: Collection, items: &[T]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(items)?;
        self.backend.write_collection(collection, &bytes)
    }
}
