//! # Domain Model
//!
//! Two collections live in a store: [`Review`]s and [`Friend`]s.
//!
//! ## Reviews
//!
//! A review is a short note someone gave about a topic. It is created once by
//! [`crate::store::RecordStore::add_review`] and never updated afterwards.
//!
//! - `id` is `count_of_existing_reviews + 1` at creation time. It is only
//!   unique as long as reviews are never removed.
//! - `timestamp` is local wall-clock time without an offset, written as
//!   ISO-8601 with exactly six fraction digits (`2024-05-01T10:15:30.123000`).
//!   It is kept as text: timestamps written by other tools, with or without
//!   an offset, are read back as-is.
//!
//! The store does not validate text fields; rejecting blank input is up to
//! the caller.
//!
//! ## Friends
//!
//! A friend is just a name. The friends collection keeps insertion order and
//! never holds the same name twice (exact, case-sensitive match).

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Friend = String;

/// `strftime` pattern for review timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    pub friend: String,
    pub topic: String,
    pub review: String,
    pub timestamp: String,
}

impl Review {
    /// Build a review stamped with the current local time.
    pub fn new(id: u64, friend: &str, topic: &str, review: &str) -> Self {
        Self {
            id,
            friend: friend.to_string(),
            topic: topic.to_string(),
            review: review.to_string(),
            timestamp: format_timestamp(Local::now().naive_local()),
        }
    }

    /// Topic comparison used by topic lookups: case-insensitive, full Unicode lowercase.
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topic.to_lowercase() == topic.to_lowercase()
    }
}

/// The persisted containers a store owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Reviews,
    Friends,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Reviews, Collection::Friends];

    pub fn file_name(&self) -> &'static str {
        match self {
            Collection::Reviews => "reviews.json",
            Collection::Friends => "friends.json",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Reviews => write!(f, "reviews"),
            Collection::Friends => write!(f, "friends"),
        }
    }
}
