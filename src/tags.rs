//! Tags
//!
//! Sorted, deduplicated string labels attached to line items and used by tag rules.

use std::{cmp::Ordering, string::ToString};

use serde::Deserialize;
use smallvec::SmallVec;

/// A sorted set of string tags backed by `SmallVec<[String; 5]>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct TagSet {
    tags: SmallVec<[String; 5]>,
}

impl TagSet {
    /// Create a new tag set, sorting and removing duplicates.
    #[must_use]
    pub fn new(tags: SmallVec<[String; 5]>) -> Self {
        let mut set = Self { tags };

        set.tags.sort();
        set.tags.dedup();

        set
    }

    /// Create a tag set from string slices.
    pub fn from_strs(tags: &[&str]) -> Self {
        Self::new(tags.iter().map(ToString::to_string).collect())
    }

    /// Create an empty tag set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tags: SmallVec::new(),
        }
    }

    /// Check whether the set holds at least one tag of `other`.
    pub fn intersects(&self, other: &Self) -> bool {
        // Both sides are sorted, so a single merge pass is enough.
        let mut left = self.tags.iter();
        let mut right = other.tags.iter();
        let mut left_tag = left.next();
        let mut right_tag = right.next();

        while let (Some(l), Some(r)) = (left_tag, right_tag) {
            match l.cmp(r) {
                Ordering::Equal => return true,
                Ordering::Less => left_tag = left.next(),
                Ordering::Greater => right_tag = right.next(),
            }
        }

        false
    }

    /// Check whether every tag of `other` is present in this set.
    pub fn contains_all(&self, other: &Self) -> bool {
        other.tags.iter().all(|tag| self.contains(tag))
    }

    /// Check whether the set contains a specific tag.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags
            .binary_search_by(|existing| existing.as_str().cmp(tag))
            .is_ok()
    }

    /// Add a tag, keeping the set sorted.
    pub fn add(&mut self, tag: &str) {
        if let Err(pos) = self.tags.binary_search_by(|existing| existing.as_str().cmp(tag)) {
            self.tags.insert(pos, tag.to_string());
        }
    }

    /// Iterate over the tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Number of tags in the set.
    pub fn len(&self) -> usize {
        self.tags.len()
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        Self::new(tags.into_iter().collect())
    }
}
