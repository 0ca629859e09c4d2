//! # Tags
//!
//! A [`Tag`] is one literal filter term typed by the reader. The [`TagStore`]
//! holds the active tags in the order they were entered and is the single
//! source of truth for the filter criteria.
//!
//! ## Rules
//!
//! - Tags are trimmed; a tag that is empty after trimming is never stored
//! - Duplicates are rejected using case-sensitive equality (`Rust` and `rust`
//!   are two tags, even though they match the same text)
//! - Invalid mutations are silent no-ops, never errors
//!
//! The store does not recompute anything on its own. Whoever mutates it
//! (usually [`crate::shell::FilterShell`]) runs the filter afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-empty, trimmed filter term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Builds a tag from raw input, returning `None` when nothing is left after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Tag(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered set of unique tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagStore {
    tags: Vec<Tag>,
}

impl TagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tag. Returns `false` (and changes nothing) if the trimmed
    /// text is empty or already present.
    pub fn add(&mut self, raw: &str) -> bool {
        let Some(tag) = Tag::new(raw) else {
            return false;
        };
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Splits raw input on `separators` and adds every piece.
    ///
    /// Returns the number of tags actually added.
    pub fn add_from_input(&mut self, raw: &str, separators: &[String]) -> usize {
        split_input(raw, separators)
            .into_iter()
            .filter(|piece| self.add(piece))
            .count()
    }

    /// Removes the tag at `index`. Out of range indexes leave the store untouched.
    pub fn remove_at(&mut self, index: usize) -> Option<Tag> {
        if index < self.tags.len() {
            Some(self.tags.remove(index))
        } else {
            None
        }
    }

    /// Drops every tag (panel reset).
    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn list(&self) -> &[Tag] {
        &self.tags
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    pub fn contains(&self, raw: &str) -> bool {
        let needle = raw.trim();
        self.tags.iter().any(|t| t.as_str() == needle)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Splits raw tag input on every separator. Empty separators are ignored.
pub fn split_input<'a>(raw: &'a str, separators: &[String]) -> Vec<&'a str> {
    let mut pieces = vec![raw];
    for sep in separators.iter().filter(|s| !s.is_empty()) {
        pieces = pieces
            .into_iter()
            .flat_map(|piece| piece.split(sep.as_str()))
            .collect();
    }
    pieces
}
