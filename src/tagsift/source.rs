//! # Item Sources
//!
//! The filter never discovers items by itself. An [`ItemSource`] enumerates
//! the current content items for every pass, so the same engine can sit on a
//! file, a paginated feed, or a document scraped elsewhere.
//!
//! - [`MemorySource`]: a fixed list, mostly for tests and embedding
//! - [`FileSource`]: a JSON array of `{id, text}` objects, or plain text with
//!   one item per non-blank line

use crate::error::{Result, SiftError};
use crate::model::ContentItem;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

pub trait ItemSource {
    /// Returns the items to filter, in display order.
    fn items(&self) -> Result<Vec<ContentItem>>;
}

#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    items: Vec<ContentItem>,
}

impl MemorySource {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    pub fn push(&mut self, item: ContentItem) {
        self.items.push(item);
    }
}

impl ItemSource for MemorySource {
    fn items(&self) -> Result<Vec<ContentItem>> {
        Ok(self.items.clone())
    }
}

/// Reads items from a file every time they are requested.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemSource for FileSource {
    fn items(&self) -> Result<Vec<ContentItem>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            SiftError::Source(format!("Cannot read {}: {}", self.path.display(), e))
        })?;
        parse_items(&content)
    }
}

/// Reads all of stdin once and serves the parsed items.
pub fn read_stdin_items() -> Result<MemorySource> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    Ok(MemorySource::new(parse_items(&content)?))
}

/// Parses item input.
///
/// Input whose first non-whitespace character is `[` is a JSON array of items;
/// anything else is one item per non-blank line, numbered from 1.
pub fn parse_items(content: &str) -> Result<Vec<ContentItem>> {
    if content.trim_start().starts_with('[') {
        let items: Vec<ContentItem> = serde_json::from_str(content)?;
        return Ok(items);
    }

    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| ContentItem::new(i as u64 + 1, line.trim_end()))
        .collect())
}
