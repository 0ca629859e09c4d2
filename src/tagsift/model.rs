//! # Core Data Types
//!
//! - [`ContentItem`]: one piece of text the reader may want to filter (a comment)
//! - [`FilterResult`]: the engine's verdict for one item
//! - [`FilterSummary`]: counts over a batch of results
//!
//! Items are supplied by the caller on every pass; nothing here is cached.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a content item, chosen by whoever supplies the items.
///
/// Deserializes from either a JSON string or a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawItemId", into = "String")]
pub struct ItemId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawItemId {
    Number(u64),
    Text(String),
}

impl From<RawItemId> for ItemId {
    fn from(raw: RawItemId) -> Self {
        match raw {
            RawItemId::Number(n) => ItemId(n.to_string()),
            RawItemId::Text(s) => ItemId(s),
        }
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId(s)
    }
}

macro_rules! item_id_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ItemId {
                fn from(n: $t) -> Self {
                    ItemId(n.to_string())
                }
            }
        )*
    };
}

item_id_from_int!(i32, i64, u32, u64, usize);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    pub text: String,
}

impl ContentItem {
    pub fn new(id: impl Into<ItemId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Visibility and rendered markup for one item, in the marker's output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterResult {
    pub id: ItemId,
    pub visible: bool,
    pub rendered: String,
}

impl FilterResult {
    pub fn shown(id: ItemId, rendered: String) -> Self {
        Self {
            id,
            visible: true,
            rendered,
        }
    }

    pub fn hidden(id: ItemId, rendered: String) -> Self {
        Self {
            id,
            visible: false,
            rendered,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterSummary {
    pub total: usize,
    pub visible: usize,
    pub hidden: usize,
}

impl FilterSummary {
    pub fn from_results(results: &[FilterResult]) -> Self {
        let visible = results.iter().filter(|r| r.visible).count();
        Self {
            total: results.len(),
            visible,
            hidden: results.len() - visible,
        }
    }
}
