//! # Filter Engine
//!
//! Decides, for every content item, whether it passes the active tags and how
//! it should be rendered.
//!
//! ## Matching
//!
//! Each tag is a *literal*: regex metacharacters are escaped, so `a.b` matches
//! only the text `a.b`. Matching ignores case. An item is visible when its
//! text contains **every** tag (conjunction); testing stops at the first tag
//! that is missing.
//!
//! ## Highlighting
//!
//! Visible items are highlighted one tag at a time, in tag order. Each pass
//! replaces every occurrence of its tag with the marker's wrap of the matched
//! text (original casing kept), and runs on the output of the previous pass.
//! Overlapping tags therefore interact:
//!
//! ```text
//! tags ["ab", "bc"], text "abc"   ->  [ab]c        ("bc" is split by the marker)
//! tags ["cats", "cat"], text "cats" -> [[cat]s]    (nested wrap)
//! ```
//!
//! Escape sequences the marker emits (HTML entities) are copied through
//! untouched, so a tag like `amp` never lands inside `&amp;`.
//!
//! Hidden items, and every item when there are no tags, render as plain
//! escaped text so a later pass starts from a clean slate.

use crate::markup::Marker;
use crate::model::{ContentItem, FilterResult};
use crate::tags::Tag;
use regex::{Captures, Regex, RegexBuilder};

/// A tag compiled into its two case-insensitive literal patterns.
#[derive(Debug, Clone)]
struct TagPattern {
    /// Runs against the raw item text.
    matcher: Regex,
    /// Runs against the escaped, partially highlighted text. Group 1 is the
    /// tag; any other match is a verbatim escape sequence to copy through.
    highlighter: Regex,
}

impl TagPattern {
    fn compile<M: Marker>(tag: &Tag, marker: &M) -> Option<Self> {
        let matcher = case_insensitive(&regex::escape(tag.as_str()))?;

        // The tag alternative comes first so a tag that itself escapes to an
        // entity (`&` -> `&amp;`) still wins at that position.
        let escaped_tag = regex::escape(&marker.escape(tag.as_str()));
        let highlighter = match marker.verbatim_pattern() {
            Some(verbatim) => case_insensitive(&format!("({})|{}", escaped_tag, verbatim))?,
            None => case_insensitive(&format!("({})", escaped_tag))?,
        };

        Some(Self {
            matcher,
            highlighter,
        })
    }
}

fn case_insensitive(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .ok()
}

/// Compiled tag set. `None` entries are tags too large to compile; they never match.
struct CompiledTags(Vec<Option<TagPattern>>);

impl CompiledTags {
    fn new<M: Marker>(tags: &[Tag], marker: &M) -> Self {
        let patterns = tags
            .iter()
            .map(|tag| {
                let pattern = TagPattern::compile(tag, marker);
                if pattern.is_none() {
                    tracing::warn!(tag = %tag, "tag could not be compiled and will never match");
                }
                pattern
            })
            .collect();
        Self(patterns)
    }

    fn all_match(&self, text: &str) -> bool {
        self.0
            .iter()
            .all(|p| p.as_ref().is_some_and(|p| p.matcher.is_match(text)))
    }

    fn highlight<M: Marker>(&self, text: &str, marker: &M) -> String {
        let mut rendered = marker.escape(text);
        for pattern in self.0.iter().flatten() {
            rendered = pattern
                .highlighter
                .replace_all(&rendered, |caps: &Captures| match caps.get(1) {
                    Some(tag) => marker.wrap(tag.as_str()),
                    None => caps[0].to_string(),
                })
                .into_owned();
        }
        rendered
    }
}

/// Applies tag sets to content items, rendering through a [`Marker`].
#[derive(Debug, Clone, Default)]
pub struct FilterEngine<M: Marker> {
    marker: M,
}

impl<M: Marker> FilterEngine<M> {
    pub fn new(marker: M) -> Self {
        Self { marker }
    }

    pub fn marker(&self) -> &M {
        &self.marker
    }

    /// Returns one result per item, in input order.
    pub fn apply(&self, tags: &[Tag], items: &[ContentItem]) -> Vec<FilterResult> {
        if tags.is_empty() {
            return items
                .iter()
                .map(|item| FilterResult::shown(item.id.clone(), self.marker.escape(&item.text)))
                .collect();
        }

        let compiled = CompiledTags::new(tags, &self.marker);
        items
            .iter()
            .map(|item| {
                if compiled.all_match(&item.text) {
                    FilterResult::shown(
                        item.id.clone(),
                        compiled.highlight(&item.text, &self.marker),
                    )
                } else {
                    FilterResult::hidden(item.id.clone(), self.marker.escape(&item.text))
                }
            })
            .collect()
    }

    /// True when `text` contains every tag. An empty tag list matches everything.
    pub fn matches(&self, tags: &[Tag], text: &str) -> bool {
        CompiledTags::new(tags, &self.marker).all_match(text)
    }

    /// Highlights every tag in `text` without deciding visibility.
    pub fn highlight(&self, tags: &[Tag], text: &str) -> String {
        CompiledTags::new(tags, &self.marker).highlight(text, &self.marker)
    }
}
