//! # Filter Shell
//!
//! The shell is the consumer the rest of the library is built for: it owns
//! the [`TagStore`], the pending tag input and the panel state, and after
//! every mutation that actually changes the tags it re-runs the
//! [`FilterEngine`] over the current items and pushes the results to the
//! [`RenderSurface`].
//!
//! ## Flow
//!
//! ```text
//! key / click ──▶ FilterShell ──▶ TagStore (mutate)
//!                      │
//!                      ├──▶ ItemSource::items()
//!                      ├──▶ FilterEngine::apply(tags, items)
//!                      └──▶ RenderSurface::apply(result) for each item
//! ```
//!
//! Everything runs synchronously; a call returns once the surface is up to date.
//! No-op mutations (blank or duplicate tag, out-of-range removal) skip the
//! recompute entirely.

use crate::error::Result;
use crate::filter::FilterEngine;
use crate::markup::Marker;
use crate::model::FilterSummary;
use crate::source::ItemSource;
use crate::surface::{apply_results, RenderSurface};
use crate::tags::{Tag, TagStore};

/// Slide-in panel visibility. Exactly one state at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    Open,
    #[default]
    Closed,
}

/// Keys the tag input reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Backspace,
    Char(char),
}

pub struct FilterShell<S: ItemSource, R: RenderSurface, M: Marker> {
    store: TagStore,
    input: String,
    panel: PanelState,
    separators: Vec<String>,
    engine: FilterEngine<M>,
    source: S,
    surface: R,
    summary: FilterSummary,
}

impl<S: ItemSource, R: RenderSurface, M: Marker> FilterShell<S, R, M> {
    pub fn new(source: S, surface: R, marker: M) -> Self {
        Self {
            store: TagStore::new(),
            input: String::new(),
            panel: PanelState::Closed,
            separators: vec![",".to_string(), "\n".to_string()],
            engine: FilterEngine::new(marker),
            source,
            surface,
            summary: FilterSummary::default(),
        }
    }

    /// Replaces the strings that commit the pending input (default `,` and newline).
    pub fn with_separators(mut self, separators: Vec<String>) -> Self {
        self.separators = separators;
        self
    }

    /// Initial pass: shows every item with no highlighting.
    pub fn start(&mut self) -> Result<FilterSummary> {
        self.refresh()
    }

    /// Re-runs the filter over the source's current items.
    pub fn refresh(&mut self) -> Result<FilterSummary> {
        let items = self.source.items()?;
        let results = self.engine.apply(self.store.list(), &items);
        apply_results(&mut self.surface, &results);
        self.summary = FilterSummary::from_results(&results);
        tracing::debug!(
            tags = self.store.len(),
            total = self.summary.total,
            visible = self.summary.visible,
            "filter applied"
        );
        Ok(self.summary)
    }

    /// Adds one tag and refreshes. Returns `false` if the tag was blank or a duplicate.
    pub fn add_tag(&mut self, raw: &str) -> Result<bool> {
        if !self.store.add(raw) {
            return Ok(false);
        }
        self.refresh()?;
        Ok(true)
    }

    /// Removes the tag at `index` and refreshes. Out of range is a no-op.
    pub fn remove_tag(&mut self, index: usize) -> Result<Option<Tag>> {
        let removed = self.store.remove_at(index);
        if removed.is_some() {
            self.refresh()?;
        }
        Ok(removed)
    }

    /// Clears all tags. Refreshes only if there was something to clear.
    pub fn reset(&mut self) -> Result<()> {
        if self.store.is_empty() {
            return Ok(());
        }
        self.store.clear();
        self.refresh()?;
        Ok(())
    }

    /// Commits the pending input as a tag.
    ///
    /// The input is cleared only when a tag was added; a blank or duplicate
    /// entry stays in the buffer.
    pub fn commit_input(&mut self) -> Result<bool> {
        let input = std::mem::take(&mut self.input);
        let added = self.add_tag(&input)?;
        if !added {
            self.input = input;
        }
        Ok(added)
    }

    /// Routes a key press from the tag input.
    pub fn handle_key(&mut self, key: Key) -> Result<()> {
        match key {
            Key::Enter => {
                self.commit_input()?;
            }
            Key::Escape => self.escape(),
            Key::Backspace => {
                self.input.pop();
            }
            Key::Char(c) if self.is_separator(c) => {
                self.commit_input()?;
            }
            Key::Char(c) => self.input.push(c),
        }
        Ok(())
    }

    fn is_separator(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        let as_str: &str = c.encode_utf8(&mut buf);
        self.separators.iter().any(|s| s == as_str)
    }

    pub fn open_panel(&mut self) {
        self.panel = PanelState::Open;
    }

    pub fn close_panel(&mut self) {
        self.panel = PanelState::Closed;
    }

    pub fn toggle_panel(&mut self) {
        self.panel = match self.panel {
            PanelState::Open => PanelState::Closed,
            PanelState::Closed => PanelState::Open,
        };
    }

    /// Escape closes the panel if it is open and does nothing otherwise.
    pub fn escape(&mut self) {
        if self.panel == PanelState::Open {
            self.close_panel();
        }
    }

    /// Form submission: reports the active tags without changing anything.
    pub fn submit(&self) -> Vec<Tag> {
        let tags = self.store.list().to_vec();
        tracing::info!(
            tags = ?tags.iter().map(Tag::as_str).collect::<Vec<_>>(),
            "submitted tags"
        );
        tags
    }

    pub fn tags(&self) -> &[Tag] {
        self.store.list()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn panel(&self) -> PanelState {
        self.panel
    }

    pub fn is_open(&self) -> bool {
        self.panel == PanelState::Open
    }

    /// Counts from the last refresh.
    pub fn summary(&self) -> FilterSummary {
        self.summary
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
