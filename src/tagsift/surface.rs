//! # Render Surfaces
//!
//! The filter engine returns data; a [`RenderSurface`] is the thin adapter
//! that turns that data into visible state (show or hide a container, swap
//! its markup). Keeping the two apart lets the engine be tested without any
//! live document.

use crate::model::{FilterResult, ItemId};
use std::collections::HashMap;

pub trait RenderSurface {
    /// Shows or hides the item's container and replaces its markup.
    fn apply(&mut self, result: &FilterResult);
}

/// Applies a batch of results in order.
pub fn apply_results<R: RenderSurface + ?Sized>(surface: &mut R, results: &[FilterResult]) {
    for result in results {
        surface.apply(result);
    }
}

/// Rendered state of one item on a [`MemorySurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub visible: bool,
    pub rendered: String,
}

/// Keeps the last applied state per item id.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    views: HashMap<ItemId, ItemView>,
    applied: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self, id: &ItemId) -> Option<&ItemView> {
        self.views.get(id)
    }

    pub fn is_visible(&self, id: &ItemId) -> bool {
        self.views.get(id).is_some_and(|v| v.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.views.values().filter(|v| v.visible).count()
    }

    /// Total number of results applied since creation.
    pub fn applied(&self) -> usize {
        self.applied
    }
}

impl RenderSurface for MemorySurface {
    fn apply(&mut self, result: &FilterResult) {
        self.applied += 1;
        self.views.insert(
            result.id.clone(),
            ItemView {
                visible: result.visible,
                rendered: result.rendered.clone(),
            },
        );
    }
}
