//! # Tagsift Architecture
//!
//! Tagsift filters a list of text items (comments, notes, log lines) down to
//! the ones containing **all** of a set of reader-entered tags, and highlights
//! the matches in place. It is a library first; the `tagsift` binary is one
//! client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (shell.rs)                                           │
//! │  - Owns the TagStore, pending input, panel state            │
//! │  - Re-runs the filter after every effective mutation        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (tags.rs, filter.rs, markup.rs)                       │
//! │  - Pure: tags + items in, results out                       │
//! │  - Never errors; invalid input is a silent no-op            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Boundaries (source.rs, surface.rs)                         │
//! │  - ItemSource: where items come from                        │
//! │  - RenderSurface: where results go                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Matching Rules
//!
//! - Tags are literal: regex metacharacters carry no meaning
//! - Matching ignores case; highlighting keeps the text's own casing
//! - An item is shown only if it contains every tag
//!
//! ## Quick Example
//!
//! ```
//! use tagsift::filter::FilterEngine;
//! use tagsift::markup::HtmlMarker;
//! use tagsift::model::ContentItem;
//! use tagsift::tags::TagStore;
//!
//! let mut tags = TagStore::new();
//! tags.add("cache");
//!
//! let items = vec![
//!     ContentItem::new(1, "Building a cache eviction policy"),
//!     ContentItem::new(2, "Notes on cats"),
//! ];
//!
//! let engine = FilterEngine::new(HtmlMarker::default());
//! let results = engine.apply(tags.list(), &items);
//!
//! assert!(results[0].visible);
//! assert_eq!(
//!     results[0].rendered,
//!     r#"Building a <span class="highlighted-tag">cache</span> eviction policy"#
//! );
//! assert!(!results[1].visible);
//! ```
//!
//! ## Module Overview
//!
//! - [`tags`]: `Tag` and the ordered, deduplicated `TagStore`
//! - [`filter`]: the filter engine (matching and highlighting)
//! - [`markup`]: escaping and match wrapping per output surface
//! - [`model`]: items, results, summaries
//! - [`source`]: item sources (memory, file, stdin)
//! - [`surface`]: render surfaces that apply results
//! - [`shell`]: the stateful consumer tying it all together
//! - [`config`]: configuration management
//! - [`error`]: error types for the non-core layers

pub mod config;
pub mod error;
pub mod filter;
pub mod markup;
pub mod model;
pub mod shell;
pub mod source;
pub mod surface;
pub mod tags;
