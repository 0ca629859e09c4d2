//! # Markup
//!
//! The rendering surface decides what "plain text" and "a highlighted match"
//! look like. A [`Marker`] captures exactly those two operations so the
//! filter engine can stay ignorant of HTML, terminals, or anything else.
//!
//! - [`HtmlMarker`]: escapes text for HTML and wraps matches in a classed `<span>`
//! - [`AnsiMarker`]: leaves text alone and styles matches for a terminal
//! - [`PlainMarker`]: brackets matches with fixed strings (logs, tests, pipes)

use crate::config::DEFAULT_HIGHLIGHT_CLASS;
use console::Style;
use once_cell::sync::Lazy;

/// Every entity [`escape_html`] can produce.
pub const HTML_ENTITY_PATTERN: &str = "&(?:amp|lt|gt|quot|#39);";

/// Default terminal style for highlighted matches.
pub static HIGHLIGHT_STYLE: Lazy<Style> = Lazy::new(|| Style::new().black().on_yellow().bold());

/// Escapes plain text and wraps matched substrings for one rendering surface.
pub trait Marker {
    /// Turns plain text into markup that displays as that same text.
    fn escape(&self, text: &str) -> String;

    /// Wraps a matched substring. The input is already escaped.
    fn wrap(&self, matched: &str) -> String;

    /// Regex for the sequences `escape` emits that must never be split by a
    /// highlight, e.g. HTML entities. `None` when escaping is the identity.
    fn verbatim_pattern(&self) -> Option<&str> {
        None
    }
}

impl<M: Marker + ?Sized> Marker for &M {
    fn escape(&self, text: &str) -> String {
        (**self).escape(text)
    }

    fn wrap(&self, matched: &str) -> String {
        (**self).wrap(matched)
    }

    fn verbatim_pattern(&self) -> Option<&str> {
        (**self).verbatim_pattern()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlMarker {
    class: String,
}

impl HtmlMarker {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }
}

impl Default for HtmlMarker {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHLIGHT_CLASS)
    }
}

impl Marker for HtmlMarker {
    fn escape(&self, text: &str) -> String {
        escape_html(text)
    }

    fn wrap(&self, matched: &str) -> String {
        format!(
            "<span class=\"{}\">{}</span>",
            escape_html(&self.class),
            matched
        )
    }

    fn verbatim_pattern(&self) -> Option<&str> {
        Some(HTML_ENTITY_PATTERN)
    }
}

/// Escapes the five characters that are significant in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[derive(Debug, Clone)]
pub struct AnsiMarker {
    style: Style,
}

impl AnsiMarker {
    pub fn new(style: Style) -> Self {
        Self { style }
    }
}

impl Default for AnsiMarker {
    fn default() -> Self {
        Self::new(HIGHLIGHT_STYLE.clone())
    }
}

impl Marker for AnsiMarker {
    fn escape(&self, text: &str) -> String {
        text.to_string()
    }

    fn wrap(&self, matched: &str) -> String {
        self.style.apply_to(matched).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainMarker {
    open: String,
    close: String,
}

impl PlainMarker {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl Default for PlainMarker {
    fn default() -> Self {
        Self::new("[", "]")
    }
}

impl Marker for PlainMarker {
    fn escape(&self, text: &str) -> String {
        text.to_string()
    }

    fn wrap(&self, matched: &str) -> String {
        format!("{}{}{}", self.open, matched, self.close)
    }
}
