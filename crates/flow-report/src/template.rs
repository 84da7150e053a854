/*
 * template.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The HTML page that rendered content is placed into.
//!
//! A template is an HTML document containing a single [`CONTENT_MARKER`]. The
//! template supplies the styling for the report's class hooks and the
//! `collapse(node, event)` handler the rendered markup calls.

use include_dir::{Dir, include_dir};

use crate::error::{ReportError, Result};

/// Placeholder replaced by the rendered report.
pub const CONTENT_MARKER: &str = "%content%";

static HTML_TEMPLATES: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/resources/html-template");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// Wrap template source, which must contain [`CONTENT_MARKER`].
    pub fn new(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        if !source.contains(CONTENT_MARKER) {
            return Err(ReportError::MissingContentMarker {
                marker: CONTENT_MARKER,
            });
        }
        Ok(Self { source })
    }

    /// The template compiled into the crate.
    pub fn builtin() -> Result<Self> {
        let source = HTML_TEMPLATES
            .get_file("report.html")
            .and_then(|f| f.contents_utf8())
            .unwrap_or_default();
        Self::new(source)
    }

    /// Substitute `content` for the first marker.
    pub fn render(&self, content: &str) -> String {
        self.source.replacen(CONTENT_MARKER, content, 1)
    }
}
