/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for report decoding and rendering.

use thiserror::Error;

/// Errors that can occur while turning a report into HTML.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input is not valid JSON, or does not have the shape of a report.
    #[error("Invalid report JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A `Comment` message appeared with no message before it to attach to.
    #[error("Comment has no preceding message to attach to: {descr:?}")]
    OrphanComment { descr: String },

    /// An error entry carried no messages at all.
    #[error("Error entry has no messages")]
    EmptyMessage,

    /// `extra`/`children` nesting went deeper than the renderer allows.
    #[error("Error entries nested deeper than {max_depth} levels")]
    NestingTooDeep { max_depth: usize },

    /// The template has nowhere to put the rendered content.
    #[error("Template does not contain the {marker} marker")]
    MissingContentMarker { marker: &'static str },

    /// I/O error while reading a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
