/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Render type-checker JSON error reports as a self-contained HTML page.
//!
//! The pipeline runs in a fixed order:
//!
//! 1. [`Report`] decodes the checker's `--json` output.
//! 2. [`extract`] normalizes each error entry into a [`Bundle`], folding
//!    `Comment` messages into the message before them.
//! 3. [`group_by_file`] groups bundles by the file of their first message,
//!    in the order files first appear.
//! 4. [`render_report`] renders every group, bundle and message, underlining
//!    the offending source with carets aligned for tabs.
//! 5. [`Template::render`] places the result into an HTML page.
//!
//! # Example
//!
//! ```
//! use flow_report::{RenderOptions, Report, Template, render_document};
//!
//! let report = Report::from_json(r#"{"passed": true}"#)?;
//! let page = render_document(&report, &Template::builtin()?, &RenderOptions::new())?;
//! assert!(page.contains("<h1>No errors</h1>"));
//! # Ok::<(), flow_report::ReportError>(())
//! ```

pub mod bundle;
pub mod error;
pub mod group;
pub mod message;
pub mod options;
pub mod render;
pub mod report;
pub mod template;
pub mod text;

pub use bundle::{Bundle, MAX_NESTING_DEPTH, extract, fold_comments};
pub use error::{ReportError, Result};
pub use group::{Group, group_by_file};
pub use message::render_message;
pub use options::RenderOptions;
pub use render::{NO_ERRORS, render_bundle, render_document, render_group, render_report};
pub use report::{ErrorEntry, Loc, Message, MessageKind, Position, Report, Span};
pub use template::{CONTENT_MARKER, Template};
pub use text::{TAB_SIZE, display_length, escape_html, to_html};
