/*
 * report.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Input data model for type-checker JSON reports.
//!
//! These types mirror the JSON the type checker emits with `--json`. Only the
//! fields the renderer needs are modelled; everything else in the document is
//! ignored during decoding.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The root of a type-checker report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// `true` when the checker found no errors.
    pub passed: bool,
    /// Top-level error entries, in the order the checker reported them.
    #[serde(default)]
    pub errors: Vec<ErrorEntry>,
}

impl Report {
    /// Decode a report from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a report from a reader, consuming it fully.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }
}

/// One raw diagnostic node, possibly carrying nested evidence and sub-errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// The entry's own messages.
    pub message: Vec<Message>,
    /// The operation that triggered the error, shown before `message`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<Message>,
    /// Supplementary evidence.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<ErrorEntry>,
    /// Sub-errors, e.g. one per failed branch of a union check.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ErrorEntry>,
}

/// Discriminator for a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// An annotation folded into the message before it.
    Comment,
    /// A message pointing at source code.
    Blame,
    /// Any other kind; rendered like `Blame`.
    #[serde(other)]
    Other,
}

/// One textual diagnostic unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Plain description text (not yet escaped).
    pub descr: String,
    /// Source file this message refers to.
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endline: Option<u32>,
    /// The source line containing the span.
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

/// A source range with 1-indexed lines and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loc {
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: usize,
}

/// The highlighted columns of a context line.
///
/// `start` is the 1-indexed first highlighted column and `end` the 1-indexed
/// last one, so the highlighted characters are `context[start - 1..end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Zero-width span at the start of the line, used when a message has no `loc`.
    pub const EMPTY: Span = Span { start: 0, end: 0 };
}

impl Message {
    pub fn is_comment(&self) -> bool {
        self.kind == MessageKind::Comment
    }

    /// The source line text, empty when the checker did not provide one.
    pub fn context(&self) -> &str {
        self.context.as_deref().unwrap_or_default()
    }

    /// Resolve the highlighted span over [`Message::context`].
    ///
    /// A span covering several lines is highlighted to the end of the context,
    /// since only its first line is available.
    pub fn span(&self) -> Span {
        match &self.loc {
            None => Span::EMPTY,
            Some(loc) if loc.start.line == loc.end.line => Span {
                start: loc.start.column,
                end: loc.end.column,
            },
            Some(loc) => Span {
                start: loc.start.column,
                end: self.context().chars().count(),
            },
        }
    }

    /// Line number label: `"12"`, or `"12...14"` for a span over several lines.
    pub fn line_label(&self) -> String {
        match (self.line, self.endline) {
            (Some(line), Some(endline)) if line != endline => format!("{}...{}", line, endline),
            (Some(line), _) => line.to_string(),
            (None, _) => String::new(),
        }
    }
}
