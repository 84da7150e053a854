/*
 * bundle.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Normalization of raw error entries into render-ready bundles.
//!
//! A [`Bundle`] is an [`ErrorEntry`] with its operation prepended and its
//! `Comment` messages folded into the message before them. Extras and children
//! are normalized recursively, keeping input order at every level.

use tracing::trace;

use crate::error::{ReportError, Result};
use crate::report::{ErrorEntry, Message};

/// Deepest `extra`/`children` nesting accepted by [`extract`].
///
/// Kept well below the nesting `serde_json` will decode, so a deep report read
/// with [`Report::from_json`](crate::Report::from_json) fails here.
pub const MAX_NESTING_DEPTH: usize = 32;

/// The normalized form of an [`ErrorEntry`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    /// Messages after comment folding; never empty and never a `Comment`.
    pub messages: Vec<Message>,
    pub extras: Vec<Bundle>,
    pub children: Vec<Bundle>,
}

impl Bundle {
    /// The path of the first message, used to group bundles by file.
    pub fn primary_path(&self) -> &str {
        self.messages
            .first()
            .map(|message| message.path.as_str())
            .unwrap_or_default()
    }
}

/// Normalize one error entry and everything nested under it.
pub fn extract(entry: &ErrorEntry) -> Result<Bundle> {
    extract_at_depth(entry, 0)
}

fn extract_at_depth(entry: &ErrorEntry, depth: usize) -> Result<Bundle> {
    if depth > MAX_NESTING_DEPTH {
        return Err(ReportError::NestingTooDeep {
            max_depth: MAX_NESTING_DEPTH,
        });
    }

    let raw = entry.operation.iter().chain(&entry.message).cloned();
    let messages = fold_comments(raw)?;
    if messages.is_empty() {
        return Err(ReportError::EmptyMessage);
    }

    let extras = entry
        .extra
        .iter()
        .map(|extra| extract_at_depth(extra, depth + 1))
        .collect::<Result<Vec<_>>>()?;
    let children = entry
        .children
        .iter()
        .map(|child| extract_at_depth(child, depth + 1))
        .collect::<Result<Vec<_>>>()?;

    Ok(Bundle {
        messages,
        extras,
        children,
    })
}

/// Merge every `Comment` message into the message immediately before it.
///
/// The comment's text is appended to that message's description after `". "`.
/// A comment with nothing before it is rejected with
/// [`ReportError::OrphanComment`].
pub fn fold_comments<I>(messages: I) -> Result<Vec<Message>>
where
    I: IntoIterator<Item = Message>,
{
    messages
        .into_iter()
        .try_fold(Vec::new(), |mut folded: Vec<Message>, message| {
            if !message.is_comment() {
                folded.push(message);
                return Ok(folded);
            }
            match folded.last_mut() {
                Some(last) => {
                    trace!(comment = %message.descr, "folding comment into previous message");
                    last.descr = format!("{}. {}", last.descr, message.descr);
                    Ok(folded)
                }
                None => Err(ReportError::OrphanComment {
                    descr: message.descr,
                }),
            }
        })
}
