/*
 * message.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! HTML rendering of a single diagnostic message.
//!
//! A message renders as two lines: the source context with the offending
//! characters wrapped in `theError`, and below it a caret underline aligned
//! to those characters followed by the description.

use crate::options::RenderOptions;
use crate::report::{Message, Span};
use crate::text::{display_length, escape_html, to_html};

/// Render one message.
///
/// When `include_source` is set the message points into a different file than
/// its bundle, so the file is named above the context line and the full path
/// is attached to the line label as a tooltip.
pub fn render_message(message: &Message, include_source: bool, options: &RenderOptions) -> String {
    let (prefix, error, postfix) = split_context(message.context(), message.span());

    let spacing = " ".repeat(display_length(prefix));
    let carets = "^".repeat(display_length(error));
    let full_message = format!("{}{} {}", to_html(&spacing), carets, to_html(&message.descr));

    let context = format!(
        "{}<span class=\"theError\">{}</span>{}",
        to_html(prefix),
        to_html(error),
        to_html(postfix)
    );

    let (source_label, title) = if include_source {
        (
            format!(
                "<span class=\"alternative-source\">{}</span>\n",
                escape_html(&options.display_path(&message.path))
            ),
            format!(" title=\"{}\"", escape_html(&message.path)),
        )
    } else {
        (String::new(), String::new())
    };

    let line_class = match message.line {
        Some(line) => format!(" line-{}", line),
        None => String::new(),
    };

    format!(
        "<span class=\"message{line_class}\">\n\
         {source_label}<span class=\"context\"><span class=\"line\"{title}>{label}:</span>{context}</span>\n\
         <span class=\"message-text\"><span class=\"line\"></span>{full_message}</span>\n\
         </span>",
        label = message.line_label(),
    )
}

/// Split `context` into the text before, inside and after `span`.
///
/// Columns are clamped to the context, so a missing or out-of-range span
/// degrades to a zero-width highlight instead of failing.
fn split_context(context: &str, span: Span) -> (&str, &str, &str) {
    let len = context.chars().count();
    let start = span.start.saturating_sub(1).min(len);
    let end = span.end.clamp(start, len);

    let (prefix, rest) = context.split_at(byte_offset(context, start));
    let (error, postfix) = rest.split_at(byte_offset(rest, end - start));
    (prefix, error, postfix)
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(offset, _)| offset)
}
