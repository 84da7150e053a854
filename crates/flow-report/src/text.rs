/*
 * text.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Tab-aware text measurement and HTML escaping.
//!
//! [`display_length`] and [`to_html`] must agree on how wide a tab is, or the
//! caret underline drifts away from the text it points at.

/// Number of columns a tab occupies on screen.
pub const TAB_SIZE: usize = 2;

const NBSP: &str = "&nbsp;";

/// On-screen width of `s`, counting each tab as [`TAB_SIZE`] columns.
pub fn display_length(s: &str) -> usize {
    let (tabs, others) = s
        .chars()
        .fold((0, 0), |(tabs, others), c| match c {
            '\t' => (tabs + 1, others),
            _ => (tabs, others + 1),
        });
    others + tabs * TAB_SIZE
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape `s` and make its whitespace survive HTML rendering.
///
/// Each tab becomes [`TAB_SIZE`] non-breaking spaces and each space one.
pub fn to_html(s: &str) -> String {
    escape_html(s)
        .replace('\t', &NBSP.repeat(TAB_SIZE))
        .replace(' ', NBSP)
}
