/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Rendering of bundles, file groups and whole reports.
//!
//! The rendered markup relies on the template for its styling and for the
//! `collapse(node, event)` handler attached to every collapsible element.

use tracing::debug;

use crate::bundle::{Bundle, extract};
use crate::error::Result;
use crate::group::{Group, group_by_file};
use crate::message::render_message;
use crate::options::RenderOptions;
use crate::report::Report;
use crate::template::Template;
use crate::text::escape_html;

/// Content shown when the checker found nothing.
pub const NO_ERRORS: &str = "<h1>No errors</h1>";

/// Render a bundle with its extras and children nested inside it.
///
/// Messages anywhere in the bundle that point into a file other than the
/// bundle's primary path are labelled with their source.
pub fn render_bundle(bundle: &Bundle, options: &RenderOptions) -> String {
    render_nested(bundle, bundle.primary_path(), options)
}

fn render_nested(bundle: &Bundle, main_path: &str, options: &RenderOptions) -> String {
    let mut html = String::from("<span onclick=\"collapse(this, event)\" class=\"error-group\">\n");

    for message in &bundle.messages {
        html.push_str(&render_message(message, message.path != main_path, options));
        html.push('\n');
    }
    for extra in &bundle.extras {
        html.push_str("<span class=\"extra\">\n");
        html.push_str(&render_nested(extra, main_path, options));
        html.push_str("</span>\n");
    }
    for child in &bundle.children {
        html.push_str("<span class=\"child\">\n");
        html.push_str(&render_nested(child, main_path, options));
        html.push_str("</span>\n");
    }

    html.push_str("</span>\n");
    html
}

/// Render a collapsible section for one source file.
pub fn render_group(group: &Group, options: &RenderOptions) -> String {
    let errors = group
        .bundles
        .iter()
        .map(|bundle| format!("<li class=\"error\">{}</li>", render_bundle(bundle, options)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<div class=\"source-group\">\n\
         <a class=\"source\" onclick=\"collapse(this.parentNode, event)\">\n\
         {source}\n\
         <span class=\"count\">({count} errors)</span>\n\
         </a>\n\
         <ul class=\"file-errors\">\n\
         {errors}\n\
         </ul>\n\
         </div>",
        source = escape_html(&options.display_path(&group.source)),
        count = group.bundles.len(),
    )
}

/// Render the body content for a report.
///
/// A passing report renders [`NO_ERRORS`] whatever its `errors` hold.
pub fn render_report(report: &Report, options: &RenderOptions) -> Result<String> {
    if report.passed {
        debug!("report passed, rendering no-errors notice");
        return Ok(NO_ERRORS.to_string());
    }

    let bundles = report
        .errors
        .iter()
        .map(extract)
        .collect::<Result<Vec<_>>>()?;
    debug!(bundles = bundles.len(), "extracted error bundles");

    let groups = group_by_file(bundles);
    debug!(groups = groups.len(), "grouped bundles by source file");

    Ok(groups
        .iter()
        .map(|group| render_group(group, options))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Render a report into a complete HTML document.
pub fn render_document(
    report: &Report,
    template: &Template,
    options: &RenderOptions,
) -> Result<String> {
    let content = render_report(report, options)?;
    Ok(template.render(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Message, MessageKind};
    use pretty_assertions::assert_eq;

    fn message(path: &str, descr: &str) -> Message {
        Message {
            kind: MessageKind::Blame,
            descr: descr.to_string(),
            path: path.to_string(),
            line: Some(1),
            endline: Some(1),
            context: Some("x".to_string()),
            loc: None,
        }
    }

    fn bundle(messages: Vec<Message>) -> Bundle {
        Bundle {
            messages,
            extras: vec![],
            children: vec![],
        }
    }

    #[test]
    fn test_render_bundle_order() {
        let mut top = bundle(vec![message("a.js", "own")]);
        top.extras = vec![bundle(vec![message("a.js", "extra")])];
        top.children = vec![bundle(vec![message("a.js", "child")])];

        let html = render_bundle(&top, &RenderOptions::new());
        let own = html.find("own").unwrap();
        let extra = html.find("<span class=\"extra\">").unwrap();
        let child = html.find("<span class=\"child\">").unwrap();
        assert!(own < extra && extra < child);
        assert!(html.starts_with("<span onclick=\"collapse(this, event)\" class=\"error-group\">\n"));
        assert!(html.ends_with("</span>\n"));
        assert_eq!(html.matches("class=\"error-group\"").count(), 3);
    }

    #[test]
    fn test_render_bundle_labels_other_files() {
        let top = bundle(vec![message("a.js", "here"), message("b.js", "there")]);
        let html = render_bundle(&top, &RenderOptions::new());
        assert_eq!(html.matches("alternative-source").count(), 1);
        assert!(html.contains("<span class=\"alternative-source\">b.js</span>"));
        assert!(html.contains("title=\"b.js\""));
    }

    #[test]
    fn test_render_bundle_labels_cross_file_children() {
        let mut top = bundle(vec![message("a.js", "parent")]);
        top.children = vec![
            bundle(vec![message("b.js", "elsewhere")]),
            bundle(vec![message("a.js", "same file")]),
        ];
        top.extras = vec![bundle(vec![message("c.js", "evidence")])];

        let html = render_bundle(&top, &RenderOptions::new());
        assert_eq!(html.matches("alternative-source").count(), 2);
        assert!(html.contains("title=\"b.js\""));
        assert!(html.contains("title=\"c.js\""));
        assert!(!html.contains("title=\"a.js\""));
    }

    #[test]
    fn test_render_group() {
        let group = Group {
            source: "/work/src/a.js".to_string(),
            bundles: vec![
                bundle(vec![message("/work/src/a.js", "one")]),
                bundle(vec![message("/work/src/a.js", "two")]),
            ],
        };
        let html = render_group(&group, &RenderOptions::new().with_root("/work"));
        assert!(html.starts_with("<div class=\"source-group\">"));
        assert!(html.contains("\nsrc/a.js\n<span class=\"count\">(2 errors)</span>"));
        assert_eq!(html.matches("<li class=\"error\">").count(), 2);
        assert!(html.contains("<ul class=\"file-errors\">"));
    }

    #[test]
    fn test_render_report_passed_ignores_errors() {
        let report = Report {
            passed: true,
            errors: vec![crate::report::ErrorEntry {
                message: vec![message("a.js", "ignored")],
                operation: None,
                extra: vec![],
                children: vec![],
            }],
        };
        assert_eq!(render_report(&report, &RenderOptions::new()).unwrap(), NO_ERRORS);
    }

    #[test]
    fn test_render_report_failed_without_errors_is_empty() {
        let report = Report {
            passed: false,
            errors: vec![],
        };
        assert_eq!(render_report(&report, &RenderOptions::new()).unwrap(), "");
    }
}
