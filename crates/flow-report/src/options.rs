/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Render configuration.

use std::path::{Path, PathBuf};

/// Options controlling how a report is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Directory that displayed file paths are made relative to.
    pub root: Option<PathBuf>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// The form of `path` shown to the reader.
    ///
    /// Paths under [`RenderOptions::root`] are shown relative to it; anything
    /// else is shown as given.
    pub fn display_path(&self, path: &str) -> String {
        let Some(root) = &self.root else {
            return path.to_string();
        };
        match Path::new(path).strip_prefix(root) {
            Ok(relative) if !relative.as_os_str().is_empty() => {
                relative.to_string_lossy().into_owned()
            }
            _ => path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_path_without_root() {
        let options = RenderOptions::new();
        assert_eq!(options.display_path("/work/src/a.js"), "/work/src/a.js");
    }

    #[test]
    fn test_display_path_under_root() {
        let options = RenderOptions::new().with_root("/work");
        assert_eq!(options.display_path("/work/src/a.js"), "src/a.js");

        let trailing = RenderOptions::new().with_root("/work/");
        assert_eq!(trailing.display_path("/work/src/a.js"), "src/a.js");
    }

    #[test]
    fn test_display_path_outside_root() {
        let options = RenderOptions::new().with_root("/work");
        assert_eq!(options.display_path("/other/a.js"), "/other/a.js");
        assert_eq!(options.display_path("/workspace/a.js"), "/workspace/a.js");
    }

    #[test]
    fn test_display_path_equal_to_root() {
        let options = RenderOptions::new().with_root("/work");
        assert_eq!(options.display_path("/work"), "/work");
    }
}
