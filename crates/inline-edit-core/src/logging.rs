//! Logging and debugging facilities for inline editing.
//!
//! This module provides:
//! - Target names for filtering `tracing` output by subsystem
//! - Debug visualization for element trees
//!
//! # Tracing Integration
//!
//! All crates in the workspace log through `tracing`. To see the diagnostics
//! emitted for ignored requests or unresolved handler names, install a
//! subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("inline_edit=debug")
//!     .init();
//! ```
//!
//! # Debug Visualization
//!
//! ```
//! use inline_edit_core::{DocumentTreeDebug, ElementTree, Document};
//!
//! let mut doc = ElementTree::new();
//! let row = doc.create_element("tr");
//! let cell = doc.append_element(row, "td").unwrap();
//! doc.set_content(cell, "42%").unwrap();
//!
//! let dump = DocumentTreeDebug::new().format(&doc, row).unwrap();
//! assert!(dump.contains("\"42%\""));
//! ```

use std::fmt::Write as FmtWrite;

use crate::document::{Document, ElementId};
use crate::error::DocumentResult;

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core target.
    pub const CORE: &str = "inline_edit_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "inline_edit_core::signal";
    /// Document model target.
    pub const DOCUMENT: &str = "inline_edit_core::document";
    /// Edit lifecycle controller target.
    pub const CONTROLLER: &str = "inline_edit::controller";
    /// Table scan target.
    pub const SCAN: &str = "inline_edit::scan";
    /// Field factory target.
    pub const FIELD: &str = "inline_edit::field";
    /// Validation target.
    pub const VALIDATOR: &str = "inline_edit::validator";
    /// HTTP persistence target.
    pub const HTTP: &str = "inline_edit_net::http";
}

/// Style options for element tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact representation with dashes only.
    Compact,
}

/// Configuration for element tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show element IDs.
    pub show_ids: bool,
    /// Whether to show attributes (only `class` and `name`, to keep lines short).
    pub show_attributes: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: false,
            show_attributes: true,
            max_depth: None,
        }
    }
}

/// Debug utility for visualizing element trees.
#[derive(Debug, Clone, Default)]
pub struct DocumentTreeDebug {
    options: TreeFormatOptions,
}

impl DocumentTreeDebug {
    /// Create a new debug visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a debug visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format the subtree rooted at `root`.
    pub fn format(&self, doc: &dyn Document, root: ElementId) -> DocumentResult<String> {
        let mut output = String::new();
        self.format_into(doc, root, 0, true, &mut output)?;
        Ok(output)
    }

    fn format_into(
        &self,
        doc: &dyn Document,
        id: ElementId,
        depth: usize,
        is_last: bool,
        output: &mut String,
    ) -> DocumentResult<()> {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }

        output.push_str(&self.build_prefix(depth, is_last));
        output.push_str(doc.tag(id)?);

        if self.options.show_ids {
            let _ = write!(output, " [{id:?}]");
        }
        if self.options.show_attributes {
            for name in ["class", "name", "type"] {
                if let Some(value) = doc.attribute(id, name)? {
                    let _ = write!(output, " {name}={value:?}");
                }
            }
        }
        if let Some(value) = doc.value(id)? {
            let _ = write!(output, " value={value:?}");
        }
        if !doc.is_visible(id)? {
            output.push_str(" (hidden)");
        }
        let content = doc.content(id)?;
        if !content.is_empty() {
            let _ = write!(output, " {content:?}");
        }
        output.push('\n');

        let children = doc.children(id)?;
        let child_count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            self.format_into(doc, child, depth + 1, i + 1 == child_count, output)?;
        }
        Ok(())
    }

    fn build_prefix(&self, depth: usize, is_last: bool) -> String {
        if depth == 0 {
            return String::new();
        }

        let (branch, tee, corner) = match self.options.style {
            TreeStyle::Ascii => ("|  ", "+-- ", "`-- "),
            TreeStyle::Unicode => ("\u{2502}  ", "\u{251c}\u{2500}\u{2500} ", "\u{2514}\u{2500}\u{2500} "),
            TreeStyle::Compact => ("  ", "- ", "- "),
        };

        let mut prefix = branch.repeat(depth - 1);
        prefix.push_str(if is_last { corner } else { tee });
        prefix
    }
}
