//! Markdown format implementation using tree-sitter-md.
//!
//! Both ATX (`## Title`) and setext (underlined) headings are recognised. Levels come from the
//! marker node: `atx_h3_marker` is level 3, `setext_h1_underline` is level 1.

use crate::formats::Format;

/// Tree-sitter queries for markdown headings.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "[(atx_heading) (setext_heading)] @heading"
    }

    fn marker_level(&self, kind: &str) -> Option<usize> {
        match kind {
            "setext_h1_underline" => Some(1),
            "setext_h2_underline" => Some(2),
            _ => kind
                .strip_prefix("atx_h")
                .and_then(|rest| rest.strip_suffix("_marker"))
                .and_then(|digit| digit.parse().ok()),
        }
    }

    fn is_content(&self, kind: &str) -> bool {
        matches!(kind, "inline" | "paragraph")
    }
}
