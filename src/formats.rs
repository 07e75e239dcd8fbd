//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over document formats by providing
//! the grammar, a tree-sitter query matching heading nodes, and the mapping from heading
//! marker nodes to heading levels.

pub mod markdown;

/// Grammar and heading vocabulary for one document format.
pub trait Format {
    /// Tree-sitter grammar used to parse the document.
    fn language(&self) -> tree_sitter::Language;
    /// Query whose `@heading` capture matches every heading node.
    fn heading_query(&self) -> &str;
    /// Heading level encoded by a marker child node, if `kind` is a marker.
    fn marker_level(&self, kind: &str) -> Option<usize>;
    /// Whether a child node of this kind holds the heading's text content.
    fn is_content(&self, kind: &str) -> bool;
}
