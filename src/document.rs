//! Parsed documents and the content roots a table of contents is built for.
//!
//! A [`Document`] holds the source lines and every heading tree-sitter found, with row spans
//! precise enough to place each heading in a scrolling viewport. A [`ContentRoot`] narrows a
//! document to the headings one table of contents should track.

use crate::error::{Error, Result};
use crate::formats::Format;
use crate::slug::{DefaultSlugger, Slugger};
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Identity of a heading element: its position in [`Document::headings`].
pub struct HeadingId(pub usize);

#[derive(Clone, Debug, PartialEq, Eq)]
/// One heading as it appears in the source.
pub struct HeadingElement {
    /// Heading rank, 1 for the outermost.
    pub level: usize,
    /// Text content without markers or the `{#id}` attribute, whitespace runs collapsed to one
    /// space. May be empty.
    pub text: String,
    /// Identifier written explicitly as a trailing `{#id}`.
    pub id: Option<String>,
    /// Source rows the heading occupies (two for setext headings).
    pub rows: Range<usize>,
}

/// A markdown file split into lines, with its headings in document order.
pub struct Document {
    /// Where the text came from, for display.
    pub path: PathBuf,
    /// Source text split on newlines.
    pub lines: Vec<String>,
    /// Every heading of every level, in document order.
    pub headings: Vec<HeadingElement>,
}

impl Document {
    /// Read and parse a document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path, format: &impl Format) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(path, &text, format)
    }

    /// Parse in-memory text as if it had been read from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar or query cannot be loaded or parsing fails.
    pub fn parse(path: &Path, text: &str, format: &impl Format) -> Result<Self> {
        let language = format.language();
        let mut parser = Parser::new();
        parser.set_language(&language)?;
        let tree = parser
            .parse(text, None)
            .ok_or_else(|| Error::Parse(path.to_path_buf()))?;

        let query = Query::new(&language, format.heading_query())?;
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, tree.root_node(), text.as_bytes());

        let mut headings = Vec::new();
        while let Some(m) = matches.next() {
            for capture in m.captures {
                if let Some(heading) = heading_element(capture.node, text, format) {
                    headings.push(heading);
                }
            }
        }
        headings.sort_by_key(|h| h.rows.start);

        Ok(Self {
            path: path.to_path_buf(),
            lines: text.lines().map(ToString::to_string).collect(),
            headings,
        })
    }

    #[must_use]
    /// Looks up a heading by identity.
    pub fn heading(&self, id: HeadingId) -> Option<&HeadingElement> {
        self.headings.get(id.0)
    }

    #[must_use]
    /// Finds the heading whose identifier equals `id`.
    ///
    /// Identifiers are assigned the way a table of contents assigns its anchors: explicit ids
    /// are reserved first, then every other heading gets a deduplicated slug in document order.
    pub fn find_by_id(&self, id: &str) -> Option<HeadingId> {
        let mut slugger = DefaultSlugger::new();
        for explicit in self.headings.iter().filter_map(|h| h.id.as_deref()) {
            slugger.reserve(explicit);
        }
        self.headings
            .iter()
            .position(|h| match &h.id {
                Some(own) => own == id,
                None => slugger.slug(&h.text).as_deref() == Some(id),
            })
            .map(HeadingId)
    }

    /// Rows from `id` up to the next heading of the same or outer rank.
    fn section_rows(&self, id: HeadingId) -> Option<Range<usize>> {
        let heading = self.heading(id)?;
        let end = self.headings[id.0 + 1..]
            .iter()
            .find(|h| h.level <= heading.level)
            .map_or(self.lines.len(), |h| h.rows.start);
        Some(heading.rows.end..end)
    }
}

fn heading_element(node: Node<'_>, text: &str, format: &impl Format) -> Option<HeadingElement> {
    let mut level = None;
    let mut content = "";
    let mut walker = node.walk();
    for child in node.children(&mut walker) {
        if let Some(l) = format.marker_level(child.kind()) {
            level = Some(l);
        } else if format.is_content(child.kind()) {
            content = child.utf8_text(text.as_bytes()).unwrap_or_default();
        }
    }

    let (text, id) = split_id_attribute(strip_closing_sequence(content.trim()));
    Some(HeadingElement {
        level: level?,
        text: text.split_whitespace().collect::<Vec<_>>().join(" "),
        id: id.map(ToString::to_string),
        rows: node_rows(node),
    })
}

/// Row span of a node, ignoring a trailing newline that ends on column 0 of the next row.
fn node_rows(node: Node<'_>) -> Range<usize> {
    let start = node.start_position().row;
    let end = node.end_position();
    let last = if end.column == 0 && end.row > start {
        end.row - 1
    } else {
        end.row
    };
    start..last + 1
}

/// Drops an optional ATX closing sequence (`## Title ##`).
fn strip_closing_sequence(content: &str) -> &str {
    let without = content.trim_end_matches('#');
    if without.len() == content.len() {
        content
    } else if without.is_empty() {
        without
    } else if without.ends_with(char::is_whitespace) {
        without.trim_end()
    } else {
        content
    }
}

/// Splits `Title {#anchor}` into its text and explicit identifier.
fn split_id_attribute(content: &str) -> (&str, Option<&str>) {
    if let Some(open) = content.rfind("{#") {
        if let Some(inner) = content[open + 2..].strip_suffix('}') {
            let id = inner.trim();
            if !id.is_empty() && !id.contains(char::is_whitespace) {
                return (content[..open].trim_end(), Some(id));
            }
        }
    }
    (content, None)
}

/// The part of a document one table of contents describes.
pub struct ContentRoot<'d> {
    document: &'d Document,
    rows: Range<usize>,
    level: usize,
}

impl<'d> ContentRoot<'d> {
    #[must_use]
    /// Resolves the root a table of contents attaches to.
    ///
    /// When `for_id` names a heading in the document the root is that heading's section;
    /// otherwise the whole document is used.
    pub fn resolve(document: &'d Document, for_id: Option<&str>, level: usize) -> Self {
        let rows = for_id
            .and_then(|id| {
                let found = document.find_by_id(id);
                if found.is_none() {
                    tracing::debug!(id, "content root id not found, using whole document");
                }
                found
            })
            .and_then(|id| document.section_rows(id))
            .unwrap_or(0..document.lines.len());

        Self {
            document,
            rows,
            level,
        }
    }

    #[must_use]
    /// The document this root belongs to.
    pub fn document(&self) -> &'d Document {
        self.document
    }

    #[must_use]
    /// Source rows covered by this root.
    pub fn rows(&self) -> Range<usize> {
        self.rows.clone()
    }

    /// Headings of the tracked level inside this root, in document order.
    pub fn headings(&self) -> impl Iterator<Item = (HeadingId, &'d HeadingElement)> + '_ {
        self.document
            .headings
            .iter()
            .enumerate()
            .filter(move |(_, h)| h.level == self.level && self.rows.contains(&h.rows.start))
            .map(|(i, h)| (HeadingId(i), h))
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
