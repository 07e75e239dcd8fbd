//! The navigation list rendered alongside the document.
//!
//! Each entry is a link to one heading's anchor carrying a copy of the heading text, and a
//! `current` flag that plays the role of `aria-current` for the renderer.

use crate::sink::CurrentMarker;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Identity of a navigation entry: its position in the [`TocList`].
pub struct LinkId(pub usize);

#[derive(Clone, Debug, PartialEq, Eq)]
/// One link in the table of contents.
pub struct NavEntry {
    /// Identifier of the heading this link points at (the `#fragment`).
    pub anchor: String,
    /// Heading text copied at build time.
    pub label: String,
    /// Whether this link is marked as the current location.
    pub current: bool,
}

impl NavEntry {
    #[must_use]
    /// Fragment reference for this link, e.g. `#getting-started`.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Clone, Debug, Default)]
/// Ordered list of navigation links.
pub struct TocList {
    entries: Vec<NavEntry>,
}

impl TocList {
    #[must_use]
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a link and returns its identity.
    pub fn push(&mut self, anchor: String, label: String) -> LinkId {
        self.entries.push(NavEntry {
            anchor,
            label,
            current: false,
        });
        LinkId(self.entries.len() - 1)
    }

    #[must_use]
    /// All links in document order.
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    #[must_use]
    /// Looks up a link by identity.
    pub fn get(&self, link: LinkId) -> Option<&NavEntry> {
        self.entries.get(link.0)
    }

    #[must_use]
    /// Number of links.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    /// Whether the list has no links.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    /// Links currently carrying the marker. At most one outside of tests.
    pub fn marked(&self) -> Vec<LinkId> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.current)
            .map(|(i, _)| LinkId(i))
            .collect()
    }
}

impl CurrentMarker for TocList {
    fn set_current(&mut self, link: LinkId) {
        if let Some(entry) = self.entries.get_mut(link.0) {
            entry.current = true;
        }
    }

    fn clear_current(&mut self, link: LinkId) {
        if let Some(entry) = self.entries.get_mut(link.0) {
            entry.current = false;
        }
    }
}
