//! The heading registry: tracked headings, their links, and their document order.
//!
//! Built once when a table of contents attaches to its content root and never mutated after.
//! Entries live in a vector indexed by `order`, so the predecessor of entry `n` is simply entry
//! `n - 1` and no links between entries need to be kept alive.

use crate::document::{ContentRoot, HeadingId};
use crate::nav::{LinkId, TocList};
use crate::slug::Slugger;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A tracked heading and its navigation link.
pub struct HeadingEntry {
    /// The heading element.
    pub target: HeadingId,
    /// The navigation link pointing at it.
    pub link: LinkId,
    /// Dense position among tracked headings, starting at 0.
    pub order: usize,
    /// Order of the tracked heading immediately before this one.
    pub preceding: Option<usize>,
}

#[derive(Clone, Debug, Default)]
/// Lookup from heading identity to entry, plus the entries in document order.
pub struct HeadingRegistry {
    entries: Vec<HeadingEntry>,
    by_target: HashMap<HeadingId, usize>,
}

impl HeadingRegistry {
    /// Builds the registry for `root`, appending one link per included heading to `nav`.
    ///
    /// Headings without an explicit identifier get one from `slugger`. A heading with neither an
    /// identifier nor usable text is skipped: it gets no entry and no link, and the headings
    /// after it still receive consecutive orders.
    pub fn build(root: &ContentRoot<'_>, slugger: &mut impl Slugger, nav: &mut TocList) -> Self {
        let mut registry = Self::default();

        for (_, heading) in root.headings() {
            if let Some(id) = &heading.id {
                slugger.reserve(id);
            }
        }

        for (target, heading) in root.headings() {
            let Some(anchor) = heading.id.clone().or_else(|| slugger.slug(&heading.text)) else {
                tracing::warn!(row = heading.rows.start, "skipping heading with no usable text");
                continue;
            };

            let link = nav.push(anchor, heading.text.clone());
            let order = registry.entries.len();
            registry.entries.push(HeadingEntry {
                target,
                link,
                order,
                preceding: order.checked_sub(1),
            });
            registry.by_target.insert(target, order);
        }

        tracing::debug!(headings = registry.entries.len(), "heading registry built");
        registry
    }

    #[must_use]
    /// The entry for a heading element, if it is tracked.
    pub fn get(&self, target: HeadingId) -> Option<&HeadingEntry> {
        self.by_target.get(&target).map(|&order| &self.entries[order])
    }

    #[must_use]
    /// The entry at a given order.
    pub fn entry(&self, order: usize) -> Option<&HeadingEntry> {
        self.entries.get(order)
    }

    #[must_use]
    /// The entry that owns a navigation link.
    pub fn by_link(&self, link: LinkId) -> Option<&HeadingEntry> {
        self.entries.iter().find(|e| e.link == link)
    }

    #[must_use]
    /// The entry before `entry` in document order.
    pub fn preceding(&self, entry: &HeadingEntry) -> Option<&HeadingEntry> {
        entry.preceding.and_then(|order| self.entry(order))
    }

    #[must_use]
    /// All entries in document order.
    pub fn entries(&self) -> &[HeadingEntry] {
        &self.entries
    }

    #[must_use]
    /// Number of tracked headings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    /// Whether no heading is tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/registry.rs"]
mod tests;
