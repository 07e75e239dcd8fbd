//! The table-of-contents widget: one instance per content root.
//!
//! Owns the heading registry, the navigation list, the visibility tracker and the current
//! heading. Each batch of visibility reports runs to completion (tracker, then resolver, then
//! sink) before the next is accepted, so the resolver never sees a half-applied batch.

use crate::document::ContentRoot;
use crate::nav::TocList;
use crate::registry::{HeadingEntry, HeadingRegistry};
use crate::resolver::{self, Rule};
use crate::sink;
use crate::slug::Slugger;
use crate::tracker::{VisibilityReport, VisibilityTracker};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A change of current heading.
pub struct Transition {
    /// Order of the heading that was current.
    pub from: Option<usize>,
    /// Order of the heading that is now current.
    pub to: Option<usize>,
    /// The resolver rule that produced the change.
    pub rule: Rule,
}

/// A navigable heading list that follows the reader's position.
pub struct TableOfContents {
    registry: HeadingRegistry,
    nav: TocList,
    tracker: Option<VisibilityTracker>,
    current: Option<usize>,
}

impl TableOfContents {
    #[must_use]
    /// Attaches to a content root, building the registry and navigation list.
    ///
    /// Returns `None` when there is no root, in which case there is nothing to do. With
    /// `tracking` off the list is still built but no heading is ever marked current.
    pub fn attach(
        root: Option<&ContentRoot<'_>>,
        slugger: &mut impl Slugger,
        tracking: bool,
    ) -> Option<Self> {
        let root = root?;
        let mut nav = TocList::new();
        let registry = HeadingRegistry::build(root, slugger, &mut nav);
        if !tracking {
            tracing::info!("visibility tracking unavailable, rendering a static list");
        }

        Some(Self {
            registry,
            nav,
            tracker: tracking.then(VisibilityTracker::new),
            current: None,
        })
    }

    /// Processes one batch of visibility reports.
    ///
    /// Returns the transition if the current heading changed. Does nothing when tracking is
    /// disabled.
    pub fn handle_batch(&mut self, reports: &[VisibilityReport]) -> Option<Transition> {
        let tracker = self.tracker.as_mut()?;
        let previous = self.current;
        let previous_entry = previous.and_then(|order| self.registry.entry(order));

        let disappeared = tracker.apply_reports(
            &self.registry,
            reports,
            previous_entry.map(|entry| entry.target),
        );
        let resolution =
            resolver::resolve(&self.registry, tracker, disappeared.as_ref(), previous);
        let next_entry = resolution.next.and_then(|order| self.registry.entry(order));

        sink::apply_transition(&mut self.nav, previous_entry, next_entry);
        self.current = resolution.next;

        if previous == resolution.next {
            tracing::trace!(visible = tracker.len(), rule = ?resolution.rule, "no transition");
            return None;
        }

        tracing::debug!(from = ?previous, to = ?resolution.next, rule = ?resolution.rule, "current heading changed");
        Some(Transition {
            from: previous,
            to: resolution.next,
            rule: resolution.rule,
        })
    }

    #[must_use]
    /// The current heading, if any.
    pub fn current(&self) -> Option<&HeadingEntry> {
        self.current.and_then(|order| self.registry.entry(order))
    }

    #[must_use]
    /// The heading registry.
    pub fn registry(&self) -> &HeadingRegistry {
        &self.registry
    }

    #[must_use]
    /// The navigation list, with the current marker applied.
    pub fn nav(&self) -> &TocList {
        &self.nav
    }

    #[must_use]
    /// Whether visibility tracking is active.
    pub fn is_tracking(&self) -> bool {
        self.tracker.is_some()
    }
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;
