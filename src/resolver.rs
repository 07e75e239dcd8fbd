//! Decides which heading is current after a batch of visibility reports.
//!
//! The decision is a pure function of the tracker state, the report (if any) for the current
//! heading leaving the band, and the previous current heading:
//!
//! 1. If any tracked heading is visible, the one earliest in document order wins.
//! 2. Otherwise, if the current heading just left the band, look at which way it went. Leaving
//!    off the top (negative edge offset) means the viewer is still inside its section, so it
//!    stays current. Leaving off the bottom means the viewer scrolled back above it, so the
//!    heading before it becomes current, or nothing if it was the first.
//! 3. Otherwise nothing changes.
//!
//! Rule 2 keeps the marker from dropping to nothing while scrolling quickly past short sections.

use crate::registry::HeadingRegistry;
use crate::tracker::{VisibilityReport, VisibilityTracker};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Which rule produced a [`Resolution`].
pub enum Rule {
    /// The earliest visible heading.
    TopmostVisible,
    /// Nothing visible; the current heading left off the top and stays current.
    ExitedAbove,
    /// Nothing visible; the current heading left off the bottom so its predecessor takes over.
    ExitedBelow,
    /// Nothing visible and the current heading did not leave; keep it.
    Unchanged,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The resolver's answer: the next current heading's order and the rule that chose it.
pub struct Resolution {
    /// Order of the next current heading, or `None` for "above all sections".
    pub next: Option<usize>,
    /// The rule that fired.
    pub rule: Rule,
}

#[must_use]
/// Resolves the next current heading.
///
/// `previous` and the returned order index into `registry`. `disappeared` must be the
/// report for `previous` leaving the band in this batch, as returned by
/// [`VisibilityTracker::apply_reports`].
pub fn resolve(
    registry: &HeadingRegistry,
    tracked: &VisibilityTracker,
    disappeared: Option<&VisibilityReport>,
    previous: Option<usize>,
) -> Resolution {
    if let Some(topmost) = tracked.visible_orders().min() {
        return Resolution {
            next: Some(topmost),
            rule: Rule::TopmostVisible,
        };
    }

    if let Some((entry, edge_offset)) = disappeared.and_then(|report| {
        registry
            .get(report.target)
            .map(|entry| (entry, report.edge_offset))
    }) {
        return if edge_offset < 0 {
            Resolution {
                next: Some(entry.order),
                rule: Rule::ExitedAbove,
            }
        } else {
            Resolution {
                next: entry.preceding,
                rule: Rule::ExitedBelow,
            }
        };
    }

    Resolution {
        next: previous,
        rule: Rule::Unchanged,
    }
}

#[cfg(test)]
#[path = "tests/resolver.rs"]
mod tests;
