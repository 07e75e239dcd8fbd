//! Accumulates which tracked headings currently intersect the activation band.

use crate::document::HeadingId;
use crate::registry::HeadingRegistry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Visibility of one heading as reported by the viewport observer.
pub struct VisibilityReport {
    /// The heading element this report is about.
    pub target: HeadingId,
    /// Whether the heading meets the activation threshold.
    pub is_intersecting: bool,
    /// Heading top minus band top, in rows. Negative means above the band.
    pub edge_offset: i64,
}

#[derive(Clone, Debug, Default)]
/// The set of tracked headings known to intersect the band, in insertion order.
pub struct VisibilityTracker {
    visible: Vec<(HeadingId, usize)>,
}

impl VisibilityTracker {
    #[must_use]
    /// Creates a tracker with nothing visible.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one batch of reports.
    ///
    /// Intersecting reports for tracked headings insert (or refresh) them; every other report
    /// removes its target. Returns the last non-intersecting report for `current`, which the
    /// resolver needs to tell which way the current heading left.
    pub fn apply_reports(
        &mut self,
        registry: &HeadingRegistry,
        reports: &[VisibilityReport],
        current: Option<HeadingId>,
    ) -> Option<VisibilityReport> {
        let mut disappeared = None;

        for report in reports {
            match registry.get(report.target) {
                Some(entry) if report.is_intersecting => {
                    if !self.visible.iter().any(|&(id, _)| id == report.target) {
                        self.visible.push((report.target, entry.order));
                    }
                }
                _ => {
                    self.visible.retain(|&(id, _)| id != report.target);
                    if current == Some(report.target) {
                        disappeared = Some(*report);
                    }
                }
            }
        }

        disappeared
    }

    /// Orders of the visible headings, in the order they became visible.
    pub fn visible_orders(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible.iter().map(|&(_, order)| order)
    }

    #[must_use]
    /// Whether `target` is currently visible.
    pub fn contains(&self, target: HeadingId) -> bool {
        self.visible.iter().any(|&(id, _)| id == target)
    }

    #[must_use]
    /// Number of visible headings.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    /// Whether no heading is visible.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;
