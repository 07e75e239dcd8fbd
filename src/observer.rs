//! Viewport observer: turns scroll positions into batches of visibility reports.
//!
//! This is the terminal stand-in for a browser intersection observer. It watches a fixed set of
//! heading row spans and, each time the viewport moves, reports the headings whose intersection
//! with the activation band changed. The first observation reports every target.

use crate::document::{ContentRoot, HeadingId};
use crate::tracker::VisibilityReport;
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The part of the viewport in which a heading counts as "in view".
pub struct ActivationBand {
    /// Percentage of the viewport height excluded at the top.
    pub inset_top: u16,
    /// Percentage of the viewport height excluded at the bottom.
    pub inset_bottom: u16,
    /// Percentage of a heading's rows that must lie inside the band. 100 means fully visible.
    pub threshold: u16,
}

impl Default for ActivationBand {
    fn default() -> Self {
        Self {
            inset_top: 0,
            inset_bottom: 25,
            threshold: 100,
        }
    }
}

impl ActivationBand {
    #[must_use]
    /// Document rows covered by the band for a given viewport.
    pub fn rows(self, viewport: Viewport) -> Range<usize> {
        let inset = |percent: u16| viewport.height * usize::from(percent.min(100)) / 100;
        let start = viewport.top + inset(self.inset_top);
        let end = (viewport.top + viewport.height).saturating_sub(inset(self.inset_bottom));
        start..end.max(start)
    }

    fn meets_threshold(self, target: &Range<usize>, band: &Range<usize>) -> bool {
        let total = target.len();
        let inside = target.end.min(band.end).saturating_sub(target.start.max(band.start));
        inside > 0 && inside * 100 >= total * usize::from(self.threshold.clamp(1, 100))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The visible window onto the document.
pub struct Viewport {
    /// First visible row.
    pub top: usize,
    /// Number of visible rows.
    pub height: usize,
}

/// Watches heading row spans and reports band crossings.
pub struct ViewportObserver {
    band: ActivationBand,
    targets: Vec<(HeadingId, Range<usize>)>,
    last: Vec<Option<bool>>,
}

impl ViewportObserver {
    #[must_use]
    /// Observes the given headings.
    pub fn new(band: ActivationBand, targets: Vec<(HeadingId, Range<usize>)>) -> Self {
        let last = vec![None; targets.len()];
        Self {
            band,
            targets,
            last,
        }
    }

    #[must_use]
    /// Observes every in-scope heading of `root`, tracked or not.
    pub fn for_root(band: ActivationBand, root: &ContentRoot<'_>) -> Self {
        let targets = root
            .headings()
            .map(|(id, heading)| (id, heading.rows.clone()))
            .collect();
        Self::new(band, targets)
    }

    /// Reports the targets whose intersection changed since the last observation.
    ///
    /// Returns an empty batch when nothing crossed the band edge.
    pub fn observe(&mut self, viewport: Viewport) -> Vec<VisibilityReport> {
        let band = self.band.rows(viewport);
        let mut batch = Vec::new();

        for ((target, rows), last) in self.targets.iter().zip(self.last.iter_mut()) {
            let is_intersecting = self.band.meets_threshold(rows, &band);
            if *last == Some(is_intersecting) {
                continue;
            }
            *last = Some(is_intersecting);
            batch.push(VisibilityReport {
                target: *target,
                is_intersecting,
                edge_offset: signed_offset(rows.start, band.start),
            });
        }

        if !batch.is_empty() {
            tracing::trace!(top = viewport.top, reports = batch.len(), "visibility batch");
        }
        batch
    }
}

fn signed_offset(row: usize, origin: usize) -> i64 {
    let magnitude = |d: usize| i64::try_from(d).unwrap_or(i64::MAX);
    if row >= origin {
        magnitude(row - origin)
    } else {
        -magnitude(origin - row)
    }
}

#[cfg(test)]
#[path = "tests/observer.rs"]
mod tests;
