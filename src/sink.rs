//! Applies current-heading transitions to navigation links.

use crate::nav::LinkId;
use crate::registry::HeadingEntry;

/// Receiver of "current" marker toggles, typically the rendering layer's link list.
pub trait CurrentMarker {
    /// Mark `link` as the current location.
    fn set_current(&mut self, link: LinkId);
    /// Remove the current marker from `link`.
    fn clear_current(&mut self, link: LinkId);
}

/// Moves the current marker from `previous` to `next`.
///
/// Entries are compared by heading identity; when they are the same heading (or both absent)
/// nothing is touched, so a non-transition never flickers the marker. Returns whether any
/// marker was toggled.
pub fn apply_transition(
    marker: &mut impl CurrentMarker,
    previous: Option<&HeadingEntry>,
    next: Option<&HeadingEntry>,
) -> bool {
    if previous.map(|e| e.target) == next.map(|e| e.target) {
        return false;
    }
    if let Some(prev) = previous {
        marker.clear_current(prev.link);
    }
    if let Some(next) = next {
        marker.set_current(next.link);
    }
    true
}

#[cfg(test)]
#[path = "tests/sink.rs"]
mod tests;
