use super::{VisibilityReport, VisibilityTracker};
use crate::document::{ContentRoot, Document, HeadingId};
use crate::formats::markdown::MarkdownFormat;
use crate::nav::TocList;
use crate::registry::HeadingRegistry;
use crate::slug::DefaultSlugger;
use std::path::Path;

fn registry() -> HeadingRegistry {
    let doc = Document::parse(
        Path::new("test.md"),
        "## Zero\n\n## One\n\n## Two\n\n## Three\n\n# Untracked\n",
        &MarkdownFormat,
    )
    .unwrap();
    let root = ContentRoot::resolve(&doc, None, 2);
    HeadingRegistry::build(&root, &mut DefaultSlugger::new(), &mut TocList::new())
}

fn seen(i: usize) -> VisibilityReport {
    VisibilityReport {
        target: HeadingId(i),
        is_intersecting: true,
        edge_offset: 0,
    }
}

fn gone(i: usize, edge_offset: i64) -> VisibilityReport {
    VisibilityReport {
        target: HeadingId(i),
        is_intersecting: false,
        edge_offset,
    }
}

#[test]
fn test_intersecting_reports_insert_in_arrival_order() {
    let registry = registry();
    let mut tracker = VisibilityTracker::new();

    tracker.apply_reports(&registry, &[seen(2), seen(0), seen(3)], None);

    let orders: Vec<usize> = tracker.visible_orders().collect();
    assert_eq!(orders, vec![2, 0, 3]);
}

#[test]
fn test_repeated_report_does_not_duplicate() {
    let registry = registry();
    let mut tracker = VisibilityTracker::new();

    tracker.apply_reports(&registry, &[seen(1)], None);
    tracker.apply_reports(&registry, &[seen(1)], None);

    assert_eq!(tracker.len(), 1);
}

#[test]
fn test_non_intersecting_report_removes() {
    let registry = registry();
    let mut tracker = VisibilityTracker::new();

    tracker.apply_reports(&registry, &[seen(0), seen(1)], None);
    tracker.apply_reports(&registry, &[gone(0, -3)], None);

    assert!(!tracker.contains(HeadingId(0)));
    assert!(tracker.contains(HeadingId(1)));
}

#[test]
fn test_unknown_target_is_ignored() {
    let registry = registry();
    let mut tracker = VisibilityTracker::new();

    tracker.apply_reports(&registry, &[seen(4)], None);

    assert!(tracker.is_empty(), "Level 1 heading is not in the registry");
}

#[test]
fn test_disappearance_reported_only_for_current() {
    let registry = registry();
    let mut tracker = VisibilityTracker::new();
    tracker.apply_reports(&registry, &[seen(1), seen(2)], None);

    let disappeared =
        tracker.apply_reports(&registry, &[gone(1, -4), gone(2, 7)], Some(HeadingId(2)));

    assert_eq!(disappeared, Some(gone(2, 7)));
    assert!(tracker.is_empty());
}

#[test]
fn test_no_disappearance_without_current() {
    let registry = registry();
    let mut tracker = VisibilityTracker::new();
    tracker.apply_reports(&registry, &[seen(1)], None);

    assert_eq!(tracker.apply_reports(&registry, &[gone(1, -1)], None), None);
}

#[test]
fn test_last_disappearance_in_batch_wins() {
    let registry = registry();
    let mut tracker = VisibilityTracker::new();

    let disappeared = tracker.apply_reports(
        &registry,
        &[gone(3, -2), seen(3), gone(3, 5)],
        Some(HeadingId(3)),
    );

    assert_eq!(disappeared, Some(gone(3, 5)));
    assert!(!tracker.contains(HeadingId(3)));
}

#[test]
fn test_reappearing_in_same_batch_keeps_it_visible() {
    let registry = registry();
    let mut tracker = VisibilityTracker::new();

    tracker.apply_reports(&registry, &[gone(0, -1), seen(0)], Some(HeadingId(0)));

    assert!(tracker.contains(HeadingId(0)), "Net effect of the batch is visible");
}
