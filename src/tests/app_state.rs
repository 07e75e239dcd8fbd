use super::{AppState, Focus, WalkStep};
use crate::document::{ContentRoot, Document};
use crate::formats::markdown::MarkdownFormat;
use crate::observer::{ActivationBand, ViewportObserver};
use crate::resolver::Rule;
use crate::slug::DefaultSlugger;
use crate::toc::TableOfContents;
use std::path::Path;

/// Forty rows: a level 1 title, then Alpha, Beta and Gamma at rows 10, 20 and 30.
fn sample() -> String {
    let mut lines = vec!["# Title".to_string()];
    for (row, name) in [(10, "Alpha"), (20, "Beta"), (30, "Gamma")] {
        while lines.len() < row - 1 {
            lines.push("text".to_string());
        }
        lines.push(String::new());
        lines.push(format!("## {name}"));
    }
    while lines.len() < 40 {
        lines.push("text".to_string());
    }
    lines.join("\n") + "\n"
}

fn app(tracking: bool) -> AppState {
    let document = Document::parse(Path::new("sample.md"), &sample(), &MarkdownFormat).unwrap();
    let root = ContentRoot::resolve(&document, None, 2);
    let toc = TableOfContents::attach(Some(&root), &mut DefaultSlugger::new(), tracking).unwrap();
    let observer = tracking.then(|| ViewportObserver::for_root(ActivationBand::default(), &root));
    AppState::new(document, toc, observer)
}

fn step(scroll: usize, from: Option<&str>, to: Option<&str>, rule: Rule) -> WalkStep {
    WalkStep {
        scroll,
        from: from.map(ToString::to_string),
        to: to.map(ToString::to_string),
        rule,
    }
}

#[test]
fn test_sample_layout() {
    let app = app(true);
    let rows: Vec<usize> = app.document.headings.iter().map(|h| h.rows.start).collect();
    assert_eq!(rows, vec![0, 10, 20, 30]);
    assert_eq!(app.document.lines.len(), 40);
}

#[test]
fn test_walk_down_and_up() {
    let mut app = app(true);

    let steps = app.walk(4);

    assert_eq!(
        steps,
        vec![
            step(8, None, Some("alpha"), Rule::TopmostVisible),
            step(18, Some("alpha"), Some("beta"), Rule::TopmostVisible),
            step(28, Some("beta"), Some("gamma"), Rule::TopmostVisible),
            step(27, Some("gamma"), Some("beta"), Rule::ExitedBelow),
            step(17, Some("beta"), Some("alpha"), Rule::ExitedBelow),
            step(7, Some("alpha"), None, Rule::ExitedBelow),
        ]
    );
    assert_eq!(app.scroll, 0);
}

#[test]
fn test_current_survives_scrolling_past_heading() {
    let mut app = app(true);
    app.resize(4);
    app.scroll_to(9);
    assert_eq!(app.toc.current().unwrap().order, 0);

    assert!(app.scroll_to(14).is_none(), "Alpha left off the top");
    assert_eq!(app.toc.current().unwrap().order, 0);
}

#[test]
fn test_fast_scroll_keeps_last_known_section() {
    let mut app = app(true);
    app.resize(4);
    app.scroll_to(20);
    assert_eq!(app.toc.current().unwrap().order, 1);

    let transition = app.scroll_to(32);
    assert!(transition.is_none(), "Beta left above and nothing else is visible");
    assert_eq!(app.anchor(app.toc.current().map(|e| e.order)).as_deref(), Some("beta"));
}

#[test]
fn test_scroll_is_clamped() {
    let mut app = app(true);
    app.resize(10);

    app.scroll_by(-5);
    assert_eq!(app.scroll, 0);
    app.scroll_to_bottom();
    assert_eq!(app.scroll, 30);
    app.page_down();
    assert_eq!(app.scroll, 30);
    app.page_up();
    assert_eq!(app.scroll, 20);
    app.scroll_to_top();
    assert_eq!(app.scroll, 0);
}

#[test]
fn test_follow_selected_link() {
    let mut app = app(true);
    app.resize(4);
    app.toggle_focus();
    assert_eq!(app.focus, Focus::Toc);

    app.select_next_link();
    app.select_next_link();
    app.select_next_link();
    assert_eq!(app.selected_link, 2, "Selection stops at the last link");
    app.select_prev_link();

    let transition = app.follow_selected().unwrap();
    assert_eq!(app.scroll, 20);
    assert_eq!(transition.to, Some(1));
    assert_eq!(app.message.as_deref(), Some("#beta"));
}

#[test]
fn test_focus_selects_current_link() {
    let mut app = app(true);
    app.resize(4);
    app.scroll_to(28);

    app.toggle_focus();
    assert_eq!(app.selected_link, 2);
    app.toggle_focus();
    assert_eq!(app.focus, Focus::Document);
}

#[test]
fn test_static_list_never_marks() {
    let mut app = app(false);

    assert!(app.walk(4).is_empty());
    assert!(app.toc.nav().marked().is_empty());
    assert_eq!(app.toc.nav().len(), 3);
}
