use super::{ContentRoot, Document, HeadingId};
use crate::formats::markdown::MarkdownFormat;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn parse(text: &str) -> Document {
    Document::parse(Path::new("test.md"), text, &MarkdownFormat).unwrap()
}

#[test]
fn test_atx_headings_with_levels_and_rows() {
    let doc = parse("# Title\n\nIntro\n\n## Usage\n\nText\n\n### Details\n");

    let summary: Vec<(usize, &str, usize)> = doc
        .headings
        .iter()
        .map(|h| (h.level, h.text.as_str(), h.rows.start))
        .collect();
    assert_eq!(
        summary,
        vec![(1, "Title", 0), (2, "Usage", 4), (3, "Details", 8)]
    );
    assert_eq!(doc.headings[1].rows, 4..5, "ATX headings span one row");
}

#[test]
fn test_setext_headings_span_two_rows() {
    let doc = parse("Overview\n========\n\nBody\n\nSetup\n-----\n");

    assert_eq!(doc.headings.len(), 2);
    assert_eq!(doc.headings[0].level, 1);
    assert_eq!(doc.headings[0].text, "Overview");
    assert_eq!(doc.headings[0].rows, 0..2);
    assert_eq!(doc.headings[1].level, 2);
    assert_eq!(doc.headings[1].text, "Setup");
    assert_eq!(doc.headings[1].rows, 5..7);
}

#[test]
fn test_multiline_setext_text_is_collapsed() {
    let doc = parse("First line\nsecond   line\n===========\n\nBody\n");

    assert_eq!(doc.headings.len(), 1);
    assert_eq!(doc.headings[0].text, "First line second line");
    assert_eq!(doc.headings[0].rows, 0..3);
}

#[test]
fn test_explicit_id_is_split_from_text() {
    let doc = parse("## Getting Started {#start}\n\n## Plain\n");

    assert_eq!(doc.headings[0].text, "Getting Started");
    assert_eq!(doc.headings[0].id.as_deref(), Some("start"));
    assert_eq!(doc.headings[1].id, None);
}

#[test]
fn test_closing_sequence_is_dropped() {
    let doc = parse("## Closed ##\n\n## C# ##\n");

    assert_eq!(doc.headings[0].text, "Closed");
    assert_eq!(doc.headings[1].text, "C#");
}

#[test]
fn test_empty_heading_has_empty_text() {
    let doc = parse("##\n\n## Next\n");

    assert_eq!(doc.headings.len(), 2);
    assert_eq!(doc.headings[0].text, "");
    assert_eq!(doc.headings[1].text, "Next");
}

#[test]
fn test_find_by_id_prefers_explicit_id() {
    let doc = parse("## Alpha\n\n## Beta {#alpha}\n\n## Gamma Ray\n");

    assert_eq!(doc.find_by_id("alpha"), Some(HeadingId(1)));
    assert_eq!(doc.find_by_id("gamma-ray"), Some(HeadingId(2)));
    assert_eq!(doc.find_by_id("delta"), None);
}

#[test]
fn test_find_by_id_matches_deduplicated_anchors() {
    let doc = parse("## Notes\n\nA\n\n## Notes\n\nB\n\n### Inner\n");

    assert_eq!(doc.find_by_id("notes"), Some(HeadingId(0)));
    assert_eq!(doc.find_by_id("notes-1"), Some(HeadingId(1)));
    assert_eq!(doc.find_by_id("inner"), Some(HeadingId(2)));
}

#[test]
fn test_root_for_duplicated_title_uses_its_anchor() {
    let doc = parse("## Notes\n\nA\n\n## Notes\n\nB\n\n### Inner\n");
    let root = ContentRoot::resolve(&doc, Some("notes-1"), 3);

    let texts: Vec<&str> = root.headings().map(|(_, h)| h.text.as_str()).collect();
    assert_eq!(texts, vec!["Inner"]);
    assert_eq!(root.rows(), 5..doc.lines.len());
}

#[test]
fn test_find_by_id_slugs_avoid_explicit_ids() {
    let doc = parse("## Setup\n\n## Install {#setup}\n");

    assert_eq!(doc.find_by_id("setup"), Some(HeadingId(1)));
    assert_eq!(doc.find_by_id("setup-1"), Some(HeadingId(0)));
}

#[test]
fn test_root_defaults_to_whole_document() {
    let doc = parse("# A\n\n## One\n\n# B\n\n## Two\n");
    let root = ContentRoot::resolve(&doc, None, 2);

    let texts: Vec<&str> = root.headings().map(|(_, h)| h.text.as_str()).collect();
    assert_eq!(texts, vec!["One", "Two"]);
    assert_eq!(root.rows(), 0..doc.lines.len());
}

#[test]
fn test_root_for_id_scopes_to_section() {
    let doc = parse("# A\n\n## One\n\n## Two\n\n# B\n\n## Three\n");
    let root = ContentRoot::resolve(&doc, Some("a"), 2);

    let texts: Vec<&str> = root.headings().map(|(_, h)| h.text.as_str()).collect();
    assert_eq!(texts, vec!["One", "Two"], "Section ends at the next level 1");
}

#[test]
fn test_root_excludes_its_own_heading() {
    let doc = parse("## Parent\n\n## Sibling\n");
    let root = ContentRoot::resolve(&doc, Some("parent"), 2);

    assert_eq!(root.headings().count(), 0);
}

#[test]
fn test_unknown_root_id_falls_back_to_document() {
    let doc = parse("# A\n\n## One\n\n## Two\n");
    let root = ContentRoot::resolve(&doc, Some("missing"), 2);

    assert_eq!(root.headings().count(), 2);
}

#[test]
fn test_load_reads_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "## From Disk\n\nBody\n").unwrap();

    let doc = Document::load(file.path(), &MarkdownFormat).unwrap();
    assert_eq!(doc.lines.len(), 3);
    assert_eq!(doc.headings[0].text, "From Disk");
}

#[test]
fn test_load_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Document::load(&dir.path().join("nope.md"), &MarkdownFormat).is_err());
}
