//! The UI renders the application state into a table of contents beside the document.
//!
//! The left pane lists the navigation links with the current one marked, the right pane shows
//! the visible slice of the document, and a help bar sits underneath.

use crate::app_state::{AppState, Focus};
use crate::config::Config;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const HELP_HEIGHT: u16 = 3;
const BORDER_ROWS: u16 = 2;

/// Splits the screen into (toc, document, help) areas.
fn layout(area: Rect, cfg: &Config) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(HELP_HEIGHT)])
        .split(area);
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(cfg.toc_width), Constraint::Min(0)])
        .split(rows[0]);
    (panes[0], panes[1], rows[1])
}

#[must_use]
/// Number of document rows visible for a terminal of the given size.
pub fn document_rows(area: Rect, cfg: &Config) -> usize {
    let (_, document, _) = layout(area, cfg);
    usize::from(document.height.saturating_sub(BORDER_ROWS))
}

/// Renders the whole screen.
pub fn draw(f: &mut Frame, app: &AppState, cfg: &Config) {
    let (toc_area, doc_area, help_area) = layout(f.area(), cfg);
    draw_toc(f, app, toc_area);
    draw_document(f, app, doc_area);
    draw_help(f, app, help_area);
}

fn draw_toc(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .toc
        .nav()
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let (marker, mut style) = if entry.current {
                (
                    "▸ ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default())
            };
            if app.focus == Focus::Toc && i == app.selected_link {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::raw(entry.label.clone()),
            ]))
            .style(style)
        })
        .collect();

    let title = if app.toc.is_tracking() {
        "Contents".to_string()
    } else {
        "Contents (static)".to_string()
    };
    let border_style = if app.focus == Focus::Toc {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    f.render_widget(list, area);
}

fn draw_document(f: &mut Frame, app: &AppState, area: Rect) {
    let heading_rows: Vec<usize> = app
        .document
        .headings
        .iter()
        .flat_map(|h| h.rows.clone())
        .collect();

    let end = (app.scroll + app.viewport_height).min(app.document.lines.len());
    let start = app.scroll.min(end);
    let lines: Vec<Line> = app.document.lines[start..end]
        .iter()
        .enumerate()
        .map(|(offset, text)| {
            if heading_rows.contains(&(start + offset)) {
                Line::styled(
                    text.clone(),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Line::raw(text.clone())
            }
        })
        .collect();

    let title = format!(
        "{} ({}/{})",
        app.document.path.display(),
        app.scroll + 1,
        app.document.lines.len().max(1)
    );
    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, area);
}

fn draw_help(f: &mut Frame, app: &AppState, area: Rect) {
    let help_text = if let Some(ref msg) = app.message {
        msg.clone()
    } else {
        match app.focus {
            Focus::Document => {
                "↑/↓: Scroll | PgUp/PgDn: Page | Home/End: Top/Bottom | Tab: Contents | q: Quit"
                    .to_string()
            }
            Focus::Toc => "↑/↓: Select | Enter: Go to heading | Tab: Document | q: Quit".to_string(),
        }
    };

    let help = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
