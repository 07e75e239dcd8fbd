//! The state machine bridging the scrolling document and its table of contents.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the reader
//! scrolls. Every change of scroll position or viewport size goes through [`AppState::refresh`],
//! which asks the observer for a batch of visibility reports and hands it to the table of
//! contents, so the current-heading marker always reflects what is on screen.

use crate::document::Document;
use crate::nav::LinkId;
use crate::observer::{Viewport, ViewportObserver};
use crate::resolver::Rule;
use crate::toc::{TableOfContents, Transition};
use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Which pane receives navigation keys.
pub enum Focus {
    /// Arrow keys scroll the document.
    Document,
    /// Arrow keys move the selection in the table of contents.
    Toc,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
/// One current-heading change observed while walking through the document.
pub struct WalkStep {
    /// Scroll offset at which the change happened.
    pub scroll: usize,
    /// Anchor of the heading that stopped being current.
    pub from: Option<String>,
    /// Anchor of the heading that became current.
    pub to: Option<String>,
    /// The resolver rule that fired.
    pub rule: Rule,
}

/// Session state for the pager.
pub struct AppState {
    /// The document being read.
    pub document: Document,
    /// Table of contents attached to the document's content root.
    pub toc: TableOfContents,
    /// Visibility reporter; absent when tracking is disabled.
    pub observer: Option<ViewportObserver>,
    /// First document row on screen.
    pub scroll: usize,
    /// Document rows that fit on screen.
    pub viewport_height: usize,
    /// Pane receiving navigation keys.
    pub focus: Focus,
    /// Highlighted entry in the table of contents pane.
    pub selected_link: usize,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
}

impl AppState {
    #[must_use]
    /// Initialises state at the top of the document.
    ///
    /// Call [`AppState::resize`] once the viewport size is known to deliver the first batch.
    pub fn new(
        document: Document,
        toc: TableOfContents,
        observer: Option<ViewportObserver>,
    ) -> Self {
        Self {
            document,
            toc,
            observer,
            scroll: 0,
            viewport_height: 0,
            focus: Focus::Document,
            selected_link: 0,
            message: None,
        }
    }

    #[must_use]
    /// Largest scroll offset that still fills the viewport.
    pub fn max_scroll(&self) -> usize {
        self.document
            .lines
            .len()
            .saturating_sub(self.viewport_height)
    }

    /// Delivers a visibility batch for the current viewport to the table of contents.
    pub fn refresh(&mut self) -> Option<Transition> {
        let observer = self.observer.as_mut()?;
        let batch = observer.observe(Viewport {
            top: self.scroll,
            height: self.viewport_height,
        });
        if batch.is_empty() {
            return None;
        }
        self.toc.handle_batch(&batch)
    }

    /// Updates the viewport height, keeping the scroll offset in range.
    pub fn resize(&mut self, height: usize) -> Option<Transition> {
        self.viewport_height = height;
        self.scroll = self.scroll.min(self.max_scroll());
        self.refresh()
    }

    /// Scrolls to an absolute row, clamped to the document.
    pub fn scroll_to(&mut self, row: usize) -> Option<Transition> {
        let row = row.min(self.max_scroll());
        if row == self.scroll {
            return None;
        }
        self.scroll = row;
        self.refresh()
    }

    /// Scrolls by a signed number of rows.
    pub fn scroll_by(&mut self, delta: isize) -> Option<Transition> {
        let row = if delta.is_negative() {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll.saturating_add(delta.unsigned_abs())
        };
        self.scroll_to(row)
    }

    /// Scrolls down by one screen.
    pub fn page_down(&mut self) -> Option<Transition> {
        self.scroll_to(self.scroll + self.viewport_height.max(1))
    }

    /// Scrolls up by one screen.
    pub fn page_up(&mut self) -> Option<Transition> {
        self.scroll_to(self.scroll.saturating_sub(self.viewport_height.max(1)))
    }

    /// Jumps to the first row.
    pub fn scroll_to_top(&mut self) -> Option<Transition> {
        self.scroll_to(0)
    }

    /// Jumps to the last full screen.
    pub fn scroll_to_bottom(&mut self) -> Option<Transition> {
        self.scroll_to(self.max_scroll())
    }

    /// Switches keyboard focus between the document and the table of contents.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Document => {
                if let Some(current) = self.toc.current() {
                    self.selected_link = current.link.0;
                }
                Focus::Toc
            }
            Focus::Toc => Focus::Document,
        };
    }

    /// Moves the table of contents selection down.
    pub fn select_next_link(&mut self) {
        if self.selected_link + 1 < self.toc.nav().len() {
            self.selected_link += 1;
        }
    }

    /// Moves the table of contents selection up.
    pub fn select_prev_link(&mut self) {
        self.selected_link = self.selected_link.saturating_sub(1);
    }

    /// Follows the selected link, scrolling its heading to the top of the viewport.
    pub fn follow_selected(&mut self) -> Option<Transition> {
        let entry = self.toc.registry().by_link(LinkId(self.selected_link))?;
        let row = self.document.heading(entry.target)?.rows.start;
        if let Some(link) = self.toc.nav().get(entry.link) {
            self.message = Some(link.href());
        }
        self.scroll_to(row)
    }

    #[must_use]
    /// Anchor of the heading with the given order, for display and output.
    pub fn anchor(&self, order: Option<usize>) -> Option<String> {
        let entry = self.toc.registry().entry(order?)?;
        self.toc.nav().get(entry.link).map(|l| l.anchor.clone())
    }

    /// Scrolls one row at a time to the bottom and back to the top, recording every change of
    /// current heading along the way.
    pub fn walk(&mut self, height: usize) -> Vec<WalkStep> {
        let mut steps = Vec::new();
        let mut record = |app: &Self, transition: Option<Transition>| {
            if let Some(t) = transition {
                steps.push(WalkStep {
                    scroll: app.scroll,
                    from: app.anchor(t.from),
                    to: app.anchor(t.to),
                    rule: t.rule,
                });
            }
        };

        let transition = self.resize(height);
        record(self, transition);
        while self.scroll < self.max_scroll() {
            let transition = self.scroll_by(1);
            record(self, transition);
        }
        while self.scroll > 0 {
            let transition = self.scroll_by(-1);
            record(self, transition);
        }

        steps
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
