//! tocspy: read a markdown document with a table of contents that tracks your position.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use tocspy::app_state::{AppState, Focus};
use tocspy::document::{ContentRoot, Document};
use tocspy::formats::markdown::MarkdownFormat;
use tocspy::observer::ViewportObserver;
use tocspy::slug::DefaultSlugger;
use tocspy::toc::TableOfContents;
use tocspy::{config, ui, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tocspy")]
#[command(about = "Scroll-tracking table of contents for markdown", long_about = None)]
struct Args {
    /// Markdown file to read
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Identifier of the heading whose section the contents should cover
    #[arg(long = "for", value_name = "ID")]
    for_id: Option<String>,

    /// Heading level to list
    #[arg(long, short = 'l')]
    level: Option<usize>,

    /// Render a static list without following the scroll position
    #[arg(long)]
    no_tracking: bool,

    /// Walk the document top to bottom and back, printing transitions as JSON lines
    #[arg(long)]
    walk: bool,

    /// Viewport height used by --walk
    #[arg(long, default_value_t = 20)]
    height: usize,

    /// Config file to load instead of tocspy.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write tracing output to this file (filter with TOCSPY_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_tracing(File::create(path)?);
    }

    let mut cfg = config::Config::load(args.config.as_deref())?;

    // Override config with command line args
    if let Some(level) = args.level {
        cfg.heading_level = level;
    }
    if args.no_tracking {
        cfg.tracking = false;
    }

    let document = Document::load(&args.path, &MarkdownFormat)?;
    let root = ContentRoot::resolve(&document, args.for_id.as_deref(), cfg.heading_level);
    let mut slugger = DefaultSlugger::new();
    let Some(toc) = TableOfContents::attach(Some(&root), &mut slugger, cfg.tracking) else {
        return Ok(());
    };
    let observer = cfg
        .tracking
        .then(|| ViewportObserver::for_root(cfg.band(), &root));

    if toc.registry().is_empty() {
        tracing::info!(level = cfg.heading_level, "no headings to track");
    }

    let mut app = AppState::new(document, toc, observer);

    if args.walk {
        let mut stdout = io::stdout().lock();
        for step in app.walk(args.height) {
            writeln!(stdout, "{}", serde_json::to_string(&step)?)?;
        }
        return Ok(());
    }

    run_tui(app, &cfg)
}

fn init_tracing(file: File) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("TOCSPY_LOG")
                .unwrap_or_else(|_| "info,tocspy=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
}

fn run_tui(mut app: AppState, cfg: &config::Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, cfg);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    cfg: &config::Config,
) -> Result<()> {
    let size = terminal.size()?;
    app.resize(ui::document_rows(
        Rect::new(0, 0, size.width, size.height),
        cfg,
    ));

    loop {
        terminal.draw(|f| ui::draw(f, app, cfg))?;

        match event::read()? {
            Event::Resize(width, height) => {
                app.resize(ui::document_rows(Rect::new(0, 0, width, height), cfg));
            }
            Event::Key(key) => {
                app.message = None;
                match (app.focus, key.code) {
                    (_, KeyCode::Char('q') | KeyCode::Esc) => return Ok(()),
                    (_, KeyCode::Tab) => app.toggle_focus(),
                    (_, KeyCode::PageDown | KeyCode::Char(' ')) => {
                        app.page_down();
                    }
                    (_, KeyCode::PageUp) => {
                        app.page_up();
                    }
                    (_, KeyCode::Home | KeyCode::Char('g')) => {
                        app.scroll_to_top();
                    }
                    (_, KeyCode::End | KeyCode::Char('G')) => {
                        app.scroll_to_bottom();
                    }
                    (Focus::Document, KeyCode::Down | KeyCode::Char('j')) => {
                        app.scroll_by(1);
                    }
                    (Focus::Document, KeyCode::Up | KeyCode::Char('k')) => {
                        app.scroll_by(-1);
                    }
                    (Focus::Toc, KeyCode::Down | KeyCode::Char('j')) => app.select_next_link(),
                    (Focus::Toc, KeyCode::Up | KeyCode::Char('k')) => app.select_prev_link(),
                    (Focus::Toc, KeyCode::Enter) => {
                        app.follow_selected();
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}
