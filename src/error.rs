//! Error type shared by the document loader, configuration and front end.
//!
//! The tracking core (registry, tracker, resolver, sink) never fails: bad input there is skipped
//! or leaves the widget inert. Only the surrounding plumbing produces these errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Failures raised while loading documents, configuration or writing output.
pub enum Error {
    #[error("I/O error: {0}")]
    /// Reading a document or config file, or driving the terminal, failed.
    Io(#[from] std::io::Error),

    #[error("Failed to load grammar: {0}")]
    /// The tree-sitter grammar is incompatible with the linked runtime.
    Language(#[from] tree_sitter::LanguageError),

    #[error("Invalid heading query: {0}")]
    /// A format's heading query did not compile.
    Query(#[from] tree_sitter::QueryError),

    #[error("Could not parse '{}'", .0.display())]
    /// The parser gave up on a document.
    Parse(PathBuf),

    #[error("Config error: {0}")]
    /// The config file exists but is not valid TOML for [`crate::config::Config`].
    Config(String),

    #[error("JSON error: {0}")]
    /// Serialising walk output failed.
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
