//! Configuration to acknowledge reader preferences as well as set defaults.
//!
//! Specifically, we try to find a tocspy.toml (or the file passed with `--config`), and if present
//! we load settings from there. This provides the heading level to track, the activation band
//! and the width of the table of contents pane.

use crate::error::{Error, Result};
use crate::observer::ActivationBand;
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "tocspy.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from tocspy.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 2)]
    /// Heading level listed in the table of contents.
    pub heading_level: usize,
    #[facet(default = 0)]
    /// Percentage of the viewport excluded from the activation band at the top.
    pub inset_top_percent: u16,
    #[facet(default = 25)]
    /// Percentage of the viewport excluded from the activation band at the bottom.
    pub inset_bottom_percent: u16,
    #[facet(default = 100)]
    /// Percentage of a heading that must be inside the band for it to count as visible.
    pub threshold_percent: u16,
    #[facet(default = 32)]
    /// Width of the table of contents pane in columns.
    pub toc_width: u16,
    #[facet(default = true)]
    /// Whether to follow the scroll position at all.
    pub tracking: bool,
}

impl Config {
    /// Load configuration from `path`, or from tocspy.toml if no path is given.
    ///
    /// A missing tocspy.toml yields the defaults; a missing explicit path is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::parse(&fs::read_to_string(path)?);
        }
        match fs::read_to_string(DEFAULT_CONFIG_FILE) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::parse(""),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse configuration from TOML text, filling unset fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration.
    pub fn parse(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config(e.to_string()))
    }

    #[must_use]
    /// The activation band described by this configuration.
    pub fn band(&self) -> ActivationBand {
        ActivationBand {
            inset_top: self.inset_top_percent,
            inset_bottom: self.inset_bottom_percent,
            threshold: self.threshold_percent,
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
