//! tocspy: a table of contents that follows the reader.
//!
//! Given a markdown document, tocspy lists its headings and keeps exactly one of them marked as
//! current: the one whose section the reader is looking at. The pieces, leaves first:
//!
//! - [`document`] parses the source and resolves the content root.
//! - [`registry`] catalogues the tracked headings in document order.
//! - [`tracker`] accumulates which headings intersect the activation band.
//! - [`resolver`] decides the next current heading.
//! - [`sink`] moves the current marker between navigation links.
//! - [`toc`] ties them together per content root; [`observer`] feeds it from a viewport.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod document;
pub mod error;
pub mod formats;
pub mod nav;
pub mod observer;
pub mod registry;
pub mod resolver;
pub mod sink;
pub mod slug;
pub mod toc;
pub mod tracker;
pub mod ui;

pub use error::{Error, Result};
