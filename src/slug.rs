//! Label generation for headings that carry no identifier of their own.
//!
//! A heading needs an identifier so its navigation link has somewhere to point. Headings written
//! with an explicit `{#id}` keep it; the rest get an ASCII slug
//! derived from their text.

use std::collections::HashMap;

/// Produces identifiers for heading text.
pub trait Slugger {
    /// Derive an identifier from heading text, or `None` if the text has nothing usable.
    fn slug(&mut self, text: &str) -> Option<String>;

    /// Record an identifier already present in the document so generated ones avoid it.
    fn reserve(&mut self, _id: &str) {}
}

#[derive(Default, Debug)]
/// The `slug` crate's slugify plus numeric suffixes so every identifier handed out is unique.
pub struct DefaultSlugger {
    seen: HashMap<String, usize>,
}

impl DefaultSlugger {
    #[must_use]
    /// Creates a slugger with no identifiers reserved.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Slugger for DefaultSlugger {
    fn slug(&mut self, text: &str) -> Option<String> {
        let base = ::slug::slugify(text);
        if base.is_empty() {
            return None;
        }

        let mut candidate = base.clone();
        if let Some(&used) = self.seen.get(&base) {
            let mut suffix = used;
            loop {
                suffix += 1;
                candidate = format!("{base}-{suffix}");
                if !self.seen.contains_key(&candidate) {
                    break;
                }
            }
            self.seen.insert(base, suffix);
        }
        self.seen.insert(candidate.clone(), 0);
        Some(candidate)
    }

    fn reserve(&mut self, id: &str) {
        self.seen.entry(id.to_string()).or_insert(0);
    }
}

#[cfg(test)]
#[path = "tests/slug.rs"]
mod tests;
