//! Glossary module - Terms, definitions and the cross-linking between them
//!
//! Provides:
//! - tokenizer: Word / separator-run splitting
//! - parse: Term and definition extraction from input lines
//! - sort: Alphabetical term ordering
//! - link: Hyperlink substitution inside definitions
//! - lint: File-name safety checks for terms

pub mod link;
pub mod lint;
pub mod parse;
pub mod sort;
pub mod tokenizer;

use std::collections::HashMap;
use thiserror::Error;

/// Errors that make an input unusable for rendering
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlossaryError {
    /// A term line was not followed by a definition line
    #[error("term {term:?} on line {line} has no definition")]
    MissingDefinition { term: String, line: usize },

    /// A term cannot be used as an output file name
    #[error("term {term:?} on line {line} cannot be used as a page name: {reason}")]
    UnsafeTermName {
        term: String,
        line: usize,
        reason: String,
    },
}

/// A single term and its joined definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub term: String,
    pub definition: String,
    /// 1-indexed input line of the term
    pub line: usize,
}

/// Mapping from term to entry, built once per run
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    entries: HashMap<String, Entry>,
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the entry it replaced (last write wins)
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        self.entries.insert(entry.term.clone(), entry)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    pub fn definition(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(|e| e.definition.as_str())
    }

    #[allow(dead_code)]
    pub fn get(&self, term: &str) -> Option<&Entry> {
        self.entries.get(term)
    }

    /// Terms in unspecified order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Into<String>, D: Into<String>> FromIterator<(T, D)> for Glossary {
    fn from_iter<I: IntoIterator<Item = (T, D)>>(iter: I) -> Self {
        let mut glossary = Glossary::new();
        for (line, (term, definition)) in iter.into_iter().enumerate() {
            glossary.insert(Entry {
                term: term.into(),
                definition: definition.into(),
                line: line + 1,
            });
        }
        glossary
    }
}
