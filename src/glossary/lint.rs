//! Term lint module
//!
//! Every term becomes a file name, so terms are checked before any page is
//! written. Terms that would escape the output directory or clobber the index
//! are rejected; terms that only some file systems reject produce warnings.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Entry, Glossary, GlossaryError};
use crate::core::model::{Warning, WarningCode};

/// Characters that are rejected by common non-Unix file systems
static NON_PORTABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[<>:"|?*\x00-\x1F\x7F]|[ .]$"#).expect("Invalid NON_PORTABLE_RE regex"));

/// Leading or trailing whitespace
static EDGE_WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s|\s$").expect("Invalid EDGE_WHITESPACE_RE regex"));

/// Reason a term can never be written, if any
fn unsafe_reason(term: &str) -> Option<&'static str> {
    if term.contains('/') || term.contains('\\') {
        Some("contains a path separator")
    } else if term.contains('\0') {
        Some("contains a NUL character")
    } else if term == "." || term == ".." {
        Some("is a relative directory name")
    } else if term == "index" {
        Some("would overwrite the index page")
    } else {
        None
    }
}

/// Check a single entry
pub fn lint_entry(entry: &Entry) -> Result<Vec<Warning>, GlossaryError> {
    if let Some(reason) = unsafe_reason(&entry.term) {
        return Err(GlossaryError::UnsafeTermName {
            term: entry.term.clone(),
            line: entry.line,
            reason: reason.to_string(),
        });
    }

    let mut warnings = Vec::new();

    if NON_PORTABLE_RE.is_match(&entry.term) {
        warnings.push(
            Warning::new(
                WarningCode::TermFilenamePortability,
                "term contains characters that some file systems reject",
            )
            .with_term(&entry.term, entry.line),
        );
    }

    if EDGE_WHITESPACE_RE.is_match(&entry.term) {
        warnings.push(
            Warning::new(
                WarningCode::TermWhitespace,
                "term has leading or trailing whitespace",
            )
            .with_term(&entry.term, entry.line),
        );
    }

    Ok(warnings)
}

/// Check every term, failing on the first unsafe one (lowest line first)
pub fn lint_glossary(glossary: &Glossary) -> Result<Vec<Warning>, GlossaryError> {
    let mut entries: Vec<&Entry> = glossary.entries().collect();
    entries.sort_by_key(|e| e.line);

    let mut warnings = Vec::new();
    for entry in entries {
        warnings.extend(lint_entry(entry)?);
    }
    Ok(warnings)
}
