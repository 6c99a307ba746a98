//! Entry parsing module
//!
//! Parses term/definition entries from plain text:
//! ```text
//! term
//! first definition line
//! more definition lines...
//!
//! next-term
//! ...
//! ```
//! Entries are separated by one or more blank lines.

use tracing::{debug, warn};

use super::{Entry, Glossary, GlossaryError};
use crate::core::model::{Warning, WarningCode};

/// Result of parsing an input
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub glossary: Glossary,
    /// Non-fatal findings (duplicate terms)
    pub warnings: Vec<Warning>,
}

/// A line is blank when it holds nothing but whitespace
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Parse entries from already-split lines
pub fn parse_entries<I, S>(lines: I) -> Result<ParseResult, GlossaryError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut glossary = Glossary::new();
    let mut warnings = Vec::new();
    let mut lines = lines
        .into_iter()
        .enumerate()
        .map(|(i, l)| (i + 1, l)); // 1-indexed

    while let Some((line_num, line)) = lines.next() {
        let line = line.as_ref();
        if is_blank(line) {
            continue;
        }

        let term = line.to_string();
        let mut definition = match lines.next() {
            Some((_, first)) if !is_blank(first.as_ref()) => first.as_ref().to_string(),
            _ => {
                return Err(GlossaryError::MissingDefinition {
                    term,
                    line: line_num,
                })
            }
        };

        for (_, more) in lines.by_ref() {
            let more = more.as_ref();
            if is_blank(more) {
                break;
            }
            definition.push(' ');
            definition.push_str(more);
        }

        debug!(term = %term, line = line_num, "parsed entry");

        let entry = Entry {
            term,
            definition,
            line: line_num,
        };
        if let Some(replaced) = glossary.insert(entry) {
            warn!(term = %replaced.term, first = replaced.line, line = line_num, "duplicate term");
            warnings.push(
                Warning::new(
                    WarningCode::DuplicateTerm,
                    format!(
                        "term redefined; the entry from line {} was replaced",
                        replaced.line
                    ),
                )
                .with_term(replaced.term, line_num),
            );
        }
    }

    Ok(ParseResult { glossary, warnings })
}

/// Parse entries from a content string
pub fn parse_content(content: &str) -> Result<ParseResult, GlossaryError> {
    parse_entries(content.lines())
}
