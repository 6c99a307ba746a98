//! Run Report Model
//!
//! Every page written and every warning raised during a run is mapped to a
//! `ReportItem` before rendering output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of report item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Index,
    Term,
    Warning,
}

/// Warning codes raised while reading, parsing or linting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningCode {
    /// A later entry replaced an earlier one with the same term
    DuplicateTerm,
    /// Invalid UTF-8 in the input was replaced
    LossyConversion,
    /// Term contains characters some file systems reject
    TermFilenamePortability,
    /// Term has leading or trailing whitespace
    TermWhitespace,
}

impl WarningCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::DuplicateTerm => "DUPLICATE_TERM",
            WarningCode::LossyConversion => "LOSSY_CONVERSION",
            WarningCode::TermFilenamePortability => "TERM_FILENAME_PORTABILITY",
            WarningCode::TermWhitespace => "TERM_WHITESPACE",
        }
    }
}

/// A structured warning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub code: WarningCode,

    pub message: String,

    /// Term the warning is about (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,

    /// 1-indexed input line (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Warning {
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            term: None,
            line: None,
        }
    }

    pub fn with_term(mut self, term: impl Into<String>, line: usize) -> Self {
        self.term = Some(term.into());
        self.line = Some(line);
        self
    }
}

/// Metadata for a written page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Page size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// XXH3 hash of the page content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Number of cross-links inserted (term pages only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<usize>,
}

/// One line of the run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportItem {
    pub kind: Kind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,

    /// Written file path, using '/' as separator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    pub meta: Meta,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Warning>,
}

impl ReportItem {
    /// Create an index page item
    pub fn index(path: impl Into<String>) -> Self {
        Self {
            kind: Kind::Index,
            term: None,
            path: Some(path.into()),
            meta: Meta::default(),
            warnings: Vec::new(),
        }
    }

    /// Create a term page item
    pub fn term(term: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            kind: Kind::Term,
            term: Some(term.into()),
            path: Some(path.into()),
            meta: Meta::default(),
            warnings: Vec::new(),
        }
    }

    /// Wrap a warning as a standalone item
    pub fn warning(warning: Warning) -> Self {
        Self {
            kind: Kind::Warning,
            term: warning.term.clone(),
            path: None,
            meta: Meta::default(),
            warnings: vec![warning],
        }
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }
}

/// Everything a run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub items: Vec<ReportItem>,
}

impl Report {
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ReportItem) {
        self.items.push(item);
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = ReportItem>) {
        self.items.extend(items);
    }

    /// Number of pages written (index included)
    pub fn page_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| i.kind != Kind::Warning)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| i.kind == Kind::Warning)
            .count()
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_term_item() {
        let item = ReportItem::term("word", "out/word.html").with_meta(Meta {
            size: Some(10),
            hash: None,
            links: Some(2),
        });
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "term");
        assert_eq!(json["term"], "word");
        assert_eq!(json["meta"]["links"], 2);
        assert!(json["meta"].get("hash").is_none());
        assert!(json.get("warnings").is_none());
    }

    #[test]
    fn test_serialize_warning_code() {
        let item = ReportItem::warning(
            Warning::new(WarningCode::DuplicateTerm, "dup").with_term("word", 5),
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "warning");
        assert_eq!(json["warnings"][0]["code"], "DUPLICATE_TERM");
        assert_eq!(json["warnings"][0]["line"], 5);
        assert_eq!(
            WarningCode::TermFilenamePortability.as_str(),
            "TERM_FILENAME_PORTABILITY"
        );
    }

    #[test]
    fn test_report_counts() {
        let mut report = Report::new();
        report.push(ReportItem::index("index.html"));
        report.push(ReportItem::term("a", "a.html"));
        report.push(ReportItem::warning(Warning::new(
            WarningCode::TermWhitespace,
            "x",
        )));
        assert_eq!(report.page_count(), 2);
        assert_eq!(report.warning_count(), 1);
    }
}
