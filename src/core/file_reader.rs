//! Input file reading
//!
//! Provides consistent handling for:
//! - Non-UTF-8 input (lossy or strict)
//! - A leading byte order mark

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

use crate::core::model::{Warning, WarningCode};

const UTF8_BOM: &str = "\u{feff}";

/// Strategy for handling non-UTF-8 content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingStrategy {
    /// Replace invalid sequences with U+FFFD and warn
    #[default]
    Lossy,
    /// Fail on invalid sequences
    Strict,
}

/// Text read from the input file
#[derive(Debug, Clone)]
pub struct InputText {
    pub content: String,

    /// Whether lossy conversion was used
    pub lossy_conversion: bool,

    pub warnings: Vec<Warning>,
}

/// Read the whole input file as text
pub fn read_input(path: &Path, strategy: EncodingStrategy) -> Result<InputText> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read input file: {:?}", path))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input");

    let (mut content, lossy_conversion, warnings) = match String::from_utf8(bytes) {
        Ok(content) => (content, false, Vec::new()),
        Err(err) => match strategy {
            EncodingStrategy::Strict => {
                bail!(
                    "Input file {:?} is not valid UTF-8 (first invalid byte at offset {})",
                    path,
                    err.utf8_error().valid_up_to()
                );
            }
            EncodingStrategy::Lossy => {
                warn!(path = %path.display(), "invalid UTF-8 replaced");
                let content = String::from_utf8_lossy(err.as_bytes()).into_owned();
                let warning = Warning::new(
                    WarningCode::LossyConversion,
                    "Lossy UTF-8 conversion applied (some characters replaced)",
                );
                (content, true, vec![warning])
            }
        },
    };

    if content.starts_with(UTF8_BOM) {
        content.replace_range(..UTF8_BOM.len(), "");
    }

    Ok(InputText {
        content,
        lossy_conversion,
        warnings,
    })
}
