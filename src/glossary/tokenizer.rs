//! Tokenizer module - Splits text into words and separator runs
//!
//! A token is either a maximal run of separator characters or a maximal run
//! of non-separator characters. Concatenating every token of a string in
//! order gives back the string unchanged.
//!
//! Usage:
//! ```rust,ignore
//! use crate::glossary::tokenizer::{next_token, SeparatorSet};
//!
//! let seps = SeparatorSet::default();
//! assert_eq!(next_token("abc de   ,f", 0, &seps), "abc");
//! assert_eq!(next_token("abc de   ,f", 6, &seps), "   ,");
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Separators used when none are configured: space, tab and comma
pub const DEFAULT_SEPARATORS: &str = " \t,";

/// The set of characters that delimit words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: BTreeSet<char>,
}

impl SeparatorSet {
    /// Build a set from every character of `chars` (duplicates collapse)
    pub fn from_chars(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::from_chars(DEFAULT_SEPARATORS)
    }
}

impl FromStr for SeparatorSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("separator set cannot be empty".to_string());
        }
        Ok(Self::from_chars(s))
    }
}

impl fmt::Display for SeparatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c.escape_debug())?;
        }
        Ok(())
    }
}

/// Return the word or separator run that starts at byte offset `position`
///
/// # Panics
/// Panics if `position` is not a character boundary strictly inside `text`.
pub fn next_token<'a>(text: &'a str, position: usize, separators: &SeparatorSet) -> &'a str {
    let rest = &text[position..];
    let mut chars = rest.char_indices();
    let (_, first) = chars
        .next()
        .expect("next_token requires position < text.len()");
    let want_separator = separators.contains(first);

    let end = chars
        .find(|&(_, c)| separators.contains(c) != want_separator)
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    &rest[..end]
}

/// Iterator over the tokens of a string, left to right
pub struct Tokens<'a, 's> {
    text: &'a str,
    position: usize,
    separators: &'s SeparatorSet,
}

impl<'a> Iterator for Tokens<'a, '_> {
    /// (byte offset, token)
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.text.len() {
            return None;
        }
        let start = self.position;
        let token = next_token(self.text, start, self.separators);
        self.position += token.len();
        Some((start, token))
    }
}

/// Tokenize `text` from the beginning
pub fn tokens<'a, 's>(text: &'a str, separators: &'s SeparatorSet) -> Tokens<'a, 's> {
    Tokens {
        text,
        position: 0,
        separators,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "abc de   ,f";

    #[test]
    fn test_word_at_start() {
        assert_eq!(next_token(TEXT, 0, &SeparatorSet::default()), "abc");
    }

    #[test]
    fn test_single_separator_before_word() {
        assert_eq!(next_token(TEXT, 3, &SeparatorSet::default()), " ");
    }

    #[test]
    fn test_separator_run_from_middle() {
        assert_eq!(next_token(TEXT, 7, &SeparatorSet::default()), "  ,");
    }

    #[test]
    fn test_trailing_single_char() {
        assert_eq!(next_token(TEXT, 10, &SeparatorSet::default()), "f");
        assert_eq!(next_token("a,", 1, &SeparatorSet::default()), ",");
    }

    #[test]
    fn test_word_in_middle() {
        assert_eq!(next_token(TEXT, 1, &SeparatorSet::default()), "bc");
    }

    #[test]
    fn test_multibyte_characters() {
        let seps = SeparatorSet::default();
        let text = "café, naïve";
        assert_eq!(next_token(text, 0, &seps), "café");
        let after = "café".len();
        assert_eq!(next_token(text, after, &seps), ", ");
        assert_eq!(next_token(text, after + 2, &seps), "naïve");
    }

    #[test]
    fn test_custom_separators() {
        let seps = SeparatorSet::from_chars(";-");
        assert_eq!(next_token("a b-c", 0, &seps), "a b");
        assert_eq!(next_token("a b-;c", 3, &seps), "-;");
    }

    #[test]
    fn test_token_is_maximal_and_homogeneous() {
        let seps = SeparatorSet::default();
        let text = "x,, y\tzz  w";
        for position in 0..text.len() {
            let token = next_token(text, position, &seps);
            assert!(!token.is_empty());
            assert!(text[position..].starts_with(token));

            let kind = seps.contains(token.chars().next().unwrap());
            assert!(token.chars().all(|c| seps.contains(c) == kind));

            if let Some(next) = text[position + token.len()..].chars().next() {
                assert_ne!(seps.contains(next), kind, "token {:?} not maximal", token);
            }
        }
    }

    #[test]
    fn test_tokens_reassemble_input() {
        let seps = SeparatorSet::default();
        let text = "  a region,  or\tgroup ";
        let joined: String = tokens(text, &seps).map(|(_, t)| t).collect();
        assert_eq!(joined, text);

        let offsets: Vec<usize> = tokens(text, &seps).map(|(i, _)| i).collect();
        assert_eq!(offsets[0], 0);
        assert_eq!(offsets[1], 2);
    }

    #[test]
    fn test_tokens_empty_text() {
        assert_eq!(tokens("", &SeparatorSet::default()).count(), 0);
    }

    #[test]
    fn test_separator_set_from_chars() {
        let set = SeparatorSet::from_chars("abab*,:");
        assert_eq!(set.len(), 5);
        assert!(set.contains('*'));
        assert!(set.contains(':'));
        assert!(!set.contains('c'));
    }

    #[test]
    fn test_separator_set_from_str() {
        let set: SeparatorSet = " ,".parse().unwrap();
        assert!(set.contains(' '));
        assert!(set.contains(','));
        assert!("".parse::<SeparatorSet>().is_err());
    }

    #[test]
    fn test_separator_set_display() {
        let set = SeparatorSet::default();
        assert_eq!(set.to_string(), "\\t ,");
    }
}
