//! Term ordering for the index page

use super::Glossary;

/// All terms of the glossary in ascending code-point order
///
/// `str` ordering compares UTF-8 bytes, which matches code-point order, so
/// uppercase letters sort before lowercase ones.
pub fn sort_terms(glossary: &Glossary) -> Vec<&str> {
    let mut terms: Vec<&str> = glossary.terms().collect();
    terms.sort_unstable();
    terms
}
