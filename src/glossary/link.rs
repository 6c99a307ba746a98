//! Cross-link substitution
//!
//! Rewrites every token of a definition that names a known term into an
//! anchor pointing at that term's page. Tokens are taken from the original
//! definition, so inserted markup is never rescanned.

use super::tokenizer::{tokens, SeparatorSet};
use super::Glossary;
use crate::core::paths::page_file_name;

/// Anchor markup for a term
pub fn term_link(term: &str) -> String {
    format!("<a href=\"{}\">{}</a>", page_file_name(term), term)
}

/// Linkify a definition and report how many links were inserted
pub fn linkify_counted(
    definition: &str,
    glossary: &Glossary,
    separators: &SeparatorSet,
) -> (String, usize) {
    let mut output = String::with_capacity(definition.len());
    let mut links = 0usize;

    for (_, token) in tokens(definition, separators) {
        if glossary.contains_term(token) {
            output.push_str(&term_link(token));
            links += 1;
        } else {
            output.push_str(token);
        }
    }

    (output, links)
}

/// Linkify a definition
#[allow(dead_code)]
pub fn linkify(definition: &str, glossary: &Glossary, separators: &SeparatorSet) -> String {
    linkify_counted(definition, glossary, separators).0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glossary(terms: &[&str]) -> Glossary {
        terms.iter().map(|t| (*t, "def")).collect()
    }

    #[test]
    fn test_single_occurrence() {
        let g = glossary(&["word", "letters"]);
        let html = linkify("what make up a word", &g, &SeparatorSet::default());
        assert_eq!(html, "what make up a <a href=\"word.html\">word</a>");
    }

    #[test]
    fn test_no_terms_is_identity() {
        let g = glossary(&["word"]);
        let text = "  nothing,, to\tsee here ";
        let (html, links) = linkify_counted(text, &g, &SeparatorSet::default());
        assert_eq!(html, text);
        assert_eq!(links, 0);
    }

    #[test]
    fn test_preserves_separator_runs() {
        let g = glossary(&["term"]);
        let (html, links) = linkify_counted("a,\t term ,, b", &g, &SeparatorSet::default());
        assert_eq!(html, "a,\t <a href=\"term.html\">term</a> ,, b");
        assert_eq!(links, 1);
    }

    #[test]
    fn test_multiple_and_adjacent_occurrences() {
        let g = glossary(&["a", "b"]);
        let (html, links) = linkify_counted("a,b a", &g, &SeparatorSet::default());
        assert_eq!(
            html,
            "<a href=\"a.html\">a</a>,<a href=\"b.html\">b</a> <a href=\"a.html\">a</a>"
        );
        assert_eq!(links, 3);
    }

    #[test]
    fn test_term_that_appears_in_markup_is_not_rescanned() {
        // "href" and "a" occur inside the inserted anchor
        let g = glossary(&["a", "href", "html"]);
        let html = linkify("a", &g, &SeparatorSet::default());
        assert_eq!(html, "<a href=\"a.html\">a</a>");
    }

    #[test]
    fn test_partial_and_case_mismatch_not_linked() {
        let g = glossary(&["word"]);
        let text = "words Word sword word.";
        assert_eq!(linkify(text, &g, &SeparatorSet::default()), text);
    }

    #[test]
    fn test_self_reference_is_linked() {
        let g = glossary(&["loop"]);
        assert_eq!(
            linkify("see loop", &g, &SeparatorSet::default()),
            "see <a href=\"loop.html\">loop</a>"
        );
    }

    #[test]
    fn test_no_html_escaping() {
        let g = glossary(&["x"]);
        assert_eq!(
            linkify("<b>&amp; x", &g, &SeparatorSet::default()),
            "<b>&amp; <a href=\"x.html\">x</a>"
        );
    }

    #[test]
    fn test_custom_separators_change_boundaries() {
        let g = glossary(&["word"]);
        let seps = SeparatorSet::from_chars(" .");
        assert_eq!(
            linkify("a word.", &g, &seps),
            "a <a href=\"word.html\">word</a>."
        );
    }

    #[test]
    fn test_empty_definition() {
        assert_eq!(linkify("", &glossary(&["x"]), &SeparatorSet::default()), "");
    }
}
