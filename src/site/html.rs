//! HTML page rendering
//!
//! Pages are fixed boilerplate around the term list or the linkified
//! definition. Nothing is escaped.

use std::str::FromStr;

use crate::core::paths::{page_file_name, INDEX_FILE_NAME};
use crate::glossary::link::linkify_counted;
use crate::glossary::tokenizer::SeparatorSet;
use crate::glossary::Glossary;

/// Page layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Every element back to back, no whitespace between tags
    #[default]
    Compact,
    /// One element per line, two-space indentation
    Indented,
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(Layout::Compact),
            "indented" | "pretty" => Ok(Layout::Indented),
            _ => Err(format!("Unknown layout: {} (expected compact or indented)", s)),
        }
    }
}

/// Accumulates page lines according to the layout
struct PageBuilder {
    layout: Layout,
    html: String,
}

impl PageBuilder {
    fn new(layout: Layout) -> Self {
        Self {
            layout,
            html: String::new(),
        }
    }

    fn line(&mut self, depth: usize, text: &str) -> &mut Self {
        match self.layout {
            Layout::Compact => self.html.push_str(text),
            Layout::Indented => {
                for _ in 0..depth {
                    self.html.push_str("  ");
                }
                self.html.push_str(text);
                self.html.push('\n');
            }
        }
        self
    }

    fn head(&mut self, title: &str) -> &mut Self {
        self.line(0, "<html>")
            .line(1, "<head>")
            .line(2, &format!("<title>{}</title>", title))
            .line(1, "</head>")
            .line(1, "<body>")
    }

    fn tail(&mut self) -> &mut Self {
        self.line(1, "</body>").line(0, "</html>")
    }

    fn finish(self) -> String {
        self.html
    }
}

/// Render the index page listing `terms` in the given order
pub fn render_index(terms: &[&str], layout: Layout) -> String {
    let mut page = PageBuilder::new(layout);
    page.head("Glossary")
        .line(2, "<h2>Glossary</h2>")
        .line(2, "<hr />")
        .line(2, "<h3>Index</h3>")
        .line(2, "<ul>");
    for term in terms {
        page.line(
            3,
            &format!("<li><a href=\"{}\">{}</a></li>", page_file_name(term), term),
        );
    }
    page.line(2, "</ul>").tail();
    page.finish()
}

/// Render a term page; also returns the number of cross-links inserted
pub fn render_term_page_counted(
    term: &str,
    definition: &str,
    glossary: &Glossary,
    separators: &SeparatorSet,
    layout: Layout,
) -> (String, usize) {
    let (body, links) = linkify_counted(definition, glossary, separators);

    let mut page = PageBuilder::new(layout);
    page.head(term)
        .line(
            2,
            &format!("<h2><b><i><font color=\"red\">{}</font></i></b></h2>", term),
        )
        .line(2, &format!("<blockquote>{}</blockquote>", body))
        .line(2, "<hr />")
        .line(
            2,
            &format!("<p>Return to <a href=\"{}\">index</a><p>", INDEX_FILE_NAME),
        )
        .tail();
    (page.finish(), links)
}

/// Render a term page
#[allow(dead_code)]
pub fn render_term_page(
    term: &str,
    definition: &str,
    glossary: &Glossary,
    separators: &SeparatorSet,
    layout: Layout,
) -> String {
    render_term_page_counted(term, definition, glossary, separators, layout).0
}
