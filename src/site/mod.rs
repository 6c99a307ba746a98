//! Site module - HTML output for a glossary
//!
//! Provides:
//! - html: Index and term page rendering
//! - writer: Writing pages into the output directory

pub mod html;
pub mod writer;
