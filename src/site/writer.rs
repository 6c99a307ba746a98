//! Site writer - Writes the index and term pages into the output directory
//!
//! Pages are written one at a time: each file is created, written through a
//! buffer, flushed and dropped before the next one is opened.

use anyhow::{bail, Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::core::model::{Meta, ReportItem};
use crate::core::paths::{index_path, normalize_path, page_path};
use crate::core::util::hash_bytes;
use crate::glossary::sort::sort_terms;
use crate::glossary::tokenizer::SeparatorSet;
use crate::glossary::Glossary;
use crate::site::html::{render_index, render_term_page_counted, Layout};

/// Options for writing a site
#[derive(Debug, Clone, Default)]
pub struct SiteOptions {
    pub separators: SeparatorSet,
    pub layout: Layout,
    /// Create the output directory if it does not exist
    pub create_dir: bool,
}

/// Make sure the output directory is usable
pub fn prepare_output_dir(out_dir: &Path, create: bool) -> Result<()> {
    if out_dir.is_dir() {
        return Ok(());
    }
    if out_dir.exists() {
        bail!("Output path {:?} is not a directory", out_dir);
    }
    if !create {
        bail!(
            "Output folder {:?} does not exist (pass --create-dir to create it)",
            out_dir
        );
    }
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output folder: {:?}", out_dir))?;
    info!(path = %out_dir.display(), "created output folder");
    Ok(())
}

/// Write one page and return its metadata
fn write_page(path: &Path, html: &str) -> Result<Meta> {
    let file =
        File::create(path).with_context(|| format!("Failed to create page: {:?}", path))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(html.as_bytes())
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write page: {:?}", path))?;
    debug!(path = %path.display(), bytes = html.len(), "wrote page");

    Ok(Meta {
        size: Some(html.len() as u64),
        hash: Some(hash_bytes(html.as_bytes())),
        links: None,
    })
}

/// Write the index page followed by every term page in sorted order
pub fn write_site(
    glossary: &Glossary,
    out_dir: &Path,
    options: &SiteOptions,
) -> Result<Vec<ReportItem>> {
    prepare_output_dir(out_dir, options.create_dir)?;

    let terms = sort_terms(glossary);
    let mut items = Vec::with_capacity(terms.len() + 1);

    let path = index_path(out_dir);
    let meta = write_page(&path, &render_index(&terms, options.layout))?;
    items.push(ReportItem::index(normalize_path(&path)).with_meta(meta));

    for term in &terms {
        let definition = glossary.definition(term).unwrap_or_default();
        let (html, links) = render_term_page_counted(
            term,
            definition,
            glossary,
            &options.separators,
            options.layout,
        );

        let path = page_path(out_dir, term);
        let meta = write_page(&path, &html)?;
        items.push(
            ReportItem::term(*term, normalize_path(&path)).with_meta(Meta {
                links: Some(links),
                ..meta
            }),
        );
    }

    info!(pages = items.len(), dir = %out_dir.display(), "site written");
    Ok(items)
}
