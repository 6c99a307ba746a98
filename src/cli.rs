//! CLI module - Command-line interface definition and run orchestration

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing::{debug, warn};

use crate::core::file_reader::{read_input, EncodingStrategy};
use crate::core::model::{Report, ReportItem};
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::glossary::lint::lint_glossary;
use crate::glossary::parse::parse_content;
use crate::glossary::tokenizer::{SeparatorSet, DEFAULT_SEPARATORS};
use crate::site::html::Layout;
use crate::site::writer::{write_site, SiteOptions};

/// glossgen - build cross-linked HTML glossary pages from a plain-text term list.
#[derive(Parser, Debug)]
#[command(name = "glossgen")]
#[command(
    author,
    version,
    about,
    long_about = r#"glossgen reads a text file of term/definition entries and writes an
index.html plus one TERM.html page per term into an output folder. Whenever a
definition mentions another term, the word becomes a link to that term's page.

Input format:
    term
    definition line
    more definition lines...
    (blank line)
    next-term
    ...

If INPUT or OUTPUT_DIR is omitted you are prompted for it.

A report of the pages written is printed to stdout (default: jsonl).

Examples:
    glossgen terms.txt site
    glossgen terms.txt site --layout indented --create-dir
    glossgen --separators " ,;." terms.txt site --format md
"#
)]
pub struct Cli {
    /// Input glossary file.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Folder the HTML pages are written into.
    #[arg(value_name = "OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Characters that separate words in definitions.
    #[arg(
        long,
        env = "GLOSSGEN_SEPARATORS",
        default_value = DEFAULT_SEPARATORS,
        value_name = "CHARS",
        long_help = "Characters that separate words when looking for terms inside definitions.\n\n\
Every character of the value is a separator. The default is space, tab and comma."
    )]
    pub separators: SeparatorSet,

    /// HTML layout (compact/indented).
    #[arg(
        long,
        default_value = "compact",
        value_parser = ["compact", "indented"],
        value_name = "LAYOUT",
        long_help = "Select the HTML layout of the generated pages.\n\n\
Supported values:\n\
- compact (default): tags back to back on a single line\n\
- indented: one element per line with two-space indentation"
    )]
    pub layout: String,

    /// Create the output folder if it does not exist.
    #[arg(long)]
    pub create_dir: bool,

    /// Fail on invalid UTF-8 instead of replacing it.
    #[arg(long)]
    pub strict_utf8: bool,

    /// Report format (jsonl/json/md).
    #[arg(
        long,
        default_value = "jsonl",
        value_name = "FORMAT",
        long_help = "Select the format of the report printed to stdout.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL report output.
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (no report, errors only).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Install the stderr log subscriber
fn init_logging(verbose: bool, quiet: bool, no_color: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else if quiet {
        LevelFilter::ERROR
    } else {
        LevelFilter::WARN
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Ask for a value on stderr and read one line from `input`
pub fn prompt<R: BufRead>(message: &str, mut input: R) -> Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{}", message)?;
    stderr.flush()?;

    let mut answer = String::new();
    let read = input
        .read_line(&mut answer)
        .context("Failed to read from stdin")?;
    if read == 0 {
        bail!("No answer given to prompt {:?} (stdin closed)", message.trim());
    }

    let answer = answer.trim();
    if answer.is_empty() {
        bail!("Empty answer given to prompt {:?}", message.trim());
    }
    Ok(answer.to_string())
}

fn path_or_prompt(path: Option<PathBuf>, message: &str) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => prompt(message, io::stdin().lock()).map(PathBuf::from),
    }
}

/// Parse, lint and write one glossary; returns the run report
pub fn build(input: &Path, output: &Path, options: &SiteOptions, strict_utf8: bool) -> Result<Report> {
    let strategy = if strict_utf8 {
        EncodingStrategy::Strict
    } else {
        EncodingStrategy::Lossy
    };
    let text = read_input(input, strategy)?;
    debug!(lossy = text.lossy_conversion, "input decoded");

    let parsed = parse_content(&text.content)
        .with_context(|| format!("Malformed glossary file: {:?}", input))?;
    let lint_warnings = lint_glossary(&parsed.glossary)
        .with_context(|| format!("Malformed glossary file: {:?}", input))?;
    debug!(entries = parsed.glossary.len(), "glossary parsed");

    let mut report = Report::new();
    for warning in lint_warnings.iter() {
        warn!(
            code = warning.code.as_str(),
            term = warning.term.as_deref().unwrap_or_default(),
            "{}",
            warning.message
        );
    }
    report.extend(
        text.warnings
            .into_iter()
            .chain(parsed.warnings)
            .chain(lint_warnings)
            .map(ReportItem::warning),
    );

    report.extend(write_site(&parsed.glossary, output, options)?);
    Ok(report)
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose, cli.quiet, cli.no_color);

    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    let input = path_or_prompt(cli.input, "Enter input file name: ")?;
    let output = path_or_prompt(cli.output, "Enter output folder name: ")?;

    let options = SiteOptions {
        separators: cli.separators,
        layout: cli.layout.parse().unwrap_or_default(),
        create_dir: cli.create_dir,
    };
    debug!(separators = %options.separators, layout = ?options.layout, "options");

    let report = build(&input, &output, &options, cli.strict_utf8)?;

    if !cli.quiet {
        Renderer::with_config(render_config)
            .render_to(&report, io::stdout().lock())
            .context("Failed to write report")?;
        eprintln!(
            "{} {} pages to {} ({} warnings)",
            "Wrote".green().bold(),
            report.page_count(),
            output.display(),
            report.warning_count()
        );
    }

    Ok(())
}
