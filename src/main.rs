//! glossgen - Build a cross-linked HTML glossary from a plain-text term list
//!
//! glossgen provides:
//! - Term/definition parsing from blank-line separated entries
//! - An alphabetical index page
//! - One page per term with other terms hyperlinked in its definition
//! - A machine-readable report of the pages written (jsonl/json/md)

use clap::Parser;
use colored::Colorize;

mod cli;
mod core;
mod glossary;
mod site;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(err) = cli::run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}
