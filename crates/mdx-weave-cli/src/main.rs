use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mdx_weave_engine::{ParseOptions, io, parse_mdx, prettify, stringify};

/// Split, format, and check composite MDX documents.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Keep raw frontmatter text but skip YAML decoding.
    #[arg(long)]
    no_parse_yaml: bool,

    /// Split lines on `\n` only, retaining `\r`.
    #[arg(long)]
    preserve_cr: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a document and print its sections as JSON.
    Split {
        /// Document to parse.
        file: PathBuf,
    },

    /// Prettify every section and print the reassembled document.
    Format {
        /// Document to format.
        file: PathBuf,

        /// Rewrite the file in place instead of printing.
        #[arg(long)]
        write: bool,
    },

    /// Parse a document and report warnings.
    Check {
        /// Document to check.
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let options = ParseOptions {
        no_parse_yaml: cli.no_parse_yaml,
        preserve_cr: cli.preserve_cr,
    };

    match cli.command {
        Command::Split { file } => split(&file, &options),
        Command::Format { file, write } => format_document(&file, write, &options),
        Command::Check { file } => check(&file, &options),
    }
}

fn split(file: &Path, options: &ParseOptions) -> Result<()> {
    let text = io::read_document(file)?;
    let result = parse_mdx(&text, options);
    println!("{}", serde_json::to_string_pretty(&result.sections)?);
    Ok(())
}

fn format_document(file: &Path, write: bool, options: &ParseOptions) -> Result<()> {
    let text = io::read_document(file)?;
    let formatted = stringify(&prettify(parse_mdx(&text, options)));
    if write {
        io::write_document(file, &formatted)?;
    } else {
        print!("{formatted}");
    }
    Ok(())
}

fn check(file: &Path, options: &ParseOptions) -> Result<()> {
    let text = io::read_document(file)?;
    let result = parse_mdx(&text, options);
    if result.warnings.is_empty() {
        println!(
            "{}: {} sections, no warnings",
            file.display(),
            result.sections.len()
        );
        return Ok(());
    }

    for warning in &result.warnings {
        eprintln!("{}: warning: {warning}", file.display());
    }
    process::exit(1);
}
