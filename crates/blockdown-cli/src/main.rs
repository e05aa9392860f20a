//! Command-line inspector for block documents
//!
//! Usage:
//!   blockdown `<path>`                   - Summarize the block structure
//!   blockdown `<path>` --format text     - Print the canonical serialization
//!   blockdown `<path>` --format json     - Print the parsed blocks as JSON
//!   blockdown `<path>` --check           - Exit non-zero if the file is not canonical

use anyhow::Result;
use blockdown_engine::{Block, BlockContent, BlockRegistry, io, parse_document, serialize_blocks};
use clap::{Arg, ArgAction, Command};
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Set RUST_LOG=blockdown_engine=debug to watch the scanner's decisions
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("blockdown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and canonicalize block documents")
        .arg(
            Arg::new("path")
                .help("Path to the block document")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: summary, text, or json")
                .default_value("summary"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Exit non-zero when serializing would rewrite the file")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let content = io::read_document(Path::new(path))?;

    let registry = BlockRegistry::new();
    let blocks = parse_document(&registry, &content);

    if matches.get_flag("check") {
        let canonical = serialize_blocks(&registry, &blocks);
        if canonical == content {
            println!("{path}: canonical ({} blocks)", blocks.len());
            return Ok(());
        }
        eprintln!("{path}: serializing would rewrite this file");
        process::exit(1);
    }

    let format = matches.get_one::<String>("format").expect("format has a default");
    match format.as_str() {
        "summary" => print_summary(&registry, &blocks),
        "text" => println!("{}", serialize_blocks(&registry, &blocks)),
        "json" => println!("{}", serde_json::to_string_pretty(&blocks)?),
        other => {
            eprintln!("Unknown format '{other}'");
            eprintln!("Available formats: summary, text, json");
            process::exit(1);
        }
    }

    Ok(())
}

/// One line per block: index, tag, and a short payload preview.
fn print_summary(registry: &BlockRegistry, blocks: &[Block]) {
    if blocks.is_empty() {
        println!("(empty document)");
        return;
    }

    for (index, block) in blocks.iter().enumerate() {
        let tag = registry.tag_name(block.kind());
        let detail = match &block.content {
            BlockContent::Heading { text, .. } | BlockContent::Text { text } => preview(text),
            BlockContent::Code { code, language } => {
                let lines = code.lines().count().max(1);
                if language.is_empty() {
                    format!("{lines} lines")
                } else {
                    format!("{language}, {lines} lines")
                }
            }
            BlockContent::Link { text, href } => format!("{} -> {href}", preview(text)),
            BlockContent::Divider | BlockContent::Spacer { .. } => String::new(),
        };
        if detail.is_empty() {
            println!("{index:>4}  {tag}");
        } else {
            println!("{index:>4}  {tag:<8} {detail}");
        }
    }

    println!();
    println!("{} blocks", blocks.len());
}

fn preview(text: &str) -> String {
    const MAX_CHARS: usize = 60;
    let first_line = text.lines().next().unwrap_or_default();
    if first_line.chars().count() > MAX_CHARS {
        let cut: String = first_line.chars().take(MAX_CHARS).collect();
        format!("{cut}...")
    } else {
        first_line.to_string()
    }
}
