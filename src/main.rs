//! # baudoc CLI
//!
//! Command-line front end for the baudoc classification engine.
//!
//! ## Usage
//!
//! ```bash
//! baudoc [--config ./baudoc.toml] <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `baudoc categories` | List the taxonomy with patterns and priorities |
//! | `baudoc classify <file>` | Classify a single file and print the suggestion |
//! | `baudoc analyze <dir>` | Classify every file under a directory and report |
//!
//! ## Examples
//!
//! ```bash
//! # What would this upload be filed under?
//! baudoc classify ./scans/Grundriss_EG.pdf
//!
//! # Also feed the file's text to the matcher
//! baudoc classify ./scans/Schreiben.txt --with-content
//!
//! # Batch report over an intake folder, machine-readable
//! baudoc analyze ./eingang --json
//! ```

mod analyze;
mod classify;
mod config;
mod confidence;
mod models;
mod report;
mod scan;
mod subcategory;
mod taxonomy;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::models::{Suggestion, UNKNOWN_CATEGORY};

/// baudoc — automatic document classification for construction-project
/// document management.
///
/// All commands accept a `--config` flag pointing to a TOML file; the
/// file is optional and only configures scanning and report rendering.
#[derive(Parser)]
#[command(
    name = "baudoc",
    about = "baudoc — automatic document classification for construction-project DMS",
    version,
    long_about = "baudoc assigns construction documents a taxonomy category, an optional \
    subcategory, and a confidence score from a fixed table of weighted pattern and keyword \
    rules. Output is always a suggestion; nothing is moved or persisted."
)]
struct Cli {
    /// Path to configuration file (TOML). Optional; defaults apply when
    /// the file does not exist.
    #[arg(long, global = true, default_value = "./baudoc.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// List all taxonomy categories.
    ///
    /// Shows each category's identifier, display name, priority, and the
    /// extensions and keywords it recognizes, in registry order.
    Categories {
        /// Emit the taxonomy as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Classify a single file.
    ///
    /// Derives the extension from the file name and prints the suggested
    /// category, subcategory, and confidence. The file itself is only
    /// read when `--with-content` is given (or scan.read_content is set).
    Classify {
        /// File to classify.
        file: PathBuf,

        /// Read the file's text content and feed it to the matcher.
        #[arg(long)]
        with_content: bool,

        /// Emit the suggestion as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Classify every file under a directory and print a batch report.
    ///
    /// Walks the directory (honoring scan.include_globs and
    /// scan.exclude_globs), classifies each file, and prints aggregate
    /// statistics plus a per-file suggestion table in scan order.
    Analyze {
        /// Directory to scan.
        dir: PathBuf,

        /// Emit the full report as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Categories { json } => run_categories(json),
        Commands::Classify {
            file,
            with_content,
            json,
        } => run_classify(&config, &file, with_content, json),
        Commands::Analyze { dir, json } => run_analyze(&config, &dir, json),
    }
}

fn run_categories(json: bool) -> Result<()> {
    if json {
        let value: Vec<serde_json::Value> = taxonomy::registry()
            .iter()
            .map(|c| {
                serde_json::json!({
                    "id": c.id,
                    "name": c.name,
                    "description": c.description,
                    "priority": c.priority,
                    "file_extensions": c.file_extensions,
                    "keywords": c.keywords,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{:<22} {:<26} {:>8}  EXTENSIONS", "ID", "NAME", "PRIORITY");
    println!("{}", "-".repeat(80));
    for category in taxonomy::registry() {
        println!(
            "{:<22} {:<26} {:>8}  {}",
            category.id,
            category.name,
            category.priority,
            category.file_extensions.join(", ")
        );
    }
    Ok(())
}

fn run_classify(config: &config::Config, file: &Path, with_content: bool, json: bool) -> Result<()> {
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let extension = scan::extension_of(&file_name);

    let content = if with_content || config.scan.read_content {
        Some(read_content(file, config.scan.max_content_bytes)?)
    } else {
        None
    };

    let suggestion = match classify::classify(&file_name, &extension, content.as_deref()) {
        Some(category) => Suggestion {
            file_name: file_name.clone(),
            category: category.name.to_string(),
            subcategory: subcategory::suggest_subcategory(category, &file_name)
                .map(str::to_string),
            confidence: confidence::confidence(&file_name, &extension, category),
        },
        None => Suggestion {
            file_name: file_name.clone(),
            category: UNKNOWN_CATEGORY.to_string(),
            subcategory: None,
            confidence: 0,
        },
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
        return Ok(());
    }

    println!("File:        {}", suggestion.file_name);
    println!("Category:    {}", suggestion.category);
    println!(
        "Subcategory: {}",
        suggestion.subcategory.as_deref().unwrap_or("-")
    );
    println!("Confidence:  {}", suggestion.confidence);
    if suggestion.category != UNKNOWN_CATEGORY
        && suggestion.confidence >= config.report.auto_apply_threshold
    {
        println!("Safe to apply without review (threshold {}).", config.report.auto_apply_threshold);
    }
    Ok(())
}

fn run_analyze(config: &config::Config, dir: &Path, json: bool) -> Result<()> {
    let entries = scan::scan_directory(config, dir)?;
    let batch = analyze::analyze_files(&entries);

    if json {
        println!("{}", report::to_json(&batch)?);
    } else {
        report::print_report(&batch, config.report.auto_apply_threshold);
    }
    Ok(())
}

/// Read up to `max_bytes` of a file's text. Non-UTF-8 bytes are replaced
/// rather than failing, so scans of binary files degrade to weak content
/// signals instead of errors.
fn read_content(path: &Path, max_bytes: usize) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let truncated = &bytes[..bytes.len().min(max_bytes)];
    Ok(String::from_utf8_lossy(truncated).into_owned())
}
