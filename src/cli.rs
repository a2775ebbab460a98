//! Command-line interface for headless use of the document core
//!
//! Supports:
//! - Text statistics for any supported document
//! - Converting between formats (paragraph styles follow the document)
//! - Find and replace

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::app::controllers::document::DocumentController;
use crate::app::domain::EditorSettings;
use crate::app::infrastructure::error::Result;
use crate::app::services::file_service::FileService;
use crate::app::services::text_ops;

/// WordImperfect document tools
#[derive(Parser, Debug)]
#[command(name = "wordimperfect", version, about = "Inspect, convert and edit WordImperfect documents")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print character, word and line counts
    Stats {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Convert a document to another format, carrying its paragraph styles
    ///
    /// A destination without an extension gets the configured default one.
    Convert {
        #[arg(value_name = "FROM")]
        from: PathBuf,
        #[arg(value_name = "TO")]
        to: PathBuf,
    },

    /// Print the character offset of every match
    Find {
        #[arg(value_name = "FILE")]
        path: PathBuf,
        query: String,
        /// Match case exactly (defaults to the saved search setting)
        #[arg(short = 'c', long, conflicts_with = "ignore_case")]
        case_sensitive: bool,
        /// Ignore case even when the saved search setting matches case
        #[arg(short = 'i', long)]
        ignore_case: bool,
    },

    /// Replace matches and save the document in place
    Replace {
        #[arg(value_name = "FILE")]
        path: PathBuf,
        query: String,
        replacement: String,
        #[arg(short = 'c', long, conflicts_with = "ignore_case")]
        case_sensitive: bool,
        #[arg(short = 'i', long)]
        ignore_case: bool,
        /// Only replace the first match
        #[arg(long)]
        first: bool,
    },
}

/// Command-line flags win over the saved search setting
fn effective_case_sensitivity(case_sensitive: bool, ignore_case: bool, settings: &EditorSettings) -> bool {
    if ignore_case {
        false
    } else {
        case_sensitive || settings.case_sensitive_search
    }
}

/// `to`, or `to` with the configured default extension when it has none
fn conversion_destination(to: PathBuf, settings: &EditorSettings) -> PathBuf {
    if to.extension().is_some() {
        return to;
    }
    let mut to = to;
    to.set_extension(settings.default_extension.trim_start_matches('.'));
    to
}

/// Execute a parsed command, returning the text to print
pub fn run(args: CliArgs, settings: &EditorSettings) -> Result<String> {
    let mut controller = DocumentController::new(FileService::new());

    match args.command {
        Command::Stats { path } => {
            let text = controller.open_document(&path)?;
            let summary = text_ops::summarize(&text);
            Ok(format!(
                "Chars: {}  Words: {}  Lines: {}",
                summary.characters, summary.words, summary.lines
            ))
        }
        Command::Convert { from, to } => {
            let text = controller.open_document(&from)?;
            let to = conversion_destination(to, settings);
            let destination = controller.save_document(&text, Some(&to))?;
            Ok(format!("Wrote {}", destination.display()))
        }
        Command::Find {
            path,
            query,
            case_sensitive,
            ignore_case,
        } => {
            let text = controller.open_document(&path)?;
            let case_sensitive = effective_case_sensitivity(case_sensitive, ignore_case, settings);
            let matches = text_ops::find_matches(&text, &query, case_sensitive);
            Ok(matches
                .positions
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Command::Replace {
            path,
            query,
            replacement,
            case_sensitive,
            ignore_case,
            first,
        } => {
            let text = controller.open_document(&path)?;
            let case_sensitive = effective_case_sensitivity(case_sensitive, ignore_case, settings);
            let summary = text_ops::replace(&text, &query, &replacement, case_sensitive, !first);
            if summary.replacements > 0 {
                controller.mark_modified();
                controller.save_document(&summary.text, None)?;
            }
            Ok(format!("Replaced {} occurrence(s)", summary.replacements))
        }
    }
}
