// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for Vigil.
//!
//! Uses clap's derive API for declarative CLI parsing with hierarchical
//! noun-verb subcommands.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for CLI results.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// YAML output for programmatic consumption
    Yaml,
    /// Markdown output suitable for issue or PR bodies
    Markdown,
}

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Output format (text, json, yaml, markdown)
    pub format: OutputFormat,
    /// Suppress non-essential output (spinners, progress)
    pub quiet: bool,
    /// Enable verbose output
    pub verbose: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            quiet,
            verbose,
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Returns true if interactive elements (spinners, prompts) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.quiet && matches!(self.format, OutputFormat::Text)
    }
}

/// Vigil - keeps curated GitHub repository lists fresh.
///
/// Searches GitHub for repositories matching a curated query list, merges
/// the results with the list embedded in a document, and rewrites the
/// bounded section with deduplicated, star-sorted entries.
#[derive(Parser)]
#[command(name = "vigil")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format (text, json, yaml, markdown)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress non-essential output (spinners, progress)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Search GitHub and rewrite the curated list document
    Sync {
        /// Preview the update without writing the document
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt before writing
        #[arg(short = 'y', long)]
        yes: bool,

        /// Document to update (overrides configuration)
        #[arg(long)]
        doc: Option<PathBuf>,

        /// Minimum star filter (overrides configuration)
        #[arg(long)]
        min_stars: Option<u32>,

        /// Search query; repeat for multiple queries (overrides configuration)
        #[arg(long = "query", value_name = "QUERY")]
        queries: Vec<String>,
    },

    /// Search GitHub and show the results without touching any document
    Search {
        /// Minimum star filter (overrides configuration)
        #[arg(long)]
        min_stars: Option<u32>,

        /// Search query; repeat for multiple queries (overrides configuration)
        #[arg(long = "query", value_name = "QUERY")]
        queries: Vec<String>,
    },

    /// Generate shell completion scripts
    #[command(subcommand)]
    Completion(CompletionCommand),
}

/// Completion subcommands
#[derive(Subcommand)]
pub enum CompletionCommand {
    /// Generate completion script for a shell (output to stdout)
    Generate {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
