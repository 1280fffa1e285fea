// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the Vigil CLI.

pub mod completion;
pub mod search;
pub mod sync;
pub mod types;

use std::time::Duration;

use anyhow::{Context, Result};
use console::style;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use vigil_core::{AppConfig, emit_run_outputs, github_output_path};

use crate::cli::{Commands, CompletionCommand, OutputContext, OutputFormat};
use crate::output;

/// Creates a styled spinner (only if interactive).
fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if ctx.is_interactive() {
        let s = ProgressBar::new_spinner();
        s.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("Invalid spinner template"),
        );
        s.set_message(message.to_string());
        s.enable_steady_tick(Duration::from_millis(100));
        Some(s)
    } else {
        None
    }
}

/// Dispatch to the appropriate command handler.
pub async fn run(command: Commands, ctx: OutputContext, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Sync {
            dry_run,
            yes,
            doc,
            min_stars,
            queries,
        } => {
            let spec = sync::spec_from(config, doc, min_stars, queries);

            if ctx.verbose && matches!(ctx.format, OutputFormat::Text) {
                for query in &spec.queries {
                    println!("  {}  {}", style("query:").dim(), query);
                }
            }

            // Phase 1: plan (network + read-only filesystem work)
            let spinner = maybe_spinner(&ctx, "Searching GitHub...");
            let plan = sync::plan(&spec).await?;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }

            let mut result = types::SyncResult {
                doc_path: spec.doc_path.display().to_string(),
                new_count: plan.new_repos.len(),
                new_repos: plan.new_repos.clone(),
                refreshed_rows: plan.refreshed_rows,
                total_rows: plan.total_rows,
                changed: plan.changed,
                dry_run,
                user_declined: false,
            };

            // Render the plan FIRST (before asking for confirmation)
            output::render(&result, &ctx)?;

            if dry_run {
                return Ok(());
            }

            // Interactive confirmation before touching the document;
            // non-interactive runs (CI) write without prompting.
            let should_write = if yes || !ctx.is_interactive() || !config.ui.confirm_before_write {
                true
            } else {
                println!();
                Confirm::new()
                    .with_prompt(format!(
                        "Write {} rows to {}?",
                        result.total_rows, result.doc_path
                    ))
                    .default(true)
                    .interact()
                    .context("Failed to get user confirmation")?
            };

            if !should_write {
                result.user_declined = true;
                if matches!(ctx.format, OutputFormat::Text) {
                    println!("{}", style("Document not written.").yellow());
                }
                return Ok(());
            }

            // Phase 2: the single document write
            sync::apply(&spec, &plan)?;

            // Phase 3: run outputs for the calling automation, if any
            if let Some(path) = github_output_path() {
                emit_run_outputs(&path, &plan.new_repos)?;
            }

            if matches!(ctx.format, OutputFormat::Text) {
                println!();
                println!(
                    "{}",
                    style(format!(
                        "Document updated with {} new entries.",
                        result.new_count
                    ))
                    .green()
                    .bold()
                );
            }

            Ok(())
        }

        Commands::Search { min_stars, queries } => {
            let spinner = maybe_spinner(&ctx, "Searching GitHub...");
            let result = search::run(config, min_stars, queries).await?;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            output::render(&result, &ctx)?;
            Ok(())
        }

        Commands::Completion(completion_cmd) => match completion_cmd {
            CompletionCommand::Generate { shell } => completion::run_generate(shell),
        },
    }
}
