// SPDX-License-Identifier: Apache-2.0

use console::style;
use std::io::{self, Write};

use vigil_core::format_new_repo_list;

use crate::cli::OutputContext;
use crate::commands::types::SyncResult;

use super::Renderable;

impl Renderable for SyncResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w)?;

        if self.new_repos.is_empty() {
            writeln!(w, "{}", style("No new repositories found.").bold())?;
        } else {
            writeln!(
                w,
                "{}",
                style(format!("{} new repositories:", self.new_count)).bold()
            )?;
            for hit in &self.new_repos {
                writeln!(
                    w,
                    "  {} {} {}",
                    style(&hit.full_name).cyan(),
                    style(format!("({} stars)", hit.stars)).yellow(),
                    style(hit.description.as_deref().unwrap_or("")).dim()
                )?;
            }
        }

        writeln!(w)?;
        writeln!(
            w,
            "  {} rows refreshed, {} rows total in {}",
            self.refreshed_rows, self.total_rows, self.doc_path
        )?;

        if self.dry_run {
            writeln!(w)?;
            writeln!(w, "{}", style("Dry run - document not written.").yellow())?;
        }

        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w, "## Newly discovered repositories\n")?;
        writeln!(w, "{}", format_new_repo_list(&self.new_repos))?;
        Ok(())
    }
}
