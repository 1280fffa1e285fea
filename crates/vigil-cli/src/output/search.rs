// SPDX-License-Identifier: Apache-2.0

use console::style;
use std::io::{self, Write};

use vigil_core::utils::truncate;

use crate::cli::OutputContext;
use crate::commands::types::SearchResult;
use crate::table::TablePrinter;

use super::Renderable;

impl Renderable for SearchResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w)?;
        writeln!(
            w,
            "{}",
            style(format!(
                "{} repositories with {}+ stars:",
                self.repos.len(),
                self.min_stars
            ))
            .bold()
        )?;
        writeln!(w)?;

        let mut table = TablePrinter::new(3);
        for hit in &self.repos {
            let description = truncate(hit.description.as_deref().unwrap_or(""), 60);
            table.add_row(&[&hit.full_name, &hit.stars.to_string(), &description]);
        }
        write!(w, "{}", table.render())?;

        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w, "## Search results\n")?;
        for hit in &self.repos {
            writeln!(
                w,
                "- [{}]({}) ({} stars) - {}",
                hit.full_name,
                hit.url,
                hit.stars,
                hit.description.as_deref().unwrap_or("")
            )?;
        }
        Ok(())
    }
}
