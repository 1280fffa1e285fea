// SPDX-License-Identifier: Apache-2.0

//! Bounded-section parsing and the table row model.
//!
//! The curated list lives between two literal marker lines inside a larger
//! markdown document. Only that span is ever rewritten; everything around
//! it stays byte-identical. Rows are pipe-delimited table lines handled
//! through [`Row`] (cell-level view of existing lines) and [`ListEntry`]
//! (semantic view used to format new lines), keeping the line-based
//! contract compatible with documents maintained by hand.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::github::search::RepoHit;
use crate::utils::truncate;

/// Table header line for the list section.
pub const TABLE_HEADER: &str = "| Name | Description | Stars |";

/// Markdown separator line under the header.
pub const TABLE_SEPARATOR: &str = "|------|-------------|-------|";

/// Maximum rendered description length, ellipsis included.
const MAX_DESCRIPTION_LEN: usize = 100;

/// Matches a repository web URL.
static REPO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://github\.com/[\w\-\.]+/[\w\-\.]+").expect("valid repository URL pattern")
});

/// Canonicalizes a repository URL for deduplication: lowercased, trailing
/// slashes stripped.
#[must_use]
pub fn canonical_url(url: &str) -> String {
    url.to_lowercase().trim_end_matches('/').to_string()
}

/// Finds the first repository URL in a piece of text, canonicalized.
#[must_use]
pub fn find_repo_url(text: &str) -> Option<String> {
    REPO_URL.find(text).map(|m| canonical_url(m.as_str()))
}

/// Byte offsets of the bounded section: position of the start marker and
/// position of the end marker. `None` when either marker is missing or the
/// end marker precedes the start marker.
fn section_bounds(doc: &str, marker_start: &str, marker_end: &str) -> Option<(usize, usize)> {
    let start = doc.find(marker_start)?;
    let end = doc.find(marker_end)?;
    (end >= start).then_some((start, end))
}

/// Returns true when the document contains a well-formed bounded section.
#[must_use]
pub fn has_section(doc: &str, marker_start: &str, marker_end: &str) -> bool {
    section_bounds(doc, marker_start, marker_end).is_some()
}

/// Entries already present in the document's list section.
#[derive(Debug, Default)]
pub struct KnownEntries {
    /// Canonical URLs of every listed repository.
    pub urls: HashSet<String>,
    /// Verbatim table data rows (header and separator excluded).
    pub rows: Vec<String>,
}

/// Extracts known URLs and verbatim rows from the bounded section.
///
/// Missing or malformed markers yield empty containers; that is an
/// empty-list state, not an error.
#[must_use]
pub fn parse_known_entries(doc: &str, marker_start: &str, marker_end: &str) -> KnownEntries {
    let Some((start, end)) = section_bounds(doc, marker_start, marker_end) else {
        return KnownEntries::default();
    };

    let section = &doc[start..end];
    let urls = REPO_URL
        .find_iter(section)
        .map(|m| canonical_url(m.as_str()))
        .collect();

    // Clamp for pathological marker configs where the end marker lands
    // inside the start marker's span.
    let body_start = (start + marker_start.len()).min(end);
    let body = doc[body_start..end].trim();
    let rows = body
        .lines()
        .map(str::trim)
        .filter(|line| is_data_row(line))
        .map(str::to_string)
        .collect();

    KnownEntries { urls, rows }
}

/// A data row is any pipe line that is not the header or separator.
fn is_data_row(line: &str) -> bool {
    line.starts_with('|') && !line.starts_with("| Name") && !line.starts_with("|---")
}

/// Cell-level view of an existing table row.
///
/// Splitting on `|` and joining back is lossless, so untouched cells stay
/// byte-identical through a star refresh.
#[derive(Debug)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    /// Splits a line into cells.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        Self {
            cells: line.split('|').map(str::to_string).collect(),
        }
    }

    /// Numeric star value of the third column, comma-stripped.
    ///
    /// Defaults to 0 when the column is missing or unparseable; sorting
    /// never fails on a malformed row.
    #[must_use]
    pub fn stars(&self) -> u64 {
        self.cells
            .get(3)
            .and_then(|cell| cell.trim().replace(',', "").parse().ok())
            .unwrap_or(0)
    }

    /// Rebuilds the line with the stars cell replaced, every other cell
    /// byte for byte. `None` when the row lacks the full four-column shape.
    #[must_use]
    pub fn with_stars(&self, stars: u32) -> Option<String> {
        if self.cells.len() < 5 {
            return None;
        }
        let mut cells = self.cells.clone();
        cells[3] = format!(" {stars} ");
        Some(cells.join("|"))
    }
}

/// Semantic view of a table row, used to format new entries.
#[derive(Debug, Clone)]
pub struct ListEntry {
    /// Display name rendered as the link text.
    pub name: String,
    /// Repository web URL.
    pub url: String,
    /// Sanitized description.
    pub description: String,
    /// Star count.
    pub stars: u32,
}

impl ListEntry {
    /// Builds an entry from a search hit, sanitizing the description.
    #[must_use]
    pub fn from_hit(hit: &RepoHit) -> Self {
        Self {
            name: hit.name.clone(),
            url: hit.url.clone(),
            description: sanitize_description(hit.description.as_deref().unwrap_or("")),
            stars: hit.stars,
        }
    }

    /// Formats the entry as a table row.
    #[must_use]
    pub fn to_row(&self) -> String {
        format!(
            "| [{}]({}) | {} | {} |",
            self.name, self.url, self.description, self.stars
        )
    }
}

/// Prepares a description for a table cell: pipes replaced, trimmed,
/// truncated to the cell limit with a trailing ellipsis.
#[must_use]
pub fn sanitize_description(raw: &str) -> String {
    truncate(raw.replace('|', "-").trim(), MAX_DESCRIPTION_LEN)
}

/// Renders the full bounded section: markers, header, separator, rows.
#[must_use]
pub fn render_section(rows: &[String], marker_start: &str, marker_end: &str) -> String {
    let body = rows.join("\n");
    format!("{marker_start}\n{TABLE_HEADER}\n{TABLE_SEPARATOR}\n{body}\n{marker_end}")
}

/// Replaces the bounded span (start marker through end of end marker) with
/// a freshly rendered section, leaving surrounding text byte-identical.
///
/// # Errors
///
/// Returns `VigilError::Document` when the markers are missing; splicing
/// into a marker-less document would corrupt it.
pub fn splice_section(
    doc: &str,
    marker_start: &str,
    marker_end: &str,
    section: &str,
) -> crate::Result<String> {
    let (start, end) = section_bounds(doc, marker_start, marker_end).ok_or_else(|| {
        crate::VigilError::Document {
            message: format!("list markers not found ({marker_start} ... {marker_end})"),
        }
    })?;
    let end = end + marker_end.len();

    Ok(format!("{}{}{}", &doc[..start], section, &doc[end..]))
}
