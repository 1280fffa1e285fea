// SPDX-License-Identifier: Apache-2.0

//! The sync pipeline: aggregate, filter, refresh, merge, rewrite.
//!
//! A run is planned first (network and read-only filesystem work) and
//! applied second (the single document write). The split lets callers
//! preview a plan, ask for confirmation, or stop at a dry run.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;

use bon::Builder;
use octocrab::Octocrab;
use tracing::{debug, info};

use crate::document::{
    self, KnownEntries, ListEntry, Row, find_repo_url, has_section, render_section, splice_section,
};
use crate::github::search::{self, RepoHit};
use crate::{Result, VigilError};

/// Explicit configuration for one sync run.
///
/// Carries everything the pipeline needs; there is no ambient state.
#[derive(Debug, Clone, Builder)]
pub struct SyncSpec {
    /// Path of the document holding the curated list.
    pub doc_path: PathBuf,
    /// Literal start marker of the bounded section.
    pub marker_start: String,
    /// Literal end marker of the bounded section.
    pub marker_end: String,
    /// Minimum star count appended to every query.
    pub min_stars: u32,
    /// Ordered search queries.
    pub queries: Vec<String>,
}

/// Outcome of planning a sync run.
#[derive(Debug)]
pub struct SyncPlan {
    /// Newly discovered repositories, stars descending.
    pub new_repos: Vec<RepoHit>,
    /// Number of entries already listed in the document.
    pub existing_count: usize,
    /// Existing rows whose star cell was refreshed.
    pub refreshed_rows: usize,
    /// Row count of the rebuilt section.
    pub total_rows: usize,
    /// Full document text after the splice.
    pub updated_document: String,
    /// Whether applying the plan changes the document at all.
    pub changed: bool,
}

/// Splits the aggregated hits into the star-refresh map and the list of
/// genuinely new repositories.
///
/// Every hit feeds the refresh map. A hit is "new" only when it is not a
/// fork, not archived, and its canonical URL is not already listed. New
/// hits are sorted by stars descending.
#[must_use]
pub fn partition_new(
    all: &[RepoHit],
    known_urls: &HashSet<String>,
) -> (Vec<RepoHit>, HashMap<String, u32>) {
    let mut stars_by_url = HashMap::new();
    let mut new_repos = Vec::new();

    for hit in all {
        let url = hit.canonical_url();
        stars_by_url.insert(url.clone(), hit.stars);

        if hit.fork || hit.archived || known_urls.contains(&url) {
            continue;
        }
        new_repos.push(hit.clone());
    }

    new_repos.sort_by_key(|hit| Reverse(hit.stars));
    (new_repos, stars_by_url)
}

/// Refreshes the star cell of every row whose repository URL has fresh
/// data. Rows without a recognizable or matched URL pass through
/// unchanged. Returns the rows and how many were rewritten.
#[must_use]
pub fn refresh_rows(rows: &[String], stars_by_url: &HashMap<String, u32>) -> (Vec<String>, usize) {
    let mut refreshed = 0;
    let updated = rows
        .iter()
        .map(|row| {
            let Some(url) = find_repo_url(row) else {
                return row.clone();
            };
            let Some(&stars) = stars_by_url.get(&url) else {
                return row.clone();
            };
            match Row::parse(row).with_stars(stars) {
                Some(updated) => {
                    refreshed += 1;
                    updated
                }
                None => row.clone(),
            }
        })
        .collect();

    (updated, refreshed)
}

/// Appends one formatted row per new repository and sorts the combined
/// sequence by descending star value. The sort is stable, so equal-star
/// rows keep their relative order.
#[must_use]
pub fn merge_rows(refreshed: Vec<String>, new_repos: &[RepoHit]) -> Vec<String> {
    let mut rows = refreshed;
    rows.extend(new_repos.iter().map(|hit| ListEntry::from_hit(hit).to_row()));
    rows.sort_by_key(|row| Reverse(Row::parse(row).stars()));
    rows
}

/// Plans a sync run: reads the document, searches GitHub, and computes the
/// rewritten text. Nothing is written.
///
/// # Errors
///
/// - `VigilError::Config` when no queries are configured.
/// - `VigilError::Io` when the document cannot be read.
/// - `VigilError::Document` when the list markers are missing.
/// - `VigilError::GitHub` on a fatal API failure.
pub async fn plan_sync(client: &Octocrab, spec: &SyncSpec) -> Result<SyncPlan> {
    if spec.queries.is_empty() {
        return Err(VigilError::Config {
            message: "No search queries configured".to_string(),
        });
    }

    let doc = fs::read_to_string(&spec.doc_path)?;

    // Refuse before spending API calls on a document we cannot rewrite.
    if !has_section(&doc, &spec.marker_start, &spec.marker_end) {
        return Err(VigilError::Document {
            message: format!(
                "list markers not found in {} ({} ... {})",
                spec.doc_path.display(),
                spec.marker_start,
                spec.marker_end
            ),
        });
    }

    let known: KnownEntries =
        document::parse_known_entries(&doc, &spec.marker_start, &spec.marker_end);
    info!("Found {} existing entries in document", known.urls.len());

    let all = search::aggregate(client, &spec.queries, spec.min_stars).await?;

    let (new_repos, stars_by_url) = partition_new(&all, &known.urls);
    info!("Found {} new repositories to add", new_repos.len());
    for hit in &new_repos {
        debug!("  - {} ({} stars)", hit.full_name, hit.stars);
    }

    let (refreshed, refreshed_rows) = refresh_rows(&known.rows, &stars_by_url);
    let rows = merge_rows(refreshed, &new_repos);
    let section = render_section(&rows, &spec.marker_start, &spec.marker_end);
    let updated_document = splice_section(&doc, &spec.marker_start, &spec.marker_end, &section)?;

    Ok(SyncPlan {
        new_repos,
        existing_count: known.urls.len(),
        refreshed_rows,
        total_rows: rows.len(),
        changed: updated_document != doc,
        updated_document,
    })
}

/// Applies a plan: writes the rebuilt document in place.
///
/// Plain overwrite, no temp file, no backup; the document is low-stakes
/// and human-reviewed.
///
/// # Errors
///
/// Returns `VigilError::Io` when the write fails.
pub fn apply_sync(spec: &SyncSpec, plan: &SyncPlan) -> Result<()> {
    fs::write(&spec.doc_path, &plan.updated_document)?;
    info!(
        "Document updated with {} new entries",
        plan.new_repos.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(full_name: &str, stars: u32, fork: bool, archived: bool) -> RepoHit {
        let name = full_name.split('/').next_back().unwrap_or(full_name);
        RepoHit {
            full_name: full_name.to_string(),
            name: name.to_string(),
            url: format!("https://github.com/{full_name}"),
            description: Some(format!("{name} description")),
            stars,
            fork,
            archived,
        }
    }

    #[test]
    fn partition_excludes_forks_archived_and_known() {
        let known: HashSet<String> =
            std::iter::once("https://github.com/a/known".to_string()).collect();
        let all = vec![
            hit("a/known", 900, false, false),
            hit("b/fork", 800, true, false),
            hit("c/archived", 700, false, true),
            hit("d/fresh", 600, false, false),
        ];

        let (new_repos, stars_by_url) = partition_new(&all, &known);

        assert_eq!(new_repos.len(), 1);
        assert_eq!(new_repos[0].full_name, "d/fresh");
        // Excluded repositories still contribute star data.
        assert_eq!(stars_by_url.len(), 4);
        assert_eq!(stars_by_url["https://github.com/a/known"], 900);
        assert_eq!(stars_by_url["https://github.com/b/fork"], 800);
    }

    #[test]
    fn partition_sorts_new_by_stars_descending() {
        let all = vec![
            hit("a/low", 10, false, false),
            hit("b/high", 500, false, false),
            hit("c/mid", 100, false, false),
        ];
        let (new_repos, _) = partition_new(&all, &HashSet::new());

        let stars: Vec<u32> = new_repos.iter().map(|h| h.stars).collect();
        assert_eq!(stars, vec![500, 100, 10]);
    }

    #[test]
    fn refresh_updates_only_star_cells() {
        let rows = vec![
            "| [foo](https://github.com/a/foo) | desc | 500 |".to_string(),
            "| [bar](https://github.com/b/bar) | other desc | 20 |".to_string(),
        ];
        let stars_by_url: HashMap<String, u32> =
            std::iter::once(("https://github.com/a/foo".to_string(), 600)).collect();

        let (updated, refreshed) = refresh_rows(&rows, &stars_by_url);

        assert_eq!(refreshed, 1);
        assert_eq!(updated[0], "| [foo](https://github.com/a/foo) | desc | 600 |");
        // Unmatched row is untouched.
        assert_eq!(updated[1], rows[1]);
    }

    #[test]
    fn refresh_leaves_rows_without_urls_alone() {
        let rows = vec!["| plain | row | 5 |".to_string()];
        let (updated, refreshed) = refresh_rows(&rows, &HashMap::new());
        assert_eq!(refreshed, 0);
        assert_eq!(updated, rows);
    }

    #[test]
    fn merge_orders_rows_by_stars_descending() {
        let refreshed = vec!["| [foo](https://github.com/a/foo) | desc | 600 |".to_string()];
        let new_repos = vec![hit("b/bar", 700, false, false)];

        let rows = merge_rows(refreshed, &new_repos);

        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("[bar]"), "700-star row first: {}", rows[0]);
        assert!(rows[1].contains("[foo]"));

        let stars: Vec<u64> = rows.iter().map(|r| Row::parse(r).stars()).collect();
        assert!(stars.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn merge_is_stable_for_equal_stars() {
        let refreshed = vec![
            "| [one](https://github.com/a/one) | d | 100 |".to_string(),
            "| [two](https://github.com/a/two) | d | 100 |".to_string(),
        ];
        let rows = merge_rows(refreshed, &[]);
        assert!(rows[0].contains("[one]"));
        assert!(rows[1].contains("[two]"));
    }

    #[tokio::test]
    async fn plan_sync_requires_queries() {
        let spec = SyncSpec::builder()
            .doc_path(PathBuf::from("README.md"))
            .marker_start("<!-- VIGIL_LIST_START -->".to_string())
            .marker_end("<!-- VIGIL_LIST_END -->".to_string())
            .min_stars(1000)
            .queries(Vec::new())
            .build();
        let client = Octocrab::builder().build().expect("default client");

        let err = plan_sync(&client, &spec).await.unwrap_err();
        assert!(err.to_string().contains("No search queries configured"));
    }
}
