// SPDX-License-Identifier: Apache-2.0

//! Repository search and cross-query aggregation.
//!
//! Issues one search request per configured query via the GitHub REST
//! Search API and merges the results into an insertion-ordered set keyed
//! by lowercase full name (first occurrence wins). A rate-limited query
//! contributes nothing and the run continues; any other API failure
//! aborts the run.

use std::collections::HashSet;
use std::time::Duration;

use octocrab::Octocrab;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::is_rate_limited;
use crate::document::canonical_url;

/// Pause after each search request to stay under the search rate limit.
const QUERY_PAUSE: Duration = Duration::from_secs(1);

/// Results per query; the search API caps a page at 100.
const RESULTS_PER_QUERY: u8 = 100;

/// A repository returned by the search API.
///
/// Immutable snapshot for one run; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RepoHit {
    /// Full name in `owner/name` form.
    pub full_name: String,
    /// Repository name without the owner.
    pub name: String,
    /// Repository web URL.
    pub url: String,
    /// Short description, if the repository has one.
    pub description: Option<String>,
    /// Star count at search time.
    pub stars: u32,
    /// Whether the repository is a fork.
    pub fork: bool,
    /// Whether the repository is archived.
    pub archived: bool,
}

impl RepoHit {
    /// Returns the canonical (lowercased, slash-stripped) URL used as the
    /// deduplication key.
    #[must_use]
    pub fn canonical_url(&self) -> String {
        canonical_url(&self.url)
    }

    /// Converts an API result into a hit.
    ///
    /// Results without a web URL or an identifiable owner are dropped.
    fn from_repository(repo: &octocrab::models::Repository) -> Option<Self> {
        let url = repo.html_url.as_ref().map(ToString::to_string)?;
        let full_name = match &repo.full_name {
            Some(full_name) => full_name.clone(),
            None => {
                let owner = repo.owner.as_ref().map(|o| o.login.clone())?;
                format!("{owner}/{}", repo.name)
            }
        };

        Some(Self {
            full_name,
            name: repo.name.clone(),
            url,
            description: repo.description.clone(),
            stars: repo.stargazers_count.unwrap_or(0),
            fork: repo.fork.unwrap_or(false),
            archived: repo.archived.unwrap_or(false),
        })
    }
}

/// Builds the query string sent to the search API.
///
/// Appends the minimum-star filter to the configured query.
#[must_use]
pub fn build_query(query: &str, min_stars: u32) -> String {
    format!("{query} stars:>={min_stars}")
}

/// Runs a single search query, star-sorted descending, first page only.
#[instrument(skip(client))]
async fn run_query(
    client: &Octocrab,
    query: &str,
    min_stars: u32,
) -> Result<Vec<RepoHit>, octocrab::Error> {
    let q = build_query(query, min_stars);
    debug!(query = %q, "Searching repositories");

    let page = client
        .search()
        .repositories(&q)
        .sort("stars")
        .order("desc")
        .per_page(RESULTS_PER_QUERY)
        .send()
        .await?;

    Ok(page.items.iter().filter_map(RepoHit::from_repository).collect())
}

/// Merges per-query result batches, keeping the first occurrence of each
/// repository (keyed by lowercase full name) in insertion order.
#[must_use]
pub fn merge_unique(batches: Vec<Vec<RepoHit>>) -> Vec<RepoHit> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for hit in batches.into_iter().flatten() {
        if seen.insert(hit.full_name.to_lowercase()) {
            merged.push(hit);
        }
    }
    merged
}

/// Runs every query in order and aggregates the unique results.
///
/// A rate-limited query is logged and skipped; the remaining queries still
/// run. A fixed pause follows each request; there is no adaptive backoff.
///
/// # Errors
///
/// Returns `VigilError::GitHub` on any non-rate-limit API failure.
pub async fn aggregate(
    client: &Octocrab,
    queries: &[String],
    min_stars: u32,
) -> crate::Result<Vec<RepoHit>> {
    let mut batches = Vec::with_capacity(queries.len());

    for query in queries {
        info!("Searching: {query}");
        match run_query(client, query, min_stars).await {
            Ok(hits) => batches.push(hits),
            Err(e) if is_rate_limited(&e) => {
                warn!(query = %query, "Rate limited, skipping query");
                batches.push(Vec::new());
            }
            Err(e) => return Err(e.into()),
        }
        tokio::time::sleep(QUERY_PAUSE).await;
    }

    let merged = merge_unique(batches);
    info!("Found {} unique repositories across all queries", merged.len());
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(full_name: &str, stars: u32) -> RepoHit {
        RepoHit {
            full_name: full_name.to_string(),
            name: full_name.split('/').next_back().unwrap_or(full_name).to_string(),
            url: format!("https://github.com/{full_name}"),
            description: None,
            stars,
            fork: false,
            archived: false,
        }
    }

    #[test]
    fn build_query_appends_star_filter() {
        assert_eq!(
            build_query("nano in:name topic:llm", 1000),
            "nano in:name topic:llm stars:>=1000"
        );
    }

    #[test]
    fn merge_unique_first_occurrence_wins() {
        let merged = merge_unique(vec![
            vec![hit("a/foo", 100)],
            vec![hit("A/Foo", 900), hit("b/bar", 50)],
        ]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].full_name, "a/foo");
        assert_eq!(merged[0].stars, 100);
        assert_eq!(merged[1].full_name, "b/bar");
    }

    #[test]
    fn merge_unique_preserves_insertion_order() {
        let merged = merge_unique(vec![
            vec![hit("a/one", 1), hit("b/two", 2)],
            vec![hit("c/three", 3)],
        ]);

        let names: Vec<&str> = merged.iter().map(|h| h.full_name.as_str()).collect();
        assert_eq!(names, vec!["a/one", "b/two", "c/three"]);
    }

    #[test]
    fn merge_unique_skips_empty_batches() {
        // An empty batch models a rate-limited query; later batches still count.
        let merged = merge_unique(vec![
            Vec::new(),
            vec![hit("a/foo", 10)],
        ]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].full_name, "a/foo");
    }

    #[test]
    fn canonical_url_lowercases_and_strips_slash() {
        let mut h = hit("A/Foo", 1);
        h.url = "https://github.com/A/Foo/".to_string();
        assert_eq!(h.canonical_url(), "https://github.com/a/foo");
    }
}
