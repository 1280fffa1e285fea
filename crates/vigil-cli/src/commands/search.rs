// SPDX-License-Identifier: Apache-2.0

//! Search command: aggregate and filter without touching any document.

use std::collections::HashSet;

use anyhow::Result;
use tracing::debug;
use vigil_core::github::search::aggregate;
use vigil_core::pipeline::partition_new;
use vigil_core::{AppConfig, VigilError, create_client, resolve_token};

use super::types::SearchResult;

/// Runs the configured queries and returns the filtered, star-sorted hits.
///
/// Applies the same fork/archived exclusion as sync, with no known-entry
/// set since no document is involved.
pub async fn run(
    config: &AppConfig,
    min_stars: Option<u32>,
    queries: Vec<String>,
) -> Result<SearchResult> {
    let min_stars = min_stars.unwrap_or(config.search.min_stars);
    let queries = if queries.is_empty() {
        config.search.queries.clone()
    } else {
        queries
    };
    if queries.is_empty() {
        return Err(VigilError::Config {
            message: "No search queries configured".to_string(),
        }
        .into());
    }

    let token = resolve_token();
    match &token {
        Some((_, source)) => debug!("Using GitHub token from {source}"),
        None => debug!("No GitHub token found, using anonymous client"),
    }
    let client = create_client(token.as_ref().map(|(token, _)| token))?;

    let all = aggregate(&client, &queries, min_stars).await?;
    let (repos, _) = partition_new(&all, &HashSet::new());

    Ok(SearchResult { repos, min_stars })
}
