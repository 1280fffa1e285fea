// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers.
//!
//! Command handlers return data instead of printing directly; the output
//! module handles presentation in every format.

use serde::Serialize;
use vigil_core::RepoHit;

/// Result from the sync command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SyncResult {
    /// Document that was (or would be) updated.
    pub doc_path: String,
    /// Number of newly discovered repositories.
    pub new_count: usize,
    /// Newly discovered repositories, stars descending.
    pub new_repos: Vec<RepoHit>,
    /// Existing rows whose star cell was refreshed.
    pub refreshed_rows: usize,
    /// Row count of the rebuilt section.
    pub total_rows: usize,
    /// Whether the document content changed.
    pub changed: bool,
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Whether the user declined to write.
    pub user_declined: bool,
}

/// Result from the search command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchResult {
    /// Matching repositories (forks and archived excluded), stars descending.
    pub repos: Vec<RepoHit>,
    /// Minimum star filter that was applied.
    pub min_stars: u32,
}
