// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Provides client construction, token resolution, and repository search.
//!
//! Token resolution priority chain:
//! 1. Environment variable (`GH_TOKEN` or `GITHUB_TOKEN`)
//! 2. GitHub CLI (`gh auth token`)
//!
//! An absent token is not an error: the client is built unauthenticated
//! and runs are subject to the tighter anonymous rate limits.

use std::process::Command;

use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::debug;

pub mod search;

/// Source of the GitHub authentication token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    /// Token from `GH_TOKEN` or `GITHUB_TOKEN` environment variable.
    Environment,
    /// Token from `gh auth token` command.
    GhCli,
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenSource::Environment => write!(f, "environment variable"),
            TokenSource::GhCli => write!(f, "GitHub CLI"),
        }
    }
}

/// Attempts to get a token from the GitHub CLI (`gh auth token`).
///
/// Returns `None` if:
/// - `gh` is not installed
/// - `gh` is not authenticated
/// - Any other error occurs
fn get_token_from_gh_cli() -> Option<SecretString> {
    debug!("Attempting to get token from gh CLI");

    let output = Command::new("gh").args(["auth", "token"]).output();

    match output {
        Ok(output) if output.status.success() => {
            let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if token.is_empty() {
                debug!("gh auth token returned empty output");
                None
            } else {
                debug!("Successfully retrieved token from gh CLI");
                Some(SecretString::from(token))
            }
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(
                status = ?output.status,
                stderr = %stderr.trim(),
                "gh auth token failed"
            );
            None
        }
        Err(e) => {
            debug!(error = %e, "Failed to execute gh command");
            None
        }
    }
}

/// Resolves a GitHub token using the priority chain.
///
/// Checks sources in order:
/// 1. `GH_TOKEN` environment variable
/// 2. `GITHUB_TOKEN` environment variable
/// 3. GitHub CLI (`gh auth token`)
///
/// Returns the token and its source, or `None` if no token is found.
#[must_use]
pub fn resolve_token() -> Option<(SecretString, TokenSource)> {
    if let Ok(token) = std::env::var("GH_TOKEN")
        && !token.is_empty()
    {
        debug!("Using token from GH_TOKEN environment variable");
        return Some((SecretString::from(token), TokenSource::Environment));
    }

    if let Ok(token) = std::env::var("GITHUB_TOKEN")
        && !token.is_empty()
    {
        debug!("Using token from GITHUB_TOKEN environment variable");
        return Some((SecretString::from(token), TokenSource::Environment));
    }

    if let Some(token) = get_token_from_gh_cli() {
        return Some((token, TokenSource::GhCli));
    }

    debug!("No GitHub token found");
    None
}

/// Creates an Octocrab client, authenticated when a token is provided.
///
/// # Errors
///
/// Returns `VigilError::GitHub` if the client cannot be built.
pub fn create_client(token: Option<&SecretString>) -> crate::Result<Octocrab> {
    let builder = Octocrab::builder();
    let client = match token {
        Some(token) => builder
            .personal_token(token.expose_secret().to_string())
            .build()?,
        None => builder.build()?,
    };

    debug!(authenticated = token.is_some(), "Created GitHub client");
    Ok(client)
}

/// Determines if an HTTP status code indicates a search rate limit.
///
/// GitHub reports search throttling as 403 (secondary rate limit) or 429.
#[must_use]
pub fn is_rate_limit_status(status: u16) -> bool {
    matches!(status, 403 | 429)
}

/// Determines if an octocrab error is a rate-limit response.
///
/// Rate-limited queries are skipped rather than aborting the run; every
/// other API failure is fatal.
#[must_use]
pub fn is_rate_limited(e: &octocrab::Error) -> bool {
    match e {
        octocrab::Error::GitHub { source, .. } => is_rate_limit_status(source.status_code.as_u16()),
        _ => false,
    }
}
