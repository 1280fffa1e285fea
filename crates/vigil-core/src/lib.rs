// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Vigil Core
//!
//! Core library for the Vigil CLI - keeps curated GitHub repository lists
//! fresh.
//!
//! This crate provides reusable components for:
//! - GitHub Search API aggregation across a curated query list
//! - Bounded-section parsing and rewriting of the list document
//! - The sync pipeline (filter, star refresh, merge, rewrite)
//! - Run outputs for the calling automation environment
//! - Configuration management
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vigil_core::{SyncSpec, create_client, resolve_token};
//! use vigil_core::pipeline::{apply_sync, plan_sync};
//!
//! # async fn example() -> vigil_core::Result<()> {
//! let token = resolve_token().map(|(token, _source)| token);
//! let client = create_client(token.as_ref())?;
//!
//! let spec = SyncSpec::builder()
//!     .doc_path(std::path::PathBuf::from("README.md"))
//!     .marker_start("<!-- VIGIL_LIST_START -->".to_string())
//!     .marker_end("<!-- VIGIL_LIST_END -->".to_string())
//!     .min_stars(1000)
//!     .queries(vec!["nano in:name topic:llm".to_string()])
//!     .build();
//!
//! let plan = plan_sync(&client, &spec).await?;
//! println!("{} new repositories", plan.new_repos.len());
//! apply_sync(&spec, &plan)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading and paths
//! - [`document`] - Bounded section and table row model
//! - [`error`] - Error types
//! - [`github`] - GitHub client, token resolution, search aggregation
//! - [`pipeline`] - The sync pipeline
//! - [`summary`] - Run outputs
//! - [`utils`] - Text helpers

// ============================================================================
// Error Handling
// ============================================================================

pub use error::VigilError;

/// Convenience Result type for Vigil operations.
///
/// This is equivalent to `std::result::Result<T, VigilError>`.
pub type Result<T> = std::result::Result<T, VigilError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AppConfig, DocumentConfig, SearchConfig, UiConfig, config_dir, config_file_path, load_config,
};

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::search::RepoHit;
pub use github::{TokenSource, create_client, resolve_token};

// ============================================================================
// Document Model
// ============================================================================

pub use document::{KnownEntries, ListEntry, Row, canonical_url};

// ============================================================================
// Sync Pipeline
// ============================================================================

pub use pipeline::{SyncPlan, SyncSpec};

// ============================================================================
// Run Outputs
// ============================================================================

pub use summary::{emit_run_outputs, format_new_repo_list, github_output_path};

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod document;
pub mod error;
pub mod github;
pub mod pipeline;
pub mod summary;
pub mod utils;
