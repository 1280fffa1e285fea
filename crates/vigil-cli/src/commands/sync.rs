// SPDX-License-Identifier: Apache-2.0

//! Sync command: plan and apply the document update.

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;
use vigil_core::pipeline::{apply_sync, plan_sync};
use vigil_core::{AppConfig, SyncPlan, SyncSpec, create_client, resolve_token};

/// Builds the run spec from configuration plus CLI overrides.
///
/// CLI-provided queries replace the configured list entirely; the other
/// overrides are per-field.
pub fn spec_from(
    config: &AppConfig,
    doc: Option<PathBuf>,
    min_stars: Option<u32>,
    queries: Vec<String>,
) -> SyncSpec {
    SyncSpec::builder()
        .doc_path(doc.unwrap_or_else(|| config.document.path.clone()))
        .marker_start(config.document.marker_start.clone())
        .marker_end(config.document.marker_end.clone())
        .min_stars(min_stars.unwrap_or(config.search.min_stars))
        .queries(if queries.is_empty() {
            config.search.queries.clone()
        } else {
            queries
        })
        .build()
}

/// Plans the sync run against a freshly built GitHub client.
pub async fn plan(spec: &SyncSpec) -> Result<SyncPlan> {
    let token = resolve_token();
    match &token {
        Some((_, source)) => debug!("Using GitHub token from {source}"),
        None => debug!("No GitHub token found, using anonymous client"),
    }
    let client = create_client(token.as_ref().map(|(token, _)| token))?;

    Ok(plan_sync(&client, spec).await?)
}

/// Applies the plan: the single document write.
pub fn apply(spec: &SyncSpec, plan: &SyncPlan) -> Result<()> {
    apply_sync(spec, plan)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_from_uses_config_defaults() {
        let config = AppConfig::default();
        let spec = spec_from(&config, None, None, Vec::new());

        assert_eq!(spec.doc_path, PathBuf::from("README.md"));
        assert_eq!(spec.marker_start, "<!-- VIGIL_LIST_START -->");
        assert_eq!(spec.min_stars, 1000);
        assert!(spec.queries.is_empty());
    }

    #[test]
    fn spec_from_cli_overrides_win() {
        let config = AppConfig::default();
        let spec = spec_from(
            &config,
            Some(PathBuf::from("docs/list.md")),
            Some(50),
            vec!["nano in:name topic:llm".to_string()],
        );

        assert_eq!(spec.doc_path, PathBuf::from("docs/list.md"));
        assert_eq!(spec.min_stars, 50);
        assert_eq!(spec.queries, vec!["nano in:name topic:llm".to_string()]);
    }
}
