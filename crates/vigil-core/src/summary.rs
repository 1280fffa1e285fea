// SPDX-License-Identifier: Apache-2.0

//! Run outputs for the calling automation environment.
//!
//! When the `GITHUB_OUTPUT` environment variable names a file, two values
//! are appended after a successful sync: the count of newly added
//! repositories and a bulleted list of them. Multi-line values use the
//! `key<<EOF` delimiter convention so the consuming workflow can parse
//! them.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::github::search::RepoHit;

/// Output key for the count of newly added repositories.
pub const OUTPUT_NEW_COUNT: &str = "new_count";

/// Output key for the formatted list of newly added repositories.
pub const OUTPUT_NEW_REPOS: &str = "new_repos";

/// Sentinel written when no repositories were added.
const EMPTY_LIST: &str = "None";

fn output_path_from(value: Option<String>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Path of the run-output file, when the environment provides one.
#[must_use]
pub fn github_output_path() -> Option<PathBuf> {
    output_path_from(std::env::var("GITHUB_OUTPUT").ok())
}

/// Formats the new-repository list: one `- [name](url) (N stars)` line per
/// repository, or the `None` sentinel when empty.
#[must_use]
pub fn format_new_repo_list(new_repos: &[RepoHit]) -> String {
    if new_repos.is_empty() {
        return EMPTY_LIST.to_string();
    }
    new_repos
        .iter()
        .map(|hit| format!("- [{}]({}) ({} stars)", hit.full_name, hit.url, hit.stars))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Appends one key/value entry to the output file.
///
/// Single-line values use `key=value`; multi-line values are wrapped in
/// the `key<<EOF` ... `EOF` form.
///
/// # Errors
///
/// Returns `VigilError::Io` when the file cannot be opened or written.
pub fn append_output(path: &Path, key: &str, value: &str) -> crate::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if value.contains('\n') {
        writeln!(file, "{key}<<EOF\n{value}\nEOF")?;
    } else {
        writeln!(file, "{key}={value}")?;
    }
    Ok(())
}

/// Appends both run outputs for a completed sync.
///
/// # Errors
///
/// Returns `VigilError::Io` when the file cannot be written.
pub fn emit_run_outputs(path: &Path, new_repos: &[RepoHit]) -> crate::Result<()> {
    append_output(path, OUTPUT_NEW_COUNT, &new_repos.len().to_string())?;
    append_output(path, OUTPUT_NEW_REPOS, &format_new_repo_list(new_repos))?;
    Ok(())
}
