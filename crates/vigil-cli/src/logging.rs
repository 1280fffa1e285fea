// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the Vigil CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Default: info level for vigil, warn for dependencies
//! vigil sync
//!
//! # Debug output for troubleshooting
//! RUST_LOG=vigil_core=debug vigil sync
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::OutputFormat;

/// Initialize the logging subsystem.
///
/// Sets up `tracing` with the following defaults:
/// - `vigil_core=info`, `vigil_cli=info` - Info level for Vigil code
/// - `octocrab=warn` - Warn level for the GitHub API client
/// - `reqwest=warn` - Warn level for the HTTP client
///
/// Structured output formats (json, yaml, markdown) and `--quiet` drop to
/// warn so diagnostics never mix into parseable output. These defaults can
/// be overridden via the `RUST_LOG` environment variable.
pub fn init_logging(format: OutputFormat, quiet: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let structured = matches!(
        format,
        OutputFormat::Json | OutputFormat::Yaml | OutputFormat::Markdown
    );
    let default_filter = if quiet || structured {
        "vigil_core=warn,vigil_cli=warn,octocrab=error,reqwest=error"
    } else {
        "vigil_core=info,vigil_cli=info,octocrab=warn,reqwest=warn"
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
