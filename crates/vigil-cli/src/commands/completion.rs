// SPDX-License-Identifier: Apache-2.0

//! Shell completion script generation.

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;

/// Generates a completion script for the given shell on stdout.
pub fn run_generate(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "vigil", &mut io::stdout());
    Ok(())
}
