//! Shell completion generation.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate shell completion for the given shell.
pub fn generate_completion(cmd: &mut Command, shell: Shell, output: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, output);
}
