// src/cli.rs
use anyhow::Result;
use clap::Command;

use crate::commands;

/// Builds the `clap` command definition.
///
/// The tool takes no arguments of its own: everything it needs is taken from
/// the working directory it is launched in and from `qmake`. Only the clap
/// built-ins (`--help`, `--version`) are accepted.
fn build_cli() -> Command {
    Command::new("golden-regen")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(
            "Regenerates the golden expected-output fixtures of a Qt testlib \
             selftest suite. Run it from the suite root; every subdirectory \
             holding a same-named test executable is re-run in all report \
             formats and its output rewritten to expected_<test>.<format>.",
        )
}

pub async fn run() -> Result<()> {
    // No matches to inspect beyond help/version, which clap handles itself.
    let _matches = build_cli().get_matches();

    commands::regenerate::execute().await
}
