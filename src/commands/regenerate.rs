// src/commands/regenerate.rs

use anyhow::{Context, Result};
use colored::*;
use std::env;

use crate::{
    core::{execution, models::RunSummary, normalize},
    infra::{command, fs},
};

/// Runs the whole regeneration pipeline: platform gate, version probe,
/// directory scan, then one sequential (run, write, normalize) pass per
/// discovered test and format.
pub async fn execute() -> Result<()> {
    // Windows is refused outright, before any subprocess or file activity.
    // The refusal is a successful exit: there is simply nothing to do here.
    if cfg!(windows) {
        println!("This tool does not work on Windows.");
        return Ok(());
    }

    let qt_version = command::query_version().await?;
    let root_path = env::current_dir().context("Failed to determine the suite root directory")?;

    println!(
        "{}",
        format!(
            "Generating expected output for: {} in: {}",
            qt_version,
            root_path.display()
        )
        .bold()
    );

    let replacements = normalize::build_replacements(&qt_version, &root_path)?;
    let tests = fs::discover_tests(&root_path)?;

    let mut summary = RunSummary::default();
    for test in &tests {
        if test.has_executable {
            summary.fixtures_written +=
                execution::generate_test_data(test, &root_path, &replacements).await?;
        } else {
            println!(
                "{}",
                format!(
                    "Warning: directory {} contains no test executable",
                    test.name
                )
                .yellow()
            );
            summary.directories_skipped += 1;
        }
    }

    println!(
        "{}",
        format!(
            "Done: {} fixture file(s) written, {} director{} skipped",
            summary.fixtures_written,
            summary.directories_skipped,
            if summary.directories_skipped == 1 { "y" } else { "ies" }
        )
        .green()
    );

    Ok(())
}
