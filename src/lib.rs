pub mod cli;
pub mod model;
pub mod prompt;
pub mod writer;

use anyhow::Context;
use clap::Parser;
use model::ProjectSpec;
use std::io;
use std::path::PathBuf;

pub fn run() -> anyhow::Result<()> {
    run_with(cli::Cli::parse())
}

/// Runs the whole scaffold with already-parsed arguments.
pub fn run_with(args: cli::Cli) -> anyhow::Result<()> {

    // 1. ── Collect ────────────────────────────────────────────────────
    let spec = match &args.answers {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Reading {}", path.display()))?;
            let spec = prompt::load_answers(&json)
                .with_context(|| format!("Parsing answers {}", path.display()))?;
            prompt::ensure_target_directory(&spec.target_directory, &mut io::stdout())?;
            spec
        }
        None => {
            let stdin = io::stdin();
            prompt::Prompter::new(stdin.lock(), io::stdout())
                .collect()
                .with_context(|| "Collecting project answers")?
        }
    };

    // 2. ── Render & write ─────────────────────────────────────────────
    if generate(&spec)?.is_some() {
        println!("Project {} created.", spec.project_name);
    }

    Ok(())
}

/// Renders `spec` and writes it under its target directory.
///
/// Returns `Ok(None)` after reporting when the project directory already
/// exists; nothing is written in that case.
pub fn generate(spec: &ProjectSpec) -> anyhow::Result<Option<Vec<PathBuf>>> {
    let project_dir = spec.project_dir();
    println!(
        "Generating {} project in {}",
        spec.language,
        project_dir.display()
    );

    let rendered = writer::render(spec);
    match writer::emit(&rendered, &project_dir) {
        Ok(written) => Ok(Some(written)),
        Err(writer::WriteError::ProjectExists(_)) => {
            println!("Project's directory already exists, aborting..");
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("Writing project {}", spec.project_name)),
    }
}
