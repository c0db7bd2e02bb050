use clap::Parser;
use std::path::PathBuf;

/// Scaffold an Access to Retro virtual console project (C or C++).
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON answers file; prompts interactively when omitted
    #[arg(long)]
    pub answers: Option<PathBuf>,
}
