use std::path::PathBuf;

use clap::Parser;

/// Multiview: replay a multi-stream page session against the audio coordinator.
#[derive(Parser, Debug)]
#[command(name = "multiview", version, about)]
pub struct Args {
    /// Session script to replay (reads stdin when omitted).
    #[arg(short = 's', long)]
    pub script: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `multiview=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
