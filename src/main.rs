//! CLI entry point for replaying gesture scripts against the puzzle engine

use clap::Parser;
use slidetile::io::cli::{Cli, ScriptProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> slidetile::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut processor = ScriptProcessor::new(cli)?;
    processor.process()?;
    Ok(())
}
