mod cli;
mod application;
mod domain;
mod data;
mod sampling;
mod infra;

use anyhow::Result;
use cli::Cli;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy()
                .add_directive("board_qa=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
