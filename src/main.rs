mod cli;
mod commands;
mod error;
mod mcp;
mod page_range;
mod pdf;
mod reorder;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use log::error;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    if let Err(err) = run(Cli::parse()).await {
        error!("{err:#}");
        return Err(err);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Mcp => {
            mcp::run_server().await?;
        }
        Commands::Reverse {
            path,
            pages,
            output,
        } => {
            commands::reverse::run(&path, pages.as_deref(), &output)?;
        }
        Commands::Info { path } => {
            commands::info::run(&path)?;
        }
    }

    Ok(())
}
