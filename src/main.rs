use anyhow::Result;
use clap::Parser;

mod article;
mod cache;
mod cli;
mod config;
mod context;
mod error;
mod i18n;
mod llm;
mod render;
mod search;
mod workflow;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let (config, command) = args.into_parts();
    config.validate()?;

    workflow::launch(&config, command).await
}
