use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
#[cfg(test)]
mod test_utils;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    config::init_tracing();
    config::load_env();

    let cli = Cli::parse();
    cli.run().await?;

    Ok(())
}
