#![allow(clippy::print_stderr, reason = "CLI tools print to stderr")]

use clap::Parser;
use color_eyre::eyre::Result;
use evm_token_cli::cli::DeployerArgs;
use evm_token_cli::{commands, logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    let args = DeployerArgs::parse();

    if let Err(err) = commands::deploy::run(args).await {
        eprintln!("{err}");
        eprintln!("Failed deployment exiting program!");
        std::process::exit(1);
    }

    info!("Contract deployer finished successfully!");
    Ok(())
}
