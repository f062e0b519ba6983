#![allow(clippy::print_stderr, reason = "CLI tools print to stderr")]

use clap::Parser;
use color_eyre::eyre::Result;
use evm_token_cli::cli::InteractorArgs;
use evm_token_cli::{commands, logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    let args = InteractorArgs::parse();

    if let Err(err) = commands::interact::run(args).await {
        eprintln!("{err}");
        eprintln!("Failed contract interaction exiting program!");
        std::process::exit(1);
    }

    info!("Contract interactor finished successfully!");
    Ok(())
}
