//! PayloadKit CLI - component registry and scaffolding toolkit for PayloadCMS
//!
//! Entry point for the payloadkit command-line application.

use anyhow::Result;
use clap::Parser;

use payloadkit::cli::output::{display_error, OutputConfig};
use payloadkit::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Apply output configuration globally
    let output_config = OutputConfig::new(cli.quiet, cli.verbose);
    output_config.apply_global();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(output_config.tracing_level().into()),
        )
        .init();

    // Run the command and handle errors
    match cli.run().await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
