//! Command-line interface for kinesis-datagen
//!
//! ```bash
//! kinesis-datagen --amount 1000
//! RUST_LOG=debug kinesis-datagen --amount 5 --seed 7
//! ```
//!
//! Each record is printed to stdout as a JSON line. Log lines go to stderr.

use clap::Parser;
use kinesis_datagen::{default_filter, log_subscriber, run_populate, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing::subscriber::set_global_default(log_subscriber(
        std::io::stderr,
        default_filter(),
        true,
    ))?;

    let cli = Cli::parse();

    run_populate(&cli.populate).await?;

    Ok(())
}
