//! Command-line definition for kinesis-datagen.

use clap::Parser;
use loadtest_populate_kinesis::KinesisPopulateArgs;

/// Generate synthetic event records and send them to a Kinesis stream.
#[derive(Parser, Debug)]
#[command(name = "kinesis-datagen", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub populate: KinesisPopulateArgs,
}
