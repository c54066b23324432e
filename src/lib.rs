//! kinesis-datagen library
//!
//! Streams synthetic event records into an AWS Kinesis data stream, one
//! `PutRecord` call per record, for load tests and demos.
//!
//! - `record_generator` builds the records (fake names, emails, phone
//!   numbers, random ids)
//! - `loadtest_populate_kinesis` owns the send loop and the Kinesis client
//!
//! # CLI Usage
//!
//! ```bash
//! # Send 100 records to the default stream (kinesis-rd-stream, us-east-1)
//! kinesis-datagen --amount 100
//!
//! # Reproducible records against another stream
//! kinesis-datagen --amount 10 --stream-name orders --region eu-west-1 --seed 42
//! ```

pub mod cli;
pub mod logging;

pub use cli::Cli;
pub use logging::{default_filter, log_subscriber};

use anyhow::Context;
use loadtest_populate_kinesis::{
    KinesisPopulateArgs, KinesisPopulator, KinesisSink, PopulateMetrics, RecordSink, StreamConfig,
};
use tracing::info;

/// Validate the stream settings, connect to Kinesis and send `--amount`
/// records.
pub async fn run_populate(args: &KinesisPopulateArgs) -> anyhow::Result<PopulateMetrics> {
    let config = args.stream.to_config();
    config
        .validate()
        .context("Refusing to start with invalid stream settings")?;

    let sink = KinesisSink::from_config(&config).await;
    Ok(populate_stream(sink, config, args.amount, args.stream.seed).await)
}

/// Send `amount` records through `sink`, bracketed by the start and
/// completion log lines.
///
/// The completion line reports how many records were attempted, not how many
/// were accepted by the stream.
pub async fn populate_stream<S: RecordSink>(
    sink: S,
    config: StreamConfig,
    amount: u64,
    seed: Option<u64>,
) -> PopulateMetrics {
    let mut populator = KinesisPopulator::new(sink, config);
    if let Some(seed) = seed {
        populator = populator.with_seed(seed);
    }

    info!("Started data generation.");
    let metrics = populator.populate(amount).await;
    info!("{amount} messages delivered to Kinesis.");

    metrics
}
