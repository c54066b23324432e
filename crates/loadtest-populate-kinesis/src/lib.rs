//! Kinesis populator for kinesis-datagen.
//!
//! This crate provides the `KinesisPopulator` which generates synthetic event
//! records with `record-generator`, serializes each one to JSON and submits
//! it to a Kinesis data stream with a single `PutRecord` call. There is no
//! batching and no retry: a failed submission is logged and the run moves on
//! to the next record.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ RecordGenerator │
//! └────────┬────────┘
//!          │ EventRecord
//!          ▼
//! ┌──────────────────┐      ┌──────────────────┐
//! │ KinesisPopulator │─────▶│    RecordSink    │
//! │                  │ JSON │                  │
//! │ - StreamConfig   │      │ KinesisSink /    │
//! │ - echo to stdout │      │ test double      │
//! └──────────────────┘      └────────┬─────────┘
//!                                    │ PutRecord
//!                                    ▼
//!                              Kinesis stream
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use loadtest_populate_kinesis::{KinesisPopulator, KinesisSink, StreamConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = StreamConfig::default();
//!     config.validate()?;
//!
//!     let sink = KinesisSink::from_config(&config).await;
//!     let mut populator = KinesisPopulator::new(sink, config);
//!
//!     let metrics = populator.populate(100).await;
//!     println!("{} of {} delivered", metrics.records_delivered(), metrics.records_attempted);
//!     Ok(())
//! }
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod populator;
pub mod sink;

// Re-exports for convenience
pub use args::{KinesisPopulateArgs, StreamArgs};
pub use config::{StreamConfig, DEFAULT_PARTITION_KEY, DEFAULT_REGION, DEFAULT_STREAM_NAME};
pub use error::{KinesisPopulatorError, SubmitError};
pub use populator::{KinesisPopulator, PopulateMetrics};
pub use sink::{KinesisSink, PutOutcome, RecordSink};
