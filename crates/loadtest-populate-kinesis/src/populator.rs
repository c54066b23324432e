//! Kinesis populator for load testing.
//!
//! This module provides the KinesisPopulator which generates synthetic
//! records and submits them one at a time through a [`RecordSink`].

use crate::config::StreamConfig;
use crate::error::SubmitError;
use crate::sink::{PutOutcome, RecordSink};
use record_generator::{EventRecord, RecordGenerator};
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of records generated and submitted.
    pub records_attempted: u64,
    /// Number of submissions that failed.
    pub records_failed: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl PopulateMetrics {
    pub fn records_delivered(&self) -> u64 {
        self.records_attempted.saturating_sub(self.records_failed)
    }

    /// Calculate attempted records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_attempted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Populator that generates records and submits them one at a time.
///
/// Each record is awaited before the next one is generated. Failed
/// submissions are logged and skipped; nothing is retried and the run
/// always finishes after the requested number of records.
///
/// # Example
///
/// ```ignore
/// let config = StreamConfig::default();
/// let sink = KinesisSink::from_config(&config).await;
/// let mut populator = KinesisPopulator::new(sink, config);
/// let metrics = populator.populate(1000).await;
/// ```
pub struct KinesisPopulator<S> {
    sink: S,
    config: StreamConfig,
    generator: RecordGenerator,
    echo: Option<Box<dyn Write + Send>>,
}

impl<S: RecordSink> KinesisPopulator<S> {
    /// Create a populator with an entropy-seeded generator that echoes every
    /// record to stdout.
    pub fn new(sink: S, config: StreamConfig) -> Self {
        Self {
            sink,
            config,
            generator: RecordGenerator::new(),
            echo: Some(Box::new(std::io::stdout())),
        }
    }

    /// Replace the generator with a deterministically seeded one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.generator = RecordGenerator::with_seed(seed);
        self
    }

    /// Print each serialized record to stdout before submitting it.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = if echo {
            Some(Box::new(std::io::stdout()))
        } else {
            None
        };
        self
    }

    /// Echo serialized records to `writer` instead of stdout.
    pub fn with_echo_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.echo = Some(Box::new(writer));
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Number of records generated over the populator's lifetime.
    pub fn generated(&self) -> u64 {
        self.generator.generated()
    }

    /// Generate and submit `count` records.
    pub async fn populate(&mut self, count: u64) -> PopulateMetrics {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        debug!(
            "Populating stream '{}' with {} records (partition key: '{}')",
            self.config.stream_name, count, self.config.partition_key
        );

        for _ in 0..count {
            let record = self.generator.generate();

            match self.send_record(&record).await {
                Ok(outcome) => {
                    debug!(
                        "Record {} stored in {} at sequence {}",
                        record.id, outcome.shard_id, outcome.sequence_number
                    );
                }
                Err(e) => {
                    error!("Fail to deliver message - {e}");
                    metrics.records_failed += 1;
                }
            }

            metrics.records_attempted += 1;
        }

        metrics.total_duration = start_time.elapsed();

        debug!(
            "Population complete: {} attempted, {} failed in {:?} ({:.2} rec/sec)",
            metrics.records_attempted,
            metrics.records_failed,
            metrics.total_duration,
            metrics.records_per_second()
        );

        metrics
    }

    async fn send_record(&mut self, record: &EventRecord) -> Result<PutOutcome, SubmitError> {
        let json = record.to_json()?;
        if let Some(echo) = self.echo.as_mut() {
            // Echo failures never stop the run.
            if let Err(e) = writeln!(echo, "{json}").and_then(|_| echo.flush()) {
                debug!("Failed to echo record {}: {e}", record.id);
            }
        }

        self.sink
            .put_record(
                &self.config.stream_name,
                &self.config.partition_key,
                json.into_bytes(),
            )
            .await
    }
}
