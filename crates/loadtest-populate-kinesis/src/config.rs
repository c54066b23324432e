//! Stream configuration.

use crate::error::KinesisPopulatorError;

/// Default AWS region for the Kinesis client.
pub const DEFAULT_REGION: &str = "us-east-1";
/// Default target stream.
pub const DEFAULT_STREAM_NAME: &str = "kinesis-rd-stream";
/// Default partition key. Every record is sent with the same key, so the
/// whole run lands on a single shard.
pub const DEFAULT_PARTITION_KEY: &str = "partitionkey";

const MAX_STREAM_NAME_LEN: usize = 128;
const MAX_PARTITION_KEY_LEN: usize = 256;

/// Where and how records are submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    pub region: String,
    pub stream_name: String,
    pub partition_key: String,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            stream_name: DEFAULT_STREAM_NAME.to_string(),
            partition_key: DEFAULT_PARTITION_KEY.to_string(),
        }
    }
}

impl StreamConfig {
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_stream_name(mut self, stream_name: impl Into<String>) -> Self {
        self.stream_name = stream_name.into();
        self
    }

    pub fn with_partition_key(mut self, partition_key: impl Into<String>) -> Self {
        self.partition_key = partition_key.into();
        self
    }

    /// Check the values against the limits Kinesis enforces on `PutRecord`.
    ///
    /// This does not contact AWS; whether the stream exists is only learned
    /// when the first record is submitted.
    pub fn validate(&self) -> Result<(), KinesisPopulatorError> {
        if self.region.trim().is_empty() {
            return Err(KinesisPopulatorError::InvalidConfig(
                "region is empty".to_string(),
            ));
        }

        let name_len = self.stream_name.chars().count();
        if name_len == 0 || name_len > MAX_STREAM_NAME_LEN {
            return Err(KinesisPopulatorError::InvalidConfig(format!(
                "stream name must be 1-{MAX_STREAM_NAME_LEN} characters, got {name_len}"
            )));
        }
        if let Some(c) = self
            .stream_name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')))
        {
            return Err(KinesisPopulatorError::InvalidConfig(format!(
                "stream name '{}' contains invalid character '{c}'",
                self.stream_name
            )));
        }

        let key_len = self.partition_key.chars().count();
        if key_len == 0 || key_len > MAX_PARTITION_KEY_LEN {
            return Err(KinesisPopulatorError::InvalidConfig(format!(
                "partition key must be 1-{MAX_PARTITION_KEY_LEN} characters, got {key_len}"
            )));
        }

        Ok(())
    }
}
