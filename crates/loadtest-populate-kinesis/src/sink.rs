//! Record sinks.
//!
//! A [`RecordSink`] submits one serialized record to a stream. The populator
//! only talks to this trait, so the AWS client can be swapped for an
//! in-memory double in tests.

use crate::config::StreamConfig;
use crate::error::SubmitError;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_kinesis::config::Region;
use aws_sdk_kinesis::primitives::Blob;

/// Where a submitted record landed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutOutcome {
    pub shard_id: String,
    pub sequence_number: String,
}

#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Submit one record. Must not retry.
    async fn put_record(
        &self,
        stream_name: &str,
        partition_key: &str,
        data: Vec<u8>,
    ) -> Result<PutOutcome, SubmitError>;
}

/// Sink backed by the AWS Kinesis `PutRecord` API.
///
/// Creating the SDK client resolves credentials and endpoints, so build one
/// per run and reuse it for every record.
pub struct KinesisSink {
    client: aws_sdk_kinesis::Client,
}

impl KinesisSink {
    /// Wrap an already configured client.
    pub fn new(client: aws_sdk_kinesis::Client) -> Self {
        Self { client }
    }

    /// Build a client from the ambient AWS credential chain, pinned to the
    /// configured region.
    pub async fn from_config(config: &StreamConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;
        Self::new(aws_sdk_kinesis::Client::new(&sdk_config))
    }
}

#[async_trait]
impl RecordSink for KinesisSink {
    async fn put_record(
        &self,
        stream_name: &str,
        partition_key: &str,
        data: Vec<u8>,
    ) -> Result<PutOutcome, SubmitError> {
        let output = self
            .client
            .put_record()
            .stream_name(stream_name)
            .partition_key(partition_key)
            .data(Blob::new(data))
            .send()
            .await?;

        Ok(PutOutcome {
            shard_id: output.shard_id().to_string(),
            sequence_number: output.sequence_number().to_string(),
        })
    }
}
