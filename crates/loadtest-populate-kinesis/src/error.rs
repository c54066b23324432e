//! Error types for the Kinesis populator.

use aws_sdk_kinesis::error::{DisplayErrorContext, SdkError};
use aws_sdk_kinesis::operation::put_record::PutRecordError;
use thiserror::Error;

/// Errors that can occur while setting up a Kinesis population run.
#[derive(Error, Debug)]
pub enum KinesisPopulatorError {
    #[error("Invalid stream configuration: {0}")]
    InvalidConfig(String),
}

/// Why a single record could not be submitted.
///
/// The populator handles every variant the same way (log and move on); the
/// split only makes the log line say what went wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("throughput exceeded: {0}")]
    Throttled(String),

    #[error("stream not found: {0}")]
    StreamNotFound(String),

    #[error("service error: {0}")]
    Service(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("encoding error: {0}")]
    Encoding(String),
}

impl From<SdkError<PutRecordError>> for SubmitError {
    fn from(err: SdkError<PutRecordError>) -> Self {
        let message = DisplayErrorContext(&err).to_string();
        match err.as_service_error() {
            Some(service)
                if service.is_provisioned_throughput_exceeded_exception()
                    || service.is_kms_throttling_exception() =>
            {
                SubmitError::Throttled(message)
            }
            Some(service) if service.is_resource_not_found_exception() => {
                SubmitError::StreamNotFound(message)
            }
            Some(_) => SubmitError::Service(message),
            None => SubmitError::Transport(message),
        }
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        SubmitError::Encoding(err.to_string())
    }
}
