//! CLI argument definitions for the Kinesis populator.

use clap::Args;

use crate::config::{StreamConfig, DEFAULT_PARTITION_KEY, DEFAULT_REGION, DEFAULT_STREAM_NAME};

/// Stream target and generation settings.
///
/// Every value defaults to what a plain `--amount N` run has always used.
#[derive(Args, Clone, Debug)]
pub struct StreamArgs {
    /// Kinesis stream to publish to
    #[arg(long, env = "KINESIS_STREAM_NAME", default_value = DEFAULT_STREAM_NAME)]
    pub stream_name: String,

    /// Partition key used for every record
    #[arg(long, env = "KINESIS_PARTITION_KEY", default_value = DEFAULT_PARTITION_KEY)]
    pub partition_key: String,

    /// AWS region of the stream
    #[arg(long, env = "KINESIS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Random seed for reproducible records (timestamps still follow the clock)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl StreamArgs {
    pub fn to_config(&self) -> StreamConfig {
        StreamConfig::default()
            .with_region(self.region.clone())
            .with_stream_name(self.stream_name.clone())
            .with_partition_key(self.partition_key.clone())
    }
}

/// Kinesis populate arguments.
#[derive(Args, Clone, Debug)]
pub struct KinesisPopulateArgs {
    /// Set the amount of message records to be generated.
    #[arg(long)]
    pub amount: u64,

    #[command(flatten)]
    pub stream: StreamArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        args: KinesisPopulateArgs,
    }

    #[test]
    fn test_amount_only() {
        let cli = TestCli::try_parse_from(["test", "--amount", "5"]).unwrap();
        assert_eq!(cli.args.amount, 5);
        assert_eq!(cli.args.stream.seed, None);
        assert_eq!(cli.args.stream.to_config(), StreamConfig::default());
    }

    #[test]
    fn test_stream_overrides() {
        let cli = TestCli::try_parse_from([
            "test",
            "--amount",
            "1",
            "--stream-name",
            "orders",
            "--partition-key",
            "pk",
            "--region",
            "eu-west-1",
            "--seed",
            "42",
        ])
        .unwrap();

        let config = cli.args.stream.to_config();
        assert_eq!(config.stream_name, "orders");
        assert_eq!(config.partition_key, "pk");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(cli.args.stream.seed, Some(42));
    }

    #[test]
    fn test_amount_required() {
        assert!(TestCli::try_parse_from(["test"]).is_err());
    }
}
