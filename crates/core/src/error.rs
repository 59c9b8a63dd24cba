/// Result alias that carries the custom [`SparklineError`] type.
pub type Result<T> = std::result::Result<T, SparklineError>;

/// Common error type for the core crate.
///
/// Encoding and summarising never fail. Errors only come from building a
/// [`Block`](crate::Block) out of malformed data or from loading input.
#[derive(Debug, thiserror::Error)]
pub enum SparklineError {
    /// Free-form message, mostly surfaced by front ends.
    #[error("{0}")]
    Message(String),
    /// A block needs at least one channel.
    #[error("a block requires at least one channel")]
    NoChannels,
    /// Every channel in a block must hold the same number of samples.
    #[error("channel {channel} has {actual} samples, expected {expected}")]
    UnequalChannelLength {
        channel: usize,
        expected: usize,
        actual: usize,
    },
    /// A contiguous buffer could not be split evenly into channels.
    #[error("buffer of {len} samples cannot be split into {channels} equal channels")]
    RaggedBuffer { len: usize, channels: usize },
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON input or configuration.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

impl SparklineError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for SparklineError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for SparklineError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
