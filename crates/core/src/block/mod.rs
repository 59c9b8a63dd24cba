use crate::{Result, Sample, SparklineError};

/// Read-only, channel-major view over a block of audio samples.
///
/// Every channel holds the same number of samples and there is always at
/// least one channel. Both are checked at construction.
#[derive(Debug, Clone)]
pub struct Block<'a, S: Sample> {
    channels: Vec<&'a [S]>,
    num_samples: usize,
}

impl<'a, S: Sample> Block<'a, S> {
    /// Builds a block from individual channel slices.
    pub fn from_channels(channels: Vec<&'a [S]>) -> Result<Self> {
        let expected = channels
            .first()
            .map(|channel| channel.len())
            .ok_or(SparklineError::NoChannels)?;

        if let Some((channel, actual)) = channels
            .iter()
            .map(|channel| channel.len())
            .enumerate()
            .find(|(_, len)| *len != expected)
        {
            return Err(SparklineError::UnequalChannelLength {
                channel,
                expected,
                actual,
            });
        }

        Ok(Self {
            channels,
            num_samples: expected,
        })
    }

    /// Splits a contiguous channel-major buffer into `num_channels` channels.
    pub fn from_channel_major(data: &'a [S], num_channels: usize) -> Result<Self> {
        if num_channels == 0 {
            return Err(SparklineError::NoChannels);
        }

        if data.len() % num_channels != 0 {
            return Err(SparklineError::RaggedBuffer {
                len: data.len(),
                channels: num_channels,
            });
        }

        let num_samples = data.len() / num_channels;
        let channels = if num_samples == 0 {
            vec![data; num_channels]
        } else {
            data.chunks_exact(num_samples).collect()
        };

        Ok(Self {
            channels,
            num_samples,
        })
    }

    /// Wraps a single channel.
    pub fn mono(samples: &'a [S]) -> Self {
        Self {
            channels: vec![samples],
            num_samples: samples.len(),
        }
    }

    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Samples across all channels.
    pub fn total_samples(&self) -> usize {
        self.num_channels() * self.num_samples
    }

    pub fn is_empty(&self) -> bool {
        self.num_samples == 0
    }

    pub fn channel(&self, index: usize) -> Option<&'a [S]> {
        self.channels.get(index).copied()
    }

    /// Iterates over the channels in order.
    pub fn channels(&self) -> impl Iterator<Item = &'a [S]> + '_ {
        self.channels.iter().copied()
    }
}
