//! Print helpers that forward sparklines to the `tracing` debug sink.
//!
//! Nothing is formatted unless `DEBUG` is enabled for the
//! `audio_sparklines` target.

use crate::{encode, encode_block, listing::format_with, AppConfig, Block, Sample, SparklineConfig};

pub const TARGET: &str = "audio_sparklines";

/// Logs the summary and one sparkline per channel.
pub fn print_sparkline<S: Sample>(block: &Block<'_, S>, config: &SparklineConfig) {
    if tracing::enabled!(target: TARGET, tracing::Level::DEBUG) {
        tracing::debug!(target: TARGET, "\n{}", encode_block(block, config));
    }
}

/// Logs the sparkline of a single channel.
pub fn print_channel<S: Sample>(samples: &[S], config: &SparklineConfig) {
    if tracing::enabled!(target: TARGET, tracing::Level::DEBUG) {
        tracing::debug!(target: TARGET, "{}", encode(samples, config));
    }
}

/// Logs the raw values of every channel, one line per channel.
pub fn print_samples<S: Sample>(block: &Block<'_, S>, config: &AppConfig) {
    if !tracing::enabled!(target: TARGET, tracing::Level::DEBUG) {
        return;
    }

    for (index, channel) in block.channels().enumerate() {
        tracing::debug!(
            target: TARGET,
            channel = index,
            "{}",
            format_with(channel, &config.listing)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // No subscriber is installed, so these only check that nothing panics.
    #[test]
    fn printing_without_a_subscriber_is_a_no_op() {
        let samples = [0.0_f32, 0.5, -0.5];
        let block = Block::mono(&samples);
        print_sparkline(&block, &SparklineConfig::default());
        print_channel(&samples, &SparklineConfig::default());
        print_samples(&block, &AppConfig::default());
    }
}
