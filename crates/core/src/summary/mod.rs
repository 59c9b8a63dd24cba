use std::fmt;

use serde::Serialize;

use crate::{
    sample::{max_value, min_value},
    Block, Sample,
};

/// Statistics describing a whole block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockSummary<S: Sample> {
    pub sample_type: &'static str,
    pub num_channels: usize,
    pub num_samples: usize,
    /// Smallest non-NaN sample across all channels.
    pub min: Option<S>,
    /// Largest non-NaN sample across all channels.
    pub max: Option<S>,
    /// Share of samples that are not part of a silent run, in percent.
    pub percent_filled: f32,
}

/// Computes the [`BlockSummary`] of a block.
///
/// Extrema are reduced per channel first and then across channels. NaN never
/// wins a comparison and ties keep the earliest value, so the result matches a
/// single scan over the channels laid end to end.
pub fn summarize<S: Sample>(block: &Block<'_, S>) -> BlockSummary<S> {
    let channel_mins: Vec<S> = block
        .channels()
        .filter_map(|channel| min_value(channel.iter().copied()))
        .collect();
    let channel_maxs: Vec<S> = block
        .channels()
        .filter_map(|channel| max_value(channel.iter().copied()))
        .collect();

    BlockSummary {
        sample_type: S::TYPE_NAME,
        num_channels: block.num_channels(),
        num_samples: block.num_samples(),
        min: min_value(channel_mins),
        max: max_value(channel_maxs),
        percent_filled: percent_filled(block),
    }
}

/// Counts samples that are exactly zero and follow another zero.
///
/// The sample before the start of each channel counts as zero, so a channel
/// opening on a zero contributes from its first sample. A lone adjacency is
/// not treated as silence: totals below two are reported as 0.
pub fn consecutive_zeros<S: Sample>(block: &Block<'_, S>) -> usize {
    let count: usize = block
        .channels()
        .map(|channel| {
            let mut previous = S::ZERO;
            let mut zeros = 0;
            for &sample in channel {
                if sample == S::ZERO && previous == S::ZERO {
                    zeros += 1;
                }
                previous = sample;
            }
            zeros
        })
        .sum();

    if count > 1 {
        count
    } else {
        0
    }
}

/// Percentage of samples outside silent runs. An empty block is 100% filled.
pub fn percent_filled<S: Sample>(block: &Block<'_, S>) -> f32 {
    let total = block.total_samples();
    if total == 0 {
        return 100.0;
    }

    (total - consecutive_zeros(block)) as f32 / total as f32 * 100.0
}

impl<S: Sample> fmt::Display for BlockSummary<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Block<{}> is {} channels, {} samples, min {}, max {}, {}% filled",
            self.sample_type,
            self.num_channels,
            self.num_samples,
            Extremum(self.min),
            Extremum(self.max),
            self.percent_filled
        )
    }
}

struct Extremum<S>(Option<S>);

impl<S: Sample> fmt::Display for Extremum<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("n/a"),
        }
    }
}
