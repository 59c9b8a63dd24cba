//! Sparkline encoding of sample channels.
//!
//! A healthy sine wave looks roughly like this:
//!
//! ```text
//! [0—⎻‾▔‾⎻—x—⎼⎽_⎽⎼—x—⎻‾▔‾⎻—]
//! ```
//!
//! `0` is a true zero and `(n)` a run of `n` zeros, `x` a zero crossing,
//! `E` a sample outside [-1, 1], and `N`, `I`, `S` mark NaN, infinite and
//! subnormal samples.

use crate::{
    sample::{max_value, min_value},
    summarize, symbol::classify, Block, Sample, SparklineConfig, Symbol,
};

/// Classifies every sample of a channel.
///
/// When `normalize` is set, samples are divided by the channel's peak
/// magnitude. A channel whose peak is zero or non-finite is classified raw.
pub fn classify_channel<S: Sample>(samples: &[S], normalize: bool) -> Vec<Symbol> {
    let scale = if normalize {
        channel_peak(samples).filter(|peak| *peak != S::ZERO && peak.is_finite())
    } else {
        None
    };

    samples
        .iter()
        .enumerate()
        .map(|(index, &raw)| {
            let value = scale.map_or(raw, |peak| raw / peak);
            let previous = index.checked_sub(1).map(|previous| samples[previous]);
            classify(value, raw, previous)
        })
        .collect()
}

/// Encodes one channel as a bracketed sparkline.
pub fn encode<S: Sample>(samples: &[S], config: &SparklineConfig) -> String {
    let symbols = classify_channel(samples, config.normalize);
    render(&symbols, config)
}

/// Encodes every channel of a block, one line each, after a summary line.
pub fn encode_block<S: Sample>(block: &Block<'_, S>, config: &SparklineConfig) -> String {
    let mut output = summarize(block).to_string();
    output.push('\n');
    for channel in block.channels() {
        output.push_str(&encode(channel, config));
        output.push('\n');
    }
    output
}

/// Largest absolute value among the channel's extrema.
fn channel_peak<S: Sample>(samples: &[S]) -> Option<S> {
    let min = min_value(samples.iter().copied())?;
    let max = max_value(samples.iter().copied())?;
    max_value([min.abs(), max.abs()])
}

fn render(symbols: &[Symbol], config: &SparklineConfig) -> String {
    let mut output = String::with_capacity(symbols.len() + 2);
    output.push('[');

    if !config.collapse {
        output.extend(symbols.iter().map(|symbol| symbol.glyph(config.glyph_set)));
        output.push(']');
        return output;
    }

    let mut zeros = 0;
    for symbol in symbols {
        if *symbol == Symbol::Silence {
            zeros += 1;
            continue;
        }

        flush_zeros(&mut output, zeros);
        zeros = 0;

        let glyph = symbol.glyph(config.glyph_set);
        if output.chars().next_back() != Some(glyph) {
            output.push(glyph);
        }
    }
    flush_zeros(&mut output, zeros);

    output.push(']');
    output
}

/// A lone zero is written as-is, longer runs as `(n)`.
fn flush_zeros(output: &mut String, zeros: usize) {
    match zeros {
        0 => {}
        1 => output.push('0'),
        count => output.push_str(&format!("({count})")),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::GlyphSet;

    fn raw() -> SparklineConfig {
        SparklineConfig::default().with_normalize(false)
    }

    fn all_configs() -> Vec<SparklineConfig> {
        let mut configs = Vec::new();
        for collapse in [true, false] {
            for normalize in [true, false] {
                for glyph_set in [GlyphSet::Default, GlyphSet::Xcode] {
                    configs.push(SparklineConfig {
                        collapse,
                        normalize,
                        glyph_set,
                    });
                }
            }
        }
        configs
    }

    #[test]
    fn empty_channel_is_empty_brackets() {
        for config in all_configs() {
            assert_eq!(encode::<f32>(&[], &config), "[]");
        }
    }

    #[test]
    fn silent_channels_collapse_to_a_count() {
        let config = SparklineConfig::default();
        assert_eq!(encode(&[0.0_f32; 1], &config), "[0]");
        assert_eq!(encode(&[0.0_f32; 2], &config), "[(2)]");
        assert_eq!(encode(&[0.0_f64; 512], &config), "[(512)]");
    }

    #[test]
    fn golden_reference_rendering() {
        let samples = [0.0_f32, 0.0, 0.5, -0.5, 0.0];
        assert_eq!(
            classify_channel(&samples, true),
            vec![
                Symbol::Silence,
                Symbol::Silence,
                Symbol::Magnitude(7),
                Symbol::ZeroCrossing,
                Symbol::Silence,
            ]
        );
        assert_eq!(encode(&samples, &SparklineConfig::default()), "[(2)▔x0]");

        let doubles = [0.0_f64, 0.0, 0.5, -0.5, 0.0];
        assert_eq!(encode(&doubles, &SparklineConfig::default()), "[(2)▔x0]");
    }

    #[test]
    fn uncollapsed_output_is_literal() {
        let samples = [0.0_f32, 0.0, 0.5, -0.5, 0.0];
        let config = SparklineConfig::default().with_collapse(false);
        assert_eq!(encode(&samples, &config), "[00▔x0]");
    }

    #[test]
    fn sign_flip_is_a_zero_crossing() {
        let symbols = classify_channel(&[1.0_f32, -1.0], false);
        assert_eq!(symbols[1], Symbol::ZeroCrossing);
        assert_eq!(encode(&[1.0_f32, -1.0], &raw()), "[▔x]");
    }

    #[test]
    fn out_of_range_sample() {
        assert_eq!(encode(&[1.5_f32], &raw()), "[E]");
    }

    #[test]
    fn non_finite_samples_are_symbols() {
        assert_eq!(encode(&[f32::NAN], &raw()), "[N]");
        assert_eq!(encode(&[f64::NAN], &SparklineConfig::default()), "[N]");
        assert_eq!(encode(&[-0.5_f32, f32::NAN], &raw()), "[⎽N]");
        assert_eq!(encode(&[0.5_f64, f64::NAN], &SparklineConfig::default()), "[▔N]");
        assert_eq!(encode(&[f32::INFINITY, 0.5], &SparklineConfig::default()), "[I⎺]");
    }

    #[test]
    fn subnormal_sample() {
        let tiny = f64::MIN_POSITIVE / 16.0;
        assert_eq!(encode(&[tiny], &raw()), "[S]");
    }

    #[test]
    fn repeated_glyphs_are_shown_once() {
        let samples = [0.5_f32, 0.5, 0.5];
        assert_eq!(encode(&samples, &raw()), "[⎺]");
        assert_eq!(encode(&samples, &raw().with_collapse(false)), "[⎺⎺⎺]");
    }

    #[test]
    fn lone_zero_is_written_literally() {
        assert_eq!(encode(&[0.5_f32, 0.0, 0.5], &raw()), "[⎺0⎺]");
    }

    #[test]
    fn zero_run_between_samples() {
        // a zero carries no sign, so -0.5 after the run is not a crossing
        let samples = [0.5_f32, 0.0, 0.0, 0.0, -0.5];
        assert_eq!(encode(&samples, &raw()), "[⎺(3)⎽]");
    }

    #[test]
    fn normalisation_stretches_quiet_channels() {
        let samples = [0.01_f32, 0.02];
        assert_eq!(encode(&samples, &raw()), "[—]");
        assert_eq!(encode(&samples, &SparklineConfig::default()), "[⎺▔]");
    }

    #[test]
    fn glyph_set_changes_rendering() {
        let samples = [0.7_f32];
        assert_eq!(encode(&samples, &raw()), "[⎺]");
        assert_eq!(encode(&samples, &raw().with_glyph_set(GlyphSet::Xcode)), "[‾]");
    }

    #[test]
    fn encodes_blocks_with_summary() {
        let left = [0.0_f32, 0.0, 0.5, -0.5, 0.0];
        let right = [0.5_f32, 0.5, 0.5, 0.5, 0.5];
        let block = Block::from_channels(vec![&left[..], &right[..]]).unwrap();

        assert_eq!(
            encode_block(&block, &SparklineConfig::default()),
            "Block<float> is 2 channels, 5 samples, min -0.5, max 0.5, 80% filled\n\
             [(2)▔x0]\n\
             [▔]\n"
        );
    }

    fn samples_strategy() -> impl Strategy<Value = Vec<f32>> {
        prop::collection::vec(
            prop_oneof![
                3 => -1.0_f32..=1.0,
                2 => Just(0.0_f32),
                1 => proptest::num::f32::ANY,
            ],
            0..64,
        )
    }

    proptest! {
        /// Without collapsing there is exactly one glyph per sample.
        #[test]
        fn prop_uncollapsed_cardinality(samples in samples_strategy(), normalize in any::<bool>()) {
            let config = SparklineConfig::default().with_collapse(false).with_normalize(normalize);
            let encoded = encode(&samples, &config);
            prop_assert!(encoded.starts_with('[') && encoded.ends_with(']'));
            prop_assert_eq!(encoded.chars().count() - 2, samples.len());
        }

        #[test]
        fn prop_encoding_is_deterministic(samples in samples_strategy(), collapse in any::<bool>(), normalize in any::<bool>()) {
            let config = SparklineConfig::default().with_collapse(collapse).with_normalize(normalize);
            prop_assert_eq!(encode(&samples, &config), encode(&samples, &config));
        }

        /// Expanding the `(n)` tokens of a collapsed line restores every zero.
        #[test]
        fn prop_collapsed_runs_account_for_every_zero(samples in samples_strategy()) {
            let config = SparklineConfig::default().with_normalize(false);
            let encoded = encode(&samples, &config);
            let silent = classify_channel(&samples, false)
                .into_iter()
                .filter(|symbol| *symbol == Symbol::Silence)
                .count();

            let mut zeros = 0;
            let mut rest = encoded.as_str();
            while let Some(start) = rest.find('(') {
                zeros += rest[..start].matches('0').count();
                let end = start + rest[start..].find(')').unwrap();
                zeros += rest[start + 1..end].parse::<usize>().unwrap();
                rest = &rest[end + 1..];
            }
            zeros += rest.matches('0').count();

            prop_assert_eq!(zeros, silent);
        }
    }
}
