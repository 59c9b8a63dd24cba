//! Plain-text listings of raw sample values.

use crate::{ListingConfig, Sample};

/// Writes every sample with `precision` decimal places, each followed by a
/// space. With `as_array` a comma goes before the space so the output can be
/// pasted into an array literal elsewhere.
pub fn format_samples<S: Sample>(samples: &[S], precision: usize, as_array: bool) -> String {
    let mut output = String::new();
    for sample in samples {
        output.push_str(&format!("{:.*}", precision, sample.to_f64()));
        if as_array {
            output.push(',');
        }
        output.push(' ');
    }
    output
}

/// [`format_samples`] driven by a [`ListingConfig`].
pub fn format_with<S: Sample>(samples: &[S], config: &ListingConfig) -> String {
    format_samples(samples, config.precision, config.as_array)
}

/// Renders samples as comma separated `f`-suffixed float literals,
/// e.g. `0.100000f, -0.250000f`.
pub fn to_float_literals<S: Sample>(samples: &[S], decimal_places: usize) -> String {
    samples
        .iter()
        .map(|sample| format!("{:.*}f", decimal_places, sample.to_f64()))
        .collect::<Vec<_>>()
        .join(", ")
}
