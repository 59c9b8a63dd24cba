use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Sample, SparklineError};

/// Number of magnitude glyphs in a [`GlyphSet`].
pub const MAGNITUDE_LEVELS: usize = 8;

/// Waveform alphabet, lowest amplitude first.
const DEFAULT_GLYPHS: [char; MAGNITUDE_LEVELS] = ['_', '⎽', '⎼', '—', '⎻', '⎺', '‾', '▔'];

/// Xcode and the macOS Terminal render `‾` and `⎺` at flipped heights.
const XCODE_GLYPHS: [char; MAGNITUDE_LEVELS] = ['_', '⎽', '⎼', '—', '⎻', '‾', '⎺', '▔'];

/// Which waveform alphabet to draw magnitude buckets with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSet {
    #[default]
    Default,
    Xcode,
}

impl GlyphSet {
    pub fn glyphs(self) -> &'static [char; MAGNITUDE_LEVELS] {
        match self {
            GlyphSet::Default => &DEFAULT_GLYPHS,
            GlyphSet::Xcode => &XCODE_GLYPHS,
        }
    }
}

impl FromStr for GlyphSet {
    type Err = SparklineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "default" => Ok(GlyphSet::Default),
            "xcode" => Ok(GlyphSet::Xcode),
            other => Err(SparklineError::msg(format!("unknown glyph set `{other}`"))),
        }
    }
}

/// Category assigned to a single sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Exactly zero.
    Silence,
    /// Sign flipped relative to the previous sample.
    ZeroCrossing,
    /// In-range value, bucket 0 (lowest) to 7 (highest).
    Magnitude(u8),
    /// Magnitude above 1.0 beyond epsilon.
    OutOfRange,
    NotANumber,
    Infinite,
    Subnormal,
}

impl Symbol {
    /// Character this symbol is rendered as.
    pub fn glyph(self, glyph_set: GlyphSet) -> char {
        match self {
            Symbol::Silence => '0',
            Symbol::ZeroCrossing => 'x',
            Symbol::Magnitude(level) => {
                glyph_set.glyphs()[usize::from(level).min(MAGNITUDE_LEVELS - 1)]
            }
            Symbol::OutOfRange => 'E',
            Symbol::NotANumber => 'N',
            Symbol::Infinite => 'I',
            Symbol::Subnormal => 'S',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph(GlyphSet::Default))
    }
}

/// Classifies one sample, first matching rule wins.
///
/// `value` is the working (possibly normalised) value, `raw` the sample as
/// stored and `previous` the raw sample before it in the channel, if any.
/// The out-of-range check looks at `raw`; everything else at `value`.
pub fn classify<S: Sample>(value: S, raw: S, previous: Option<S>) -> Symbol {
    if value == S::ZERO {
        Symbol::Silence
    } else if previous.is_some_and(|previous| crosses_zero(previous, value)) {
        Symbol::ZeroCrossing
    } else if value.is_nan() {
        Symbol::NotANumber
    } else if value.is_infinite() {
        Symbol::Infinite
    } else if value.is_subnormal() {
        Symbol::Subnormal
    } else if raw.abs() - S::EPSILON > S::ONE {
        Symbol::OutOfRange
    } else {
        Symbol::Magnitude(magnitude_level(value))
    }
}

/// Maps [-1, 1] onto the bucket range, clamping anything outside it.
fn magnitude_level<S: Sample>(value: S) -> u8 {
    let scaled = ((value.to_f64() + 1.0) / 2.0 * (MAGNITUDE_LEVELS - 1) as f64).floor();
    scaled.clamp(0.0, (MAGNITUDE_LEVELS - 1) as f64) as u8
}

/// Zero and NaN carry no sign, so they never take part in a crossing.
fn crosses_zero<S: Sample>(previous: S, current: S) -> bool {
    (previous < S::ZERO && current > S::ZERO) || (previous > S::ZERO && current < S::ZERO)
}
