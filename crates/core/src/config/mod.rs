use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{GlyphSet, Result};

/// Top-level configuration structure shared by the front ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sparkline: SparklineConfig,
    pub listing: ListingConfig,
}

impl AppConfig {
    /// Parses a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

/// Options controlling how a channel is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparklineConfig {
    /// Fold silent runs into `(n)` tokens and drop repeated glyphs.
    pub collapse: bool,
    /// Scale each channel by its peak magnitude before bucketing.
    pub normalize: bool,
    pub glyph_set: GlyphSet,
}

impl Default for SparklineConfig {
    fn default() -> Self {
        Self {
            collapse: true,
            normalize: true,
            glyph_set: GlyphSet::Default,
        }
    }
}

impl SparklineConfig {
    pub fn with_collapse(mut self, collapse: bool) -> Self {
        self.collapse = collapse;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_glyph_set(mut self, glyph_set: GlyphSet) -> Self {
        self.glyph_set = glyph_set;
        self
    }
}

/// Options for raw sample listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Decimal places per sample.
    pub precision: usize,
    /// Append a comma after each sample.
    pub as_array: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            precision: 3,
            as_array: false,
        }
    }
}
