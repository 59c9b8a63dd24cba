//! Core library for audio sparklines.
//!
//! Turns blocks of floating point samples into short glyph strings that show
//! the shape of a waveform at a glance: silence, zero crossings, magnitude and
//! anomalies such as NaN or clipped samples. Everything here is a pure
//! function over borrowed data, so it can be called from anywhere, including
//! a debugger or a test assertion message.
//!
//! ```
//! use audio_sparklines_core::{encode, SparklineConfig};
//!
//! let line = encode(&[0.0_f32, 0.0, 0.5, -0.5, 0.0], &SparklineConfig::default());
//! assert_eq!(line, "[(2)▔x0]");
//! ```

pub mod block;
pub mod config;
pub mod debug;
pub mod error;
pub mod listing;
pub mod sample;
pub mod sparkline;
pub mod summary;
pub mod symbol;

pub use block::Block;
pub use config::{AppConfig, ListingConfig, SparklineConfig};
pub use error::{Result, SparklineError};
pub use sample::Sample;
pub use sparkline::{classify_channel, encode, encode_block};
pub use summary::{consecutive_zeros, percent_filled, summarize, BlockSummary};
pub use symbol::{classify, GlyphSet, Symbol};
