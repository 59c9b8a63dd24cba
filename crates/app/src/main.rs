use std::{
    io::Read,
    path::{Path, PathBuf},
};

use audio_sparklines_core::{
    encode_block, listing, summarize, AppConfig, Block, GlyphSet, Result, Sample,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => match args.input.sample_type {
            SampleType::F32 => run_render::<f32>(&args),
            SampleType::F64 => run_render::<f64>(&args),
        },
        Commands::Samples(args) => match args.input.sample_type {
            SampleType::F32 => run_samples::<f32>(&args),
            SampleType::F64 => run_samples::<f64>(&args),
        },
    }
}

fn run_render<S: Sample>(args: &RenderArgs) -> Result<()> {
    let mut config = load_config(args.input.config.as_deref())?;
    if args.no_collapse {
        config.sparkline.collapse = false;
    }
    if args.no_normalize {
        config.sparkline.normalize = false;
    }
    if let Some(glyphs) = args.glyphs {
        config.sparkline.glyph_set = glyphs.into();
    }

    let channels = load_channels::<S>(&args.input.input)?;
    let block = Block::from_channels(channels.iter().map(Vec::as_slice).collect())?;
    tracing::info!(
        channels = block.num_channels(),
        samples = block.num_samples(),
        sample_type = S::TYPE_NAME,
        "rendering sparkline"
    );

    if args.json_summary {
        println!("{}", serde_json::to_string_pretty(&summarize(&block))?);
    } else {
        print!("{}", encode_block(&block, &config.sparkline));
    }
    Ok(())
}

fn run_samples<S: Sample>(args: &SamplesArgs) -> Result<()> {
    let mut config = load_config(args.input.config.as_deref())?;
    if let Some(precision) = args.precision {
        config.listing.precision = precision;
    }
    if args.as_array {
        config.listing.as_array = true;
    }

    let channels = load_channels::<S>(&args.input.input)?;
    let block = Block::from_channels(channels.iter().map(Vec::as_slice).collect())?;
    tracing::info!(channels = block.num_channels(), "listing samples");

    for channel in block.channels() {
        let line = if args.literals {
            listing::to_float_literals(channel, args.precision.unwrap_or(6))
        } else {
            listing::format_with(channel, &config.listing)
        };
        println!("{line}");
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => {
            tracing::debug!(?path, "loading configuration");
            AppConfig::load(path)
        }
        None => Ok(AppConfig::default()),
    }
}

/// Reads `[[...], [...]]` channel data, or a flat array as a single channel.
/// `-` reads from stdin.
fn load_channels<S: Sample>(input: &Path) -> Result<Vec<Vec<S>>> {
    let text = if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        text
    } else {
        std::fs::read_to_string(input)?
    };

    match serde_json::from_str::<Vec<Vec<S>>>(&text) {
        Ok(channels) => Ok(channels),
        Err(err) => serde_json::from_str::<Vec<S>>(&text)
            .map(|mono| vec![mono])
            .map_err(|_| err.into()),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Render audio sample blocks as text sparklines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a summary line and one sparkline per channel.
    Render(RenderArgs),
    /// Print the raw sample values of every channel.
    Samples(SamplesArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// JSON file holding an array of channels, or `-` for stdin.
    input: PathBuf,
    /// Optional JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Precision the samples are parsed and encoded with.
    #[arg(long, value_enum, default_value_t = SampleType::F32)]
    sample_type: SampleType,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Emit every symbol literally instead of folding runs.
    #[arg(long)]
    no_collapse: bool,
    /// Classify raw values instead of scaling each channel to its peak.
    #[arg(long)]
    no_normalize: bool,
    /// Waveform alphabet to draw with.
    #[arg(long, value_enum)]
    glyphs: Option<GlyphArg>,
    /// Print the block summary as JSON instead of sparklines.
    #[arg(long)]
    json_summary: bool,
}

#[derive(Args, Debug)]
struct SamplesArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Decimal places per sample.
    #[arg(short, long)]
    precision: Option<usize>,
    /// Separate samples with commas.
    #[arg(long)]
    as_array: bool,
    /// Print `0.100000f, ...` float literals.
    #[arg(long)]
    literals: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SampleType {
    F32,
    F64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GlyphArg {
    Default,
    Xcode,
}

impl From<GlyphArg> for GlyphSet {
    fn from(value: GlyphArg) -> Self {
        match value {
            GlyphArg::Default => GlyphSet::Default,
            GlyphArg::Xcode => GlyphSet::Xcode,
        }
    }
}
