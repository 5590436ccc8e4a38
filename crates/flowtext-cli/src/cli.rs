//! CLI argument definitions using Clap v4

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Flowtext - lay out mixed-script, mixed-emoji text in a box
#[derive(Parser, Debug)]
#[command(name = "flowtext")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log debug output (RUST_LOG overrides)
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Wrap and position text, then export the layout
    #[command(alias = "l")]
    Layout(Box<LayoutArgs>),

    /// Show which font each run of the text resolves to
    #[command(alias = "s")]
    Segment(SegmentArgs),
}

/// Where the text and fonts come from
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Input text (reads --text-file or stdin if omitted)
    pub text: Option<String>,

    /// Read input text from file
    #[arg(short = 'T', long = "text-file", conflicts_with = "text")]
    pub text_file: Option<PathBuf>,

    /// Font files in fallback order; the first is the default
    #[arg(short = 'f', long = "font", required = true)]
    pub fonts: Vec<PathBuf>,

    /// Font size in pixels
    #[arg(short = 's', long = "font-size", visible_alias = "size", default_value_t = 30.0)]
    pub font_size: f32,
}

/// Arguments for the layout command
#[derive(Args, Debug)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Box width in pixels
    #[arg(short = 'W', long = "width", default_value_t = 500.0)]
    pub width: f32,

    /// Box height in pixels
    #[arg(short = 'H', long = "height", default_value_t = 200.0)]
    pub height: f32,

    /// Margins: N, or LEFT,TOP,RIGHT,BOTTOM
    #[arg(short = 'm', long = "margin", default_value = "50")]
    pub margin: String,

    /// Horizontal alignment: left, center, right
    #[arg(short = 'a', long = "align", default_value = "left")]
    pub align: String,

    /// Output format
    #[arg(short = 'O', long = "format", value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Output file path (stdout if omitted)
    #[arg(short = 'o', long = "output-file")]
    pub output_file: Option<PathBuf>,

    /// Draw box edge and baselines in SVG output
    #[arg(long = "guides")]
    pub guides: bool,

    /// Exit with status 2 when the text does not fit the box
    #[arg(long = "strict")]
    pub strict: bool,

    /// Silent mode (no progress info)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Arguments for the segment command
#[derive(Args, Debug)]
pub struct SegmentArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Positioned lines and segments
    Json,
    /// One <text> element per segment
    Svg,
    /// Wrapped lines as plain text
    Txt,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Svg => "svg",
            Self::Txt => "txt",
        }
    }
}
