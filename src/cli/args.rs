use clap::Parser;
use std::path::PathBuf;

use logotrim::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "logotrim",
    version,
    about = "Make near-white logo backgrounds transparent and trim to content"
)]
pub struct CliArgs {
    /// Source image (any format the decoder understands)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Destination file; overwritten if present. Its directory must exist
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (png or tiff). Defaults to the params file value, else png
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// JSON params preset (threshold, fill, format)
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
