use clap::Parser;
use std::path::PathBuf;

use iconforge::ResizeFilter;

#[derive(Parser)]
#[command(name = "iconforge", version, about = "iconforge CLI")]
pub struct CliArgs {
    /// Source image to convert
    #[arg(short, long, default_value = "icons/icon.png")]
    pub input: PathBuf,

    /// Directory receiving the generated icons (created if absent)
    #[arg(short, long, default_value = "icons")]
    pub output_dir: PathBuf,

    /// Icon edge lengths in pixels, comma-separated positive integers
    #[arg(long, default_value = "16,48,128", value_delimiter = ',')]
    pub sizes: Vec<String>,

    /// Resampling filter (nearest, bilinear, lanczos3)
    #[arg(long, value_enum, default_value_t = ResizeFilter::Lanczos3)]
    pub filter: ResizeFilter,

    /// Print the manifest `default_icon` mapping for the written icons
    #[arg(long, default_value_t = false)]
    pub manifest: bool,

    /// Only log warnings and errors
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
