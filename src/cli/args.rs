//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Mimeconv - Convert a document to a different format using unoconv
#[derive(Parser, Debug)]
#[command(name = "mimeconv")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The input file to convert
    pub input_file: PathBuf,

    /// The output file to save the conversion to.
    /// Its extension selects the conversion format.
    pub output_file: PathBuf,

    /// The target MIME type for the conversion.
    /// If not specified, it is inferred from the output file extension.
    #[arg(long, alias = "target_mime")]
    pub target_mime: Option<String>,

    /// Path to the unoconv executable.
    /// A bare name is resolved through the PATH environment.
    #[arg(long, alias = "unoconv_path", default_value = "unoconv")]
    pub unoconv_path: PathBuf,

    /// Maximum time in seconds to wait for the converter.
    /// Waits indefinitely when not set.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
