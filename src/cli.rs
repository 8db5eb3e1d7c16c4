use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use bmp_gray_rs::image_pipeline::{
    conversions::DEFAULT_OUTPUT_PREFIX, ConversionConfig, GrayscalePipeline, OutputNaming,
};

/// Writes a grayscale copy of an uncompressed 24-bit bitmap.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Bitmap to convert; the source file is left untouched
    pub path: PathBuf,

    /// Prefix for the output file name
    #[arg(long, default_value = DEFAULT_OUTPUT_PREFIX)]
    pub prefix: String,

    /// Prefix the whole path as given instead of only the file name
    #[arg(long)]
    pub full_path_prefix: bool,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_directive(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn run(self) -> anyhow::Result<()> {
        let naming = if self.full_path_prefix {
            OutputNaming::FullPath
        } else {
            OutputNaming::FileName
        };
        let config = ConversionConfig::builder()
            .output_prefix(self.prefix)
            .naming(naming)
            .build();
        let pipeline = GrayscalePipeline::new(config);

        let output = pipeline
            .convert_file(&self.path)
            .with_context(|| format!("failed to convert {}", self.path.display()))?;

        info!("Wrote {}", output.display());
        Ok(())
    }
}
