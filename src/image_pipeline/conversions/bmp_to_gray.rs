use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    bmp::{BmpHeaders, BmpReader, BmpWriter, PixelLayout},
    common::error::{ConversionError, Result},
    conversions::{output_path::derive_output_path, types::ConversionConfig},
    gray::{LuminanceTransform, PixelTransform},
};

pub struct GrayscalePipeline<T: PixelTransform> {
    transform: T,
    config: ConversionConfig,
}

impl GrayscalePipeline<LuminanceTransform> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            transform: LuminanceTransform,
            config,
        }
    }
}

impl<T: PixelTransform> GrayscalePipeline<T> {
    pub fn with_custom(transform: T, config: ConversionConfig) -> Self {
        Self { transform, config }
    }

    fn validate(&self, headers: &BmpHeaders) -> Result<PixelLayout> {
        let layout = headers.validate().inspect_err(|e| {
            warn!(error = %e, "Rejecting input");
        })?;

        if let Some(max) = self.config.max_dimension {
            let max = max as usize;
            if layout.width > max || layout.height > max {
                warn!(
                    "Image dimensions {}x{} exceed maximum {}",
                    layout.width, layout.height, max
                );
                return Err(headers.invalid_dimensions());
            }
        }

        Ok(layout)
    }

    /// Grayscales a bitmap read from `input` into `output`.
    ///
    /// Nothing is written to `output` unless both headers validate.
    #[instrument(skip_all)]
    pub fn convert(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<()> {
        let mut reader = BmpReader::new(input);
        let (headers, layout) = self.read_and_validate(&mut reader)?;

        let mut writer = BmpWriter::new(output);
        self.transcode(&mut reader, &mut writer, &headers, layout)?;
        writer.finish()?;

        info!(
            width = layout.width,
            height = layout.height,
            padding = layout.padding,
            "Conversion complete"
        );
        Ok(())
    }

    /// Grayscales the bitmap at `input_path` into a sibling file named per
    /// the configured prefix and naming, returning the destination path.
    ///
    /// The destination is only created once both headers have validated.
    /// A destination left behind by a failure part way through the pixel
    /// data is not removed.
    pub fn convert_file<P: AsRef<Path>>(&self, input_path: P) -> Result<PathBuf> {
        let input_path = input_path.as_ref();
        let output_path = self.output_path_for(input_path);
        self.convert_file_to(input_path, &output_path)?;
        Ok(output_path)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file_to<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_file = {
            let _span = tracing::info_span!("open_input_file").entered();
            open_source(input_path).map_err(|source| ConversionError::Open {
                path: input_path.to_path_buf(),
                source,
            })?
        };
        let mut reader = BmpReader::new(BufReader::new(input_file));
        let (headers, layout) = self.read_and_validate(&mut reader)?;

        let output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            File::create(output_path).map_err(|source| ConversionError::Open {
                path: output_path.to_path_buf(),
                source,
            })?
        };
        let mut writer = BmpWriter::new(BufWriter::new(output_file));

        self.transcode(&mut reader, &mut writer, &headers, layout)?;
        writer.finish()?;

        info!(
            width = layout.width,
            height = layout.height,
            padding = layout.padding,
            output = %output_path.display(),
            "Conversion complete"
        );
        Ok(())
    }

    pub fn output_path_for(&self, input_path: &Path) -> PathBuf {
        derive_output_path(input_path, &self.config.output_prefix, self.config.naming)
    }

    fn read_and_validate<R: Read>(
        &self,
        reader: &mut BmpReader<R>,
    ) -> Result<(BmpHeaders, PixelLayout)> {
        let headers = {
            let _span = tracing::info_span!("read_headers").entered();
            reader.read_headers()?
        };

        let layout = {
            let _span = tracing::info_span!("validate",
                width = headers.info.width,
                height = headers.info.height
            ).entered();
            self.validate(&headers)?
        };

        Ok((headers, layout))
    }

    fn transcode<R: Read, W: Write>(
        &self,
        reader: &mut BmpReader<R>,
        writer: &mut BmpWriter<W>,
        headers: &BmpHeaders,
        layout: PixelLayout,
    ) -> Result<()> {
        {
            let _span = tracing::info_span!("write_headers").entered();
            writer.write_headers(headers)?;
        }

        let _span = tracing::info_span!("grayscale_rows",
            width = layout.width,
            height = layout.height,
            padding = layout.padding
        ).entered();

        for _ in 0..layout.height {
            let row = reader.read_row(&layout)?;
            self.transform.transform_row(row);
            writer.write_row(row, layout.padding)?;
        }

        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}

/// Opens `path` for reading, rejecting directories.
fn open_source(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::from(ErrorKind::IsADirectory));
    }
    Ok(file)
}
