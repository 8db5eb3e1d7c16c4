//! Grayscale conversion configuration types

/// How the destination path is derived from the source path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputNaming {
    /// Prefix only the file name, keeping the directory (`dir/a.bmp` -> `dir/new-a.bmp`)
    #[default]
    FileName,
    /// Prefix the whole path string as given (`dir/a.bmp` -> `new-dir/a.bmp`)
    FullPath,
}

/// Configuration for BMP to grayscale conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Prepended to the source name to form the destination name
    pub output_prefix: String,
    /// Which part of the source path receives the prefix
    pub naming: OutputNaming,
    /// Upper bound on width and height, checked with the other header validations
    pub max_dimension: Option<u32>,
}

pub const DEFAULT_OUTPUT_PREFIX: &str = "new-";

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            naming: OutputNaming::default(),
            max_dimension: None,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    output_prefix: Option<String>,
    naming: Option<OutputNaming>,
    max_dimension: Option<Option<u32>>,
}

impl ConversionConfigBuilder {
    pub fn output_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.output_prefix = Some(prefix.into());
        self
    }

    pub fn naming(mut self, naming: OutputNaming) -> Self {
        self.naming = Some(naming);
        self
    }

    pub fn max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            output_prefix: self.output_prefix.unwrap_or(default.output_prefix),
            naming: self.naming.unwrap_or(default.naming),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
