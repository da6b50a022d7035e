//! Analysis configuration

use encoding_rs::Encoding;

use crate::error::{Error, Result};

/// Default configuration constants
pub mod defaults {
    /// Characters read from the source per batch
    pub const BUFFER_SIZE: usize = crate::buffer::DEFAULT_BUFFER_SIZE;

    /// Encoding used to decode byte input
    pub const ENCODING: &str = "utf-8";
}

/// Analysis configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) buffer_size: usize, // in characters
    pub(crate) encoding: &'static Encoding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buffer_size: defaults::BUFFER_SIZE,
            encoding: encoding_rs::UTF_8,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Characters read from the source per batch
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Encoding used for byte input
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(Error::Configuration(
                "buffer_size must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    buffer_size: Option<usize>,
    encoding: Option<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the buffer size in characters
    pub fn buffer_size(mut self, chars: usize) -> Self {
        self.buffer_size = Some(chars);
        self
    }

    /// Set the input encoding by WHATWG label (`"utf-8"`, `"windows-1251"`, ...)
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(size) = self.buffer_size {
            config.buffer_size = size;
        }

        if let Some(label) = self.encoding {
            config.encoding = Encoding::for_label(label.trim().as_bytes())
                .ok_or(Error::UnknownEncoding(label))?;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.buffer_size(), 1024);
        assert_eq!(config.encoding(), encoding_rs::UTF_8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::builder()
            .buffer_size(64)
            .encoding("cp1251")
            .build()
            .unwrap();

        assert_eq!(config.buffer_size(), 64);
        assert_eq!(config.encoding(), encoding_rs::WINDOWS_1251);
    }

    #[test]
    fn test_zero_buffer_size_rejected() {
        let result = Config::builder().buffer_size(0).build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_unknown_encoding_rejected() {
        let result = ConfigBuilder::new().encoding("utf-9").build();
        assert!(matches!(result, Err(Error::UnknownEncoding(label)) if label == "utf-9"));
    }
}
