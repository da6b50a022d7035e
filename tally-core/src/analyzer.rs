//! Text analyzer wiring source, tokenizer and aggregator together

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;
use std::time::Instant;

use crate::aggregator::Aggregator;
use crate::analysis::Analysis;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::input::Input;
use crate::source::{CharSource, ReaderSource, StrSource};
use crate::tokenizer::Tokenizer;

/// Runs the analysis pipeline over any supported input
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
    config: Config,
}

impl TextAnalyzer {
    /// Create an analyzer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyse characters from an already-open source.
    ///
    /// The source is consumed to its end. A read failure aborts the analysis
    /// and no partial result is returned.
    pub fn analyze<S: CharSource>(&self, source: S) -> Result<Analysis> {
        let start = Instant::now();

        let tokenizer = Tokenizer::with_buffer_size(source, self.config.buffer_size);
        let analysis = Aggregator::new().aggregate(tokenizer)?;

        tracing::debug!(
            elapsed_us = start.elapsed().as_micros() as u64,
            words = analysis.words_count(),
            "analysis complete"
        );
        Ok(analysis)
    }

    /// Analyse an in-memory string
    pub fn analyze_text(&self, text: &str) -> Result<Analysis> {
        self.analyze(StrSource::new(text))
    }

    /// Analyse a byte stream decoded with the configured encoding
    pub fn analyze_reader<R: Read>(&self, reader: R) -> Result<Analysis> {
        self.analyze(ReaderSource::with_encoding(reader, self.config.encoding))
    }

    /// Analyse a file.
    ///
    /// The file is opened here and closed before returning, on success and
    /// on failure alike.
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<Analysis> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening file");

        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        self.analyze_reader(file)
    }

    /// Analyse any [`Input`] variant
    pub fn analyze_input(&self, input: Input) -> Result<Analysis> {
        tracing::debug!(input = %input.describe(), "analysing input");
        match input {
            Input::Text(text) => self.analyze_text(&text),
            Input::File(path) => self.analyze_file(path),
            Input::Bytes(bytes) => self.analyze_reader(Cursor::new(bytes)),
            Input::Reader(reader) => self.analyze_reader(reader),
        }
    }
}
