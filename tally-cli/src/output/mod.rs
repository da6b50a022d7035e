//! Output formatting module

use std::io::Write;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tally_core::Analysis;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Trait for report formatters
pub trait ReportFormatter {
    /// Format and output the report for one input
    fn format_report(&mut self, name: &str, analysis: &Analysis) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text report
    Text,
    /// JSON array with one object per input
    Json,
    /// Markdown formatted report
    Markdown,
}

impl OutputFormat {
    /// All formats, in the order they are listed to users
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// Name used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text report with one item per line",
            OutputFormat::Json => "JSON array with one object per input",
            OutputFormat::Markdown => "Markdown report with tables and lists",
        }
    }
}

/// Presentation options shared by all formatters
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Decimal places for percentages
    pub precision: usize,
    /// Pretty print JSON output
    pub pretty_json: bool,
    /// Print a header naming each input
    pub show_names: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: 4,
            pretty_json: true,
            show_names: false,
        }
    }
}

/// Create a formatter writing `format` to `writer`
pub fn create_formatter<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
    options: FormatOptions,
) -> Box<dyn ReportFormatter + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, options)),
    }
}

/// Format a relative occurrence as a percentage
pub(crate) fn percent(relative: f64, precision: usize) -> String {
    format!("{:.*}", precision, relative * 100.0)
}
