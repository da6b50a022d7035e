//! Analyze command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tally_core::{Analysis, Input, TextAnalyzer};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::resolve_patterns;
use crate::output::{create_formatter, FormatOptions, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Input encoding label, e.g. utf-8, windows-1251, koi8-r
    #[arg(short, long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Characters read from the source per batch
    #[arg(long, value_name = "CHARS")]
    pub buffer_size: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting text analysis");
        log::debug!("Arguments: {self:?}");

        let config = self.effective_config()?;
        let core_config = config.core_config()?;
        let analyzer = TextAnalyzer::with_config(core_config)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let inputs = resolve_patterns(&self.input)?;
        log::info!("Analysing {} input(s)", inputs.len());

        let show_names = inputs.len() > 1;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_inputs(inputs.len() as u64);

        let sources = inputs
            .into_iter()
            .map(|source| (source.name(), source.into_input()));
        let reports = analyze_all(&analyzer, sources, &progress)?;
        progress.finish();

        // Output is opened only after every input succeeded
        let format = self.format.unwrap_or(config.output.default_format);
        let options = FormatOptions {
            precision: config.output.precision,
            pretty_json: config.output.pretty_json,
            show_names,
        };

        let mut formatter = create_formatter(format, self.create_writer()?, options);
        for (name, analysis) in &reports {
            formatter.format_report(name, analysis)?;
        }
        formatter.finish()?;

        log::info!("Analysis completed");
        Ok(())
    }

    /// Configuration file merged with command-line overrides
    fn effective_config(&self) -> Result<CliConfig> {
        let mut config = CliConfig::load_or_default(self.config.as_deref())?;

        if let Some(encoding) = &self.encoding {
            config.analysis.encoding = encoding.clone();
        }
        if let Some(buffer_size) = self.buffer_size {
            config.analysis.buffer_size = buffer_size;
        }

        Ok(config)
    }

    fn create_writer(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(BufWriter::new(io::stdout()))),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // Already initialized when several commands run in one process
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

/// Analyse every input, stopping at the first failure
fn analyze_all<I>(
    analyzer: &TextAnalyzer,
    sources: I,
    progress: &ProgressReporter,
) -> Result<Vec<(String, Analysis)>>
where
    I: IntoIterator<Item = (String, Input)>,
{
    let mut reports = Vec::new();

    for (name, input) in sources {
        log::debug!("Analysing {name}");

        let analysis = analyzer
            .analyze_input(input)
            .map_err(|e| CliError::AnalysisError {
                input: name.clone(),
                message: e.to_string(),
            })?;

        progress.input_completed(&name);
        reports.push((name, analysis));
    }

    Ok(reports)
}
