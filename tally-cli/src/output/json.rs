//! JSON output formatter

use super::{FormatOptions, ReportFormatter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use tally_core::Analysis;

/// JSON formatter - collects reports and writes them as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    reports: Vec<ReportData>,
}

/// Data structure for one analysed input
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ReportData {
    /// Input name
    pub name: String,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    /// `null` when the input has no words
    pub average_word_length: Option<f64>,
    /// Character to relative occurrence
    pub relative_char_occurrences: BTreeMap<char, f64>,
    /// Distinct words in alphabetic order
    pub dictionary: Vec<String>,
    /// Words by occurrence, most frequent first
    pub ranking: Vec<RankingEntry>,
}

/// One entry of the word ranking
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RankingEntry {
    pub word: String,
    pub occurrences: usize,
}

impl ReportData {
    fn from_analysis(name: &str, analysis: &Analysis) -> Self {
        let average = analysis.average_word_length();

        Self {
            name: name.to_string(),
            words: analysis.words_count(),
            sentences: analysis.sentences_count(),
            paragraphs: analysis.paragraphs_count(),
            average_word_length: average.is_finite().then_some(average),
            relative_char_occurrences: analysis.relative_char_occurrences(),
            dictionary: analysis.alphabetic_ordered().map(str::to_string).collect(),
            ranking: analysis
                .occurrence_desc_ordered()
                .map(|item| RankingEntry {
                    word: item.word.to_string(),
                    occurrences: item.occurrences,
                })
                .collect(),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            reports: Vec::new(),
        }
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn format_report(&mut self, name: &str, analysis: &Analysis) -> Result<()> {
        self.reports.push(ReportData::from_analysis(name, analysis));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.options.pretty_json {
            serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.reports)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
