//! Plain text output formatter

use super::{percent, FormatOptions, ReportFormatter};
use anyhow::Result;
use std::io::Write;
use tally_core::Analysis;

/// Plain text formatter - one statistic, word or ranking entry per line
pub struct TextFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    reports: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            reports: 0,
        }
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn format_report(&mut self, name: &str, analysis: &Analysis) -> Result<()> {
        if self.options.show_names {
            if self.reports > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "==> {name} <==")?;
        }
        self.reports += 1;

        writeln!(self.writer, "Total words count: {}", analysis.words_count())?;
        writeln!(self.writer, "Total sentences count: {}", analysis.sentences_count())?;
        writeln!(self.writer, "Total paragraphs count: {}", analysis.paragraphs_count())?;
        writeln!(self.writer, "Average word length: {}", analysis.average_word_length())?;

        for (ch, relative) in analysis.relative_char_occurrences() {
            writeln!(
                self.writer,
                "Char '{ch}' occurrences in {}%",
                percent(relative, self.options.precision)
            )?;
        }

        writeln!(self.writer, "Alphabetic dict:")?;
        for word in analysis.alphabetic_ordered() {
            writeln!(self.writer, "{word}")?;
        }

        writeln!(self.writer, "By word occurrence dict:")?;
        for item in analysis.occurrence_desc_ordered() {
            writeln!(self.writer, "{item}")?;
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
