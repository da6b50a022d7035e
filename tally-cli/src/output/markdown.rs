//! Markdown output formatter

use super::{percent, FormatOptions, ReportFormatter};
use anyhow::Result;
use std::io::Write;
use tally_core::Analysis;

/// Markdown formatter - one section per input with tables and lists
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    report_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            report_count: 0,
        }
    }
}

impl<W: Write> ReportFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, name: &str, analysis: &Analysis) -> Result<()> {
        if self.report_count > 0 {
            writeln!(self.writer)?;
        }
        self.report_count += 1;

        writeln!(self.writer, "## {name}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Statistic | Value |")?;
        writeln!(self.writer, "|-----------|-------|")?;
        writeln!(self.writer, "| Words | {} |", analysis.words_count())?;
        writeln!(self.writer, "| Sentences | {} |", analysis.sentences_count())?;
        writeln!(self.writer, "| Paragraphs | {} |", analysis.paragraphs_count())?;
        writeln!(
            self.writer,
            "| Average word length | {} |",
            analysis.average_word_length()
        )?;

        let chars = analysis.relative_char_occurrences();
        if !chars.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "### Characters")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Char | Occurrence |")?;
            writeln!(self.writer, "|------|------------|")?;
            for (ch, relative) in chars {
                writeln!(
                    self.writer,
                    "| `{ch}` | {}% |",
                    percent(relative, self.options.precision)
                )?;
            }
        }

        if analysis.distinct_words_count() > 0 {
            writeln!(self.writer)?;
            writeln!(self.writer, "### Dictionary")?;
            writeln!(self.writer)?;
            for word in analysis.alphabetic_ordered() {
                writeln!(self.writer, "- `{word}`")?;
            }

            writeln!(self.writer)?;
            writeln!(self.writer, "### By occurrence")?;
            writeln!(self.writer)?;
            for (rank, item) in analysis.occurrence_desc_ordered().enumerate() {
                writeln!(self.writer, "{}. `{}` ({})", rank + 1, item.word, item.occurrences)?;
            }
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Analysed inputs: {}*", self.report_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
