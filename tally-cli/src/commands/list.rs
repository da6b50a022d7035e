//! Listings for the list command

use anyhow::Result;
use std::io::Write;
use tally_core::Encoding;

use crate::output::OutputFormat;

/// Labels shown by `tally list encodings`; any WHATWG label is accepted
pub const COMMON_ENCODING_LABELS: &[&str] = &[
    "utf-8",
    "utf-16le",
    "utf-16be",
    "windows-1251",
    "koi8-r",
    "koi8-u",
    "ibm866",
    "iso-8859-5",
    "x-mac-cyrillic",
    "windows-1252",
];

/// Write the output formats, one per line
pub fn write_formats(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Available output formats:")?;
    for format in OutputFormat::ALL {
        writeln!(out, "  {:<10} - {}", format.as_str(), format.description())?;
    }
    Ok(())
}

/// Write the common encodings with their canonical names
pub fn write_encodings(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Common input encodings:")?;
    for label in COMMON_ENCODING_LABELS {
        if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
            writeln!(out, "  {:<16} ({})", label, encoding.name())?;
        }
    }
    writeln!(out)?;
    writeln!(out, "Any WHATWG encoding label is accepted; a BOM overrides the label.")?;
    Ok(())
}
