//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;

use super::{InputSource, STDIN_PATTERN};
use crate::error::CliError;

/// Resolve file patterns to inputs
///
/// `-` selects standard input. Matches are sorted and deduplicated, with
/// standard input (if requested) first.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut inputs = Vec::new();

    for pattern in patterns {
        if pattern == STDIN_PATTERN {
            inputs.push(InputSource::Stdin);
            continue;
        }

        let paths = glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;

        for path_result in paths {
            let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                inputs.push(InputSource::File(path));
            }
        }
    }

    if inputs.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    inputs.sort();
    inputs.dedup();

    log::debug!("Resolved {} input(s)", inputs.len());
    Ok(inputs)
}
