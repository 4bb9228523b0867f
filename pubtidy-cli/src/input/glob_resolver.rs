//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve input patterns to a sorted, deduplicated list of files.
///
/// Plain paths work as patterns too; directories matched by a pattern
/// are skipped.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths =
            glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        for entry in paths {
            let path = entry.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No input files found matching the provided patterns");
    }

    files.sort();
    files.dedup();

    Ok(files)
}
