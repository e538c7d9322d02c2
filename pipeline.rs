use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::enumerator::{self, EntryKind};
use crate::error::{Error, Result};
use crate::filter::filter_by_length;
use crate::frequency::FrequencyTable;
use crate::stats::Stats;
use crate::tokenizer::Tokenizer;

/// What happened to the entries of the input directory.
#[derive(Debug, Clone, Default)]
pub struct TraversalSummary {
    pub files_read: usize,
    pub tokens_merged: usize,
    /// (path, reason) for every entry that contributed no tokens.
    pub skipped: Vec<(PathBuf, String)>,
}

impl TraversalSummary {
    fn skip(&mut self, path: PathBuf, reason: impl Into<String>) {
        self.skipped.push((path, reason.into()));
    }
}

/// Result of a full run: the filtered table plus traversal bookkeeping.
#[derive(Debug, Clone)]
pub struct CorpusReport {
    pub table: FrequencyTable,
    pub summary: TraversalSummary,
}

impl CorpusReport {
    pub fn stats(&self) -> Result<Stats> {
        Stats::compute(&self.table)
    }
}

/// Tokenize every regular file directly under `dir` into one table.
///
/// Per-entry failures are logged and recorded in the summary; only fatal
/// errors, such as failing to list `dir` itself, are returned.
pub fn accumulate(dir: &Path, tokenizer: Tokenizer) -> Result<(FrequencyTable, TraversalSummary)> {
    let listing = enumerator::list_entries(dir)?;
    let mut table = FrequencyTable::new();
    let mut summary = TraversalSummary::default();

    for failure in listing.failures {
        if failure.is_fatal() {
            return Err(failure);
        }
        error!("{failure}");
        let path = match &failure {
            Error::ReadEntry { path, .. } => path.clone(),
            _ => dir.to_path_buf(),
        };
        summary.skip(path, failure.to_string());
    }

    for entry in listing.entries {
        match entry.kind {
            EntryKind::Subdirectory => {
                warn!("Skipping {}: subdirectories are not allowed", entry.path.display());
                summary.skip(entry.path, "subdirectory");
            }
            EntryKind::Empty => {
                warn!("Skipping empty file {}", entry.path.display());
                summary.skip(entry.path, "empty file");
            }
            EntryKind::Special => {
                warn!("Skipping {}: not a regular file", entry.path.display());
                summary.skip(entry.path, "not a regular file");
            }
            EntryKind::File => {
                info!("Reading {}", entry.path.display());
                let text = match tokenizer.read(&entry.path) {
                    Ok(text) => text,
                    Err(e) if e.is_fatal() => return Err(e),
                    Err(e) => {
                        error!("Couldn't get tokens of file: {e}");
                        summary.skip(entry.path, e.to_string());
                        continue;
                    }
                };
                let merged = table.merge(tokenizer.tokens(&text));
                if merged == 0 {
                    warn!("No tokens found in file: {}", entry.path.display());
                    summary.skip(entry.path, "no tokens");
                    continue;
                }
                debug!("{} tokens from {}", merged, entry.path.display());
                summary.files_read += 1;
                summary.tokens_merged += merged;
            }
        }
    }

    Ok((table, summary))
}

/// Traverse, accumulate and filter. Fails if the directory yields no tokens.
pub fn run(config: &Config) -> Result<CorpusReport> {
    let tokenizer = Tokenizer::from_config(config);
    let (table, summary) = accumulate(config.input_dir(), tokenizer)?;
    if table.is_empty() {
        return Err(Error::NoTokens(config.input_dir().to_path_buf()));
    }
    info!(
        "Accumulated {} tokens ({} distinct) from {} files, {} entries skipped",
        summary.tokens_merged,
        table.len(),
        summary.files_read,
        summary.skipped.len()
    );

    let bounds = config.bounds();
    let filtered = filter_by_length(&table, bounds);
    debug!(
        "Length filter [{}, {}] kept {} of {} distinct tokens",
        bounds.min(),
        bounds.max(),
        filtered.len(),
        table.len()
    );

    Ok(CorpusReport { table: filtered, summary })
}
