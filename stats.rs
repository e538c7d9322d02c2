use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;

/// Snapshot of a frequency table, computed once and not kept in sync with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Distinct tokens (types).
    pub type_count: usize,
    /// Mean length in characters over all occurrences, not over types.
    pub average_token_length: f64,
    /// Occurrences of tokens starting with a lowercase "a".
    pub a_token_count: u64,
    pub total_occurrences: u64,
}

impl Stats {
    /// Expects a table that has already been through the length filter.
    /// An empty table has no statistics and yields `Error::EmptyTable`.
    pub fn compute(table: &FrequencyTable) -> Result<Self> {
        if table.is_empty() {
            return Err(Error::EmptyTable);
        }

        let mut total_occurrences: u64 = 0;
        let mut total_characters: u64 = 0;
        let mut a_token_count: u64 = 0;
        for (token, count) in table.iter() {
            total_occurrences += count;
            total_characters += token.chars().count() as u64 * count;
            if token.starts_with('a') {
                a_token_count += count;
            }
        }

        Ok(Self {
            type_count: table.len(),
            average_token_length: total_characters as f64 / total_occurrences as f64,
            a_token_count,
            total_occurrences,
        })
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tokenizer Stats: typeCount={}, averageTokenLength={:?}, aTokenCount={}",
            self.type_count, self.average_token_length, self.a_token_count
        )
    }
}
