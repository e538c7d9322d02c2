use std::collections::HashMap;
use std::collections::hash_map;

use itertools::Itertools;

/// Token -> occurrence count over the whole corpus.
///
/// Every stored count is at least 1. Iteration order is the hash map's and is
/// not stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token once. Returns the number of tokens consumed.
    pub fn merge<I, S>(&mut self, tokens: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut merged = 0;
        for token in tokens {
            let token = token.as_ref();
            match self.counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    self.counts.insert(token.to_owned(), 1);
                }
            }
            merged += 1;
        }
        merged
    }

    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    /// Number of distinct tokens (types).
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn sorted_tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens().sorted_unstable()
    }

    /// Sum of all counts (occurrences).
    pub fn total_occurrences(&self) -> u64 {
        self.counts.values().sum()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for FrequencyTable {
    /// Repeated tokens are summed; zero counts are dropped.
    fn from_iter<T: IntoIterator<Item = (S, u64)>>(iter: T) -> Self {
        let mut counts = HashMap::new();
        for (token, count) in iter.into_iter().filter(|(_, count)| *count > 0) {
            *counts.entry(token.into()).or_insert(0) += count;
        }
        Self { counts }
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (String, u64);
    type IntoIter = hash_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}
