use crate::config::LengthBounds;
use crate::frequency::FrequencyTable;

/// Keeps only the tokens whose length in characters lies within `bounds`.
///
/// Builds a new table and leaves `table` untouched, so a caller swaps the
/// result in only once it is complete.
pub fn filter_by_length(table: &FrequencyTable, bounds: LengthBounds) -> FrequencyTable {
    table
        .iter()
        .filter(|(token, _)| bounds.contains(token.chars().count()))
        .map(|(token, count)| (token.to_owned(), count))
        .collect()
}
