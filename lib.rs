//! Token frequency statistics over a flat directory of text files.
//!
//! The run is a chain of stages, each taking the previous stage's output:
//! list the directory, tokenize each file, merge into a [`FrequencyTable`],
//! filter by token length, then reduce to [`Stats`].

pub mod config;
pub mod enumerator;
pub mod error;
pub mod filter;
pub mod frequency;
pub mod pipeline;
pub mod stats;
pub mod tokenizer;

pub use config::{Config, EmptyTokenPolicy, LengthBounds};
pub use error::{Error, Result};
pub use filter::filter_by_length;
pub use frequency::FrequencyTable;
pub use pipeline::{CorpusReport, TraversalSummary};
pub use stats::Stats;
pub use tokenizer::Tokenizer;
