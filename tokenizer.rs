use std::fs;
use std::path::Path;

use encoding_rs::Encoding;

use crate::config::{Config, EmptyTokenPolicy};
use crate::error::{Error, Result};

/// Splits file contents into tokens on single spaces, line by line.
///
/// No trimming, case folding or punctuation stripping is done. Between two
/// tokens, a run of `n` spaces yields `n - 1` empty tokens; leading spaces
/// yield one empty token each and trailing spaces yield none. A line without
/// any space is a single token, even when it is empty. Lines end at `\n` or
/// `\r\n`; a lone `\r` is ordinary text.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    encoding: &'static Encoding,
    empty_tokens: EmptyTokenPolicy,
}

impl Tokenizer {
    pub fn new(encoding: &'static Encoding, empty_tokens: EmptyTokenPolicy) -> Self {
        Self { encoding, empty_tokens }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.encoding(), config.empty_tokens())
    }

    /// Read the whole file and decode it with the configured encoding.
    ///
    /// The handle is closed before this returns, whatever the outcome.
    pub fn read(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|source| Error::ReadFile { path: path.to_path_buf(), source })?;
        self.decode(path, &bytes)
    }

    /// Malformed input is an error rather than being replaced with U+FFFD.
    pub fn decode(&self, path: &Path, bytes: &[u8]) -> Result<String> {
        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| Error::Decode { path: path.to_path_buf(), encoding: self.encoding.name() })
    }

    /// Lazily yield the tokens of `text`.
    pub fn tokens<'a>(self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let skip_empty = self.empty_tokens == EmptyTokenPolicy::Skip;
        text.lines()
            .flat_map(split_line)
            .filter(move |token| !(skip_empty && token.is_empty()))
    }
}

/// Split one line on single spaces, dropping the empty tokens at its end.
fn split_line(line: &str) -> impl Iterator<Item = &str> {
    let body = line.trim_end_matches(' ');
    // a spaces-only line has nothing left once trailing empties are gone
    let parts = if body.is_empty() && !line.is_empty() { None } else { Some(body.split(' ')) };
    parts.into_iter().flatten()
}
