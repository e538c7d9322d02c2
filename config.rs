use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, UTF_8};
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Inclusive range of accepted token lengths, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthBounds {
    min: usize,
    max: usize,
}

impl LengthBounds {
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min == 0 || max == 0 || min > max {
            return Err(Error::InvalidLengthBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }
}

/// What to do with the empty strings produced by runs of spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyTokenPolicy {
    /// Count them like any other token (they are later dropped by any length filter).
    #[default]
    Keep,
    Skip,
}

/// Validated settings for one run.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    input_dir: PathBuf,
    bounds: LengthBounds,
    #[serde(serialize_with = "serialize_encoding")]
    encoding: &'static Encoding,
    empty_tokens: EmptyTokenPolicy,
}

impl Config {
    pub fn new(input_dir: impl Into<PathBuf>, min_length: usize, max_length: usize) -> Result<Self> {
        let input_dir = input_dir.into();
        if !input_dir.exists() {
            return Err(Error::MissingDirectory(input_dir));
        }
        if !input_dir.is_dir() {
            return Err(Error::NotADirectory(input_dir));
        }
        let bounds = LengthBounds::new(min_length, max_length)?;

        Ok(Self {
            input_dir,
            bounds,
            encoding: UTF_8,
            empty_tokens: EmptyTokenPolicy::default(),
        })
    }

    /// Resolve `label` (e.g. "utf-8", "latin1", "windows-1252") to a decoder.
    pub fn with_encoding(mut self, label: &str) -> Result<Self> {
        self.encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| Error::UnknownEncoding(label.to_string()))?;
        Ok(self)
    }

    pub fn with_empty_tokens(mut self, policy: EmptyTokenPolicy) -> Self {
        self.empty_tokens = policy;
        self
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    pub fn empty_tokens(&self) -> EmptyTokenPolicy {
        self.empty_tokens
    }
}

fn serialize_encoding<S: Serializer>(encoding: &&'static Encoding, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(encoding.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn bounds_are_inclusive() {
        let bounds = LengthBounds::new(3, 5).unwrap();
        assert!(!bounds.contains(2));
        assert!(bounds.contains(3));
        assert!(bounds.contains(5));
        assert!(!bounds.contains(6));
    }

    #[test]
    fn rejects_zero_and_inverted_bounds() {
        assert!(matches!(LengthBounds::new(0, 4), Err(Error::InvalidLengthBounds { min: 0, max: 4 })));
        assert!(matches!(LengthBounds::new(2, 0), Err(Error::InvalidLengthBounds { .. })));
        assert!(matches!(LengthBounds::new(5, 3), Err(Error::InvalidLengthBounds { .. })));
        assert!(LengthBounds::new(4, 4).is_ok());
    }

    #[test]
    fn rejects_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        assert!(matches!(Config::new(&missing, 1, 3), Err(Error::MissingDirectory(p)) if p == missing));
    }

    #[test]
    fn rejects_regular_file_as_input() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("corpus.txt");
        std::fs::write(&file, "the cat").unwrap();
        assert!(matches!(Config::new(&file, 1, 3), Err(Error::NotADirectory(_))));
    }

    #[test]
    fn defaults_to_utf8_and_keeping_empty_tokens() {
        let dir = TempDir::new().unwrap();
        let config = Config::new(dir.path(), 1, 3).unwrap();
        assert_eq!(config.encoding(), UTF_8);
        assert_eq!(config.empty_tokens(), EmptyTokenPolicy::Keep);
        assert_eq!(config.encoding().name(), DEFAULT_ENCODING);
    }

    #[test]
    fn serializes_encoding_by_name() {
        let dir = TempDir::new().unwrap();
        let config = Config::new(dir.path(), 2, 7)
            .unwrap()
            .with_encoding("latin1")
            .unwrap()
            .with_empty_tokens(EmptyTokenPolicy::Skip);

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["bounds"], serde_json::json!({ "min": 2, "max": 7 }));
        assert_eq!(json["encoding"], "windows-1252");
        assert_eq!(json["empty_tokens"], "skip");
        assert_eq!(json["input_dir"], dir.path().to_str().unwrap());
    }

    #[test]
    fn resolves_encoding_labels() {
        let dir = TempDir::new().unwrap();
        let config = Config::new(dir.path(), 1, 3).unwrap().with_encoding("latin1").unwrap();
        assert_eq!(config.encoding(), encoding_rs::WINDOWS_1252);

        let err = Config::new(dir.path(), 1, 3).unwrap().with_encoding("klingon").unwrap_err();
        assert!(matches!(err, Error::UnknownEncoding(label) if label == "klingon"));
    }
}
