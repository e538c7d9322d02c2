use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("input path does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("input path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("invalid token length bounds min={min}, max={max}: both must be at least 1 and max >= min")]
    InvalidLengthBounds { min: usize, max: usize },

    #[error("unknown character encoding: {0}")]
    UnknownEncoding(String),

    #[error("failed to list directory {}: {source}", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("failed to inspect directory entry {}: {source}", .path.display())]
    ReadEntry { path: PathBuf, source: io::Error },

    #[error("failed to read {}: {source}", .path.display())]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("{} is not valid {encoding}", .path.display())]
    Decode { path: PathBuf, encoding: &'static str },

    #[error("no tokens found in directory: {}", .0.display())]
    NoTokens(PathBuf),

    #[error("no statistics available: frequency table is empty")]
    EmptyTable,
}

impl Error {
    /// Fatal errors end the run; everything else is reported and skipped.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::MissingDirectory(_)
            | Error::NotADirectory(_)
            | Error::InvalidLengthBounds { .. }
            | Error::UnknownEncoding(_)
            | Error::ReadDir { .. }
            | Error::NoTokens(_) => true,
            Error::ReadEntry { .. }
            | Error::ReadFile { .. }
            | Error::Decode { .. }
            | Error::EmptyTable => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_item_failures_are_not_fatal() {
        let read = Error::ReadFile {
            path: PathBuf::from("a.txt"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let decode = Error::Decode { path: PathBuf::from("b.txt"), encoding: "UTF-8" };

        assert!(!read.is_fatal());
        assert!(!decode.is_fatal());
        assert!(!Error::EmptyTable.is_fatal());
    }

    #[test]
    fn configuration_failures_are_fatal() {
        assert!(Error::MissingDirectory(PathBuf::from("nope")).is_fatal());
        assert!(Error::InvalidLengthBounds { min: 4, max: 2 }.is_fatal());
        assert!(Error::NoTokens(PathBuf::from("corpus")).is_fatal());
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = Error::InvalidLengthBounds { min: 0, max: 3 };
        assert!(err.to_string().contains("min=0, max=3"));

        let err = Error::UnknownEncoding("klingon".to_string());
        assert_eq!(err.to_string(), "unknown character encoding: klingon");
    }
}
