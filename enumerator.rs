use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Non-empty regular file, handed to the tokenizer.
    File,
    /// Regular file with zero bytes.
    Empty,
    Subdirectory,
    /// Socket, FIFO, device or anything else that is neither file nor directory.
    Special,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Immediate entries of one directory, sorted by path.
#[derive(Debug, Default)]
pub struct Listing {
    pub entries: Vec<Entry>,
    /// Entries that could not be inspected; these are skipped, not fatal.
    pub failures: Vec<Error>,
}

/// List the immediate entries of `dir` without descending into subdirectories.
///
/// Only failing to open `dir` itself is an error; per-entry problems end up in
/// `Listing::failures`.
pub fn list_entries(dir: &Path) -> Result<Listing> {
    let read_dir = fs::read_dir(dir).map_err(|source| Error::ReadDir { path: dir.to_path_buf(), source })?;

    let mut listing = Listing::default();
    for entry in read_dir {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(source) => {
                listing.failures.push(Error::ReadEntry { path: dir.to_path_buf(), source });
                continue;
            }
        };
        // follows symlinks, so a link to a directory counts as a subdirectory
        match fs::metadata(&path) {
            Ok(meta) => {
                let kind = if meta.is_dir() {
                    EntryKind::Subdirectory
                } else if !meta.is_file() {
                    EntryKind::Special
                } else if meta.len() == 0 {
                    EntryKind::Empty
                } else {
                    EntryKind::File
                };
                listing.entries.push(Entry { path, kind });
            }
            Err(source) => listing.failures.push(Error::ReadEntry { path, source }),
        }
    }
    listing.entries.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn kinds(listing: &Listing) -> Vec<(String, EntryKind)> {
        listing
            .entries
            .iter()
            .map(|e| (e.path.file_name().unwrap().to_string_lossy().into_owned(), e.kind))
            .collect()
    }

    #[test]
    fn classifies_immediate_entries() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "the dog ran").unwrap();
        fs::write(dir.path().join("a.txt"), "the cat sat").unwrap();
        fs::write(dir.path().join("empty.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.txt"), "never read").unwrap();

        let listing = list_entries(dir.path()).unwrap();

        assert!(listing.failures.is_empty());
        assert_eq!(
            kinds(&listing),
            vec![
                ("a.txt".to_string(), EntryKind::File),
                ("b.txt".to_string(), EntryKind::File),
                ("empty.txt".to_string(), EntryKind::Empty),
                ("nested".to_string(), EntryKind::Subdirectory),
            ]
        );
    }

    #[test]
    fn empty_directory_lists_nothing() {
        let dir = TempDir::new().unwrap();
        let listing = list_entries(dir.path()).unwrap();
        assert!(listing.entries.is_empty());
        assert!(listing.failures.is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = list_entries(&dir.path().join("gone")).unwrap_err();
        assert!(matches!(err, Error::ReadDir { .. }));
        assert!(err.is_fatal());
    }
}
