//! Word list loading utilities
//!
//! Builds a catalog from the embedded list or from a file on disk.

use crate::core::{CatalogError, WordCatalog};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::WORDS_ALPHA;

/// Build the catalog from the embedded word list
///
/// # Errors
///
/// Returns `CatalogError::Empty` if the embedded list holds no five-letter words.
///
/// # Examples
/// ```
/// use gimme_five::wordlists::loader::embedded_catalog;
///
/// let catalog = embedded_catalog().unwrap();
/// assert!(catalog.len() >= 16);
/// ```
pub fn embedded_catalog() -> Result<WordCatalog, CatalogError> {
    WordCatalog::parse(WORDS_ALPHA)
}

/// Build the catalog from a word list file
///
/// The file is read once; lines that are not five ASCII letters are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no five-letter words.
///
/// # Examples
/// ```no_run
/// use gimme_five::wordlists::loader::load_from_file;
///
/// let catalog = load_from_file("data/words_alpha.txt").unwrap();
/// println!("Loaded {} words", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordCatalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    WordCatalog::parse(&content).with_context(|| format!("Unusable word list {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_word_list(name: &str, content: &str) -> std::path::PathBuf {
        let path =
            std::env::temp_dir().join(format!("gimme_five_{name}_{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn embedded_catalog_loads() {
        let catalog = embedded_catalog().unwrap();
        assert!(catalog.len() >= 16);
    }

    #[test]
    fn load_from_file_filters_lines() {
        let path = temp_word_list("filters", "apple\nZebra\nab12c\ntoast\nth\n");
        let catalog = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let words: Vec<&str> = catalog.words().collect();
        assert_eq!(words, vec!["apple", "zebra", "toast"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let err = load_from_file("/definitely/not/here/words.txt").unwrap_err();
        assert!(err.to_string().contains("Failed to read word list"));
    }

    #[test]
    fn load_from_file_without_words_fails() {
        let path = temp_word_list("empty", "a\nbb\nsixsix\n");
        let err = load_from_file(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(err.to_string().contains("Unusable word list"));
        assert!(err.downcast_ref::<CatalogError>().is_some());
    }
}
