//! Five-letter word catalog
//!
//! The catalog is the fixed, filtered set of words the pool draws from. It is
//! built once from raw newline-separated text and never changes afterwards.

use std::fmt;

/// Number of letters every catalog word has
pub const WORD_LENGTH: usize = 5;

/// Error type for catalogs that cannot be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No line of the source survived filtering
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(
                f,
                "Word list contains no valid {WORD_LENGTH}-letter alphabetic words"
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Immutable, ordered list of lower-cased five-letter words
///
/// Order follows the source text. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCatalog {
    words: Vec<String>,
}

impl WordCatalog {
    /// Build a catalog from raw word-list text
    ///
    /// Each line is trimmed; only lines of exactly five ASCII letters are kept,
    /// lower-cased, in their original order.
    ///
    /// # Errors
    /// Returns `CatalogError::Empty` if no line qualifies.
    ///
    /// # Examples
    /// ```
    /// use gimme_five::core::WordCatalog;
    ///
    /// let catalog = WordCatalog::parse("apple\nZebra\nab12c\ntoast\nth\n").unwrap();
    /// assert_eq!(catalog.len(), 3);
    /// assert_eq!(catalog.word_at(1), "zebra");
    ///
    /// assert!(WordCatalog::parse("no\nsix six\nhere").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let words: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| is_candidate(line))
            .map(str::to_ascii_lowercase)
            .collect();

        if words.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { words })
    }

    /// Number of words in the catalog
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a successfully parsed catalog
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the word at `index`
    ///
    /// # Panics
    /// Panics if `index >= len()`. Callers only pass indices handed out by an
    /// `IndexPool` built for this catalog, so an out-of-range index is a bug.
    #[inline]
    #[must_use]
    pub fn word_at(&self, index: usize) -> &str {
        assert!(
            index < self.words.len(),
            "catalog index {index} out of range (len {})",
            self.words.len()
        );
        &self.words[index]
    }

    /// Iterate over the words in source order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

fn is_candidate(line: &str) -> bool {
    line.len() == WORD_LENGTH && line.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_filters_and_lowercases() {
        let catalog = WordCatalog::parse("apple\nZebra\nab12c\ntoast\nth").unwrap();
        let words: Vec<&str> = catalog.words().collect();
        assert_eq!(words, vec!["apple", "zebra", "toast"]);
    }

    #[test]
    fn parse_trims_whitespace_and_crlf() {
        let catalog = WordCatalog::parse("  crane \r\nslate\r\n\tirate\t\n").unwrap();
        let words: Vec<&str> = catalog.words().collect();
        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_preserves_order_and_duplicates() {
        let catalog = WordCatalog::parse("zonal\napple\nZONAL\n").unwrap();
        let words: Vec<&str> = catalog.words().collect();
        assert_eq!(words, vec!["zonal", "apple", "zonal"]);
    }

    #[test]
    fn parse_rejects_non_ascii_letters() {
        // "café" is five bytes long, so only the letter check rejects it
        let catalog = WordCatalog::parse("cafés\ncafé\nx-ray\nco op\nvalid").unwrap();
        let words: Vec<&str> = catalog.words().collect();
        assert_eq!(words, vec!["valid"]);
    }

    #[test]
    fn parse_empty_input() {
        assert_eq!(WordCatalog::parse(""), Err(CatalogError::Empty));
        assert_eq!(
            WordCatalog::parse("a\nab\nabcdef\n12345\n"),
            Err(CatalogError::Empty)
        );
    }

    #[test]
    fn single_qualifying_line_is_enough() {
        let catalog = WordCatalog::parse("no\nfives\nhere").unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.word_at(0), "fives");
        assert_eq!(
            WordCatalog::parse("no\nsix six\nhere"),
            Err(CatalogError::Empty)
        );
    }

    #[test]
    fn word_at_returns_in_order() {
        let catalog = WordCatalog::parse("crane\nslate").unwrap();
        assert_eq!(catalog.word_at(0), "crane");
        assert_eq!(catalog.word_at(1), "slate");
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn word_at_out_of_range_panics() {
        let catalog = WordCatalog::parse("crane").unwrap();
        let _ = catalog.word_at(1);
    }

    #[test]
    fn empty_error_message_mentions_length() {
        let message = CatalogError::Empty.to_string();
        assert!(message.contains("5-letter"));
    }
}
