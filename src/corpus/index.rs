//! The word-to-rank index built from a corpus.

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use log::debug;

use crate::corpus::tokenizer::CorpusTokenizer;
use crate::error::Result;

/// An immutable index mapping each corpus word to its rank.
///
/// A word's rank is the token position at which it first appears in the
/// corpus; lower ranks mark stronger suggestion candidates. Positions count
/// every token slot in the sanitized corpus, including slots whose token was
/// discarded, so ranks reflect absolute corpus position.
///
/// The index is built once and never mutated. Lookups for absent words
/// return `None` — an absent word is never ranked and can never outrank a
/// present one. Sharing the index across threads needs no synchronization
/// since every operation takes `&self`.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    /// Word to first-occurrence position. Keys are non-empty lowercase a-z.
    ranks: AHashMap<String, usize>,
}

impl CorpusIndex {
    /// Build an index from raw corpus text.
    ///
    /// Cannot fail: text with no alphabetic content yields an empty index,
    /// and every later suggestion against it degrades to "no suggestion".
    pub fn from_text(text: &str) -> Self {
        let tokenizer = CorpusTokenizer::new();
        let mut ranks = AHashMap::new();

        for token in tokenizer.tokenize(text) {
            // First occurrence wins: never overwrite an earlier position.
            ranks.entry(token.text).or_insert(token.position);
        }

        debug!("built corpus index with {} words", ranks.len());

        CorpusIndex { ranks }
    }

    /// Build an index from a corpus file.
    ///
    /// Convenience for the surrounding application; the engine itself only
    /// ever sees already-read text via [`CorpusIndex::from_text`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// Get the rank of a word, or `None` if the word is not in the corpus.
    ///
    /// Keys are lowercase; callers normalize their input before lookup.
    pub fn rank(&self, word: &str) -> Option<usize> {
        self.ranks.get(word).copied()
    }

    /// Check whether a word is present in the corpus.
    pub fn contains(&self, word: &str) -> bool {
        self.ranks.contains_key(word)
    }

    /// Get the number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Check whether the index holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Iterate over all indexed words and their ranks.
    pub fn words(&self) -> impl Iterator<Item = (&str, usize)> {
        self.ranks.iter().map(|(word, rank)| (word.as_str(), *rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_text() {
        let index = CorpusIndex::from_text("cat cats hat hats bat mat cat");

        assert_eq!(index.len(), 6);
        assert_eq!(index.rank("cat"), Some(0));
        assert_eq!(index.rank("cats"), Some(1));
        assert_eq!(index.rank("hat"), Some(2));
        assert_eq!(index.rank("hats"), Some(3));
        assert_eq!(index.rank("bat"), Some(4));
        assert_eq!(index.rank("mat"), Some(5));
    }

    #[test]
    fn test_first_occurrence_wins() {
        // "cat" reappears at position 6; the earlier position must stick.
        let index = CorpusIndex::from_text("cat cats hat hats bat mat cat");
        assert_eq!(index.rank("cat"), Some(0));
    }

    #[test]
    fn test_absent_word_is_never_ranked() {
        let index = CorpusIndex::from_text("cat cats");

        assert_eq!(index.rank("dog"), None);
        assert!(!index.contains("dog"));
    }

    #[test]
    fn test_positions_advance_across_discarded_tokens() {
        // "cat, hat" sanitizes to "cat  hat": the empty slot at position 1
        // is discarded but still consumes a position.
        let index = CorpusIndex::from_text("cat, hat");

        assert_eq!(index.rank("cat"), Some(0));
        assert_eq!(index.rank("hat"), Some(2));
    }

    #[test]
    fn test_keys_are_lowercased() {
        let index = CorpusIndex::from_text("Cat HAT");

        assert!(index.contains("cat"));
        assert!(index.contains("hat"));
        assert!(!index.contains("Cat"));
    }

    #[test]
    fn test_empty_corpus() {
        assert!(CorpusIndex::from_text("").is_empty());
        assert!(CorpusIndex::from_text("12345 !?").is_empty());
    }

    #[test]
    fn test_from_file() -> Result<()> {
        use std::io::Write;

        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("corpus.txt");
        let mut file = std::fs::File::create(&path)?;
        writeln!(file, "cat cats hat")?;

        let index = CorpusIndex::from_file(&path)?;
        assert_eq!(index.len(), 3);
        assert_eq!(index.rank("cat"), Some(0));

        Ok(())
    }

    #[test]
    fn test_from_missing_file_is_an_error() {
        let result = CorpusIndex::from_file("/no/such/corpus.txt");
        assert!(result.is_err());
    }
}
