//! Sanitizing positional tokenizer for corpus text.

use regex::Regex;

/// Separator pattern: every run of characters outside `[A-Za-z ]` collapses
/// to a single space. Literal spaces are left alone, so a separator run that
/// already borders a space still produces an empty split token.
const SEPARATOR_PATTERN: &str = "[^A-Za-z ]+";

/// A single corpus token with its absolute position in the token stream.
///
/// Positions are assigned before empty tokens are discarded, so they count
/// every split slot in the sanitized text, not just the surviving words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusToken {
    /// The lowercased token text (letters a-z only, never empty).
    pub text: String,
    /// 0-based position in the token stream.
    pub position: usize,
}

impl CorpusToken {
    /// Create a new corpus token.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        CorpusToken {
            text: text.into(),
            position,
        }
    }
}

/// A tokenizer that reduces arbitrary text to lowercase alphabetic tokens
/// while preserving absolute token positions.
///
/// Sanitization replaces every run of non-letter, non-space characters
/// (newlines included) with a single space, then splits on single spaces.
/// Runs of separators therefore yield empty slots that consume a position
/// but produce no token, keeping positions stable across discarded input.
#[derive(Clone, Debug)]
pub struct CorpusTokenizer {
    /// The regex matching separator runs in raw corpus text.
    separators: Regex,
}

impl CorpusTokenizer {
    /// Create a new corpus tokenizer.
    pub fn new() -> Self {
        CorpusTokenizer {
            separators: Regex::new(SEPARATOR_PATTERN).expect("separator pattern should be valid"),
        }
    }

    /// Tokenize corpus text into positioned, lowercased alphabetic tokens.
    ///
    /// Never fails: text with no letters at all simply yields no tokens.
    pub fn tokenize(&self, text: &str) -> Vec<CorpusToken> {
        let sanitized = self.separators.replace_all(text, " ");

        sanitized
            .split(' ')
            .enumerate()
            .filter(|(_, raw)| !raw.is_empty())
            .map(|(position, raw)| CorpusToken::new(raw.to_lowercase(), position))
            .collect()
    }
}

impl Default for CorpusTokenizer {
    fn default() -> Self {
        Self::new()
    }
}
