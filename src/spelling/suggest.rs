//! Candidate selection and ranking against the corpus index.

use std::cmp::Ordering;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::corpus::CorpusIndex;
use crate::spelling::edits;

/// A ranked spelling suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested corpus word.
    pub word: String,
    /// Edit tier the word was reached at: 1 or 2 generative edits.
    pub tier: u8,
    /// First-occurrence position of the word in the corpus.
    pub rank: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new<S: Into<String>>(word: S, tier: u8, rank: usize) -> Self {
        Suggestion {
            word: word.into(),
            tier,
            rank,
        }
    }
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lower tiers first, then lower ranks; the lexicographic tail keeps
        // equal-rank output deterministic.
        (self.tier, self.rank, self.word.as_str()).cmp(&(
            other.tier,
            other.rank,
            other.word.as_str(),
        ))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Configuration for suggestion selection.
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Default maximum number of list-mode suggestions.
    pub limit: usize,
    /// Minimum candidate length (in characters) for list-mode output.
    pub min_word_len: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            limit: 10,
            min_word_len: 3,
        }
    }
}

/// The spelling suggestion engine.
///
/// Owns an immutable [`CorpusIndex`] and answers suggestion queries as pure
/// reads: no call mutates the engine, and calls may run concurrently from
/// any number of threads through a shared reference.
pub struct SuggestionEngine {
    index: CorpusIndex,
    config: SuggestConfig,
}

impl SuggestionEngine {
    /// Create an engine over the given index with default configuration.
    pub fn new(index: CorpusIndex) -> Self {
        SuggestionEngine {
            index,
            config: SuggestConfig::default(),
        }
    }

    /// Create an engine with custom configuration.
    pub fn with_config(index: CorpusIndex, config: SuggestConfig) -> Self {
        SuggestionEngine { index, config }
    }

    /// Get the underlying corpus index.
    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// Check whether a word is present in the corpus as spelled.
    pub fn is_correct(&self, word: &str) -> bool {
        self.index.contains(&word.to_lowercase())
    }

    /// Suggest the single best correction for a word.
    ///
    /// Returns the normalized word itself when it is already in the corpus,
    /// otherwise the lowest-ranked corpus word among the distance-one
    /// candidates, otherwise among the distance-two candidates, otherwise
    /// `None`. Equal ranks are broken lexicographically so the result is
    /// reproducible.
    pub fn suggest_one(&self, word: &str) -> Option<String> {
        let word = word.to_lowercase();

        if self.index.contains(&word) {
            return Some(word);
        }

        let ones = edits::edit_distance_one(&word);
        if let Some(best) = self.best_match(&ones) {
            return Some(best);
        }

        let twos = edits::edit_distance_two(&word);
        self.best_match(&twos)
    }

    /// Suggest an ordered list of corrections for a word.
    ///
    /// Distance-one candidates precede distance-two candidates, each tier
    /// ordered by corpus rank. Candidates shorter than the configured
    /// minimum length are dropped, a word reachable at both tiers counts
    /// only at tier one, and the result is truncated to `limit` entries
    /// (`None` means the configured default, zero means an empty list).
    ///
    /// Unlike [`suggest_one`](Self::suggest_one), an exact corpus match is
    /// not echoed back: list mode ranks only genuinely different candidates.
    pub fn suggestions(&self, word: &str, limit: Option<usize>) -> Vec<Suggestion> {
        let limit = limit.unwrap_or(self.config.limit);
        if limit == 0 {
            return Vec::new();
        }

        let word = word.to_lowercase();
        let mut suggestions = Vec::new();
        let mut tier_one_words = AHashSet::new();

        let ones = edits::edit_distance_one(&word);
        for candidate in &ones {
            if let Some(rank) = self.ranked(candidate) {
                tier_one_words.insert(candidate.clone());
                suggestions.push(Suggestion::new(candidate.clone(), 1, rank));
            }
        }

        let twos = edits::edit_distance_two(&word);
        for candidate in &twos {
            if tier_one_words.contains(candidate) {
                continue;
            }
            if let Some(rank) = self.ranked(candidate) {
                suggestions.push(Suggestion::new(candidate.clone(), 2, rank));
            }
        }

        suggestions.sort();
        suggestions.truncate(limit);
        suggestions
    }

    /// Suggest an ordered list of corrections as plain words.
    pub fn suggest_list(&self, word: &str, limit: Option<usize>) -> Vec<String> {
        self.suggestions(word, limit)
            .into_iter()
            .map(|suggestion| suggestion.word)
            .collect()
    }

    /// Rank of a candidate that passes the list-mode length filter, or
    /// `None` when the candidate is absent or too short.
    fn ranked(&self, candidate: &str) -> Option<usize> {
        if candidate.chars().count() < self.config.min_word_len {
            return None;
        }
        self.index.rank(candidate)
    }

    /// The lowest-ranked corpus member of a candidate set, ties broken
    /// lexicographically.
    fn best_match(&self, candidates: &AHashSet<String>) -> Option<String> {
        let mut best: Option<(usize, &str)> = None;

        for candidate in candidates {
            if let Some(rank) = self.index.rank(candidate) {
                let better = match best {
                    None => true,
                    Some((best_rank, best_word)) => {
                        (rank, candidate.as_str()) < (best_rank, best_word)
                    }
                };
                if better {
                    best = Some((rank, candidate.as_str()));
                }
            }
        }

        best.map(|(_, word)| word.to_string())
    }
}
