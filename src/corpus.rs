//! Corpus loading and the rank index that backs spelling suggestion.
//!
//! A corpus is a plain text file whose word order defines salience: the
//! earlier a word first appears, the stronger it is as a suggestion
//! candidate. This module tokenizes corpus text and builds the immutable
//! word-to-rank index the suggestion engine filters candidates against.

pub mod index;
pub mod tokenizer;

pub use index::CorpusIndex;
pub use tokenizer::{CorpusToken, CorpusTokenizer};
