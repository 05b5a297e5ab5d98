//! Spelling suggestion for single words against a corpus rank index.
//!
//! This module generates edit-distance candidates for a possibly-misspelled
//! word and selects corrections by filtering the candidates against a
//! [`CorpusIndex`](crate::corpus::CorpusIndex) and ranking the survivors.

pub mod edits;
pub mod suggest;

pub use suggest::{SuggestConfig, Suggestion, SuggestionEngine};
