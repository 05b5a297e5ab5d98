//! # Falcata
//!
//! A corpus-ranked spelling suggestion library for Rust.
//!
//! Falcata judges which strings are real words, and how plausible they are
//! as corrections, against a reference text corpus: every word is ranked by
//! the position of its first appearance, and corrections for a misspelled
//! word are found by generating all strings within one or two
//! delete/insert/substitute edits and keeping the corpus words among them.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - One-time corpus indexing, lock-free concurrent querying
//! - Single-best and ranked-list suggestion modes
//! - Allocation-conscious candidate generation
//!
//! ## Example
//!
//! ```
//! use falcata::corpus::CorpusIndex;
//! use falcata::spelling::SuggestionEngine;
//!
//! let index = CorpusIndex::from_text("the cat sat on the mat");
//! let engine = SuggestionEngine::new(index);
//!
//! assert_eq!(engine.suggest_one("cta"), Some("cat".to_string()));
//! assert_eq!(engine.suggest_one("zzzzz"), None);
//! ```

pub mod cli;
pub mod corpus;
pub mod error;
pub mod spelling;

pub mod prelude {
    //! Convenient re-exports of the main engine types.
    pub use crate::corpus::CorpusIndex;
    pub use crate::error::{FalcataError, Result};
    pub use crate::spelling::{SuggestConfig, Suggestion, SuggestionEngine};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
