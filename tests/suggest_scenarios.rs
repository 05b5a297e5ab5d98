//! End-to-end suggestion scenarios over the public API.

use std::io::Write;

use falcata::prelude::*;
use falcata::spelling::edits;
use tempfile::TempDir;

// Ranks: cat=0, cats=1, hat=2, hats=3, bat=4, mat=5.
const TOY_CORPUS: &str = "cat cats hat hats bat mat cat";

fn toy_engine() -> SuggestionEngine {
    SuggestionEngine::new(CorpusIndex::from_text(TOY_CORPUS))
}

#[test]
fn test_corpus_file_to_suggestion() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let corpus_path = temp_dir.path().join("corpus.txt");

    let mut file = std::fs::File::create(&corpus_path)?;
    writeln!(file, "The quick brown fox")?;
    writeln!(file, "jumps over the lazy dog.")?;

    let index = CorpusIndex::from_file(&corpus_path)?;
    let engine = SuggestionEngine::new(index);

    assert_eq!(engine.suggest_one("quik"), Some("quick".to_string()));
    assert_eq!(engine.suggest_one("FOX"), Some("fox".to_string()));
    assert_eq!(engine.suggest_one("qqqqq"), None);

    Ok(())
}

#[test]
fn test_already_correct_words_round_trip() {
    let engine = toy_engine();

    for word in ["cat", "cats", "hat", "hats", "bat", "mat"] {
        assert_eq!(engine.suggest_one(word), Some(word.to_string()));
    }
}

#[test]
fn test_transposition_resolves_at_tier_two() {
    let engine = toy_engine();

    // Transpositions are not generated directly, so "cta" cannot reach
    // "cat" in one edit; it resolves through delete-then-insert.
    assert_eq!(engine.suggest_one("cta"), Some("cat".to_string()));
}

#[test]
fn test_unreachable_word_yields_no_suggestion() {
    let engine = toy_engine();

    assert_eq!(engine.suggest_one("xyz"), None);
    assert!(engine.suggest_list("xyz", None).is_empty());
}

#[test]
fn test_list_orders_by_tier_then_rank() {
    let engine = toy_engine();

    let suggestions = engine.suggestions("cats", None);

    // Tier-1 entries must precede every tier-2 entry.
    let first_tier_two = suggestions.iter().position(|s| s.tier == 2);
    if let Some(boundary) = first_tier_two {
        assert!(suggestions[boundary..].iter().all(|s| s.tier == 2));
    }

    // Within a tier, ranks ascend.
    for pair in suggestions.windows(2) {
        if pair[0].tier == pair[1].tier {
            assert!(pair[0].rank <= pair[1].rank);
        }
    }

    let words: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();
    assert_eq!(words, vec!["cat", "hats", "hat", "bat", "mat"]);
}

#[test]
fn test_list_properties() {
    let engine = toy_engine();

    for word in ["cats", "cta", "hatz", "xyz", "a", ""] {
        let list = engine.suggest_list(word, None);

        // Never more than the default limit.
        assert!(list.len() <= 10);

        // Never a duplicate entry.
        let mut deduped = list.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), list.len(), "duplicates for {word:?}");

        // Never a word of length <= 2.
        assert!(list.iter().all(|w| w.chars().count() > 2));
    }
}

#[test]
fn test_list_limit_handling() {
    let engine = toy_engine();

    assert_eq!(engine.suggest_list("cats", Some(2)).len(), 2);
    assert!(engine.suggest_list("cats", Some(0)).is_empty());
    assert_eq!(engine.suggest_list("cats", Some(100)).len(), 5);
}

#[test]
fn test_edit_set_properties() {
    let word = "hats";
    let ones = edits::edit_distance_one(word);

    assert!(!ones.contains(word));
    for edit in &ones {
        let diff = edit.chars().count().abs_diff(word.len());
        assert!(diff <= 1, "{edit} too far from {word}");
    }

    let twos = edits::edit_distance_two(word);
    assert!(!twos.contains(word));
}

#[test]
fn test_empty_and_non_alphabetic_corpus_degrades() {
    for corpus in ["", "12345", "!?!? 42 ---"] {
        let engine = SuggestionEngine::new(CorpusIndex::from_text(corpus));

        assert_eq!(engine.suggest_one("cat"), None);
        assert!(engine.suggest_list("cat", None).is_empty());
    }
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = toy_engine();

    std::thread::scope(|scope| {
        let mut handles = Vec::new();
        for _ in 0..4 {
            handles.push(scope.spawn(|| engine.suggest_one("cta")));
        }
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some("cat".to_string()));
        }
    });
}

#[test]
fn test_repeated_queries_are_stable() {
    let engine = toy_engine();

    let first = engine.suggest_list("cats", None);
    for _ in 0..10 {
        assert_eq!(engine.suggest_list("cats", None), first);
    }
}
