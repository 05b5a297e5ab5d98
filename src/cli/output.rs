//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{FalcataArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::Suggestion;

/// Result structure for single-best suggestion.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResult {
    pub word: String,
    /// The suggested correction; empty when nothing was found.
    pub suggestion: String,
}

/// Result structure for ranked-list suggestion.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestListResult {
    pub word: String,
    pub suggestions: Vec<Suggestion>,
}

/// Result structure for the spelling check.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub word: String,
    pub correct: bool,
}

/// Corpus index statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusStats {
    pub corpus_path: String,
    pub distinct_words: usize,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(result: &T, args: &FalcataArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(result),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
///
/// Each result type renders to the leanest line-per-fact shape, so the
/// output stays pipe-friendly: `suggest` prints the bare suggestion (an
/// empty line when nothing was found) and `suggest-list` one word per line.
fn output_human<T: Serialize>(result: &T) -> Result<()> {
    let value = serde_json::to_value(result)?;

    if let Some(suggestion) = value.get("suggestion").and_then(|v| v.as_str()) {
        println!("{suggestion}");
        return Ok(());
    }

    if let Some(suggestions) = value.get("suggestions").and_then(|v| v.as_array()) {
        for entry in suggestions {
            if let Some(word) = entry.get("word").and_then(|v| v.as_str()) {
                println!("{word}");
            }
        }
        return Ok(());
    }

    if let Some(correct) = value.get("correct").and_then(|v| v.as_bool()) {
        println!("{}", if correct { "correct" } else { "misspelled" });
        return Ok(());
    }

    if let Some(words) = value.get("distinct_words").and_then(|v| v.as_u64()) {
        println!("distinct words: {words}");
        return Ok(());
    }

    println!("{value}");
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &FalcataArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
