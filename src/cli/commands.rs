//! Command implementations for the Falcata CLI.

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::CorpusIndex;
use crate::error::Result;
use crate::spelling::SuggestionEngine;

/// Execute a CLI command.
///
/// The corpus index is built exactly once here, before any command runs;
/// a missing or unreadable corpus file fails the whole invocation.
pub fn execute_command(args: FalcataArgs) -> Result<()> {
    if args.verbosity() > 1 {
        eprintln!("Loading corpus from: {}", args.corpus.display());
    }

    let index = CorpusIndex::from_file(&args.corpus)?;
    info!(
        "corpus {} indexed: {} distinct words",
        args.corpus.display(),
        index.len()
    );

    let engine = SuggestionEngine::new(index);

    match &args.command {
        Command::Suggest(suggest_args) => suggest(&engine, suggest_args.clone(), &args),
        Command::SuggestList(list_args) => suggest_list(&engine, list_args.clone(), &args),
        Command::Check(check_args) => check(&engine, check_args.clone(), &args),
        Command::Stats => stats(&engine, &args),
    }
}

/// Suggest the single best correction for a word.
fn suggest(engine: &SuggestionEngine, args: SuggestArgs, cli_args: &FalcataArgs) -> Result<()> {
    let suggestion = engine.suggest_one(&args.word);

    output_result(
        &SuggestResult {
            word: args.word,
            // The empty string is the "no suggestion" signal at the
            // process boundary.
            suggestion: suggestion.unwrap_or_default(),
        },
        cli_args,
    )
}

/// Suggest a ranked list of corrections for a word.
fn suggest_list(
    engine: &SuggestionEngine,
    args: SuggestListArgs,
    cli_args: &FalcataArgs,
) -> Result<()> {
    let suggestions = engine.suggestions(&args.word, args.limit);

    output_result(
        &SuggestListResult {
            word: args.word,
            suggestions,
        },
        cli_args,
    )
}

/// Check whether a word is spelled correctly.
fn check(engine: &SuggestionEngine, args: CheckArgs, cli_args: &FalcataArgs) -> Result<()> {
    let correct = engine.is_correct(&args.word);

    output_result(
        &CheckResult {
            word: args.word,
            correct,
        },
        cli_args,
    )
}

/// Show corpus index statistics.
fn stats(engine: &SuggestionEngine, cli_args: &FalcataArgs) -> Result<()> {
    output_result(
        &CorpusStats {
            corpus_path: cli_args.corpus.to_string_lossy().to_string(),
            distinct_words: engine.index().len(),
        },
        cli_args,
    )
}
