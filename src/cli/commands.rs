//! Command implementations for the respell CLI.

use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::correction::corrector::Corrector;
use crate::correction::dictionary::Dictionary;
use crate::correction::search::SearchConfig;
use crate::correction::transition::TransitionModel;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: RespellArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => correct_tokens(correct_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Correct the given tokens against the dictionary.
fn correct_tokens(args: CorrectArgs, cli_args: &RespellArgs) -> Result<()> {
    let corrector = load_corrector(
        &args.matrix,
        &args.dictionary,
        cli_args,
        SearchConfig {
            max_cost: args.max_cost,
            max_visited: Some(args.max_visited),
            max_expansions: args.max_expansions,
        },
    )?;

    let start = Instant::now();
    let mut results = Vec::with_capacity(args.tokens.len());

    for token in &args.tokens {
        let result = match corrector.correct(token)? {
            Some(correction) => TokenResult {
                token: token.clone(),
                corrections: correction.words,
                cost: Some(correction.cost),
                found: true,
            },
            None => TokenResult {
                token: token.clone(),
                corrections: Vec::new(),
                cost: None,
                found: false,
            },
        };
        results.push(result);
    }

    let duration_ms = start.elapsed().as_millis() as u64;

    output_result(
        "Corrections:",
        &CorrectResults {
            results,
            duration_ms,
        },
        cli_args,
    )
}

/// Show statistics about the model and dictionary.
fn show_stats(args: StatsArgs, cli_args: &RespellArgs) -> Result<()> {
    let corrector = load_corrector(
        &args.matrix,
        &args.dictionary,
        cli_args,
        SearchConfig::default(),
    )?;

    output_result(
        "Loaded model and dictionary",
        &StatsResult {
            stats: corrector.stats(),
        },
        cli_args,
    )
}

fn load_corrector(
    matrix: &std::path::Path,
    dictionary: &std::path::Path,
    cli_args: &RespellArgs,
    config: SearchConfig,
) -> Result<Corrector> {
    if cli_args.verbosity() > 1 {
        println!("Loading edit-weight table from: {}", matrix.display());
    }
    let model = TransitionModel::load_from_file(matrix)?;

    if cli_args.verbosity() > 1 {
        println!("Loading dictionary from: {}", dictionary.display());
    }
    let dictionary = Dictionary::load_from_file(dictionary)?;

    Ok(Corrector::with_config(dictionary, model, config))
}
