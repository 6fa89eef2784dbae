//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, RespellArgs};
use crate::correction::corrector::CorrectorStats;
use crate::correction::word::Word;
use crate::error::Result;

/// Result structure for one corrected token.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResult {
    pub token: String,
    /// Dictionary words tied at the minimal cost, sorted; empty when the
    /// search exhausted its space without finding one.
    pub corrections: Vec<Word>,
    pub cost: Option<f64>,
    pub found: bool,
}

/// Result structure for a whole `correct` invocation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectResults {
    pub results: Vec<TokenResult>,
    pub duration_ms: u64,
}

/// Model and dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub stats: CorrectorStats,
}

/// Output a result in the requested format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &RespellArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &RespellArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    if let Some(results) = value.get("results").and_then(|r| r.as_array()) {
        for entry in results {
            let token = entry.get("token").and_then(|t| t.as_str()).unwrap_or("");
            let found = entry
                .get("found")
                .and_then(|f| f.as_bool())
                .unwrap_or(false);

            if !found {
                println!("{token}: no correction found");
                continue;
            }

            let corrections: Vec<&str> = entry
                .get("corrections")
                .and_then(|c| c.as_array())
                .map(|arr| arr.iter().filter_map(|w| w.as_str()).collect())
                .unwrap_or_default();
            let cost = entry.get("cost").and_then(|c| c.as_f64()).unwrap_or(0.0);

            println!("{token}: {} (cost {cost})", corrections.join(", "));
        }

        if args.verbosity() > 1
            && let Some(duration) = value.get("duration_ms").and_then(|d| d.as_u64())
        {
            println!("Took {duration}ms");
        }
        return Ok(());
    }

    if let Some(stats) = value.get("stats").and_then(|s| s.as_object()) {
        println!("Corrector statistics:");
        for key in ["dictionary_words", "model_sources", "model_edges"] {
            if let Some(count) = stats.get(key).and_then(|v| v.as_u64()) {
                println!("  {key}: {count}");
            }
        }
    }

    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &RespellArgs) -> Result<()> {
    let output = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{output}");
    Ok(())
}
