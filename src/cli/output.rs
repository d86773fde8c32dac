//! Output formatting for CLI commands.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordNetArgs};
use crate::error::Result;
use crate::wordnet::{LoadSummary, SynsetId, WordNetStats};

/// Result structure for the validate command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationResult {
    pub loaded: LoadSummary,
    pub totals: WordNetStats,
}

/// Result structure for synset lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub id: SynsetId,
    pub found: bool,
    pub words: Vec<String>,
}

/// Result structure for single-word search.
#[derive(Debug, Serialize, Deserialize)]
pub struct FindResult {
    pub word: String,
    pub ids: BTreeSet<SynsetId>,
}

/// Result structure for multi-word search.
#[derive(Debug, Serialize, Deserialize)]
pub struct FindManyResult {
    pub matches: BTreeMap<String, BTreeSet<SynsetId>>,
}

/// Result structure for lowest-common-ancestor queries.
///
/// `found` is false when either id is not part of the hypernym graph, which is
/// distinct from two synsets that simply share no ancestor.
#[derive(Debug, Serialize, Deserialize)]
pub struct LcaResult {
    pub first: SynsetId,
    pub second: SynsetId,
    pub found: bool,
    pub ancestors: BTreeSet<SynsetId>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &WordNetArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &WordNetArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    for line in render_human(&value) {
        println!("{line}");
    }
    Ok(())
}

/// Render an object as `key: value` lines, nesting objects one level.
fn render_human(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Object(obj) => {
            let mut lines = Vec::new();
            for (key, val) in obj {
                match val {
                    serde_json::Value::Object(inner) => {
                        lines.push(format!("{key}:"));
                        for (inner_key, inner_val) in inner {
                            lines.push(format!("  {inner_key}: {}", format_value(inner_val)));
                        }
                    }
                    _ => lines.push(format!("{key}: {}", format_value(val))),
                }
            }
            lines
        }
        _ => vec![format_value(value)],
    }
}

/// Format a JSON value for human display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(arr) if arr.is_empty() => "(none)".to_string(),
        serde_json::Value::Array(arr) => arr
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(", "),
        serde_json::Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordNetArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
