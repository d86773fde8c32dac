//! Command implementations for WordNet CLI.

use log::debug;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::WordNetConfig;
use crate::error::Result;
use crate::wordnet::{LoadSummary, WordNet};

/// Execute a CLI command.
pub fn execute_command(args: WordNetArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let mut wordnet = WordNet::with_config(config);
    let summary = wordnet.load_configured()?;
    debug!("loaded {summary:?}");

    match &args.command {
        Command::Validate => validate(&wordnet, summary, &args),
        Command::Lookup(lookup_args) => lookup(&wordnet, lookup_args, &args),
        Command::Find(find_args) => find(&wordnet, find_args, &args),
        Command::FindMany(find_args) => find_many(&wordnet, find_args, &args),
        Command::Lca(lca_args) => lca(&wordnet, lca_args, &args),
    }
}

/// Merge the config file (if any) with command line overrides.
pub fn resolve_config(args: &WordNetArgs) -> Result<WordNetConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("reading config from {}", path.display());
            WordNetConfig::load_from_file(path)?
        }
        None => WordNetConfig::default(),
    };

    if let Some(path) = &args.synsets {
        config.synsets_path = Some(path.clone());
    }
    if let Some(path) = &args.hypernyms {
        config.hypernyms_path = Some(path.clone());
    }
    if args.no_verify_references {
        config.verify_references = false;
    }
    Ok(config)
}

fn validate(wordnet: &WordNet, summary: LoadSummary, cli_args: &WordNetArgs) -> Result<()> {
    output_result(
        "Taxonomy loaded",
        &ValidationResult {
            loaded: summary,
            totals: wordnet.stats(),
        },
        cli_args,
    )
}

fn lookup(wordnet: &WordNet, args: &LookupArgs, cli_args: &WordNetArgs) -> Result<()> {
    let words = wordnet.lookup(args.id);
    output_result(
        "Synset lookup",
        &LookupResult {
            id: args.id,
            found: !words.is_empty(),
            words: words.to_vec(),
        },
        cli_args,
    )
}

fn find(wordnet: &WordNet, args: &FindArgs, cli_args: &WordNetArgs) -> Result<()> {
    output_result(
        "Synsets containing word",
        &FindResult {
            word: args.word.clone(),
            ids: wordnet.find(&args.word),
        },
        cli_args,
    )
}

fn find_many(wordnet: &WordNet, args: &FindManyArgs, cli_args: &WordNetArgs) -> Result<()> {
    output_result(
        "Synsets containing words",
        &FindManyResult {
            matches: wordnet.find_many(&args.words),
        },
        cli_args,
    )
}

fn lca(wordnet: &WordNet, args: &LcaArgs, cli_args: &WordNetArgs) -> Result<()> {
    let ancestors = wordnet.lca(args.first, args.second);
    output_result(
        "Lowest common ancestors",
        &LcaResult {
            first: args.first,
            second: args.second,
            found: ancestors.is_some(),
            ancestors: ancestors.unwrap_or_default(),
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;

    #[test]
    fn test_resolve_config_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"synsets_path": "a.txt", "hypernyms_path": "b.txt"}}"#
        )
        .unwrap();
        let config_path = file.path().to_str().unwrap().to_string();

        let args = WordNetArgs::try_parse_from([
            "wordnet",
            "--config",
            &config_path,
            "--hypernyms",
            "c.txt",
            "--no-verify-references",
            "validate",
        ])
        .unwrap();

        let config = resolve_config(&args).unwrap();
        assert_eq!(config.synsets_path, Some(PathBuf::from("a.txt")));
        assert_eq!(config.hypernyms_path, Some(PathBuf::from("c.txt")));
        assert!(!config.verify_references);
    }

    #[test]
    fn test_execute_reports_invalid_lines() {
        let dir = tempfile::tempdir().unwrap();
        let synsets = dir.path().join("synsets.txt");
        let hypernyms = dir.path().join("hypernyms.txt");
        std::fs::write(&synsets, "id: 1 synset: dog\nid: 2 synset canine\n").unwrap();
        std::fs::write(&hypernyms, "from: 1 to: 2\n").unwrap();

        let args = WordNetArgs::try_parse_from([
            "wordnet",
            "--quiet",
            "--synsets",
            synsets.to_str().unwrap(),
            "--hypernyms",
            hypernyms.to_str().unwrap(),
            "lookup",
            "1",
        ])
        .unwrap();

        let err = execute_command(args).unwrap_err();
        assert_eq!(err.rejected_lines(), Some(&[2][..]));
    }
}
