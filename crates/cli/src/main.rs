// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, compares pairs of poker hands read from a text file.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{debug, info, warn};
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use showdown_eval::Error;

pub mod input;
pub mod output;

#[derive(Debug, Parser)]
struct Cli {
    /// The input file with a hand on each line, reads stdin if missing or `-`.
    input: Option<PathBuf>,
    /// Reports invalid pairs and continues with the next pair.
    #[clap(long, short)]
    keep_going: bool,
    /// Prints the results as JSON.
    #[clap(long)]
    json: bool,
    /// Prints each hand category next to the result.
    #[clap(long, short = 'r')]
    show_rank: bool,
    /// Enables debug logging.
    #[clap(long, short)]
    verbose: bool,
    /// Number of parallel tasks.
    #[cfg(feature = "parallel")]
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
}

impl Cli {
    #[cfg(feature = "parallel")]
    fn compare(&self, pairs: &[input::TokensPair<'_>]) -> Vec<Result<i8, Error>> {
        if self.tasks > 1 {
            debug!("Comparing with {} tasks", self.tasks);
            showdown_eval::par_compare_pairs(self.tasks as usize, pairs)
        } else {
            showdown_eval::compare_pairs(pairs)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn compare(&self, pairs: &[input::TokensPair<'_>]) -> Vec<Result<i8, Error>> {
        showdown_eval::compare_pairs(pairs)
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Builds one report for each pair, failing on the first invalid pair
/// unless `keep_going` is set.
fn build_reports(
    pairs: &[input::TokensPair<'_>],
    results: &[Result<i8, Error>],
    keep_going: bool,
    show_rank: bool,
) -> Result<Vec<output::PairReport>> {
    let mut reports = Vec::with_capacity(results.len());
    for (idx, (pair, res)) in pairs.iter().zip(results).enumerate() {
        if let Err(e) = res {
            let line = input::pair_line(idx);
            if !keep_going {
                bail!("Pair {} at line {line}: {e}", idx + 1);
            }

            warn!("Skipping pair {} at line {line}: {e}", idx + 1);
        }

        reports.push(output::PairReport::new(idx, pair, res, show_rank));
    }

    Ok(reports)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let text = read_input(cli.input.as_deref())?;
    let pairs = input::parse_pairs(&text)?;
    debug!("Read {} hands pairs", pairs.len());

    let results = cli.compare(&pairs);

    let reports = build_reports(&pairs, &results, cli.keep_going, cli.show_rank)?;

    let mut stdout = io::stdout().lock();
    if cli.json {
        output::write_json(&mut stdout, &reports)?;
    } else {
        output::write_text(&mut stdout, &reports)?;
    }
    stdout.flush()?;

    let failed = results.iter().filter(|r| r.is_err()).count();
    info!("Compared {} pairs, {failed} invalid", results.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "2H 3D 5S 9C KD\n2C 3H 4S 8C AH\n2H 3D 5S 9C\n2C 3H 4S 8C AH\n";

    #[test]
    fn invalid_pair_fails_batch() {
        let pairs = input::parse_pairs(TEXT).unwrap();
        let results = showdown_eval::compare_pairs(&pairs);

        let err = build_reports(&pairs, &results, false, false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Pair 2 at line 3: invalid hand size 4, a hand must have exactly 5 cards"
        );
    }

    #[test]
    fn keep_going_reports_every_pair() {
        let pairs = input::parse_pairs(TEXT).unwrap();
        let results = showdown_eval::compare_pairs(&pairs);

        let reports = build_reports(&pairs, &results, true, true).unwrap();
        assert_eq!(reports.len(), 2);

        assert_eq!(reports[0].pair, 1);
        assert_eq!(reports[0].result, Some(-1));
        assert!(reports[0].error.is_none());
        assert!(reports[0].hands.is_some());

        assert_eq!(reports[1].pair, 2);
        assert_eq!(reports[1].line, 3);
        assert_eq!(reports[1].result, None);
        assert_eq!(reports[1].error, Some(Error::InvalidHandSize(4).to_string()));
        assert!(reports[1].hands.is_none());
    }
}
