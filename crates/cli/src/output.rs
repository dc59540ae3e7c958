// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Comparison results formatting.
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use showdown_eval::{Error, Hand, HandRank};

use crate::input::{TokensPair, pair_line};

/// A hand and its category.
#[derive(Debug, Serialize)]
pub struct RankedHand {
    /// The hand cards.
    pub cards: Hand,
    /// The hand category.
    pub rank: HandRank,
}

impl From<Hand> for RankedHand {
    fn from(cards: Hand) -> Self {
        Self {
            rank: cards.rank(),
            cards,
        }
    }
}

/// The comparison result for a pair of hands.
#[derive(Debug, Serialize)]
pub struct PairReport {
    /// The pair number starting from 1.
    pub pair: usize,
    /// The input line of the first hand.
    pub line: usize,
    /// The comparison code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<i8>,
    /// The error message if the pair is invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The ranked hands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hands: Option<[RankedHand; 2]>,
}

impl PairReport {
    /// Creates the report for the pair at index `idx`.
    pub fn new(idx: usize, pair: &TokensPair<'_>, result: &Result<i8, Error>, ranks: bool) -> Self {
        let hands: Option<[RankedHand; 2]> = if ranks {
            Hand::from_tokens(&pair.0)
                .and_then(|a| Ok([a.into(), Hand::from_tokens(&pair.1)?.into()]))
                .ok()
        } else {
            None
        };

        Self {
            pair: idx + 1,
            line: pair_line(idx),
            result: result.as_ref().ok().copied(),
            error: result.as_ref().err().map(|e| e.to_string()),
            hands,
        }
    }
}

/// Writes one line for each report.
pub fn write_text<W: Write>(w: &mut W, reports: &[PairReport]) -> Result<()> {
    for report in reports {
        match (&report.result, &report.error) {
            (Some(code), _) => write!(w, "{code}")?,
            (None, Some(e)) => write!(w, "error\t{e}")?,
            (None, None) => write!(w, "error")?,
        }

        if let Some([a, b]) = &report.hands {
            write!(w, "\t{} ({})\t{} ({})", a.cards, a.rank, b.cards, b.rank)?;
        }

        writeln!(w)?;
    }

    Ok(())
}

/// Writes all the reports as a JSON array.
pub fn write_json<W: Write>(w: &mut W, reports: &[PairReport]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, reports)?;
    writeln!(w)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_pairs;
    use showdown_eval::compare_pairs;

    fn reports(input: &str, ranks: bool) -> Vec<PairReport> {
        let pairs = parse_pairs(input).unwrap();
        compare_pairs(&pairs)
            .iter()
            .zip(&pairs)
            .enumerate()
            .map(|(idx, (res, pair))| PairReport::new(idx, pair, res, ranks))
            .collect()
    }

    #[test]
    fn text_output() {
        let input = "2C 2H 2D 2S 3C\nKC QC JC AC TC\nKC QC JC AC 1C\nKC QC JC AC TC\n";

        let mut out = Vec::new();
        write_text(&mut out, &reports(input, false)).unwrap();
        let out = String::from_utf8(out).unwrap();

        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "-1");
        assert!(lines[1].starts_with("error\tinvalid card format \"1C\""));
    }

    #[test]
    fn text_output_with_ranks() {
        let input = "3H 3H 3H 2H 2H\n2C 3D 4H 5S 6C\n";

        let mut out = Vec::new();
        write_text(&mut out, &reports(input, true)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1\t2H 2H 3H 3H 3H (Full House)\t2C 3D 4H 5S 6C (Straight)\n"
        );
    }

    #[test]
    fn json_output() {
        let input = "2C 2H 2D 2S 3C\nKC QC JC AC TC\n2C 2H 2D 2S\nKC QC JC AC TC\n";

        let mut out = Vec::new();
        write_json(&mut out, &reports(input, true)).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["pair"], 1);
        assert_eq!(value[0]["line"], 1);
        assert_eq!(value[0]["result"], -1);
        assert_eq!(value[0]["hands"][0]["rank"], "FourOfAKind");
        assert_eq!(value[0]["hands"][1]["cards"][4], "AC");
        assert!(value[0].get("error").is_none());

        assert_eq!(value[1]["line"], 3);
        assert!(value[1].get("result").is_none());
        assert!(value[1].get("hands").is_none());
        assert_eq!(
            value[1]["error"],
            "invalid hand size 4, a hand must have exactly 5 cards"
        );
    }
}
