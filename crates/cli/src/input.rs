// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Input lines parsing.
//!
//! The input has a hand on each line, as 5 space separated card tokens, and
//! hands are compared in pairs of consecutive lines:
//!
//! ```text
//! 2C 2H 2D 2S 3C
//! KC QC JC AC TC
//! ```
use thiserror::Error;

/// Error returned when the input lines can't be split in hands pairs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// An empty line where a hand is expected.
    #[error("malformed input at line {0}, expected a hand found an empty line")]
    EmptyLine(usize),
    /// The last hand has no pair.
    #[error("malformed input, odd number of lines, the hand at line {0} has no pair")]
    UnpairedHand(usize),
}

/// A pair of hands tokens.
pub type TokensPair<'a> = (Vec<&'a str>, Vec<&'a str>);

/// Splits the input text in pairs of hands tokens.
///
/// Blank lines at the end of the input are ignored, any other blank line is
/// an error. Tokens are not validated here, invalid cards and wrong hand
/// sizes are reported when building the hands.
pub fn parse_pairs(text: &str) -> Result<Vec<TokensPair<'_>>, InputError> {
    let mut lines = text.lines().collect::<Vec<_>>();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    if let Some(idx) = lines.iter().position(|l| l.trim().is_empty()) {
        return Err(InputError::EmptyLine(idx + 1));
    }

    if lines.len() % 2 != 0 {
        return Err(InputError::UnpairedHand(lines.len()));
    }

    let pairs = lines
        .chunks_exact(2)
        .map(|p| (tokens(p[0]), tokens(p[1])))
        .collect();

    Ok(pairs)
}

/// The input line number of the first hand in the pair at index `idx`.
pub fn pair_line(idx: usize) -> usize {
    idx * 2 + 1
}

fn tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_eval::{Error, compare_pairs, try_compare_pairs};

    const INPUT: &str = "\
2C 2H 2D 2S 3C
KC QC JC AC TC
KC QC JC AC TC
2C 2H 2D 2S 3C
KC QC JC AC TC
KC QC JC AC TC
";

    #[test]
    fn parse_lines() {
        let pairs = parse_pairs(INPUT).unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].0, ["2C", "2H", "2D", "2S", "3C"]);
        assert_eq!(pairs[0].1, ["KC", "QC", "JC", "AC", "TC"]);
        assert_eq!(pair_line(2), 5);

        assert_eq!(try_compare_pairs(&pairs), Ok(vec![-1, 1, 0]));
    }

    #[test]
    fn parse_sample_file() {
        let pairs = parse_pairs(include_str!("../data/sample.txt")).unwrap();
        assert_eq!(try_compare_pairs(&pairs), Ok(vec![-1, 0, 1, -1]));
    }

    #[test]
    fn parse_trailing_blank_lines() {
        let input = format!("{INPUT}\n  \n");
        assert_eq!(parse_pairs(&input).unwrap().len(), 3);

        // No trailing newline.
        assert_eq!(parse_pairs(INPUT.trim_end()).unwrap().len(), 3);
        assert!(parse_pairs("").unwrap().is_empty());
    }

    #[test]
    fn parse_malformed() {
        let input = "2C 2H 2D 2S 3C\n\nKC QC JC AC TC\n";
        assert_eq!(parse_pairs(input), Err(InputError::EmptyLine(2)));

        let input = "2C 2H 2D 2S 3C\nKC QC JC AC TC\n2C 2H 2D 2S 3C\n";
        assert_eq!(parse_pairs(input), Err(InputError::UnpairedHand(3)));
    }

    #[test]
    fn parse_keeps_invalid_tokens() {
        let input = "2C 2H 2D 2S\nKC QC JC AC 1C\n";
        let pairs = parse_pairs(input).unwrap();
        assert_eq!(pairs[0].0.len(), 4);

        let results = compare_pairs(&pairs);
        assert_eq!(results, vec![Err(Error::InvalidHandSize(4))]);
    }

    #[test]
    fn parse_extra_spaces() {
        let input = "2C  3D 4H 5S 7C \r\n 2D 3H 4S 5C 7D\r\n";
        let pairs = parse_pairs(input).unwrap();
        assert_eq!(try_compare_pairs(&pairs), Ok(vec![0]));
    }
}
