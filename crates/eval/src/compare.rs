// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Three way comparison of hands and batches of hands pairs.
//!
//! Comparisons return the conventional comparator codes: -1 when the first
//! hand is lower than the second, 1 when it is higher, and 0 when the two
//! hands are equal.
use std::cmp::Ordering;

use crate::{Error, Hand};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::par_compare_pairs;

/// Compares two hands, returns -1 if `a < b`, 1 if `b < a`, and 0 if equal.
pub fn compare_hands(a: &Hand, b: &Hand) -> i8 {
    match a.cmp(b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Builds two hands from their tokens and compares them.
pub fn compare_tokens<S: AsRef<str>>(a: &[S], b: &[S]) -> Result<i8, Error> {
    let a = Hand::from_tokens(a)?;
    let b = Hand::from_tokens(b)?;
    Ok(compare_hands(&a, &b))
}

/// Compares a batch of hands pairs.
///
/// Returns one result for each pair in the same order as the input, an
/// invalid pair doesn't affect the results of the other pairs.
pub fn compare_pairs<T, S>(pairs: &[(T, T)]) -> Vec<Result<i8, Error>>
where
    T: AsRef<[S]>,
    S: AsRef<str>,
{
    pairs
        .iter()
        .map(|(a, b)| compare_tokens(a.as_ref(), b.as_ref()))
        .collect()
}

/// Compares a batch of hands pairs failing on the first invalid pair.
pub fn try_compare_pairs<T, S>(pairs: &[(T, T)]) -> Result<Vec<i8>, Error>
where
    T: AsRef<[S]>,
    S: AsRef<str>,
{
    pairs
        .iter()
        .map(|(a, b)| compare_tokens(a.as_ref(), b.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<&str> {
        line.split(' ').collect()
    }

    #[test]
    fn compare_codes() {
        let quads = tokens("2C 2H 2D 2S 3C");
        let royal = tokens("KC QC JC AC TC");

        assert_eq!(compare_tokens(&quads, &royal), Ok(-1));
        assert_eq!(compare_tokens(&royal, &quads), Ok(1));
        assert_eq!(compare_tokens(&royal, &royal), Ok(0));

        let straight_flush = tokens("2H 3H 4H 5H 6H");
        let pair = tokens("2H 3H 4H 5H 5C");
        assert_eq!(compare_tokens(&straight_flush, &pair), Ok(1));
        assert_eq!(compare_tokens(&pair, &straight_flush), Ok(-1));
    }

    #[test]
    fn compare_hands_codes() {
        let a = "3H 3H 3H 2H 2H".parse::<Hand>().unwrap();
        let b = "2C 3D 4H 5S 6C".parse::<Hand>().unwrap();
        assert_eq!(compare_hands(&a, &b), 1);
        assert_eq!(compare_hands(&b, &a), -1);
        assert_eq!(compare_hands(&a, &a), 0);
    }

    #[test]
    fn compare_tokens_errors() {
        let valid = tokens("2C 3D 4H 5S 6C");
        assert_eq!(
            compare_tokens(&valid, &tokens("2C 3D 4H 5S")),
            Err(Error::InvalidHandSize(4))
        );
        assert_eq!(
            compare_tokens(&tokens("2C 3D 4H 5S 6C 7C"), &valid),
            Err(Error::InvalidHandSize(6))
        );
        assert!(matches!(
            compare_tokens(&valid, &tokens("2C 3D 4H 5S 1H")),
            Err(Error::InvalidCardFormat(_))
        ));
    }

    #[test]
    fn batch_results_are_index_aligned() {
        let pairs = vec![
            (tokens("2C 2H 2D 2S 3C"), tokens("KC QC JC AC TC")),
            (tokens("KC QC JC AC TC"), tokens("2C 2H 2D 2S 3C")),
            (tokens("KC QC JC AC TC"), tokens("KC QC JC AC TC")),
        ];

        let results = compare_pairs(&pairs);
        assert_eq!(results, vec![Ok(-1), Ok(1), Ok(0)]);
        assert_eq!(try_compare_pairs(&pairs), Ok(vec![-1, 1, 0]));
    }

    #[test]
    fn batch_isolates_invalid_pairs() {
        let pairs = vec![
            (tokens("2C 2H 2D 2S 3C"), tokens("KC QC JC AC TC")),
            (tokens("XX QC JC AC TC"), tokens("2C 2H 2D 2S 3C")),
            (tokens("KC QC JC AC"), tokens("KC QC JC AC TC")),
            (tokens("KC QC JC AC TC"), tokens("KC QC JC AC TC")),
        ];

        let results = compare_pairs(&pairs);
        assert_eq!(results.len(), pairs.len());
        assert_eq!(results[0], Ok(-1));
        assert!(matches!(results[1], Err(Error::InvalidCardFormat(_))));
        assert_eq!(results[2], Err(Error::InvalidHandSize(4)));
        assert_eq!(results[3], Ok(0));

        // Fails on the first invalid pair.
        assert!(matches!(
            try_compare_pairs(&pairs),
            Err(Error::InvalidCardFormat(_))
        ));
    }

    #[test]
    fn batch_accepts_arrays() {
        let pairs = [(
            ["2C", "3D", "4H", "5S", "7C"],
            ["2D", "3H", "4S", "5C", "7D"],
        )];
        assert_eq!(try_compare_pairs(&pairs), Ok(vec![0]));
        assert!(try_compare_pairs::<[&str; 5], &str>(&[]).unwrap().is_empty());
    }
}
