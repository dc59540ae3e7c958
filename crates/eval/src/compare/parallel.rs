// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel batch comparison.
use std::{panic, thread};

use super::compare_pairs;
use crate::Error;

/// Compares a batch of hands pairs using `num_tasks` parallel tasks.
///
/// The pairs are split in contiguous chunks, one for each task, and the
/// results are returned in the same order as the input pairs.
///
/// Panics if `num_tasks` is 0.
pub fn par_compare_pairs<T, S>(num_tasks: usize, pairs: &[(T, T)]) -> Vec<Result<i8, Error>>
where
    T: AsRef<[S]> + Sync,
    S: AsRef<str>,
{
    assert!(num_tasks > 0);

    if pairs.is_empty() {
        return Vec::new();
    }

    let pairs_per_task = pairs.len().div_ceil(num_tasks);

    thread::scope(|s| {
        let tasks = pairs
            .chunks(pairs_per_task)
            .map(|chunk| s.spawn(move || compare_pairs(chunk)))
            .collect::<Vec<_>>();

        let mut results = Vec::with_capacity(pairs.len());
        for task in tasks {
            match task.join() {
                Ok(chunk_results) => results.extend(chunk_results),
                Err(e) => panic::resume_unwind(e),
            }
        }

        results
    })
}
