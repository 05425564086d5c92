// SPDX-License-Identifier: Apache-2.0

//! Validation and benchmark harness
//!
//! Drives lower-bound implementations through the positional contract
//! `fn(&[T], begin, end, &query) -> position`:
//!
//! 1. every contender is validated against canned fixtures (ordinary, tie-run,
//!    constant and empty sequences);
//! 2. a sorted array of uniformly random values is generated;
//! 3. every contender answers the same stepped sequence of queries and the
//!    elapsed time is recorded.
//!
//! The returned offsets are folded into a checksum kept alive with
//! [`black_box`] so the searches cannot be optimized away.

use std::hint::black_box;
use std::ops::{Add, Sub};
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::distr::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::bounds::lower_bound_in;
use crate::constants::{
    BENCH_ARRAY_LEN, BENCH_FINISH_Q, BENCH_SEED, BENCH_START_Q, BENCH_STEP_Q,
};
use crate::types::{QaryError, Result};

/// Positional search signature consumed by the harness.
pub type PositionalSearchFn<T> = fn(&[T], usize, usize, &T) -> usize;

/// Standard-library lower bound over `[begin, end)`, the baseline contender.
pub fn std_lower_bound<T: PartialOrd>(arr: &[T], begin: usize, end: usize, query: &T) -> usize {
    begin + arr[begin..end].partition_point(|element| element < query)
}

/// Named lower-bound implementations: the standard baseline then Q = 2..6.
pub fn lower_bound_contenders<T: PartialOrd>() -> Vec<(&'static str, PositionalSearchFn<T>)> {
    vec![
        ("std::partition_point", std_lower_bound::<T> as PositionalSearchFn<T>),
        ("2-ary lower_bound", lower_bound_in::<2, [T]>),
        ("3-ary lower_bound", lower_bound_in::<3, [T]>),
        ("4-ary lower_bound", lower_bound_in::<4, [T]>),
        ("5-ary lower_bound", lower_bound_in::<5, [T]>),
        ("6-ary lower_bound", lower_bound_in::<6, [T]>),
    ]
}

// =============================================================================
//  FIXTURES
// =============================================================================

struct Fixture {
    name: &'static str,
    values: &'static [i32],
    /// (query, expected lower-bound index)
    cases: &'static [(i32, usize)],
}

const FIXTURES: &[Fixture] = &[
    Fixture {
        name: "ordinary",
        values: &[2, 4, 6, 7, 12, 13, 16, 19, 23, 24, 27, 32, 36],
        cases: &[
            (19, 7),
            (36, 12),
            (6, 2),
            (20, 8),
            (8, 4),
            (1, 0),
            (42, 13),
        ],
    },
    Fixture {
        name: "fragmented",
        values: &[3, 3, 3, 7, 7, 7, 7, 12, 12, 16, 16, 16, 16],
        cases: &[(7, 3), (8, 7), (2, 0), (20, 13), (15, 9)],
    },
    Fixture {
        name: "constant",
        values: &[4, 4, 4, 4, 4, 4, 4, 4, 4],
        cases: &[(4, 0), (5, 9)],
    },
    Fixture {
        name: "empty",
        values: &[],
        cases: &[(6, 0), (12, 0)],
    },
];

/// Check a lower-bound implementation against the canned fixtures.
///
/// Stops at the first mismatch and reports it as [`QaryError::Validation`].
pub fn validate_search_fn(name: &str, search_f: PositionalSearchFn<i32>) -> Result<()> {
    for fixture in FIXTURES {
        for &(query, expected) in fixture.cases {
            let actual = search_f(fixture.values, 0, fixture.values.len(), &query);
            if actual != expected {
                return Err(QaryError::Validation {
                    contender: name.to_string(),
                    fixture: fixture.name.to_string(),
                    query: query.to_string(),
                    expected,
                    actual,
                });
            }
        }
    }
    debug!("{}: all fixtures passed", name);
    Ok(())
}

// =============================================================================
//  DATA GENERATION
// =============================================================================

/// `n` integers drawn uniformly from `[min_value, max_value]`, sorted ascending.
pub fn prepare_sorted_int_array<T, G>(n: usize, min_value: T, max_value: T, rng: &mut G) -> Vec<T>
where
    T: SampleUniform + Ord + Copy,
    G: Rng,
{
    let mut values: Vec<T> = (0..n)
        .map(|_| rng.random_range(min_value..=max_value))
        .collect();
    values.sort_unstable();
    values
}

/// `n` reals drawn uniformly from `[min_value, max_value]`, sorted ascending.
pub fn prepare_sorted_real_array<T, G>(n: usize, min_value: T, max_value: T, rng: &mut G) -> Vec<T>
where
    T: SampleUniform + PartialOrd + Copy,
    G: Rng,
{
    let mut values: Vec<T> = (0..n)
        .map(|_| rng.random_range(min_value..=max_value))
        .collect();
    // Uniform samples are never NaN, so partial_cmp always succeeds.
    values.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    values
}

// =============================================================================
//  TIMING
// =============================================================================

/// Outcome of one [`run_searches`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTiming {
    pub elapsed: Duration,
    pub queries: u64,
    /// Sum of the returned offsets from `begin`.
    pub checksum: u64,
}

/// Query every value of `start_q, start_q + step_q, ...` up to `finish_q`
/// against the whole of `arr` and time the pass.
///
/// `step_q` must be positive; [`run_lower_bound_benchmark`] checks this
/// before calling. `finish_q - start_q` must be representable in `T`. The
/// sweep stops before any step that would pass `finish_q`, so a range ending
/// at the maximum of an integer type never overflows.
pub fn run_searches<T>(
    search_f: PositionalSearchFn<T>,
    arr: &[T],
    start_q: T,
    finish_q: T,
    step_q: T,
) -> SearchTiming
where
    T: Copy + PartialOrd + Add<Output = T> + Sub<Output = T>,
{
    let mut checksum = 0u64;
    let mut queries = 0u64;

    let start_time = Instant::now();
    let mut q = start_q;
    while q <= finish_q {
        let result = search_f(black_box(arr), 0, arr.len(), &q);
        checksum = checksum.wrapping_add(result as u64);
        queries += 1;
        if finish_q - q < step_q {
            break;
        }
        let next = q + step_q;
        // A step lost to float precision would never terminate.
        if !(next > q) {
            break;
        }
        q = next;
    }
    let elapsed = start_time.elapsed();

    SearchTiming {
        elapsed,
        queries,
        checksum: black_box(checksum),
    }
}

// =============================================================================
//  BENCHMARK DRIVER
// =============================================================================

/// Benchmark parameters. Generated values and queries share `[start_q, finish_q]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    pub len: usize,
    pub start_q: f32,
    pub finish_q: f32,
    pub step_q: f32,
    pub seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            len: BENCH_ARRAY_LEN,
            start_q: BENCH_START_Q,
            finish_q: BENCH_FINISH_Q,
            step_q: BENCH_STEP_Q,
            seed: BENCH_SEED,
        }
    }
}

impl BenchmarkConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.step_q > 0.0) {
            return Err(QaryError::InvalidBenchmark(format!(
                "step_q must be positive, got {}",
                self.step_q
            )));
        }
        if !(self.start_q <= self.finish_q) {
            return Err(QaryError::InvalidBenchmark(format!(
                "start_q {} is past finish_q {}",
                self.start_q, self.finish_q
            )));
        }
        if !self.finish_q.is_finite() || !self.start_q.is_finite() {
            return Err(QaryError::InvalidBenchmark(
                "query range must be finite".to_string(),
            ));
        }
        if !(self.finish_q - self.start_q).is_finite() {
            return Err(QaryError::InvalidBenchmark(format!(
                "query range [{}, {}] is too wide to sample",
                self.start_q, self.finish_q
            )));
        }
        Ok(())
    }
}

/// Timing of one contender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub name: String,
    pub elapsed_ms: u128,
    pub queries: u64,
    pub checksum: u64,
}

/// Validate every lower-bound contender, then time each of them on the same
/// generated array and query sequence.
pub fn run_lower_bound_benchmark(config: &BenchmarkConfig) -> Result<Vec<BenchmarkReport>> {
    config.validate()?;

    for (name, search_f) in lower_bound_contenders::<i32>() {
        validate_search_fn(name, search_f)?;
    }
    info!("All lower-bound contenders passed validation");

    let mut rng = StdRng::seed_from_u64(config.seed);
    let arr = prepare_sorted_real_array(config.len, config.start_q, config.finish_q, &mut rng);
    info!(
        "Generated sorted array of length N={}, with values in [{}, {}]",
        arr.len(),
        config.start_q,
        config.finish_q
    );

    let mut reports = Vec::new();
    for (name, search_f) in lower_bound_contenders::<f32>() {
        let timing = run_searches(search_f, &arr, config.start_q, config.finish_q, config.step_q);
        info!(
            "{}: {} ms for {} queries",
            name,
            timing.elapsed.as_millis(),
            timing.queries
        );
        reports.push(BenchmarkReport {
            name: name.to_string(),
            elapsed_ms: timing.elapsed.as_millis(),
            queries: timing.queries,
            checksum: timing.checksum,
        });
    }
    Ok(reports)
}

/// Lower-bound position agreement between `contender` and the standard
/// baseline for each of `queries`. Returns the first disagreeing query.
pub fn first_disagreement<T>(
    contender: PositionalSearchFn<T>,
    arr: &[T],
    queries: &[T],
) -> Option<(T, usize, usize)>
where
    T: PartialOrd + Copy,
{
    queries.iter().find_map(|q| {
        let expected = std_lower_bound(arr, 0, arr.len(), q);
        let actual = contender(arr, 0, arr.len(), q);
        (expected != actual).then_some((*q, expected, actual))
    })
}
