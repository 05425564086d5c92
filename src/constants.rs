// SPDX-License-Identifier: Apache-2.0

//! Common constants used across the search family
//!
//! This module centralizes arity bounds, threshold defaults, configuration keys
//! and benchmark defaults.

// =============================================================================
// ARITY
// =============================================================================

/// Smallest supported number of fragments per narrowing step.
pub const MIN_ARITY: usize = 2;

/// Largest supported number of fragments per narrowing step.
pub const MAX_ARITY: usize = 6;

/// Number of supported arities (2..=6).
pub const ARITY_COUNT: usize = MAX_ARITY - MIN_ARITY + 1;

/// Every supported arity, in increasing order.
pub const SUPPORTED_ARITIES: [usize; ARITY_COUNT] = [2, 3, 4, 5, 6];

// =============================================================================
// LINEAR THRESHOLD
// =============================================================================

/// Default `to_linear_threshold` is `LINEAR_THRESHOLD_FACTOR * Q`.
pub const LINEAR_THRESHOLD_FACTOR: usize = 2;

/// Prefix of the environment variables overriding per-arity thresholds,
/// e.g. `QARY_TO_LINEAR_THRESHOLD_4=16`.
pub const THRESHOLD_ENV_PREFIX: &str = "QARY_TO_LINEAR_THRESHOLD_";

// =============================================================================
// BENCHMARK DEFAULTS
// =============================================================================

/// Length of the generated sorted array.
pub const BENCH_ARRAY_LEN: usize = 10_000;

/// Query range start; also the lower bound of generated values.
pub const BENCH_START_Q: f32 = 0.0;

/// Query range end; also the upper bound of generated values.
pub const BENCH_FINISH_Q: f32 = 10_000_000.0;

/// Step between two consecutive queries.
pub const BENCH_STEP_Q: f32 = 1.0;

/// Seed of the generator used when no seed is configured.
pub const BENCH_SEED: u64 = 0x5EA2_C4A1_2024_0001;
