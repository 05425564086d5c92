// SPDX-License-Identifier: Apache-2.0

/// Test-only helpers.
use std::sync::{Mutex, MutexGuard};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn config_test_logger() {
    // Intentionally a no-op.
    // Downstream crates install their own `log` backend; the search family
    // only emits through the facade.
}

static DEFAULTS_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that change the process-wide thresholds.
pub fn lock_defaults() -> MutexGuard<'static, ()> {
    DEFAULTS_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Sorted array of `len` values in `[0, max_value]`; small `max_value`
/// produces long runs of ties.
pub fn random_sorted_i64(rng: &mut StdRng, len: usize, max_value: i64) -> Vec<i64> {
    let mut values: Vec<i64> = (0..len).map(|_| rng.random_range(0..=max_value)).collect();
    values.sort_unstable();
    values
}

pub fn reference_lower_bound<T: PartialOrd>(arr: &[T], query: &T) -> usize {
    arr.partition_point(|e| e < query)
}

pub fn reference_upper_bound<T: PartialOrd>(arr: &[T], query: &T) -> usize {
    arr.partition_point(|e| e <= query)
}

/// Every position before `p` satisfies `pred`, every position from `p` on fails it.
pub fn assert_partition_boundary<T, F>(arr: &[T], p: usize, pred: F, label: &str)
where
    F: Fn(&T) -> bool,
{
    assert!(p <= arr.len(), "{}: position {} past end {}", label, p, arr.len());
    for (i, e) in arr.iter().enumerate() {
        if i < p {
            assert!(pred(e), "{}: element at {} should satisfy predicate (boundary {})", label, i, p);
        } else {
            assert!(!pred(e), "{}: element at {} should fail predicate (boundary {})", label, i, p);
        }
    }
}
