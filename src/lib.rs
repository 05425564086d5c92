// SPDX-License-Identifier: Apache-2.0

//! Q-ary search
//!
//! Binary search generalized along its arity: every narrowing step splits the
//! active window into `Q` fragments (instead of 2) and probes the `Q - 1` inner
//! fragment boundaries. Windows shorter than a per-arity threshold are finished
//! with a linear scan.
//!
//! - Fragment-partition core, generic over `Q` in `2..=6` (`search`)
//! - Lower-bound, upper-bound and membership wrappers (`bounds`)
//! - Per-arity linear-threshold policy (`params`)
//! - Validation and benchmark harness against the standard library (`harness`)
//!
//! ## Usage
//!
//! ```rust
//! use qary::{lower_bound, upper_bound, contains, TernarySearch};
//!
//! let a = [3, 3, 3, 7, 7, 7, 7, 12, 12, 16, 16, 16, 16];
//! assert_eq!(lower_bound::<4, _>(&a, &7), 3);
//! assert_eq!(upper_bound::<4, _>(&a, &7), 7);
//! assert!(contains::<6, _>(&a, &16));
//!
//! // Explicit threshold instead of the process-wide default
//! let searcher = TernarySearch::with_threshold(12);
//! assert_eq!(searcher.lower_bound(&a, &15), 9);
//! ```

pub mod bounds;
pub mod constants;
pub mod harness;
pub mod params;
pub mod range;
pub mod search;
pub mod types;

pub use bounds::*;
pub use params::{
    builtin_threshold, default_threshold, reset_default_thresholds, set_default_threshold,
    SearchParameters, ThresholdConfig,
};
pub use range::{RandomAccess, Window};
pub use search::{fragment_search, fragment_search_counted, linear_scan, SearchStats};
pub use types::*;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
#[path = "tests/bounds_tests.rs"]
mod bounds_tests;
#[cfg(test)]
#[path = "tests/harness_tests.rs"]
mod harness_tests;
#[cfg(test)]
#[path = "tests/params_tests.rs"]
mod params_tests;
#[cfg(test)]
#[path = "tests/range_tests.rs"]
mod range_tests;
#[cfg(test)]
#[path = "tests/search_tests.rs"]
mod search_tests;
