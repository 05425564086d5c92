// SPDX-License-Identifier: Apache-2.0

//! Linear-threshold policy
//!
//! Each arity `Q` owns one `to_linear_threshold`: the smallest active-window
//! length for which the search keeps partitioning into fragments. Shorter
//! windows are finished with a linear scan.
//!
//! Process-wide defaults (`2 * Q`) live in relaxed atomics. They are meant to
//! be set once at startup and read by every call that does not carry explicit
//! [`SearchParameters`]. A change made while searches are in flight is only
//! seen by calls that read the default afterwards; no further ordering is
//! provided.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{
    ARITY_COUNT, LINEAR_THRESHOLD_FACTOR, MAX_ARITY, MIN_ARITY, SUPPORTED_ARITIES,
    THRESHOLD_ENV_PREFIX,
};
use crate::types::{QaryError, Result};

/// Compile-time guard for the const arity parameter.
pub(crate) struct ArityCheck<const Q: usize>;

impl<const Q: usize> ArityCheck<Q> {
    pub(crate) const SUPPORTED: () = assert!(
        Q >= MIN_ARITY && Q <= MAX_ARITY,
        "Q-ary search supports arities 2..=6"
    );
}

/// Default threshold for an arity, `2 * Q`.
#[inline]
pub const fn builtin_threshold(arity: usize) -> usize {
    LINEAR_THRESHOLD_FACTOR * arity
}

static DEFAULT_THRESHOLDS: [AtomicUsize; ARITY_COUNT] = [
    AtomicUsize::new(builtin_threshold(2)),
    AtomicUsize::new(builtin_threshold(3)),
    AtomicUsize::new(builtin_threshold(4)),
    AtomicUsize::new(builtin_threshold(5)),
    AtomicUsize::new(builtin_threshold(6)),
];

#[inline]
fn slot(arity: usize) -> Result<&'static AtomicUsize> {
    if !(MIN_ARITY..=MAX_ARITY).contains(&arity) {
        return Err(QaryError::UnsupportedArity(arity));
    }
    Ok(&DEFAULT_THRESHOLDS[arity - MIN_ARITY])
}

/// Current process-wide threshold for `arity`.
pub fn default_threshold(arity: usize) -> Result<usize> {
    Ok(slot(arity)?.load(Ordering::Relaxed))
}

/// Replace the process-wide threshold for `arity`.
///
/// Any value is accepted; values below `arity` behave like `arity` (see
/// [`SearchParameters::effective_threshold`]).
pub fn set_default_threshold(arity: usize, threshold: usize) -> Result<()> {
    let previous = slot(arity)?.swap(threshold, Ordering::Relaxed);
    debug!(
        "to_linear_threshold for {}-ary search: {} -> {}",
        arity, previous, threshold
    );
    Ok(())
}

/// Restore `2 * Q` for every arity.
pub fn reset_default_thresholds() {
    for arity in SUPPORTED_ARITIES {
        DEFAULT_THRESHOLDS[arity - MIN_ARITY].store(builtin_threshold(arity), Ordering::Relaxed);
    }
    debug!("to_linear_threshold defaults reset");
}

/// Parameters read once at the start of a search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParameters {
    /// Minimal window length that is still partitioned into fragments.
    pub to_linear_threshold: usize,
}

impl SearchParameters {
    #[inline]
    pub fn new(to_linear_threshold: usize) -> Self {
        Self {
            to_linear_threshold,
        }
    }

    /// Snapshot of the process-wide default for arity `Q`.
    #[inline]
    pub fn for_arity<const Q: usize>() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = ArityCheck::<Q>::SUPPORTED;
        Self::new(DEFAULT_THRESHOLDS[Q - MIN_ARITY].load(Ordering::Relaxed))
    }

    /// Threshold actually used by the narrowing loop.
    ///
    /// A window must hold at least `Q` elements for every fragment to be
    /// non-empty, so smaller configured values are raised to `Q`.
    #[inline]
    pub fn effective_threshold<const Q: usize>(&self) -> usize {
        self.to_linear_threshold.max(Q)
    }
}

/// Thresholds for every supported arity, indexed from `Q = 2`.
///
/// Serializable so it can be embedded in a caller's configuration file and
/// installed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub to_linear_threshold: [usize; ARITY_COUNT],
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            to_linear_threshold: SUPPORTED_ARITIES.map(builtin_threshold),
        }
    }
}

impl ThresholdConfig {
    /// Snapshot of the current process-wide defaults.
    pub fn current() -> Self {
        Self {
            to_linear_threshold: SUPPORTED_ARITIES
                .map(|arity| DEFAULT_THRESHOLDS[arity - MIN_ARITY].load(Ordering::Relaxed)),
        }
    }

    pub fn get(&self, arity: usize) -> Result<usize> {
        if !(MIN_ARITY..=MAX_ARITY).contains(&arity) {
            return Err(QaryError::UnsupportedArity(arity));
        }
        Ok(self.to_linear_threshold[arity - MIN_ARITY])
    }

    pub fn with_threshold(mut self, arity: usize, threshold: usize) -> Result<Self> {
        if !(MIN_ARITY..=MAX_ARITY).contains(&arity) {
            return Err(QaryError::UnsupportedArity(arity));
        }
        self.to_linear_threshold[arity - MIN_ARITY] = threshold;
        Ok(self)
    }

    /// Built-in defaults overridden by `QARY_TO_LINEAR_THRESHOLD_<Q>`
    /// environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Built-in defaults overridden by whatever `lookup` returns for each
    /// `QARY_TO_LINEAR_THRESHOLD_<Q>` key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        for arity in SUPPORTED_ARITIES {
            let key = format!("{}{}", THRESHOLD_ENV_PREFIX, arity);
            if let Some(raw) = lookup(&key) {
                let threshold = raw.trim().parse::<usize>().map_err(|_| {
                    QaryError::InvalidThreshold {
                        key: key.clone(),
                        value: raw.clone(),
                    }
                })?;
                config.to_linear_threshold[arity - MIN_ARITY] = threshold;
            }
        }
        Ok(config)
    }

    /// Make these thresholds the process-wide defaults.
    pub fn install(&self) {
        for arity in SUPPORTED_ARITIES {
            let threshold = self.to_linear_threshold[arity - MIN_ARITY];
            DEFAULT_THRESHOLDS[arity - MIN_ARITY].store(threshold, Ordering::Relaxed);
        }
        debug!("to_linear_threshold defaults installed: {:?}", self.to_linear_threshold);
    }
}
