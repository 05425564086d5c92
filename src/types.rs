// SPDX-License-Identifier: Apache-2.0

// types.rs for qary
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QaryError {
    #[error("Unsupported arity: {0} (supported: 2..=6)")]
    UnsupportedArity(usize),
    #[error("Invalid linear threshold for {key}: {value:?}")]
    InvalidThreshold { key: String, value: String },
    #[error(
        "Validation failed for {contender} on {fixture} sequence: query {query} expected position {expected}, got {actual}"
    )]
    Validation {
        contender: String,
        fixture: String,
        query: String,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid benchmark configuration: {0}")]
    InvalidBenchmark(String),
}

pub type Result<T> = std::result::Result<T, QaryError>;
