//! Error types for dataset construction and parameter parsing.
//!
//! Mining itself cannot fail: every representation validates its
//! invariants when it is built, so a miner only ever sees well-formed input.

/// Errors raised while building or converting a dataset representation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    #[error("tidset of item {item} references transaction {tid} of only {num_transactions}")]
    TidOutOfRange {
        item: String,
        tid: usize,
        num_transactions: usize,
    },

    #[error("item {item} has an empty tidset")]
    EmptyTidset { item: String },

    #[error("item {item:?} in transaction {row} is not an integer")]
    NonNumericItem { row: usize, item: String },
}

/// Errors raised while interpreting mining parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamsError {
    #[error("unknown algorithm {0:?}, expected one of: apriori, fp-growth, eclat")]
    UnknownAlgorithm(String),
}
