//! Error types for the OSA engine.

use thiserror::Error;

use crate::cost::EditKind;

/// Errors raised when a cost configuration is rejected.
///
/// Cost configurations are validated before any matrix is built; a
/// rejected configuration never reaches the DP recurrence.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidCostError {
    /// A required operation kind has no cost.
    ///
    /// Only possible when constructing a [`crate::cost::CostConfig`]
    /// from a caller-supplied map; the struct form always carries all
    /// four kinds.
    #[error("no cost supplied for {0}")]
    MissingKind(EditKind),

    /// A cost is negative.
    #[error("negative cost {cost} for {kind}")]
    NegativeCost {
        /// Operation kind carrying the offending cost.
        kind: EditKind,
        /// The rejected value.
        cost: f64,
    },

    /// A cost is NaN or infinite.
    #[error("non-finite cost {cost} for {kind}")]
    NonFiniteCost {
        /// Operation kind carrying the offending cost.
        kind: EditKind,
        /// The rejected value.
        cost: f64,
    },
}

/// Errors raised when replaying an edit path fails to reproduce the
/// target.
///
/// A well-formed path produced by the enumerator never triggers these;
/// they exist for defensive validation of externally supplied paths.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MismatchError {
    /// An op consumed past the end of the source, or referenced an
    /// out-of-range target position.
    #[error("op {op_index} reads past the end of its sequence")]
    SourceOverrun {
        /// Index of the offending op within the path.
        op_index: usize,
    },

    /// An op points behind elements the path already consumed.
    #[error("op {op_index} points behind the replay cursor")]
    MisorderedOp {
        /// Index of the offending op within the path.
        op_index: usize,
    },

    /// The replayed output differs from the target.
    #[error("output diverges from target at element {index}")]
    TargetDivergence {
        /// First position where output and target disagree; equal to
        /// the shorter length when one is a prefix of the other.
        index: usize,
        /// Element produced at that position, if any.
        produced: Option<char>,
        /// Element expected at that position, if any.
        expected: Option<char>,
    },
}
