//! Edit operations and edit paths.
//!
//! An edit path is an ordered sequence of operations aligning a source
//! sequence to a target, left to right. Each op consumes a fixed number
//! of source and target elements:
//!
//! ```text
//! Match:     (1, 1)   element unchanged, zero cost
//! Replace:   (1, 1)
//! Delete:    (1, 0)
//! Insert:    (0, 1)
//! Transpose: (2, 2)   adjacent pair, swapped
//! ```
//!
//! Op indices refer to positions in the *original* sequences at the
//! point the op occurs along the alignment diagonal, not to a mutating
//! buffer; the applier re-derives buffer offsets from the consumption
//! counts above.

use std::fmt;

use crate::cost::{CostConfig, EditKind};

/// A single edit operation.
///
/// Consumers pattern-match exhaustively; the set of variants is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum EditOp {
    /// Source element unchanged. Only emitted when matches are
    /// explicitly requested during enumeration.
    Match {
        /// Position of the unchanged element in the source.
        source_index: usize,
    },
    /// Remove the source element at `source_index`.
    Delete {
        /// Position of the removed element in the source.
        source_index: usize,
    },
    /// Insert `element` (copied from the target).
    Insert {
        /// Position of the inserted element in the target.
        target_index: usize,
        /// The inserted element.
        element: char,
    },
    /// Substitute the source element with the target element.
    Replace {
        /// Position of the replaced element in the source.
        source_index: usize,
        /// Position of the replacement in the target.
        target_index: usize,
    },
    /// Swap the adjacent source elements at `source_index - 1` and
    /// `source_index`, matching `target[j-2], target[j-1]`.
    Transpose {
        /// Position of the second element of the swapped pair.
        source_index: usize,
    },
}

/// An ordered sequence of edit operations from the start of both
/// sequences to their ends.
pub type EditPath = Vec<EditOp>;

impl EditOp {
    /// The weighted kind of this op, or `None` for a zero-cost match.
    pub fn kind(&self) -> Option<EditKind> {
        match self {
            EditOp::Match { .. } => None,
            EditOp::Delete { .. } => Some(EditKind::Delete),
            EditOp::Insert { .. } => Some(EditKind::Insert),
            EditOp::Replace { .. } => Some(EditKind::Replace),
            EditOp::Transpose { .. } => Some(EditKind::Transpose),
        }
    }

    /// Cost of this op under `costs`.
    pub fn cost(&self, costs: &CostConfig) -> f64 {
        self.kind().map_or(0.0, |kind| costs.cost(kind))
    }

    /// Number of source elements this op consumes.
    pub fn source_advance(&self) -> usize {
        match self {
            EditOp::Match { .. } | EditOp::Delete { .. } | EditOp::Replace { .. } => 1,
            EditOp::Insert { .. } => 0,
            EditOp::Transpose { .. } => 2,
        }
    }

    /// Number of target elements this op consumes.
    pub fn target_advance(&self) -> usize {
        match self {
            EditOp::Match { .. } | EditOp::Insert { .. } | EditOp::Replace { .. } => 1,
            EditOp::Delete { .. } => 0,
            EditOp::Transpose { .. } => 2,
        }
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOp::Match { source_index } => write!(f, "match @{source_index}"),
            EditOp::Delete { source_index } => write!(f, "delete @{source_index}"),
            EditOp::Insert {
                target_index,
                element,
            } => write!(f, "insert {element:?} @{target_index}"),
            EditOp::Replace {
                source_index,
                target_index,
            } => write!(f, "replace @{source_index} -> @{target_index}"),
            EditOp::Transpose { source_index } => {
                write!(f, "transpose @{}..={source_index}", source_index - 1)
            }
        }
    }
}

/// Total cost of a path under `costs`.
pub fn path_cost(path: &EditPath, costs: &CostConfig) -> f64 {
    path.iter().map(|op| op.cost(costs)).sum()
}
