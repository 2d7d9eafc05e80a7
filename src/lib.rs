//! # libosa
//!
//! Optimal String Alignment (OSA) distance with exhaustive edit-path
//! enumeration.
//!
//! OSA is Damerau-Levenshtein distance restricted so each adjacent
//! transposition is atomic: a swapped pair is never touched by another
//! edit. On top of the weighted distance itself, this crate enumerates
//! *every* minimal-cost sequence of edit operations between two
//! strings (deduplicated, in a deterministic canonical order) and
//! can replay such a path to rebuild the target from the source.
//!
//! ## Example
//!
//! ```rust
//! use libosa::prelude::*;
//!
//! let costs = CostConfig::default();
//! assert_eq!(compute_distance("kitten", "sitting", &costs).unwrap(), 3.0);
//!
//! let paths = enumerate_paths("cab", "axb", &costs, false).unwrap();
//! assert_eq!(paths.len(), 2);
//! for path in &paths {
//!     assert_eq!(apply_edit_path("cab", "axb", path).unwrap(), "axb");
//! }
//! ```
//!
//! All operations are pure, synchronous functions over immutable
//! inputs; nothing is cached across calls.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod align;
pub mod apply;
pub mod cost;
pub mod distance;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod paths;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::align::Alignment;
    pub use crate::apply::{apply_edit_path, validate};
    pub use crate::cost::{CostConfig, EditKind};
    pub use crate::distance::{compute_distance, osa_distance};
    pub use crate::error::{InvalidCostError, MismatchError};
    pub use crate::matrix::CostMatrix;
    pub use crate::ops::{path_cost, EditOp, EditPath};
    pub use crate::paths::enumerate_paths;
}
