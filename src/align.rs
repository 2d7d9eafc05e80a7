//! One matrix, many queries.
//!
//! [`Alignment`] builds the cost table for a (source, target, costs)
//! triple once and serves distance and path queries as views over it,
//! so callers wanting both do not pay for two builds.

use std::fmt::Write;

use smallvec::SmallVec;

use crate::cost::CostConfig;
use crate::error::InvalidCostError;
use crate::matrix::CostMatrix;
use crate::ops::EditPath;
use crate::paths;

/// A solved OSA alignment between one source/target pair.
///
/// Owns the character sequences, the cost configuration and the cost
/// table; the table is immutable after construction.
///
/// # Example
///
/// ```rust
/// use libosa::align::Alignment;
/// use libosa::cost::CostConfig;
///
/// let alignment = Alignment::new("cab", "axb", CostConfig::default()).unwrap();
/// assert_eq!(alignment.distance(), 2.0);
/// assert_eq!(alignment.paths(false).len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Alignment {
    source: SmallVec<[char; 32]>,
    target: SmallVec<[char; 32]>,
    costs: CostConfig,
    matrix: CostMatrix,
}

impl Alignment {
    /// Validate `costs` and build the cost table for the pair.
    ///
    /// # Errors
    ///
    /// [`InvalidCostError`] when `costs` carries a negative or
    /// non-finite weight.
    pub fn new(source: &str, target: &str, costs: CostConfig) -> Result<Self, InvalidCostError> {
        costs.validate()?;

        let source: SmallVec<[char; 32]> = source.chars().collect();
        let target: SmallVec<[char; 32]> = target.chars().collect();
        let matrix = CostMatrix::build(&source, &target, &costs);

        Ok(Self {
            source,
            target,
            costs,
            matrix,
        })
    }

    /// The OSA distance: the final cell of the table.
    pub fn distance(&self) -> f64 {
        self.matrix.distance()
    }

    /// Every minimal-cost edit path, in the enumerator's canonical
    /// order. See [`crate::paths::enumerate_paths`] for the ordering
    /// and match-emission contract.
    pub fn paths(&self, include_matches: bool) -> Vec<EditPath> {
        paths::enumerate(
            &self.source,
            &self.target,
            &self.costs,
            &self.matrix,
            include_matches,
        )
    }

    /// The underlying cost table.
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    /// The active cost configuration.
    pub fn costs(&self) -> &CostConfig {
        &self.costs
    }

    /// Render the distance and every minimal path as human-readable
    /// text, one op per line.
    pub fn format_paths(&self, include_matches: bool) -> String {
        let source: String = self.source.iter().collect();
        let target: String = self.target.iter().collect();
        let paths = self.paths(include_matches);

        let mut out = String::new();
        let _ = writeln!(
            out,
            "OSA distance from {source:?} to {target:?}: {}",
            self.distance()
        );
        let _ = writeln!(out, "Optimal edit sequences: {}", paths.len());
        for (index, path) in paths.iter().enumerate() {
            let _ = writeln!(out, "Path {}:", index + 1);
            for op in path {
                let _ = writeln!(out, "  {op}");
            }
        }
        out
    }
}
