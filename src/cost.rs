//! Operation kinds and per-kind cost configuration.

use std::collections::HashMap;
use std::fmt;

use crate::error::InvalidCostError;

/// The four weighted edit operation kinds.
///
/// `Match` is not listed: matching an equal element always costs zero
/// and carries no configurable weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum EditKind {
    /// Remove one source element.
    Delete,
    /// Insert one target element.
    Insert,
    /// Substitute a source element with a target element.
    Replace,
    /// Swap two adjacent source elements.
    Transpose,
}

impl EditKind {
    /// All four kinds, in declaration order.
    pub const ALL: [EditKind; 4] = [
        EditKind::Delete,
        EditKind::Insert,
        EditKind::Replace,
        EditKind::Transpose,
    ];

    /// Get a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            EditKind::Delete => "delete",
            EditKind::Insert => "insert",
            EditKind::Replace => "replace",
            EditKind::Transpose => "transpose",
        }
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Non-negative cost for each edit operation kind.
///
/// The default configuration weighs every operation at 1.0, which
/// makes the distance the classic (unweighted) OSA distance.
///
/// Costs are `f64`, but tie detection during path enumeration uses
/// exact equality: stick to exactly representable values (integers,
/// simple rationals). See [`crate::paths::enumerate_paths`].
///
/// # Example
///
/// ```rust
/// use libosa::cost::CostConfig;
///
/// let costs = CostConfig { replace: 2.0, ..CostConfig::default() };
/// assert!(costs.validate().is_ok());
///
/// let bad = CostConfig { delete: -1.0, ..CostConfig::default() };
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CostConfig {
    /// Cost of removing one source element.
    pub delete: f64,
    /// Cost of inserting one target element.
    pub insert: f64,
    /// Cost of substituting one element for another.
    pub replace: f64,
    /// Cost of swapping two adjacent elements.
    pub transpose: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            delete: 1.0,
            insert: 1.0,
            replace: 1.0,
            transpose: 1.0,
        }
    }
}

impl CostConfig {
    /// Build a configuration from a per-kind cost map.
    ///
    /// Every kind must be present; this mirrors callers that carry
    /// costs as a dictionary rather than a struct.
    ///
    /// # Errors
    ///
    /// [`InvalidCostError::MissingKind`] when a kind is absent, plus
    /// the range checks of [`CostConfig::validate`].
    pub fn from_map(costs: &HashMap<EditKind, f64>) -> Result<Self, InvalidCostError> {
        let get = |kind| {
            costs
                .get(&kind)
                .copied()
                .ok_or(InvalidCostError::MissingKind(kind))
        };
        let config = Self {
            delete: get(EditKind::Delete)?,
            insert: get(EditKind::Insert)?,
            replace: get(EditKind::Replace)?,
            transpose: get(EditKind::Transpose)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Look up the cost for one kind.
    pub fn cost(&self, kind: EditKind) -> f64 {
        match kind {
            EditKind::Delete => self.delete,
            EditKind::Insert => self.insert,
            EditKind::Replace => self.replace,
            EditKind::Transpose => self.transpose,
        }
    }

    /// The largest configured cost.
    pub fn max_cost(&self) -> f64 {
        EditKind::ALL
            .iter()
            .map(|&kind| self.cost(kind))
            .fold(0.0, f64::max)
    }

    /// Check that every cost is finite and non-negative.
    ///
    /// Called by every entry point before matrix construction; a
    /// violated configuration never reaches the recurrence.
    pub fn validate(&self) -> Result<(), InvalidCostError> {
        for kind in EditKind::ALL {
            let cost = self.cost(kind);
            if !cost.is_finite() {
                return Err(InvalidCostError::NonFiniteCost { kind, cost });
            }
            if cost < 0.0 {
                return Err(InvalidCostError::NegativeCost { kind, cost });
            }
        }
        Ok(())
    }
}
