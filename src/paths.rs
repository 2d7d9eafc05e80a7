//! Exhaustive enumeration of minimal-cost edit paths.
//!
//! Backtracks the cost table from the final cell to the origin and
//! collects *every* minimal path, not just one. The predecessor
//! relation among cells forms a DAG, so the walk memoizes the path set
//! per cell; naive recursion would re-expand shared substructure
//! exponentially even though the distinct per-cell suffixes stay
//! polynomial before cross-product expansion.
//!
//! # Canonical ordering
//!
//! At each cell the predecessor transitions are examined in a fixed
//! tie-break order: transpose, diagonal (match/replace), delete,
//! insert. Combined with depth-first expansion this defines a
//! canonical ordering over full paths, which is a contract of the
//! enumerator, not an implementation detail: callers assert exact
//! path lists against it.
//!
//! # Exact tie detection
//!
//! Predecessor costs are compared to the cell cost with exact `f64`
//! equality. This is sound when all configured costs are exactly
//! representable (integers, simple rationals): minimal paths then
//! accumulate bit-identical sums. Near-tie costs within an epsilon are
//! **not** treated as ties.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use std::rc::Rc;

use crate::cost::CostConfig;
use crate::error::InvalidCostError;
use crate::matrix::CostMatrix;
use crate::ops::{EditOp, EditPath};

/// Enumerate every minimal-cost edit path from `source` to `target`.
///
/// The result is logically a set: duplicate op sequences arising from
/// distinct backtracking branches under cost ties are suppressed,
/// retaining first-seen order. Paths come back in the canonical
/// depth-first order described in the module docs.
///
/// With `include_matches` set, equal-element diagonal steps emit
/// explicit [`EditOp::Match`] ops; otherwise those steps emit nothing
/// and paths may be shorter than the number of alignment steps taken.
///
/// Enumeration always yields at least one path for well-formed input:
/// pure deletes plus inserts exist for any pair.
///
/// # Errors
///
/// [`InvalidCostError`] when `costs` carries a negative or non-finite
/// weight.
///
/// # Example
///
/// ```rust
/// use libosa::cost::CostConfig;
/// use libosa::paths::enumerate_paths;
///
/// let paths = enumerate_paths("cab", "axb", &CostConfig::default(), false).unwrap();
/// assert_eq!(paths.len(), 2);
/// ```
pub fn enumerate_paths(
    source: &str,
    target: &str,
    costs: &CostConfig,
    include_matches: bool,
) -> Result<Vec<EditPath>, InvalidCostError> {
    costs.validate()?;

    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();
    let matrix = CostMatrix::build(&source_chars, &target_chars, costs);

    Ok(enumerate(
        &source_chars,
        &target_chars,
        costs,
        &matrix,
        include_matches,
    ))
}

/// Backtrack a prebuilt matrix. The caller guarantees `matrix` was
/// built from exactly these sequences and costs.
pub(crate) fn enumerate(
    source: &[char],
    target: &[char],
    costs: &CostConfig,
    matrix: &CostMatrix,
    include_matches: bool,
) -> Vec<EditPath> {
    let mut backtracker = Backtracker {
        source,
        target,
        costs,
        matrix,
        include_matches,
        memo: FxHashMap::default(),
    };

    let full = backtracker.prefix_paths(source.len(), target.len());
    let paths = dedup_paths(&full);

    debug_assert!(
        !paths.is_empty(),
        "enumeration produced no paths; the pure delete+insert route always exists"
    );
    paths
}

/// Suppress duplicate full paths, retaining first-seen order.
fn dedup_paths(paths: &[EditPath]) -> Vec<EditPath> {
    let mut seen: FxHashSet<&EditPath> = FxHashSet::default();
    let mut unique = Vec::with_capacity(paths.len());
    for path in paths {
        if seen.insert(path) {
            unique.push(path.clone());
        }
    }
    unique
}

/// Per-call backtracking state: the memo maps a cell to the ordered
/// list of minimal paths transforming `source[..i]` into
/// `target[..j]`.
struct Backtracker<'a> {
    source: &'a [char],
    target: &'a [char],
    costs: &'a CostConfig,
    matrix: &'a CostMatrix,
    include_matches: bool,
    memo: FxHashMap<(usize, usize), Rc<Vec<EditPath>>>,
}

impl Backtracker<'_> {
    fn prefix_paths(&mut self, i: usize, j: usize) -> Rc<Vec<EditPath>> {
        if let Some(cached) = self.memo.get(&(i, j)) {
            return Rc::clone(cached);
        }

        let mut paths: Vec<EditPath> = Vec::new();

        if i == 0 && j == 0 {
            paths.push(Vec::new());
        } else {
            let here = self.matrix.get(i, j);

            // 1. Transpose from (i-2, j-2).
            if i >= 2
                && j >= 2
                && self.source[i - 1] == self.target[j - 2]
                && self.source[i - 2] == self.target[j - 1]
                && self.matrix.get(i - 2, j - 2) + self.costs.transpose == here
            {
                self.extend_branch(
                    &mut paths,
                    i - 2,
                    j - 2,
                    Some(EditOp::Transpose { source_index: i - 1 }),
                );
            }

            // 2. Diagonal from (i-1, j-1): match or replace.
            if i >= 1 && j >= 1 {
                let equal = self.source[i - 1] == self.target[j - 1];
                let sub = if equal { 0.0 } else { self.costs.replace };
                if self.matrix.get(i - 1, j - 1) + sub == here {
                    let op = if !equal {
                        Some(EditOp::Replace {
                            source_index: i - 1,
                            target_index: j - 1,
                        })
                    } else if self.include_matches {
                        Some(EditOp::Match { source_index: i - 1 })
                    } else {
                        None
                    };
                    self.extend_branch(&mut paths, i - 1, j - 1, op);
                }
            }

            // 3. Delete from (i-1, j).
            if i >= 1 && self.matrix.get(i - 1, j) + self.costs.delete == here {
                self.extend_branch(
                    &mut paths,
                    i - 1,
                    j,
                    Some(EditOp::Delete { source_index: i - 1 }),
                );
            }

            // 4. Insert from (i, j-1).
            if j >= 1 && self.matrix.get(i, j - 1) + self.costs.insert == here {
                self.extend_branch(
                    &mut paths,
                    i,
                    j - 1,
                    Some(EditOp::Insert {
                        target_index: j - 1,
                        element: self.target[j - 1],
                    }),
                );
            }
        }

        let paths = Rc::new(paths);
        self.memo.insert((i, j), Rc::clone(&paths));
        paths
    }

    /// Append `op` to every path reaching the predecessor cell and
    /// push the results onto `paths`.
    fn extend_branch(
        &mut self,
        paths: &mut Vec<EditPath>,
        pred_i: usize,
        pred_j: usize,
        op: Option<EditOp>,
    ) {
        let predecessors = self.prefix_paths(pred_i, pred_j);
        for prefix in predecessors.iter() {
            let mut path = prefix.clone();
            if let Some(op) = op {
                path.push(op);
            }
            paths.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::path_cost;

    fn unit_paths(source: &str, target: &str, include_matches: bool) -> Vec<EditPath> {
        enumerate_paths(source, target, &CostConfig::default(), include_matches).unwrap()
    }

    #[test]
    fn identical_strings_yield_one_path() {
        let paths = unit_paths("abc", "abc", false);
        assert_eq!(paths, vec![vec![]]);

        let with_matches = unit_paths("abc", "abc", true);
        assert_eq!(
            with_matches,
            vec![vec![
                EditOp::Match { source_index: 0 },
                EditOp::Match { source_index: 1 },
                EditOp::Match { source_index: 2 },
            ]]
        );
    }

    #[test]
    fn single_substitution_yields_one_path() {
        let paths = unit_paths("a", "b", false);
        assert_eq!(
            paths,
            vec![vec![EditOp::Replace {
                source_index: 0,
                target_index: 0
            }]]
        );
    }

    #[test]
    fn empty_pair_yields_the_empty_path() {
        assert_eq!(unit_paths("", "", false), vec![vec![]]);
        assert_eq!(unit_paths("", "", true), vec![vec![]]);
    }

    #[test]
    fn disjoint_strings_yield_one_replace_chain() {
        let paths = unit_paths("abc", "def", false);
        assert_eq!(paths.len(), 1);
        assert_eq!(
            paths[0],
            vec![
                EditOp::Replace {
                    source_index: 0,
                    target_index: 0
                },
                EditOp::Replace {
                    source_index: 1,
                    target_index: 1
                },
                EditOp::Replace {
                    source_index: 2,
                    target_index: 2
                },
            ]
        );
    }

    #[test]
    fn tie_yields_both_paths_in_canonical_order() {
        // "cab" -> "axb": replace-replace, or delete + insert around
        // the shared 'a'/'b'. Diagonal branches precede insert
        // branches, so the replace chain comes first.
        let paths = unit_paths("cab", "axb", false);
        assert_eq!(
            paths,
            vec![
                vec![
                    EditOp::Replace {
                        source_index: 0,
                        target_index: 0
                    },
                    EditOp::Replace {
                        source_index: 1,
                        target_index: 1
                    },
                ],
                vec![
                    EditOp::Delete { source_index: 0 },
                    EditOp::Insert {
                        target_index: 1,
                        element: 'x'
                    },
                ],
            ]
        );
    }

    #[test]
    fn transposition_branch_comes_first() {
        let paths = unit_paths("ab", "ba", false);
        assert_eq!(
            paths[0],
            vec![EditOp::Transpose { source_index: 1 }],
            "transpose precedes the replace chain in the canonical order"
        );
        // The double-replace route costs 2, not 1, so it is absent.
        assert_eq!(paths.len(), 1);
    }

    #[test]
    fn transpose_ties_with_other_routes_under_heavier_weight() {
        // At transpose 2.0 every two-edit route ties: the swap, the
        // double replace, and the two insert/delete orderings.
        let costs = CostConfig {
            transpose: 2.0,
            ..CostConfig::default()
        };
        let paths = enumerate_paths("ab", "ba", &costs, false).unwrap();
        assert_eq!(
            paths,
            vec![
                vec![EditOp::Transpose { source_index: 1 }],
                vec![
                    EditOp::Replace {
                        source_index: 0,
                        target_index: 0
                    },
                    EditOp::Replace {
                        source_index: 1,
                        target_index: 1
                    },
                ],
                vec![
                    EditOp::Insert {
                        target_index: 0,
                        element: 'b'
                    },
                    EditOp::Delete { source_index: 1 },
                ],
                vec![
                    EditOp::Delete { source_index: 0 },
                    EditOp::Insert {
                        target_index: 1,
                        element: 'a'
                    },
                ],
            ]
        );
    }

    #[test]
    fn insertion_site_ambiguity_enumerates_every_site() {
        // Inserting 'a' into "aa" can happen at three positions.
        let paths = unit_paths("aa", "aaa", false);
        assert_eq!(paths.len(), 3);
        for path in &paths {
            assert_eq!(path.len(), 1);
            assert!(matches!(path[0], EditOp::Insert { element: 'a', .. }));
        }
    }

    #[test]
    fn every_path_has_minimal_cost() {
        let costs = CostConfig::default();
        let distance = crate::distance::compute_distance("kitten", "sitting", &costs).unwrap();
        for path in enumerate_paths("kitten", "sitting", &costs, true).unwrap() {
            assert_eq!(path_cost(&path, &costs), distance);
        }
    }

    #[test]
    fn no_duplicate_paths() {
        for (a, b) in [("aaaa", "aa"), ("banana", "ananas"), ("cab", "axb")] {
            let paths = unit_paths(a, b, false);
            let mut seen = FxHashSet::default();
            for path in &paths {
                assert!(seen.insert(path.clone()), "duplicate path for {a} -> {b}");
            }
        }
    }

    #[test]
    fn match_ops_only_when_requested() {
        let without = unit_paths("abc", "abd", false);
        assert!(without
            .iter()
            .flatten()
            .all(|op| !matches!(op, EditOp::Match { .. })));

        let with = unit_paths("abc", "abd", true);
        assert_eq!(
            with,
            vec![vec![
                EditOp::Match { source_index: 0 },
                EditOp::Match { source_index: 1 },
                EditOp::Replace {
                    source_index: 2,
                    target_index: 2
                },
            ]]
        );
    }

    #[test]
    fn invalid_costs_are_rejected_before_backtracking() {
        let costs = CostConfig {
            insert: f64::INFINITY,
            ..CostConfig::default()
        };
        assert!(enumerate_paths("a", "b", &costs, false).is_err());
    }
}
