//! Distance entry points.
//!
//! Two implementation styles are available:
//! - [`osa_distance`]: unit costs, space-optimized to three rotating
//!   rows, returns an edit count.
//! - [`compute_distance`]: arbitrary [`CostConfig`] weights, builds the
//!   full [`CostMatrix`] and reads its final cell.
//!
//! Both follow the same recurrence and agree exactly on unit costs.

use smallvec::SmallVec;

use crate::cost::CostConfig;
use crate::error::InvalidCostError;
use crate::matrix::CostMatrix;

/// Compute the unit-cost OSA distance between two strings.
///
/// Optimal String Alignment distance extends Levenshtein distance with
/// adjacent transposition as a single edit, restricted so a transposed
/// pair is never edited again. Elements are compared by exact `char`
/// equality; no Unicode normalization is applied.
///
/// # Example
///
/// ```rust
/// use libosa::distance::osa_distance;
///
/// assert_eq!(osa_distance("kitten", "sitting"), 3);
/// assert_eq!(osa_distance("test", "tset"), 1); // one transposition
/// assert_eq!(osa_distance("ab", "ba"), 1);
/// ```
pub fn osa_distance(source: &str, target: &str) -> usize {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Three rotating rows: transposition reaches back two rows.
    let mut two_ago = vec![0; n + 1];
    let mut prev_row = vec![0; n + 1];
    let mut curr_row = vec![0; n + 1];

    for (j, item) in prev_row.iter_mut().enumerate() {
        *item = j;
    }

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = if source_chars[i - 1] == target_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution

            if i > 1
                && j > 1
                && source_chars[i - 1] == target_chars[j - 2]
                && source_chars[i - 2] == target_chars[j - 1]
            {
                curr_row[j] = curr_row[j].min(two_ago[j - 2] + 1);
            }
        }

        std::mem::swap(&mut two_ago, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Compute the weighted OSA distance between two strings.
///
/// Builds the full cost table for the pair and returns its final
/// cell. Identical strings cost exactly 0.0 regardless of weights;
/// the empty pair costs 0.0.
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
/// use libosa::distance::compute_distance;
///
/// let costs = CostConfig::default();
/// assert_eq!(compute_distance("kitten", "sitting", &costs).unwrap(), 3.0);
/// assert_eq!(compute_distance("abc", "abc", &costs).unwrap(), 0.0);
/// ```
pub fn compute_distance(
    source: &str,
    target: &str,
    costs: &CostConfig,
) -> Result<f64, InvalidCostError> {
    costs.validate()?;

    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    Ok(CostMatrix::build(&source_chars, &target_chars, costs).distance())
}
