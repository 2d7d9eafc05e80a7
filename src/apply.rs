//! Replaying edit paths against a source sequence.

use smallvec::SmallVec;

use crate::error::MismatchError;
use crate::ops::{EditOp, EditPath};

/// Replay `path` against `source` and check the result against
/// `target`.
///
/// Ops are applied left to right against a growing output buffer and a
/// read cursor into the source. Op indices refer to the original
/// sequences, so matched elements omitted from the path (the
/// `include_matches = false` mode of the enumerator) are implied by
/// the gaps between consecutive op positions: the replay copies those
/// elements before applying each op, and copies the remaining source
/// tail after the last op. Explicit [`EditOp::Match`] ops copy one
/// element each and leave no gap.
///
/// The replay succeeds only when the buffer equals the target. A path
/// produced by [`crate::paths::enumerate_paths`] for the same
/// (source, target, costs) always succeeds, in either match-emission
/// mode; the error cases exist for validating externally supplied
/// paths.
///
/// # Errors
///
/// [`MismatchError`] carrying the point of divergence.
///
/// # Example
///
/// ```rust
/// use libosa::apply::apply_edit_path;
/// use libosa::ops::EditOp;
///
/// // "abc" -> "bac": swap the first pair; the trailing 'c' is an
/// // implied match.
/// let path = vec![EditOp::Transpose { source_index: 1 }];
/// assert_eq!(apply_edit_path("abc", "bac", &path).unwrap(), "bac");
/// ```
pub fn apply_edit_path(
    source: &str,
    target: &str,
    path: &EditPath,
) -> Result<String, MismatchError> {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let mut output: Vec<char> = Vec::with_capacity(target_chars.len());
    let mut cursor = 0usize;

    for (op_index, op) in path.iter().enumerate() {
        // Where the implied matches before this op end.
        let resume_at = match *op {
            EditOp::Match { source_index }
            | EditOp::Delete { source_index }
            | EditOp::Replace { source_index, .. } => source_index,
            EditOp::Transpose { source_index } => source_index
                .checked_sub(1)
                .ok_or(MismatchError::MisorderedOp { op_index })?,
            // An insert names no source position; its target position
            // pins how much output precedes it.
            EditOp::Insert { target_index, .. } => {
                let implied = target_index
                    .checked_sub(output.len())
                    .ok_or(MismatchError::MisorderedOp { op_index })?;
                cursor + implied
            }
        };

        if resume_at < cursor {
            return Err(MismatchError::MisorderedOp { op_index });
        }
        if resume_at > source_chars.len() {
            return Err(MismatchError::SourceOverrun { op_index });
        }
        output.extend_from_slice(&source_chars[cursor..resume_at]);
        cursor = resume_at;

        let overrun = MismatchError::SourceOverrun { op_index };
        match *op {
            EditOp::Match { .. } => {
                let element = *source_chars.get(cursor).ok_or(overrun)?;
                output.push(element);
                cursor += 1;
            }
            EditOp::Replace { target_index, .. } => {
                if cursor >= source_chars.len() {
                    return Err(overrun);
                }
                let element = *target_chars.get(target_index).ok_or(overrun)?;
                output.push(element);
                cursor += 1;
            }
            EditOp::Delete { .. } => {
                if cursor >= source_chars.len() {
                    return Err(overrun);
                }
                cursor += 1;
            }
            EditOp::Insert { element, .. } => {
                output.push(element);
            }
            EditOp::Transpose { .. } => {
                if cursor + 1 >= source_chars.len() {
                    return Err(overrun);
                }
                output.push(source_chars[cursor + 1]);
                output.push(source_chars[cursor]);
                cursor += 2;
            }
        }
    }

    // Trailing implied matches.
    output.extend_from_slice(&source_chars[cursor..]);

    if let Some(index) = divergence_index(&output, &target_chars) {
        return Err(MismatchError::TargetDivergence {
            index,
            produced: output.get(index).copied(),
            expected: target_chars.get(index).copied(),
        });
    }

    Ok(output.into_iter().collect())
}

/// Does `path` transform `source` into `target`?
///
/// Equivalent to `apply_edit_path(source, target, path).is_ok()`.
pub fn validate(source: &str, target: &str, path: &EditPath) -> bool {
    apply_edit_path(source, target, path).is_ok()
}

/// First position where the two sequences disagree, or the shorter
/// length when one is a proper prefix of the other.
fn divergence_index(produced: &[char], expected: &[char]) -> Option<usize> {
    for (index, (a, b)) in produced.iter().zip(expected.iter()).enumerate() {
        if a != b {
            return Some(index);
        }
    }
    if produced.len() != expected.len() {
        return Some(produced.len().min(expected.len()));
    }
    None
}
