//! The OSA dynamic-programming cost table.

use crate::cost::CostConfig;

/// The `(m+1) × (n+1)` table of minimal transformation costs.
///
/// `get(i, j)` is the minimal total cost of transforming the first `i`
/// source elements into the first `j` target elements under the active
/// [`CostConfig`] and the OSA transposition restriction. The table is
/// built once per (source, target, costs) triple and is immutable
/// thereafter; the final cell is the OSA distance.
///
/// Stored row-major in a flat `Vec<f64>`.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl CostMatrix {
    /// Fill the table for `source` and `target`.
    ///
    /// `costs` must already be validated; every entry point runs
    /// [`CostConfig::validate`] first.
    pub fn build(source: &[char], target: &[char], costs: &CostConfig) -> Self {
        let m = source.len();
        let n = target.len();
        let mut matrix = Self {
            rows: m + 1,
            cols: n + 1,
            cells: vec![0.0; (m + 1) * (n + 1)],
        };

        // Borders: pure deletions down column 0, pure insertions
        // along row 0.
        for i in 1..=m {
            matrix.set(i, 0, i as f64 * costs.delete);
        }
        for j in 1..=n {
            matrix.set(0, j, j as f64 * costs.insert);
        }

        for i in 1..=m {
            for j in 1..=n {
                let sub = if source[i - 1] == target[j - 1] {
                    0.0
                } else {
                    costs.replace
                };

                let mut candidate = (matrix.get(i - 1, j) + costs.delete)
                    .min(matrix.get(i, j - 1) + costs.insert)
                    .min(matrix.get(i - 1, j - 1) + sub);

                // OSA restriction: the transposition is one atomic
                // jump from (i-2, j-2), never chained with another
                // edit touching the same pair.
                if i >= 2
                    && j >= 2
                    && source[i - 1] == target[j - 2]
                    && source[i - 2] == target[j - 1]
                {
                    candidate = candidate.min(matrix.get(i - 2, j - 2) + costs.transpose);
                }

                matrix.set(i, j, candidate);
            }
        }

        matrix
    }

    /// Number of rows (source length + 1).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (target length + 1).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cost at cell `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows && j < self.cols, "cell out of range");
        self.cells[i * self.cols + j]
    }

    /// The final cell: the OSA distance for the pair the table was
    /// built from.
    pub fn distance(&self) -> f64 {
        self.cells[self.cells.len() - 1]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: f64) {
        self.cells[i * self.cols + j] = value;
    }
}
