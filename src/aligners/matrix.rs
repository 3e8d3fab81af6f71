use std::cmp::min;
use std::ops::Index;

use crate::cost::Counter;

/// The full `(a.len() + 1) x (b.len() + 1)` DP table.
///
/// Cell `(i, j)` holds the edit distance between `a[..i]` and `b[..j]`.
/// Stored row-major in a single allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix<C> {
    rows: usize,
    cols: usize,
    cells: Vec<C>,
}

impl<C: Counter> CostMatrix<C> {
    /// Fill the matrix for `a` and `b`.
    /// The caller must have checked the counter capacity for these lengths.
    pub fn new<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let one = C::one();
        let mut cells = vec![C::zero(); rows * cols];

        for j in 0..cols {
            cells[j] = C::from_index(j);
        }
        for i in 1..rows {
            let (prev, next) = cells[(i - 1) * cols..(i + 1) * cols].split_at_mut(cols);
            next[0] = C::from_index(i);
            let ca = &a[i - 1];
            for (j0, cb) in b.iter().enumerate() {
                let j = j0 + 1;
                let s = if ca == cb { C::zero() } else { one };
                next[j] = min(min(prev[j] + one, next[j - 1] + one), prev[j - 1] + s);
            }
        }

        Self { rows, cols, cells }
    }

    /// The distance between the full sequences.
    pub fn distance(&self) -> C {
        self[(self.rows - 1, self.cols - 1)]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

impl<C> Index<(usize, usize)> for CostMatrix<C> {
    type Output = C;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &C {
        debug_assert!(i < self.rows && j < self.cols);
        &self.cells[i * self.cols + j]
    }
}
