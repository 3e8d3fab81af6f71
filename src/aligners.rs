//! This module contains the Levenshtein aligners.

use crate::cigar::Cigar;
use crate::error::Result;

mod matrix;
mod row;

pub mod nw;
pub mod trace;

pub use matrix::CostMatrix;
pub use nw::{Alignment, Levenshtein};
pub use row::distance;

/// An aligner is a type that supports aligning sequences using some algorithm.
/// The cost-only variant can be implemented using less memory.
///
/// Note that insertions are symbols of `b` that are not in `a`, and deletions
/// are symbols of `a` that are not in `b`.
pub trait Aligner {
    /// Finds the cost of aligning `a` and `b`.
    fn cost<T: PartialEq>(&self, a: &[T], b: &[T]) -> Result<usize>;

    /// Finds the cost and an optimal edit script transforming `a` into `b`.
    fn align<T: PartialEq>(&self, a: &[T], b: &[T]) -> Result<(usize, Cigar)>;
}
