//! Backtracking through a filled `CostMatrix`.
//!
//! When several optimal paths exist, the path that is reported is fixed by
//! [`PRIORITY`]: substitutions are preferred over separate insertion and
//! deletion pairs, and deletions over insertions.
use log::trace;

use super::matrix::CostMatrix;
use crate::cigar::{Cigar, CigarOp};
use crate::cost::Counter;

/// A step from cell `(i, j)` back to one of its predecessors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Step {
    /// To `(i-1, j-1)`: a match or a substitution.
    Diagonal,
    /// To `(i-1, j)`.
    Deletion,
    /// To `(i, j-1)`.
    Insertion,
}

/// Steps in order of preference.
pub const PRIORITY: [Step; 3] = [Step::Diagonal, Step::Deletion, Step::Insertion];

/// Picks the first step in `PRIORITY` whose cost is no larger than the cost
/// of every step after it.
pub fn choose_step<C: Ord + Copy>(cost: impl Fn(Step) -> C) -> Step {
    let costs = PRIORITY.map(|step| (step, cost(step)));
    // The last step always qualifies.
    costs
        .iter()
        .enumerate()
        .find(|&(k, &(_, c))| costs[k + 1..].iter().all(|&(_, later)| c <= later))
        .map_or(PRIORITY[PRIORITY.len() - 1], |(_, &(step, _))| step)
}

/// Recover the edit script of an optimal alignment from the filled matrix `d`.
pub fn trace<T: PartialEq, C: Counter>(d: &CostMatrix<C>, a: &[T], b: &[T]) -> Cigar {
    debug_assert_eq!((d.rows(), d.cols()), (a.len() + 1, b.len() + 1));
    let one = C::one();
    let mut cigar = Cigar::default();
    let mut i = a.len();
    let mut j = b.len();

    while i > 0 && j > 0 {
        let matches = a[i - 1] == b[j - 1];
        let s = if matches { C::zero() } else { one };
        let step = choose_step(|step| match step {
            Step::Diagonal => d[(i - 1, j - 1)] + s,
            Step::Deletion => d[(i - 1, j)] + one,
            Step::Insertion => d[(i, j - 1)] + one,
        });
        match step {
            Step::Diagonal => {
                cigar.push(if matches { CigarOp::Match } else { CigarOp::Sub });
                i -= 1;
                j -= 1;
            }
            Step::Deletion => {
                cigar.push(CigarOp::Del);
                i -= 1;
            }
            Step::Insertion => {
                cigar.push(CigarOp::Ins);
                j -= 1;
            }
        }
    }

    // At most one of the prefixes a[..i] and b[..j] is left.
    cigar.push_run(CigarOp::Del, i);
    cigar.push_run(CigarOp::Ins, j);

    cigar.reverse();
    trace!("traced {cigar}");
    cigar
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cost_of(costs: [u32; 3]) -> impl Fn(Step) -> u32 {
        move |step| match step {
            Step::Diagonal => costs[0],
            Step::Deletion => costs[1],
            Step::Insertion => costs[2],
        }
    }

    #[test]
    fn diagonal_wins_ties() {
        assert_eq!(choose_step(cost_of([1, 1, 1])), Step::Diagonal);
        assert_eq!(choose_step(cost_of([2, 2, 3])), Step::Diagonal);
        assert_eq!(choose_step(cost_of([2, 3, 2])), Step::Diagonal);
    }

    #[test]
    fn deletion_beats_insertion() {
        assert_eq!(choose_step(cost_of([3, 2, 2])), Step::Deletion);
        assert_eq!(choose_step(cost_of([3, 1, 2])), Step::Deletion);
    }

    #[test]
    fn insertion_last() {
        assert_eq!(choose_step(cost_of([3, 3, 2])), Step::Insertion);
        assert_eq!(choose_step(cost_of([2, 5, 1])), Step::Insertion);
    }

    fn trace_str(a: &str, b: &str) -> String {
        let a = a.chars().collect::<Vec<_>>();
        let b = b.chars().collect::<Vec<_>>();
        let d = CostMatrix::<u32>::new(&a, &b);
        let cigar = trace(&d, &a, &b);
        assert_eq!(cigar.verify(&a, &b), d.distance() as usize);
        cigar.to_string()
    }

    #[test]
    fn substitutions() {
        assert_eq!(trace_str("hello", "heIIa"), "2=3X");
    }

    #[test]
    fn prefix_flushes() {
        assert_eq!(trace_str("hello", "nnnnnnnhello"), "7I5=");
        assert_eq!(trace_str("xxab", "ab"), "2D2=");
        assert_eq!(trace_str("", "ab"), "2I");
        assert_eq!(trace_str("ab", ""), "2D");
    }

    #[test]
    fn prefers_substitution_over_indels() {
        // "2X", "1D1=1I" and "1I1=1D" all cost 2 for "ab" -> "ba".
        assert_eq!(trace_str("a", "b"), "1X");
        assert_eq!(trace_str("ab", "ba"), "2X");
    }

    #[test]
    fn indels() {
        // Deleting either 'a' is optimal; the last one is matched diagonally.
        assert_eq!(trace_str("aa", "a"), "1D1=");
        assert_eq!(trace_str("abc", "cab"), "1I2=1D");
        assert_eq!(trace_str("cab", "abc"), "1D2=1I");
    }
}
