use std::any::type_name;
use std::fmt::Display;
use std::marker::PhantomData;

use itertools::Itertools;
use log::debug;
use serde::Serialize;

use super::matrix::CostMatrix;
use super::trace::trace;
use super::{row, Aligner};
use crate::cigar::{Cigar, CigarOp};
use crate::cost::{check_capacity, Cost, Counter};
use crate::edit_stats::EditStats;
use crate::error::Result;
use crate::tokens::tokenize_and_hash;

/// Needleman-Wunsch with unit costs, storing cells in counter type `C`.
///
/// `cost` keeps a single row. `align` fills the full matrix and traces back
/// through it, using `O(|a| * |b|)` memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Levenshtein<C = Cost> {
    counter: PhantomData<C>,
}

impl<C> Levenshtein<C> {
    pub const fn new() -> Self {
        Self {
            counter: PhantomData,
        }
    }
}

impl<C> Default for Levenshtein<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Counter> Aligner for Levenshtein<C> {
    fn cost<T: PartialEq>(&self, a: &[T], b: &[T]) -> Result<usize> {
        row::distance::<T, C>(a, b)
    }

    fn align<T: PartialEq>(&self, a: &[T], b: &[T]) -> Result<(usize, Cigar)> {
        let mut cigar = Cigar::default();
        if a.is_empty() {
            cigar.push_run(CigarOp::Ins, b.len());
            return Ok((b.len(), cigar));
        }
        if b.is_empty() {
            cigar.push_run(CigarOp::Del, a.len());
            return Ok((a.len(), cigar));
        }
        check_capacity::<C>(a.len(), b.len())?;

        debug!(
            "filling {}x{} matrix of {}",
            a.len() + 1,
            b.len() + 1,
            type_name::<C>()
        );
        let d = CostMatrix::<C>::new(a, b);
        let cigar = trace(&d, a, b);
        Ok((d.distance().to_index(), cigar))
    }
}

/// The result of aligning two texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alignment {
    pub distance: usize,
    pub cigar: Cigar,
    pub stats: EditStats,
}

impl<C: Counter> Levenshtein<C> {
    /// Distance and edit statistics, keying symbols by their `Display` form.
    pub fn align_stats<T: PartialEq + Display>(&self, a: &[T], b: &[T]) -> Result<(usize, EditStats)> {
        let (distance, cigar) = self.align(a, b)?;
        Ok((distance, EditStats::from_cigar(&cigar, |i| &a[i], |j| &b[j])))
    }

    /// Distance between the Unicode code points of `a` and `b`.
    pub fn char_distance(&self, a: &str, b: &str) -> Result<usize> {
        self.cost(&a.chars().collect_vec(), &b.chars().collect_vec())
    }

    pub fn char_alignment(&self, a: &str, b: &str) -> Result<Alignment> {
        let a = a.chars().collect_vec();
        let b = b.chars().collect_vec();
        let (distance, cigar) = self.align(&a, &b)?;
        let stats = EditStats::from_cigar(&cigar, |i| a[i], |j| b[j]);
        Ok(Alignment {
            distance,
            cigar,
            stats,
        })
    }

    pub fn char_align(&self, a: &str, b: &str) -> Result<(usize, EditStats)> {
        let Alignment { distance, stats, .. } = self.char_alignment(a, b)?;
        Ok((distance, stats))
    }

    /// Distance between the whitespace separated words of `a` and `b`.
    pub fn word_distance(&self, a: &str, b: &str) -> Result<usize> {
        self.cost(&tokenize_and_hash(a).codes, &tokenize_and_hash(b).codes)
    }

    /// Word level alignment. Edit statistics are keyed by the words, resolved
    /// through the reverse map of the side they come from.
    pub fn word_alignment(&self, a: &str, b: &str) -> Result<Alignment> {
        let a = tokenize_and_hash(a);
        let b = tokenize_and_hash(b);
        let (distance, cigar) = self.align(&a.codes, &b.codes)?;
        let stats = EditStats::from_cigar(&cigar, |i| a.render(i), |j| b.render(j));
        Ok(Alignment {
            distance,
            cigar,
            stats,
        })
    }

    pub fn word_align(&self, a: &str, b: &str) -> Result<(usize, EditStats)> {
        let Alignment { distance, stats, .. } = self.word_alignment(a, b)?;
        Ok((distance, stats))
    }
}
