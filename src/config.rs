//! This module contains constants and the parameters of a run.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::aligners::{Alignment, Levenshtein};
use crate::cigar::Cigar;
use crate::cost::Counter;
use crate::edit_stats::EditStats;
use crate::error::Result;

/// Alphabet of generated input sequences.
pub const ALPHABET: [u8; 4] = *b"ACGT";

/// Integer type used for the cells of the DP row and matrix.
///
/// Narrower counters use less memory for the full matrix, but limit the
/// length of the inputs: sequences must be shorter than the counter's maximum.
#[derive(ValueEnum, Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CounterWidth {
    U16,
    #[default]
    U32,
    U64,
}

#[derive(Parser, Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
#[clap(next_help_heading = "Alignment")]
pub struct AlignParams {
    /// Compare whitespace separated words instead of characters.
    #[clap(short, long)]
    pub words: bool,

    /// Reconstruct an optimal alignment and report its edits.
    #[clap(long)]
    pub stats: bool,

    /// Counter type used for the DP cells.
    #[clap(long, value_enum, default_value_t, value_name = "WIDTH")]
    pub counter: CounterWidth,
}

/// The output of one pair. `cigar` and `stats` are only set when the
/// alignment was reconstructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairResult {
    pub distance: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cigar: Option<Cigar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<EditStats>,
}

impl From<Alignment> for PairResult {
    fn from(alignment: Alignment) -> Self {
        Self {
            distance: alignment.distance,
            cigar: Some(alignment.cigar),
            stats: Some(alignment.stats),
        }
    }
}

impl AlignParams {
    /// Align `a` and `b` with these parameters.
    pub fn run(&self, a: &str, b: &str) -> Result<PairResult> {
        match self.counter {
            CounterWidth::U16 => self.run_with(Levenshtein::<u16>::new(), a, b),
            CounterWidth::U32 => self.run_with(Levenshtein::<u32>::new(), a, b),
            CounterWidth::U64 => self.run_with(Levenshtein::<u64>::new(), a, b),
        }
    }

    fn run_with<C: Counter>(&self, aligner: Levenshtein<C>, a: &str, b: &str) -> Result<PairResult> {
        let distance_only = |distance| PairResult {
            distance,
            cigar: None,
            stats: None,
        };
        Ok(match (self.words, self.stats) {
            (false, false) => distance_only(aligner.char_distance(a, b)?),
            (true, false) => distance_only(aligner.word_distance(a, b)?),
            (false, true) => aligner.char_alignment(a, b)?.into(),
            (true, true) => aligner.word_alignment(a, b)?.into(),
        })
    }
}
