//!
//! # Levenshtein distance with edit statistics
//!
//! This crate computes the edit distance between two sequences and, when
//! asked, which substitutions, insertions and deletions an optimal alignment
//! uses. It can be used in a few ways:
//! - Call one of the four text level functions below: character or word
//!   level, with or without edit statistics.
//! - Create a `Levenshtein` `Aligner` for arbitrary symbol slices, optionally
//!   with a narrower or wider counter type than the default `u32`.
//! - Configure a run with `AlignParams`, as the binary does.
//!
//! Distance-only calls use a single DP row. Calls that reconstruct the edits
//! fill the full `(|a|+1) x (|b|+1)` matrix and trace back through it.
//!

pub mod aligners;
pub mod cigar;
pub mod config;
pub mod cost;
pub mod edit_stats;
pub mod error;
pub mod tokens;

#[cfg(any(test, feature = "cli"))]
pub mod generate;

#[cfg(feature = "cli")]
pub mod cli;


pub mod prelude {
    pub use crate::aligners::{Aligner, Alignment, Levenshtein};
    pub use crate::cigar::{Cigar, CigarOp};
    pub use crate::config::{AlignParams, CounterWidth};
    pub use crate::cost::{Cost, Counter};
    pub use crate::edit_stats::EditStats;
    pub use crate::error::{Error, Result};
    pub use crate::tokens::{tokenize_and_hash, TokenCodes};
}

pub use aligners::{Aligner, Alignment, Levenshtein};
pub use edit_stats::EditStats;
pub use error::{Error, Result};

const DEFAULT: Levenshtein = Levenshtein::new();

/// Edit distance between the Unicode code points of `a` and `b`.
pub fn char_distance(a: &str, b: &str) -> Result<usize> {
    DEFAULT.char_distance(a, b)
}

/// Character level distance together with the edits of an optimal alignment.
pub fn char_align(a: &str, b: &str) -> Result<(usize, EditStats)> {
    DEFAULT.char_align(a, b)
}

/// Edit distance between the whitespace separated words of `a` and `b`.
pub fn word_distance(a: &str, b: &str) -> Result<usize> {
    DEFAULT.word_distance(a, b)
}

/// Word level distance together with the edits of an optimal alignment.
pub fn word_align(a: &str, b: &str) -> Result<(usize, EditStats)> {
    DEFAULT.word_align(a, b)
}
