use std::collections::BTreeMap;
use std::fmt::Display;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::cigar::{Cigar, CigarOp};

/// Number of substitutions, insertions and deletions on an optimal path,
/// keyed by the symbols involved.
///
/// Insertions and deletions are keyed by the inserted or deleted symbol.
/// Substitutions are keyed by the symbol of `a` directly followed by the
/// symbol of `b` it was replaced with.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditStats {
    pub subs: BTreeMap<String, usize>,
    pub ins: BTreeMap<String, usize>,
    pub dels: BTreeMap<String, usize>,
}

impl EditStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the edits of `cigar`. `key_a(i)` and `key_b(j)` render the
    /// symbols at position `i` of `a` and `j` of `b`.
    pub fn from_cigar<KA: Display, KB: Display>(
        cigar: &Cigar,
        key_a: impl Fn(usize) -> KA,
        key_b: impl Fn(usize) -> KB,
    ) -> Self {
        let mut stats = Self::new();
        for (op, i, j) in cigar.ops() {
            match op {
                CigarOp::Match => {}
                CigarOp::Sub => bump(&mut stats.subs, format!("{}{}", key_a(i), key_b(j))),
                CigarOp::Ins => bump(&mut stats.ins, key_b(j).to_string()),
                CigarOp::Del => bump(&mut stats.dels, key_a(i).to_string()),
            }
        }
        stats
    }

    /// Total number of edits. Equals the distance of the alignment the stats
    /// were collected from.
    pub fn total(&self) -> usize {
        [&self.subs, &self.ins, &self.dels]
            .into_iter()
            .flat_map(|m| m.values())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.subs.is_empty() && self.ins.is_empty() && self.dels.is_empty()
    }
}

fn bump(map: &mut BTreeMap<String, usize>, key: String) {
    *map.entry(key).or_insert(0) += 1;
}

fn merge(into: &mut BTreeMap<String, usize>, from: BTreeMap<String, usize>) {
    for (key, cnt) in from {
        *into.entry(key).or_insert(0) += cnt;
    }
}

impl AddAssign for EditStats {
    fn add_assign(&mut self, rhs: Self) {
        merge(&mut self.subs, rhs.subs);
        merge(&mut self.ins, rhs.ins);
        merge(&mut self.dels, rhs.dels);
    }
}
