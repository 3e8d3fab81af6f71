//! Run-length encoded edit scripts.
use std::fmt::{self, Display, Write};
use std::slice;

use serde::{Serialize, Serializer};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum CigarOp {
    Match,
    Sub,
    /// A symbol of `b` that is not in `a`.
    Ins,
    /// A symbol of `a` that is not in `b`.
    Del,
}

impl CigarOp {
    pub fn to_char(&self) -> char {
        match self {
            CigarOp::Match => '=',
            CigarOp::Sub => 'X',
            CigarOp::Ins => 'I',
            CigarOp::Del => 'D',
        }
    }

    /// The number of symbols of `a` and `b` consumed by this operation.
    pub fn delta(&self) -> (usize, usize) {
        match self {
            CigarOp::Match | CigarOp::Sub => (1, 1),
            CigarOp::Ins => (0, 1),
            CigarOp::Del => (1, 0),
        }
    }

    /// Unit cost of the operation.
    pub fn cost(&self) -> usize {
        match self {
            CigarOp::Match => 0,
            CigarOp::Sub | CigarOp::Ins | CigarOp::Del => 1,
        }
    }

    fn new(self) -> CigarElem {
        CigarElem { op: self, cnt: 1 }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CigarElem {
    pub op: CigarOp,
    pub cnt: usize,
}

/// An edit script from `a` into `b`, as runs of equal operations.
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct Cigar {
    ops: Vec<CigarElem>,
}

impl Cigar {
    pub fn push(&mut self, command: CigarOp) {
        if let Some(s) = self.ops.last_mut() {
            if s.op == command {
                s.cnt += 1;
                return;
            }
        }
        self.ops.push(command.new());
    }

    /// Push `cnt` copies of `command`.
    pub fn push_run(&mut self, command: CigarOp, cnt: usize) {
        if cnt == 0 {
            return;
        }
        if let Some(s) = self.ops.last_mut() {
            if s.op == command {
                s.cnt += cnt;
                return;
            }
        }
        self.ops.push(CigarElem { op: command, cnt });
    }

    pub fn reverse(&mut self) {
        self.ops.reverse()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Total cost of all operations.
    pub fn cost(&self) -> usize {
        self.ops.iter().map(|e| e.op.cost() * e.cnt).sum()
    }

    /// Iterate single operations together with the position `(i, j)` in
    /// `a` and `b` they apply to.
    pub fn ops(&self) -> impl Iterator<Item = (CigarOp, usize, usize)> + '_ {
        let mut pos = (0, 0);
        self.ops
            .iter()
            .flat_map(|e| std::iter::repeat(e.op).take(e.cnt))
            .map(move |op| {
                let (i, j) = pos;
                let (di, dj) = op.delta();
                pos = (i + di, j + dj);
                (op, i, j)
            })
    }

    /// Checks that this edit script transforms `a` into `b` and returns its cost.
    ///
    /// Panics when the script is inconsistent with the sequences.
    pub fn verify<T: PartialEq>(&self, a: &[T], b: &[T]) -> usize {
        let mut end = (0, 0);
        for (op, i, j) in self.ops() {
            match op {
                CigarOp::Match => {
                    assert!(i < a.len() && j < b.len(), "match out of bounds at ({i}, {j})");
                    assert!(a[i] == b[j], "match of unequal symbols at ({i}, {j})");
                }
                CigarOp::Sub => {
                    assert!(i < a.len() && j < b.len(), "substitution out of bounds at ({i}, {j})");
                    assert!(a[i] != b[j], "substitution of equal symbols at ({i}, {j})");
                }
                CigarOp::Ins => assert!(j < b.len(), "insertion out of bounds at {j}"),
                CigarOp::Del => assert!(i < a.len(), "deletion out of bounds at {i}"),
            }
            let (di, dj) = op.delta();
            end = (i + di, j + dj);
        }
        assert_eq!(end, (a.len(), b.len()), "edit script does not cover both sequences");
        self.cost()
    }
}

impl Display for Cigar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for elem in &self.ops {
            write!(f, "{}", elem.cnt)?;
            f.write_char(elem.op.to_char())?;
        }
        Ok(())
    }
}

impl Serialize for Cigar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'a> IntoIterator for &'a Cigar {
    type Item = &'a CigarElem;

    type IntoIter = slice::Iter<'a, CigarElem>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CigarOp::*;

    fn cigar(ops: &[CigarOp]) -> Cigar {
        let mut c = Cigar::default();
        for &op in ops {
            c.push(op);
        }
        c
    }

    #[test]
    fn push_merges_runs() {
        let c = cigar(&[Match, Match, Sub, Ins, Ins, Ins, Match]);
        assert_eq!(c.to_string(), "2=1X3I1=");
        assert_eq!(c.into_iter().count(), 4);
        assert_eq!(c.cost(), 4);
    }

    #[test]
    fn push_run() {
        let mut c = Cigar::default();
        c.push_run(Del, 0);
        assert!(c.is_empty());
        c.push_run(Del, 2);
        c.push(Del);
        c.push_run(Match, 3);
        assert_eq!(c.to_string(), "3D3=");
    }

    #[test]
    fn positions() {
        let c = cigar(&[Ins, Match, Del, Sub]);
        assert_eq!(
            c.ops().collect::<Vec<_>>(),
            vec![(Ins, 0, 0), (Match, 0, 1), (Del, 1, 2), (Sub, 2, 2)]
        );
    }

    #[test]
    fn verify() {
        let c = cigar(&[Match, Sub, Del, Match, Ins]);
        assert_eq!(c.verify(b"abxd", b"aCdE"), 3);
    }

    #[test]
    #[should_panic]
    fn verify_short() {
        cigar(&[Match]).verify(b"ab", b"ab");
    }

    #[test]
    #[should_panic]
    fn verify_bad_match() {
        cigar(&[Match]).verify(b"a", b"b");
    }

    #[test]
    fn serialize_as_string() {
        let c = cigar(&[Match, Match, Del]);
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"2=1D\"");
    }
}
