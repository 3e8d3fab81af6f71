//! Cost-only computation in linear memory.
use std::cmp::min;

use crate::cost::{check_capacity, Counter};
use crate::error::Result;

/// Edit distance between `a` and `b` using a single row of counters.
///
/// The row runs over the shorter of the two sequences, since the distance is
/// symmetric. Only the distance is kept: which predecessor was chosen is lost,
/// so no edit script can be recovered from this.
pub fn distance<T: PartialEq, C: Counter>(a: &[T], b: &[T]) -> Result<usize> {
    if a.is_empty() {
        return Ok(b.len());
    }
    if b.is_empty() {
        return Ok(a.len());
    }
    check_capacity::<C>(a.len(), b.len())?;

    let (a, b) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let n = a.len();
    let one = C::one();

    // row[j] is the distance between the current prefix of `b` and a[..j].
    let mut row: Vec<C> = (0..=n).map(C::from_index).collect();
    for (i0, cb) in b.iter().enumerate() {
        // `prev` is the cell left of the one being computed, in the new row.
        // row[j] still holds the previous row until it is overwritten, so
        // row[j - 1] is the diagonal and row[j] is the cell above.
        let mut prev = C::from_index(i0 + 1);
        for (j0, ca) in a.iter().enumerate() {
            let current = if cb == ca {
                row[j0]
            } else {
                min(min(row[j0], prev), row[j0 + 1]) + one
            };
            row[j0] = prev;
            prev = current;
        }
        row[n] = prev;
    }
    Ok(row[n].to_index())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn d(a: &str, b: &str) -> usize {
        distance::<_, u32>(&chars(a), &chars(b)).unwrap()
    }

    #[test]
    fn base_cases() {
        assert_eq!(d("", ""), 0);
        assert_eq!(d("", "hello"), 5);
        assert_eq!(d("hello", ""), 5);
    }

    #[test]
    fn simple() {
        assert_eq!(d("hello", "hello"), 0);
        assert_eq!(d("ab", "aa"), 1);
        assert_eq!(d("ab", "aaa"), 2);
        assert_eq!(d("bbb", "a"), 3);
        assert_eq!(d("kitten", "sitting"), 3);
        assert_eq!(d("sitting", "kitten"), 3);
        assert_eq!(d("distance", "difference"), 5);
        assert_eq!(d("levenshtein", "frankenstein"), 6);
    }

    #[test]
    fn narrow_counter() {
        let a = vec![0u8; 300];
        let b = vec![1u8; 200];
        assert_eq!(distance::<_, u16>(&a, &b), Ok(300));
        assert_eq!(
            distance::<_, u8>(&a, &b),
            Err(Error::CounterOverflow { len: 300, max: 255 })
        );
        // Empty inputs never touch the counter.
        assert_eq!(distance::<_, u8>(&a, &[]), Ok(300));
    }
}
