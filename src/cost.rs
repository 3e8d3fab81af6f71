//! Counter types used for the cells of the DP row and matrix.
//!
//! The engines are generic over the counter so that callers can trade memory
//! density for range. Narrow counters are only ever used after
//! [`check_capacity`] has verified that no cell can exceed their range.
use std::cmp::max;
use std::fmt::Debug;

use num_traits::{PrimInt, Unsigned};

use crate::error::{Error, Result};

/// Type for storing costs. Not u64 to save on memory.
pub type Cost = u32;

/// An unsigned integer that can hold a cell of the cost matrix.
pub trait Counter: PrimInt + Unsigned + Debug + Send + Sync + 'static {
    /// Converts a sequence index into a counter.
    /// Only valid for indices that passed [`check_capacity`].
    fn from_index(i: usize) -> Self;

    fn to_index(self) -> usize;
}

macro_rules! impl_counter {
    ($($t:ty),*) => {
        $(
            impl Counter for $t {
                #[inline(always)]
                fn from_index(i: usize) -> Self {
                    i as $t
                }

                #[inline(always)]
                fn to_index(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_counter!(u8, u16, u32, u64, usize);

/// Checks that aligning sequences of the given lengths cannot overflow `C`.
///
/// Cell `(i, j)` of the cost matrix is at most `max(i, j)`, and the
/// recurrence adds one to a cell before taking the minimum. Requiring the
/// longest sequence to be strictly below `C::MAX` thus rules out wrapping.
pub fn check_capacity<C: Counter>(len_a: usize, len_b: usize) -> Result<()> {
    let len = max(len_a, len_b);
    match C::max_value().to_usize() {
        Some(cap) if len >= cap => Err(Error::CounterOverflow {
            len,
            max: cap as u64,
        }),
        // The counter can represent every usize.
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_u8() {
        assert_eq!(check_capacity::<u8>(254, 3), Ok(()));
        assert_eq!(
            check_capacity::<u8>(3, 255),
            Err(Error::CounterOverflow { len: 255, max: 255 })
        );
    }

    #[test]
    fn capacity_u16() {
        assert!(check_capacity::<u16>(u16::MAX as usize - 1, 0).is_ok());
        assert!(check_capacity::<u16>(u16::MAX as usize, 0).is_err());
    }

    #[test]
    fn capacity_wide() {
        assert!(check_capacity::<u64>(usize::MAX - 1, 10).is_ok());
        assert!(check_capacity::<usize>(usize::MAX / 2, usize::MAX / 2).is_ok());
        assert!(check_capacity::<usize>(usize::MAX, 0).is_err());
    }

    #[test]
    fn index_roundtrip() {
        assert_eq!(u16::from_index(1234).to_index(), 1234);
        assert_eq!(Cost::from_index(0), 0);
    }
}
