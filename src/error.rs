use thiserror::Error;

/// Errors returned by the distance and alignment engines.
///
/// All inputs are valid except sequences that are too long for the counter
/// type the engine was instantiated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("sequence of length {len} does not fit a counter with maximum {max}")]
    CounterOverflow { len: usize, max: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
