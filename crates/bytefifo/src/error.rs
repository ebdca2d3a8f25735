//! crates/bytefifo/src/error.rs
//!
//! Failure kinds reported by buffer operations.

use thiserror::Error;

/// Status code of a successful operation, kept for callers that forward
/// status bytes across a firmware boundary.
pub const STATUS_SUCCESS: u8 = 0x00;

/// Errors produced by ring buffer operations.
///
/// Every failing operation leaves the buffer exactly as it was before the
/// call. Overwrite-policy pushes never fail with [`FifoError::NotSpace`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum FifoError {
    /// A bounded-policy push did not fit in the remaining space.
    #[error("push of {requested} bytes rejected: only {available} bytes available")]
    NotSpace {
        /// Number of bytes the caller tried to push.
        requested: usize,
        /// Free space at the time of the call.
        available: usize,
    },
    /// A pop, peek or discard asked for more bytes than are buffered.
    #[error("requested {requested} bytes but only {used} are buffered")]
    NotData {
        /// Number of bytes the caller asked for.
        requested: usize,
        /// Bytes buffered at the time of the call.
        used: usize,
    },
    /// The handle does not currently hold a buffer.
    #[error("ring buffer does not exist")]
    NotExist,
    /// A query index was not below the buffered byte count.
    #[error("index {index} out of range for {used} buffered bytes")]
    OutOfRange {
        /// Index passed to the query.
        index: usize,
        /// Bytes buffered at the time of the call.
        used: usize,
    },
    /// Backing storage could not be obtained for the requested capacity.
    #[error("unable to allocate storage for a capacity of {capacity} bytes")]
    Allocation {
        /// Usable capacity that was requested.
        capacity: usize,
    },
}

impl FifoError {
    /// Returns the flat status code for this error.
    ///
    /// Codes match the historical C status values, with `0x05` added for
    /// allocation failures.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::NotSpace { .. } => 0x01,
            Self::NotData { .. } => 0x02,
            Self::NotExist => 0x03,
            Self::OutOfRange { .. } => 0x04,
            Self::Allocation { .. } => 0x05,
        }
    }
}

/// Collapses an operation result into its flat status code.
#[must_use]
pub fn status_code<T>(result: &Result<T, FifoError>) -> u8 {
    match result {
        Ok(_) => STATUS_SUCCESS,
        Err(error) => error.code(),
    }
}
