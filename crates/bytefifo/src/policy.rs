//! crates/bytefifo/src/policy.rs
//!
//! Overflow admission policies.
//!
//! The policy is a type parameter of [`RingBuffer`](crate::RingBuffer), so a
//! buffer's behaviour when full is fixed for its whole lifetime. The
//! value-level [`OverflowMode`] mirrors the marker types for configuration.

use core::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Behaviour of a push that does not fit in the remaining space.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OverflowMode {
    /// Reject the push and leave the buffer unchanged.
    #[default]
    Bounded,
    /// Accept the push and evict the oldest buffered bytes.
    Overwrite,
}

impl OverflowMode {
    /// Returns the lowercase name used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bounded => "bounded",
            Self::Overwrite => "overwrite",
        }
    }
}

impl fmt::Display for OverflowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compile-time overflow policy of a ring buffer.
///
/// Implemented only by [`Bounded`] and [`Overwrite`].
pub trait Policy: sealed::Sealed {
    /// Value-level mode corresponding to this policy.
    const MODE: OverflowMode;
}

/// Pushes that do not fit fail with [`FifoError::NotSpace`](crate::FifoError::NotSpace).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Bounded;

/// Pushes always succeed; the oldest bytes are discarded to make room.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Overwrite;

impl sealed::Sealed for Bounded {}
impl sealed::Sealed for Overwrite {}

impl Policy for Bounded {
    const MODE: OverflowMode = OverflowMode::Bounded;
}

impl Policy for Overwrite {
    const MODE: OverflowMode = OverflowMode::Overwrite;
}
