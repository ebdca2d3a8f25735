//! crates/bytefifo/src/config.rs
//! Construction-time configuration for heap-backed buffers.

use alloc::vec::Vec;

use crate::error::FifoError;
use crate::policy::{Bounded, OverflowMode, Overwrite};
use crate::ring_buffer::{Iter, RingBuffer};

/// Usable capacity of a default-configured buffer.
pub const DEFAULT_CAPACITY: usize = 256;

/// Capacity and overflow policy of a buffer to be built.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FifoConfig {
    /// Usable capacity in bytes.
    pub capacity: usize,
    /// Behaviour when a push does not fit.
    pub overflow: OverflowMode,
}

impl Default for FifoConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            overflow: OverflowMode::Bounded,
        }
    }
}

impl FifoConfig {
    /// Creates a bounded configuration with the given capacity.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            overflow: OverflowMode::Bounded,
        }
    }

    /// Sets the usable capacity.
    #[must_use]
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the overflow policy.
    #[must_use]
    pub const fn overflow(mut self, overflow: OverflowMode) -> Self {
        self.overflow = overflow;
        self
    }

    /// Allocates a buffer with this configuration.
    pub fn build(self) -> Result<Fifo, FifoError> {
        Ok(match self.overflow {
            OverflowMode::Bounded => Fifo::Bounded(RingBuffer::with_capacity(self.capacity)?),
            OverflowMode::Overwrite => Fifo::Overwrite(RingBuffer::with_capacity(self.capacity)?),
        })
    }
}

/// A heap-backed buffer whose policy was chosen from configuration.
///
/// The variant is fixed when the value is built.
#[derive(Clone, Debug)]
pub enum Fifo {
    /// Rejects pushes that do not fit.
    Bounded(RingBuffer<Vec<u8>, Bounded>),
    /// Evicts the oldest bytes to admit every push.
    Overwrite(RingBuffer<Vec<u8>, Overwrite>),
}

macro_rules! forward {
    ($self:ident, $buffer:ident => $body:expr) => {
        match $self {
            Fifo::Bounded($buffer) => $body,
            Fifo::Overwrite($buffer) => $body,
        }
    };
}

impl Fifo {
    /// Returns the policy selected at build time.
    #[must_use]
    pub const fn overflow_mode(&self) -> OverflowMode {
        match self {
            Self::Bounded(_) => OverflowMode::Bounded,
            Self::Overwrite(_) => OverflowMode::Overwrite,
        }
    }

    /// See [`RingBuffer::capacity`].
    #[must_use]
    pub fn capacity(&self) -> usize {
        forward!(self, buffer => buffer.capacity())
    }

    /// See [`RingBuffer::used`].
    #[must_use]
    pub fn used(&self) -> usize {
        forward!(self, buffer => buffer.used())
    }

    /// See [`RingBuffer::available`].
    #[must_use]
    pub fn available(&self) -> usize {
        forward!(self, buffer => buffer.available())
    }

    /// See [`RingBuffer::is_empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        forward!(self, buffer => buffer.is_empty())
    }

    /// See [`RingBuffer::reset`].
    pub fn reset(&mut self) {
        forward!(self, buffer => buffer.reset());
    }

    /// See [`RingBuffer::push_byte`].
    pub fn push_byte(&mut self, value: u8) -> Result<(), FifoError> {
        forward!(self, buffer => buffer.push_byte(value))
    }

    /// See [`RingBuffer::push_block`].
    pub fn push_block(&mut self, data: &[u8]) -> Result<(), FifoError> {
        forward!(self, buffer => buffer.push_block(data))
    }

    /// See [`RingBuffer::push_available`].
    pub fn push_available(&mut self, data: &[u8]) -> usize {
        forward!(self, buffer => buffer.push_available(data))
    }

    /// See [`RingBuffer::pop_byte`].
    pub fn pop_byte(&mut self) -> Result<u8, FifoError> {
        forward!(self, buffer => buffer.pop_byte())
    }

    /// See [`RingBuffer::pop_block`].
    pub fn pop_block(&mut self, out: &mut [u8]) -> Result<(), FifoError> {
        forward!(self, buffer => buffer.pop_block(out))
    }

    /// See [`RingBuffer::read_into`].
    pub fn read_into(&mut self, out: &mut [u8]) -> usize {
        forward!(self, buffer => buffer.read_into(out))
    }

    /// See [`RingBuffer::query`].
    pub fn query(&self, index: usize) -> Result<u8, FifoError> {
        forward!(self, buffer => buffer.query(index))
    }

    /// See [`RingBuffer::iter`].
    pub fn iter(&self) -> Iter<'_> {
        forward!(self, buffer => buffer.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_bounded() {
        let config = FifoConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert_eq!(config.overflow, OverflowMode::Bounded);
    }

    #[test]
    fn builder_setters_apply() {
        let config = FifoConfig::new(8)
            .capacity(16)
            .overflow(OverflowMode::Overwrite);
        assert_eq!(config.capacity, 16);
        assert_eq!(config.overflow, OverflowMode::Overwrite);
    }

    #[test]
    fn build_selects_bounded_variant() {
        let mut fifo = FifoConfig::new(2).build().expect("allocation succeeds");
        assert_eq!(fifo.overflow_mode(), OverflowMode::Bounded);
        fifo.push_block(&[1, 2]).unwrap();
        assert!(fifo.push_byte(3).is_err());
    }

    #[test]
    fn build_selects_overwrite_variant() {
        let mut fifo = FifoConfig::new(2)
            .overflow(OverflowMode::Overwrite)
            .build()
            .expect("allocation succeeds");
        assert_eq!(fifo.overflow_mode(), OverflowMode::Overwrite);
        fifo.push_block(&[1, 2, 3]).unwrap();
        assert_eq!(fifo.iter().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn build_reports_allocation_failure() {
        let err = FifoConfig::new(usize::MAX).build().unwrap_err();
        assert_eq!(
            err,
            FifoError::Allocation {
                capacity: usize::MAX
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_round_trips_through_json() {
        let config = FifoConfig::new(64).overflow(OverflowMode::Overwrite);
        let json = serde_json::to_string(&config).expect("serialize");
        assert_eq!(json, r#"{"capacity":64,"overflow":"overwrite"}"#);
        let parsed: FifoConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_config_fields_take_defaults() {
        let parsed: FifoConfig = serde_json::from_str(r#"{"overflow":"overwrite"}"#).unwrap();
        assert_eq!(parsed.capacity, DEFAULT_CAPACITY);
        assert_eq!(parsed.overflow, OverflowMode::Overwrite);
    }
}
