//! crates/bytefifo/src/slot.rs
//!
//! A handle that may or may not hold a buffer.
//!
//! Firmware commonly declares its FIFOs as statics that are created during
//! init and torn down later. [`FifoSlot`] models that lifecycle: operations on
//! a vacant slot report [`FifoError::NotExist`] instead of touching memory,
//! while the two occupancy accessors report `0`.

use alloc::vec::Vec;

use crate::error::FifoError;
use crate::policy::{Bounded, Policy};
use crate::ring_buffer::RingBuffer;

/// Optional owner of a [`RingBuffer`].
#[derive(Clone, Debug)]
pub struct FifoSlot<S = Vec<u8>, P = Bounded> {
    buffer: Option<RingBuffer<S, P>>,
}

impl<S, P> Default for FifoSlot<S, P> {
    fn default() -> Self {
        Self::vacant()
    }
}

impl<S, P> FifoSlot<S, P> {
    /// Creates a slot that holds no buffer.
    #[must_use]
    pub const fn vacant() -> Self {
        Self { buffer: None }
    }

    /// Returns `true` if the slot currently holds a buffer.
    #[inline]
    #[must_use]
    pub const fn exists(&self) -> bool {
        self.buffer.is_some()
    }
}

impl<P: Policy> FifoSlot<Vec<u8>, P> {
    /// Allocates a heap-backed buffer into the slot.
    ///
    /// Any previously held buffer is released first.
    pub fn create(&mut self, capacity: usize) -> Result<(), FifoError> {
        self.buffer = None;
        self.buffer = Some(RingBuffer::with_capacity(capacity)?);
        Ok(())
    }
}

impl<S, P> FifoSlot<S, P>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
    P: Policy,
{
    /// Places an existing buffer into the slot, returning the previous one.
    pub fn install(&mut self, buffer: RingBuffer<S, P>) -> Option<RingBuffer<S, P>> {
        self.buffer.replace(buffer)
    }

    /// Empties the slot and returns the storage of the buffer it held.
    ///
    /// Destroying a vacant slot does nothing and returns `None`.
    pub fn destroy(&mut self) -> Option<S> {
        self.buffer.take().map(RingBuffer::into_storage)
    }

    /// Borrows the held buffer.
    pub fn get(&self) -> Result<&RingBuffer<S, P>, FifoError> {
        self.buffer.as_ref().ok_or(FifoError::NotExist)
    }

    /// Mutably borrows the held buffer.
    pub fn get_mut(&mut self) -> Result<&mut RingBuffer<S, P>, FifoError> {
        self.buffer.as_mut().ok_or(FifoError::NotExist)
    }

    /// Buffered byte count, or `0` for a vacant slot.
    #[must_use]
    pub fn used(&self) -> usize {
        self.buffer.as_ref().map_or(0, RingBuffer::used)
    }

    /// Free space, or `0` for a vacant slot.
    #[must_use]
    pub fn available(&self) -> usize {
        self.buffer.as_ref().map_or(0, RingBuffer::available)
    }

    /// See [`RingBuffer::reset`].
    pub fn reset(&mut self) -> Result<(), FifoError> {
        self.get_mut()?.reset();
        Ok(())
    }

    /// See [`RingBuffer::push_byte`].
    pub fn push_byte(&mut self, value: u8) -> Result<(), FifoError> {
        self.get_mut()?.push_byte(value)
    }

    /// See [`RingBuffer::push_block`].
    pub fn push_block(&mut self, data: &[u8]) -> Result<(), FifoError> {
        self.get_mut()?.push_block(data)
    }

    /// See [`RingBuffer::pop_byte`].
    pub fn pop_byte(&mut self) -> Result<u8, FifoError> {
        self.get_mut()?.pop_byte()
    }

    /// See [`RingBuffer::pop_block`].
    pub fn pop_block(&mut self, out: &mut [u8]) -> Result<(), FifoError> {
        self.get_mut()?.pop_block(out)
    }

    /// See [`RingBuffer::query`].
    pub fn query(&self, index: usize) -> Result<u8, FifoError> {
        self.get()?.query(index)
    }
}

impl<S, P> From<RingBuffer<S, P>> for FifoSlot<S, P> {
    fn from(buffer: RingBuffer<S, P>) -> Self {
        Self {
            buffer: Some(buffer),
        }
    }
}
