//! Fixed-capacity circular byte buffer.
//!
//! The buffer owns (or borrows) a contiguous region of `capacity + 1` bytes
//! and two cursors into it:
//! - `head` is the index of the oldest unread byte
//! - `tail` is the index of the next write position
//!
//! One slot of the region is never filled, so `head == tail` always means the
//! buffer is empty and no separate length counter is kept. The buffered bytes
//! are the `used()` bytes walking forward from `head`, wrapping at the end of
//! the region, and stopping just before `tail`.
//!
//! Block transfers copy at most two contiguous runs instead of moving one byte
//! at a time.

use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::slice;

use crate::error::FifoError;
use crate::policy::{Bounded, OverflowMode, Policy};
use crate::trace;

/// A fixed-capacity FIFO of bytes over a pre-allocated region.
///
/// `S` is the backing storage and `P` the overflow policy. The usable
/// capacity is one less than the storage length.
///
/// # Example
///
/// ```
/// use bytefifo::{FifoError, RingBuffer};
///
/// let mut fifo: RingBuffer = RingBuffer::with_capacity(4)?;
/// fifo.push_block(b"abcd")?;
/// assert_eq!(fifo.available(), 0);
/// assert!(matches!(fifo.push_byte(b'e'), Err(FifoError::NotSpace { .. })));
///
/// let mut out = [0u8; 4];
/// fifo.pop_block(&mut out)?;
/// assert_eq!(&out, b"abcd");
/// # Ok::<(), FifoError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RingBuffer<S = Vec<u8>, P = Bounded> {
    storage: S,
    head: usize,
    tail: usize,
    policy: PhantomData<P>,
}

impl<P: Policy> RingBuffer<Vec<u8>, P> {
    /// Allocates a heap-backed buffer able to hold `capacity` bytes.
    ///
    /// The storage is `capacity + 1` bytes long. Fails with
    /// [`FifoError::Allocation`] when that length overflows or the
    /// reservation cannot be satisfied.
    pub fn with_capacity(capacity: usize) -> Result<Self, FifoError> {
        let Some(length) = capacity.checked_add(1) else {
            trace::trace_alloc_failed(capacity);
            return Err(FifoError::Allocation { capacity });
        };

        let mut storage = Vec::new();
        if storage.try_reserve_exact(length).is_err() {
            trace::trace_alloc_failed(capacity);
            return Err(FifoError::Allocation { capacity });
        }
        storage.resize(length, 0);

        trace::trace_create(capacity, P::MODE);
        Ok(Self::from_parts(storage))
    }
}

impl<const N: usize, P: Policy> RingBuffer<[u8; N], P> {
    /// Wraps an inline array, giving a usable capacity of `N - 1`.
    ///
    /// Usable in `static` and `const` initialisers. `N == 0` fails to compile.
    #[must_use]
    pub const fn from_array(storage: [u8; N]) -> Self {
        const { assert!(N > 0, "ring buffer storage must hold the reserved slot") };
        Self {
            storage,
            head: 0,
            tail: 0,
            policy: PhantomData,
        }
    }

    /// Creates an inline buffer over zeroed storage.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self::from_array([0; N])
    }
}

impl<S, P> RingBuffer<S, P>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
    P: Policy,
{
    /// Adopts a caller-supplied region as backing storage.
    ///
    /// The usable capacity is `storage.len() - 1`. A zero-length region cannot
    /// hold the reserved slot and is rejected with [`FifoError::Allocation`].
    /// Existing contents of the region are ignored; the buffer starts empty.
    pub fn from_storage(storage: S) -> Result<Self, FifoError> {
        let length = storage.as_ref().len();
        if length == 0 {
            trace::trace_alloc_failed(0);
            return Err(FifoError::Allocation { capacity: 0 });
        }
        trace::trace_create(length - 1, P::MODE);
        Ok(Self::from_parts(storage))
    }

    fn from_parts(storage: S) -> Self {
        Self {
            storage,
            head: 0,
            tail: 0,
            policy: PhantomData,
        }
    }

    /// Releases the buffer and hands the storage region back to the caller.
    ///
    /// Buffered bytes are left in the region as they were.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Releases the buffer together with its storage.
    pub fn destroy(self) {
        drop(self);
    }

    /// Returns the overflow policy this buffer was built with.
    #[inline]
    #[must_use]
    pub const fn overflow_mode(&self) -> OverflowMode {
        P::MODE
    }

    /// Returns the length of the backing region, including the reserved slot.
    #[inline]
    #[must_use]
    pub fn storage_len(&self) -> usize {
        self.storage.as_ref().len()
    }

    /// Returns the maximum number of bytes the buffer can hold.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage_len() - 1
    }

    /// Returns the number of buffered bytes.
    #[inline]
    #[must_use]
    pub fn used(&self) -> usize {
        let size = self.storage_len();
        (self.tail + size - self.head) % size
    }

    /// Returns the number of bytes that can be pushed without eviction.
    #[inline]
    #[must_use]
    pub fn available(&self) -> usize {
        self.capacity() - self.used()
    }

    /// Same as [`used`](Self::used).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.used()
    }

    /// Returns `true` if no bytes are buffered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns `true` if no more bytes fit without eviction.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.available() == 0
    }

    /// Discards all buffered bytes.
    ///
    /// Only the read cursor moves; storage contents are untouched and the
    /// next push writes where the previous one stopped.
    pub fn reset(&mut self) {
        trace::trace_reset(self.used());
        self.head = self.tail;
    }

    /// Appends one byte.
    ///
    /// Under [`Bounded`] a full buffer rejects the byte with
    /// [`FifoError::NotSpace`]. Under [`Overwrite`](crate::Overwrite) the oldest
    /// byte is dropped to make room and the call always succeeds.
    pub fn push_byte(&mut self, value: u8) -> Result<(), FifoError> {
        match P::MODE {
            OverflowMode::Bounded => {
                if self.is_full() {
                    trace::trace_reject(1, 0);
                    return Err(FifoError::NotSpace {
                        requested: 1,
                        available: 0,
                    });
                }
                self.write_byte(value);
            }
            OverflowMode::Overwrite => {
                self.write_byte(value);
                if self.tail == self.head {
                    self.head = self.advance(self.head, 1);
                    trace::trace_evict(1);
                }
            }
        }
        Ok(())
    }

    /// Appends a block of bytes, preserving their order.
    ///
    /// Under [`Bounded`] the block is written whole or not at all. Under
    /// [`Overwrite`](crate::Overwrite) the result is identical to pushing the
    /// bytes one by one: when the block does not fit, the oldest bytes (which
    /// may include the front of `data` itself) are evicted.
    pub fn push_block(&mut self, data: &[u8]) -> Result<(), FifoError> {
        match P::MODE {
            OverflowMode::Bounded => {
                let available = self.available();
                if data.len() > available {
                    trace::trace_reject(data.len(), available);
                    return Err(FifoError::NotSpace {
                        requested: data.len(),
                        available,
                    });
                }
                self.write_wrapped(self.tail, data);
                self.tail = self.advance(self.tail, data.len());
            }
            OverflowMode::Overwrite => self.overwrite_block(data),
        }
        Ok(())
    }

    /// Appends as much of `data` as the policy admits and returns the count.
    ///
    /// Under [`Bounded`] this is the prefix that fits in the free space.
    /// Under [`Overwrite`](crate::Overwrite) every byte is accepted.
    pub fn push_available(&mut self, data: &[u8]) -> usize {
        match P::MODE {
            OverflowMode::Bounded => {
                let accepted = data.len().min(self.available());
                self.write_wrapped(self.tail, &data[..accepted]);
                self.tail = self.advance(self.tail, accepted);
                accepted
            }
            OverflowMode::Overwrite => {
                self.overwrite_block(data);
                data.len()
            }
        }
    }

    /// Removes and returns the oldest byte.
    pub fn pop_byte(&mut self) -> Result<u8, FifoError> {
        if self.is_empty() {
            trace::trace_underflow(1, 0);
            return Err(FifoError::NotData {
                requested: 1,
                used: 0,
            });
        }
        let value = self.storage.as_ref()[self.head];
        self.head = self.advance(self.head, 1);
        Ok(value)
    }

    /// Removes the oldest `out.len()` bytes into `out`.
    ///
    /// Fails with [`FifoError::NotData`] without consuming anything when
    /// fewer bytes are buffered.
    pub fn pop_block(&mut self, out: &mut [u8]) -> Result<(), FifoError> {
        self.ensure_buffered(out.len())?;
        self.read_wrapped(self.head, out);
        self.head = self.advance(self.head, out.len());
        Ok(())
    }

    /// Removes up to `out.len()` bytes into `out` and returns how many were
    /// copied.
    pub fn read_into(&mut self, out: &mut [u8]) -> usize {
        let count = out.len().min(self.used());
        self.read_wrapped(self.head, &mut out[..count]);
        self.head = self.advance(self.head, count);
        count
    }

    /// Copies the oldest `out.len()` bytes into `out` without consuming them.
    pub fn peek_block(&self, out: &mut [u8]) -> Result<(), FifoError> {
        self.ensure_buffered(out.len())?;
        self.read_wrapped(self.head, out);
        Ok(())
    }

    /// Drops the oldest `count` bytes without copying them.
    pub fn discard(&mut self, count: usize) -> Result<(), FifoError> {
        self.ensure_buffered(count)?;
        self.head = self.advance(self.head, count);
        Ok(())
    }

    /// Returns the `index`-th buffered byte, `0` being the oldest.
    ///
    /// Cursors are not moved. Fails with [`FifoError::OutOfRange`] when
    /// `index >= used()`.
    pub fn query(&self, index: usize) -> Result<u8, FifoError> {
        let used = self.used();
        if index >= used {
            return Err(FifoError::OutOfRange { index, used });
        }
        Ok(self.storage.as_ref()[self.advance(self.head, index)])
    }

    /// Returns the buffered bytes as two slices in FIFO order.
    ///
    /// The second slice is empty unless the data wraps past the end of the
    /// storage region.
    #[must_use]
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        let storage = self.storage.as_ref();
        if self.head <= self.tail {
            (&storage[self.head..self.tail], &[])
        } else {
            (&storage[self.head..], &storage[..self.tail])
        }
    }

    /// Returns an iterator over the buffered bytes, oldest first.
    pub fn iter(&self) -> Iter<'_> {
        let (first, second) = self.as_slices();
        Iter {
            first: first.iter(),
            second: second.iter(),
        }
    }

    fn ensure_buffered(&self, requested: usize) -> Result<(), FifoError> {
        let used = self.used();
        if requested > used {
            trace::trace_underflow(requested, used);
            return Err(FifoError::NotData { requested, used });
        }
        Ok(())
    }

    #[inline]
    fn advance(&self, index: usize, by: usize) -> usize {
        let size = self.storage_len();
        (index + by % size) % size
    }

    #[inline]
    fn write_byte(&mut self, value: u8) {
        let tail = self.tail;
        self.storage.as_mut()[tail] = value;
        self.tail = self.advance(tail, 1);
    }

    fn overwrite_block(&mut self, data: &[u8]) {
        let capacity = self.capacity();
        let size = self.storage_len();
        let used = self.used();

        // Only the last `capacity` bytes of the block can survive.
        let skipped = data.len().saturating_sub(capacity);
        let kept = &data[skipped..];
        let start = self.advance(self.tail, skipped);
        self.write_wrapped(start, kept);
        self.tail = self.advance(start, kept.len());

        let total = used.saturating_add(data.len());
        let retained = total.min(capacity);
        self.head = (self.tail + size - retained) % size;

        let evicted = total - retained;
        if evicted > 0 {
            trace::trace_evict(evicted);
        }
    }

    /// Copies `data` into storage starting at `start`, wrapping once.
    /// `data` must be no longer than the storage region.
    fn write_wrapped(&mut self, start: usize, data: &[u8]) {
        let storage = self.storage.as_mut();
        let first = data.len().min(storage.len() - start);
        storage[start..start + first].copy_from_slice(&data[..first]);
        storage[..data.len() - first].copy_from_slice(&data[first..]);
    }

    fn read_wrapped(&self, start: usize, out: &mut [u8]) {
        let storage = self.storage.as_ref();
        let first = out.len().min(storage.len() - start);
        out[..first].copy_from_slice(&storage[start..start + first]);
        let rest = out.len() - first;
        out[first..].copy_from_slice(&storage[..rest]);
    }
}

/// Iterator over buffered bytes, created by [`RingBuffer::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    first: slice::Iter<'a, u8>,
    second: slice::Iter<'a, u8>,
}

impl Iterator for Iter<'_> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        self.first.next().or_else(|| self.second.next()).copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.first.len() + self.second.len();
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<u8> {
        self.second
            .next_back()
            .or_else(|| self.first.next_back())
            .copied()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a, S, P> IntoIterator for &'a RingBuffer<S, P>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
    P: Policy,
{
    type Item = u8;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
