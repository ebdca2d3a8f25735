#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `bytefifo` provides a fixed-capacity circular byte buffer with FIFO
//! semantics. Single bytes or blocks are appended at the tail and removed
//! from the head in arrival order, over storage that is sized once and never
//! grows. It targets firmware-style I/O buffering (UART receive queues,
//! peripheral DMA staging) where memory use must be bounded up front.
//!
//! # Design
//!
//! - [`RingBuffer`] holds a region of `capacity + 1` bytes plus `head` and
//!   `tail` cursors. The spare slot distinguishes a full buffer from an empty
//!   one without a length counter.
//! - The storage type is a parameter: a heap [`Vec`](alloc::vec::Vec) from
//!   [`RingBuffer::with_capacity`], an inline array from
//!   [`RingBuffer::from_array`], or any caller region through
//!   [`RingBuffer::from_storage`].
//! - The overflow policy is also a type parameter. [`Bounded`] rejects pushes
//!   that do not fit; [`Overwrite`] evicts the oldest bytes instead. A buffer
//!   cannot change policy once created.
//! - [`FifoSlot`] is a handle that may be vacant, for statics created during
//!   init and destroyed later.
//! - [`FifoConfig`] selects capacity and policy at run time and builds a
//!   [`Fifo`].
//!
//! # Invariants
//!
//! - `head` and `tail` always index into the storage region.
//! - `used() + available() == capacity()` after every operation.
//! - A failed operation changes nothing. Overwrite-policy pushes never fail.
//!
//! # Errors
//!
//! Operations return [`FifoError`]; [`FifoError::code`] yields the flat status
//! byte for callers that report status numerically.
//!
//! # Features
//!
//! - `std` (default): `std::io::Read`/`Write` adapters. Without it the crate
//!   is `no_std` and needs only `alloc`.
//! - `tracing`: emits allocation, rejection, eviction and reset events.
//! - `serde`: serialization for [`FifoConfig`] and [`OverflowMode`].
//!
//! # Examples
//!
//! ```
//! use bytefifo::{Overwrite, RingBuffer};
//!
//! let mut fifo: RingBuffer<Vec<u8>, Overwrite> = RingBuffer::with_capacity(4)?;
//! fifo.push_block(&[1, 2, 3, 4, 5])?;
//! assert_eq!(fifo.used(), 4);
//! assert_eq!(fifo.pop_byte()?, 2);
//! # Ok::<(), bytefifo::FifoError>(())
//! ```

extern crate alloc;

mod config;
mod error;
#[cfg(feature = "std")]
mod io;
mod policy;
mod ring_buffer;
mod slot;
mod trace;

pub use crate::config::{DEFAULT_CAPACITY, Fifo, FifoConfig};
pub use crate::error::{FifoError, STATUS_SUCCESS, status_code};
pub use crate::policy::{Bounded, OverflowMode, Overwrite, Policy};
pub use crate::ring_buffer::{Iter, RingBuffer};
pub use crate::slot::FifoSlot;

/// A heap-backed buffer that rejects pushes when full.
pub type BoundedFifo = RingBuffer<alloc::vec::Vec<u8>, Bounded>;

/// A heap-backed buffer that evicts the oldest bytes when full.
pub type OverwriteFifo = RingBuffer<alloc::vec::Vec<u8>, Overwrite>;
