//! Buffer event tracing.
//!
//! Every function has a no-op twin compiled when the `tracing` feature is
//! disabled, so call sites stay unconditional.

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::policy::OverflowMode;

/// Trace creation of a buffer.
///
/// # Arguments
///
/// * `capacity` - Usable capacity in bytes
/// * `mode` - Overflow policy of the new buffer
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_create(capacity: usize, mode: OverflowMode) {
    debug!(
        target: "bytefifo::alloc",
        operation = "create",
        capacity = capacity,
        policy = mode.as_str(),
        "created {} ring buffer with capacity {}",
        mode,
        capacity
    );
}

/// Trace creation of a buffer - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_create(_capacity: usize, _mode: OverflowMode) {}

/// Trace a failed storage reservation.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_alloc_failed(capacity: usize) {
    debug!(
        target: "bytefifo::alloc",
        operation = "create",
        capacity = capacity,
        "storage reservation failed for capacity {}",
        capacity
    );
}

/// Trace a failed storage reservation - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_alloc_failed(_capacity: usize) {}

/// Trace a bounded-policy push rejected for lack of space.
///
/// # Arguments
///
/// * `requested` - Bytes the caller tried to push
/// * `available` - Free space at the time of the call
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_reject(requested: usize, available: usize) {
    debug!(
        target: "bytefifo::push",
        operation = "reject",
        requested = requested,
        available = available,
        "push of {} bytes rejected ({} available)",
        requested,
        available
    );
}

/// Trace a rejected push - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_reject(_requested: usize, _available: usize) {}

/// Trace oldest bytes evicted by an overwrite-policy push.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_evict(evicted: usize) {
    trace!(
        target: "bytefifo::push",
        operation = "evict",
        evicted = evicted,
        "overwrote {} unread bytes",
        evicted
    );
}

/// Trace evicted bytes - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_evict(_evicted: usize) {}

/// Trace a pop, peek or discard that asked for more bytes than are buffered.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_underflow(requested: usize, used: usize) {
    trace!(
        target: "bytefifo::pop",
        operation = "underflow",
        requested = requested,
        used = used,
        "requested {} bytes with {} buffered",
        requested,
        used
    );
}

/// Trace an underflow - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_underflow(_requested: usize, _used: usize) {}

/// Trace a reset of the read/write cursors.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_reset(discarded: usize) {
    debug!(
        target: "bytefifo::reset",
        operation = "reset",
        discarded = discarded,
        "reset discarded {} buffered bytes",
        discarded
    );
}

/// Trace a reset - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_reset(_discarded: usize) {}
