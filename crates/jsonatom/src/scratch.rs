//! Transient byte stack for decoding string escapes.
//!
//! While a string literal is being scanned, every accepted byte — literal
//! or decoded from an escape — lands here, not in the output value. That
//! makes a mid-string error transactional: the caller takes a [`mark`]
//! before the opening quote's content and [`unwind`]s to it on any
//! failure, so no partial bytes survive into a later parse. On the happy
//! path [`take_from`] re-homes the finished span out of the stack.
//!
//! The stack is owned by one cursor and dies with it; nothing is shared
//! across parse calls.
//!
//! [`mark`]: Scratch::mark
//! [`unwind`]: Scratch::unwind
//! [`take_from`]: Scratch::take_from

use alloc::vec::Vec;

/// Capacity of the first allocation, in bytes.
const SCRATCH_INIT_CAPACITY: usize = 256;

#[derive(Debug, Default)]
pub(crate) struct Scratch {
    buf: Vec<u8>,
}

impl Scratch {
    pub(crate) fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Current top of the stack, for a later [`unwind`] or [`take_from`].
    ///
    /// [`unwind`]: Scratch::unwind
    /// [`take_from`]: Scratch::take_from
    pub(crate) fn mark(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Appends one byte, growing geometrically on overflow.
    pub(crate) fn push(&mut self, byte: u8) {
        self.grow_for(1);
        self.buf.push(byte);
    }

    /// Bulk append for runs of bytes that need no decoding.
    pub(crate) fn push_slice(&mut self, bytes: &[u8]) {
        self.grow_for(bytes.len());
        self.buf.extend_from_slice(bytes);
    }

    /// Drops everything above `mark`. Bytes below it are untouched.
    pub(crate) fn unwind(&mut self, mark: usize) {
        debug_assert!(mark <= self.buf.len());
        self.buf.truncate(mark);
    }

    /// Moves the bytes above `mark` out into freshly owned storage,
    /// truncating the stack back to `mark`.
    pub(crate) fn take_from(&mut self, mark: usize) -> Vec<u8> {
        debug_assert!(mark <= self.buf.len());
        self.buf.split_off(mark)
    }

    /// Ensures room for `extra` more bytes. Capacity starts at
    /// [`SCRATCH_INIT_CAPACITY`] and multiplies by 1.5 until the push
    /// fits; existing content is preserved across the reallocation.
    fn grow_for(&mut self, extra: usize) {
        let needed = self.buf.len() + extra;
        let mut cap = self.buf.capacity();
        if needed <= cap {
            return;
        }
        if cap == 0 {
            cap = SCRATCH_INIT_CAPACITY;
        }
        while cap < needed {
            cap += cap >> 1;
        }
        self.buf.reserve_exact(cap - self.buf.len());
    }
}
