// This is a part of encoding-jis.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Internal utilities.

use log::trace;

use crate::types::{ByteWriter, CodeWriter, CodePoint, CodecError};

/// A forward-only reader over the input bytes.
pub struct ByteCursor<'a> {
    /// The current buffer.
    buf: &'a [u8],
    /// The current index to the buffer.
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> ByteCursor<'a> {
        ByteCursor { buf, pos: 0 }
    }

    /// The offset of the next byte to be read.
    #[inline(always)]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Reads one byte from the buffer if any.
    #[inline(always)]
    pub fn read(&mut self) -> Option<u8> {
        match self.buf.get(self.pos) {
            Some(&c) => { self.pos += 1; Some(c) }
            None => None
        }
    }

    /// Looks at the byte `offset` bytes ahead without consuming anything.
    #[inline(always)]
    pub fn peek(&self, offset: usize) -> Option<u8> {
        self.buf.get(self.pos + offset).cloned()
    }

    /// Reads one byte of a multi-byte sequence which started at `start`.
    /// Fails when the input ends before the sequence does.
    #[inline(always)]
    pub fn next_in(&mut self, start: usize) -> Result<u8, CodecError> {
        match self.read() {
            Some(c) => Ok(c),
            None => {
                trace!("sequence starting at byte {} is cut off by the end of input", start);
                Err(CodecError::truncated(start))
            }
        }
    }

    /// Skips `n` bytes of a multi-byte sequence which started at `start`.
    pub fn skip(&mut self, n: usize, start: usize) -> Result<(), CodecError> {
        if self.buf.len() - self.pos < n {
            trace!("sequence starting at byte {} is cut off by the end of input", start);
            self.pos = self.buf.len();
            return Err(CodecError::truncated(start));
        }
        self.pos += n;
        Ok(())
    }
}

/// An output buffer allocated once for the worst case, and trimmed when done.
pub struct OutputBuffer<T> {
    buf: Vec<T>,
    bound: usize,
}

impl<T> OutputBuffer<T> {
    /// Reserves room for `bound` items. Writing more than that is a bug in the caller's bound.
    pub fn with_bound(bound: usize) -> OutputBuffer<T> {
        OutputBuffer { buf: Vec::with_capacity(bound), bound }
    }

    #[inline(always)]
    pub fn push(&mut self, v: T) {
        debug_assert!(self.buf.len() < self.bound, "output exceeds its bound of {}", self.bound);
        self.buf.push(v);
    }

    /// Returns the written items, releasing the unused part of the allocation.
    pub fn into_vec(mut self) -> Vec<T> {
        self.buf.shrink_to_fit();
        self.buf
    }
}

impl ByteWriter for OutputBuffer<u8> {
    fn write_byte(&mut self, b: u8) {
        self.push(b);
    }

    fn write_bytes(&mut self, v: &[u8]) {
        debug_assert!(self.buf.len() + v.len() <= self.bound,
                      "output exceeds its bound of {}", self.bound);
        self.buf.extend_from_slice(v);
    }
}

impl CodeWriter for OutputBuffer<CodePoint> {
    fn write_code(&mut self, c: CodePoint) {
        self.push(c);
    }
}
