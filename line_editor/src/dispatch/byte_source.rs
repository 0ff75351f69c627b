// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;
use std::io::{self, Read};

/// Bytes that fit inline before the push-back stack spills to the heap. Longer than any
/// escape sequence in the default key bindings.
pub const PUSHBACK_INLINE_CAPACITY: usize = 8;

/// Pull-based input, one byte at a time, with push-back.
pub trait ByteSource {
    /// Blocks until a byte is available. `Ok(None)` means the stream has ended.
    ///
    /// # Errors
    ///
    /// Returns the underlying reader's error, it is not retried.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Return `byte` to the source. It is the next byte [`Self::read_byte`] yields.
    fn unread(&mut self, byte: u8);

    /// Return `bytes` to the source so they are read again in their original order.
    fn unread_all(&mut self, bytes: &[u8]) {
        for &byte in bytes.iter().rev() {
            self.unread(byte);
        }
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> io::Result<Option<u8>> { (**self).read_byte() }

    fn unread(&mut self, byte: u8) { (**self).unread(byte); }
}

/// Adapts any [`Read`] into a [`ByteSource`]. Pushed back bytes are kept on a LIFO
/// stack, so there is no limit on how many can be returned.
#[derive(Debug)]
pub struct PushbackReader<R> {
    inner: R,
    pushed_back: SmallVec<[u8; PUSHBACK_INLINE_CAPACITY]>,
}

impl<R: Read> PushbackReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pushed_back: SmallVec::new(),
        }
    }

    /// Number of pushed back bytes that have not been read again yet.
    #[must_use]
    pub fn pending(&self) -> usize { self.pushed_back.len() }

    pub fn into_inner(self) -> R { self.inner }
}

impl<R: Read> ByteSource for PushbackReader<R> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pushed_back.pop() {
            return Ok(Some(byte));
        }

        let mut buf = [0_u8; 1];
        match self.inner.read(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf[0])),
        }
    }

    fn unread(&mut self, byte: u8) { self.pushed_back.push(byte); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    fn drain(source: &mut impl ByteSource) -> Vec<u8> {
        let mut acc = vec![];
        while let Some(byte) = source.read_byte().unwrap() {
            acc.push(byte);
        }
        acc
    }

    #[test]
    fn test_reads_until_end_of_stream() {
        let mut source = PushbackReader::new(&b"abc"[..]);
        assert_eq2!(drain(&mut source), b"abc".to_vec());
        assert_eq2!(source.read_byte().unwrap(), None);
    }

    #[test]
    fn test_unread_is_lifo() {
        let mut source = PushbackReader::new(&b"z"[..]);
        source.unread(b'1');
        source.unread(b'2');
        assert_eq2!(source.pending(), 2);
        assert_eq2!(drain(&mut source), b"21z".to_vec());
    }

    #[test]
    fn test_unread_all_preserves_order_past_inline_capacity() {
        let mut source = PushbackReader::new(&b"!"[..]);
        let pushed = b"0123456789abcdef";
        source.unread_all(pushed);
        assert_eq2!(drain(&mut source), b"0123456789abcdef!".to_vec());
    }

    #[test]
    fn test_unread_after_end_of_stream() {
        let mut source = PushbackReader::new(&b""[..]);
        assert_eq2!(source.read_byte().unwrap(), None);
        source.unread(b'x');
        assert_eq2!(source.read_byte().unwrap(), Some(b'x'));
        assert_eq2!(source.read_byte().unwrap(), None);
    }

    #[test]
    fn test_read_error_propagates() {
        struct FailingReader;
        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("device gone"))
            }
        }
        let mut source = PushbackReader::new(FailingReader);
        let error = source.read_byte().unwrap_err();
        assert_eq2!(error.to_string(), "device gone");
    }
}
