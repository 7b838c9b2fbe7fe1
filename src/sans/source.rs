//! Byte sources the engine reads from.

use std::io::{self, Read};

/// The result of a single read.
#[derive(Debug)]
pub struct Chunk {
    /// Bytes obtained, at most `requested`.
    pub bytes: Vec<u8>,
    pub requested: usize,
    /// The error that ended the read early, if the source failed rather than
    /// running out.
    pub error: Option<io::Error>,
}

impl Chunk {
    /// Whether fewer bytes than requested were obtained.
    pub fn is_short(&self) -> bool {
        self.bytes.len() < self.requested
    }
}

/// A forward-only cursor over a byte source.
///
/// Reads never fail: running out of bytes, or an error from the underlying
/// source, is reported as a short [`Chunk`]. Consumed bytes are never
/// returned to the source.
pub trait Source {
    /// Read up to `n` bytes, advancing the position by the number obtained.
    fn read_exact(&mut self, n: usize) -> Chunk;

    /// Number of bytes consumed so far.
    fn position(&self) -> u64;
}

/// A source over a byte slice.
#[derive(Debug)]
pub struct SliceSource<'a> {
    r: &'a [u8],
    i: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(r: &'a [u8]) -> Self {
        Self { r, i: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.r[self.i..]
    }
}

impl Source for SliceSource<'_> {
    fn read_exact(&mut self, n: usize) -> Chunk {
        let s = self.i;
        self.i = s.saturating_add(n).min(self.r.len());

        Chunk {
            bytes: self.r[s..self.i].to_vec(),
            requested: n,
            error: None,
        }
    }

    fn position(&self) -> u64 {
        self.i as u64
    }
}

/// A source over a reader.
///
/// Wrap unbuffered readers (such as files) in a [`std::io::BufReader`], as
/// delimited fields are read a few bytes at a time.
#[derive(Debug)]
pub struct ReaderSource<R> {
    r: R,
    i: u64,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(r: R) -> Self {
        Self { r, i: 0 }
    }

    pub fn into_inner(self) -> R {
        self.r
    }
}

impl<R: Read> Source for ReaderSource<R> {
    fn read_exact(&mut self, n: usize) -> Chunk {
        // Grows as bytes arrive; `read_to_end` retries interrupted reads.
        let mut bytes = Vec::new();
        let error = (&mut self.r)
            .take(n as u64)
            .read_to_end(&mut bytes)
            .err();

        self.i += bytes.len() as u64;

        Chunk {
            bytes,
            requested: n,
            error,
        }
    }

    fn position(&self) -> u64 {
        self.i
    }
}
