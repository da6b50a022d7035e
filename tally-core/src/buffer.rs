//! Buffered character reading with one-character look-ahead

use std::io;

use crate::source::CharSource;

/// Default buffer capacity in characters
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Fixed-size character buffer over a [`CharSource`].
///
/// The buffer is refilled in one batch only once every buffered character
/// has been consumed. End of stream is sticky: after a refill returns zero
/// characters the source is never read again.
pub struct CharBuffer<S> {
    source: S,
    /// Batch storage, always `capacity` characters long
    data: Vec<char>,
    /// Number of valid characters in `data`
    filled: usize,
    /// Next character to hand out
    position: usize,
    eof: bool,
    refills: usize,
}

impl<S: CharSource> CharBuffer<S> {
    /// Create a buffer holding up to `capacity` characters (at least one)
    pub fn new(source: S, capacity: usize) -> Self {
        Self {
            source,
            data: vec!['\0'; capacity.max(1)],
            filled: 0,
            position: 0,
            eof: false,
            refills: 0,
        }
    }

    /// Return the current character without consuming it.
    ///
    /// `Ok(None)` means the end of the stream.
    pub fn peek(&mut self) -> io::Result<Option<char>> {
        if self.position >= self.filled && !self.eof {
            self.fill()?;
        }

        Ok(self.data[..self.filled].get(self.position).copied())
    }

    /// Consume the current character
    pub fn advance(&mut self) {
        if self.position < self.filled {
            self.position += 1;
        }
    }

    /// Number of batches read from the source so far
    pub fn refills(&self) -> usize {
        self.refills
    }

    fn fill(&mut self) -> io::Result<()> {
        let read = self.source.read_chars(&mut self.data)?;

        self.position = 0;
        self.filled = read;
        self.refills += 1;
        if read == 0 {
            self.eof = true;
        }

        tracing::trace!(read, refills = self.refills, "refilled character buffer");
        Ok(())
    }
}
