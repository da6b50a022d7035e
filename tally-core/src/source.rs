//! Character sources feeding the tokenizer
//!
//! A [`CharSource`] hands out characters in batches. The tokenizer never
//! seeks and never asks for more than one buffer's worth at a time, so any
//! forward-only stream can back it: an in-memory string ([`StrSource`]) or an
//! arbitrary byte reader decoded on the fly ([`ReaderSource`]).

use std::io::{self, Read};
use std::str::Chars;

use encoding_rs::{CoderResult, Decoder, Encoding, UTF_8};

use crate::error::{Error, Result};

/// Default number of bytes pulled from a reader per read call (8KB)
pub const DEFAULT_READ_CHUNK: usize = 8 * 1024;

/// Supplier of characters in batches
pub trait CharSource {
    /// Fill `buf` with up to `buf.len()` characters.
    ///
    /// Returns the number of characters written; `Ok(0)` for a non-empty
    /// `buf` means the end of the stream was reached.
    fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize> {
        (**self).read_chars(buf)
    }
}

impl<S: CharSource + ?Sized> CharSource for Box<S> {
    fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize> {
        (**self).read_chars(buf)
    }
}

/// Character source over an in-memory string
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    chars: Chars<'a>,
}

impl<'a> StrSource<'a> {
    /// Create a source that yields the characters of `text`
    pub fn new(text: &'a str) -> Self {
        Self { chars: text.chars() }
    }
}

impl<'a> From<&'a str> for StrSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl CharSource for StrSource<'_> {
    fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize> {
        let mut count = 0;
        for (slot, ch) in buf.iter_mut().zip(self.chars.by_ref()) {
            *slot = ch;
            count += 1;
        }
        Ok(count)
    }
}

/// Character source decoding a byte reader incrementally.
///
/// Multi-byte sequences split across reads are reassembled by the decoder.
/// A byte order mark selects the encoding it names. Malformed input decodes
/// to U+FFFD, which the tokenizer treats as a separator.
pub struct ReaderSource<R> {
    reader: R,
    decoder: Decoder,
    bytes: Vec<u8>,
    decoded: String,
    cursor: usize,
    finished: bool,
}

impl<R: Read> ReaderSource<R> {
    /// Create a UTF-8 source
    pub fn new(reader: R) -> Self {
        Self::with_encoding(reader, UTF_8)
    }

    /// Create a source decoding with the given encoding
    pub fn with_encoding(reader: R, encoding: &'static Encoding) -> Self {
        Self::with_read_chunk(reader, encoding, DEFAULT_READ_CHUNK)
    }

    /// Create a source for a WHATWG encoding label such as `"windows-1251"`
    pub fn with_label(reader: R, label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| Error::UnknownEncoding(label.to_string()))?;
        Ok(Self::with_encoding(reader, encoding))
    }

    /// Create a source that pulls at most `read_chunk` bytes per read call
    pub fn with_read_chunk(reader: R, encoding: &'static Encoding, read_chunk: usize) -> Self {
        Self {
            reader,
            decoder: encoding.new_decoder(),
            bytes: vec![0u8; read_chunk.max(1)],
            decoded: String::new(),
            cursor: 0,
            finished: false,
        }
    }

    /// Encoding currently used by the decoder
    pub fn encoding(&self) -> &'static Encoding {
        self.decoder.encoding()
    }

    /// Consume the source, returning the wrapped reader
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read and decode until at least one character is pending or the
    /// reader is drained
    fn refill(&mut self) -> io::Result<()> {
        self.decoded.clear();
        self.cursor = 0;

        while self.decoded.is_empty() && !self.finished {
            let read = loop {
                match self.reader.read(&mut self.bytes) {
                    Ok(n) => break n,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                }
            };

            let last = read == 0;
            let mut consumed = 0;
            loop {
                let remaining = read - consumed;
                let needed = self
                    .decoder
                    .max_utf8_buffer_length(remaining)
                    .unwrap_or(remaining * 3 + 4);
                self.decoded.reserve(needed);

                let (result, used, _) = self.decoder.decode_to_string(
                    &self.bytes[consumed..read],
                    &mut self.decoded,
                    last,
                );
                consumed += used;

                match result {
                    CoderResult::InputEmpty => break,
                    CoderResult::OutputFull => continue,
                }
            }

            if last {
                self.finished = true;
            }
        }

        tracing::trace!(
            bytes = self.decoded.len(),
            finished = self.finished,
            "decoded reader chunk"
        );
        Ok(())
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        if self.cursor >= self.decoded.len() {
            self.refill()?;
        }

        let mut count = 0;
        let mut advanced = 0;
        for (slot, ch) in buf.iter_mut().zip(self.decoded[self.cursor..].chars()) {
            *slot = ch;
            advanced += ch.len_utf8();
            count += 1;
        }
        self.cursor += advanced;

        Ok(count)
    }
}

impl<R> std::fmt::Debug for ReaderSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReaderSource")
            .field("encoding", &self.decoder.encoding().name())
            .field("pending", &(self.decoded.len() - self.cursor))
            .field("finished", &self.finished)
            .finish()
    }
}
