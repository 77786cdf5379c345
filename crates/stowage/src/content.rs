//! Content input for store operations.
//!
//! The store accepts either raw bytes or an arbitrary byte stream. Both are
//! expressed as [`ContentSource`] and consumed exactly once by draining into
//! the destination in bounded-size chunks, so memory stays flat no matter how
//! large the stream is.

use std::fmt;
use std::io::{self, Read, Write};

/// Chunk size for draining streams and hashing files.
pub(crate) const CHUNK_SIZE: usize = 64 * 1024;

/// Byte content destined for a stored file.
pub enum ContentSource<'a> {
    /// Raw bytes, written in a single call.
    Bytes(&'a [u8]),
    /// A readable byte stream, drained to completion.
    Stream(Box<dyn Read + 'a>),
}

impl<'a> ContentSource<'a> {
    /// Wrap a reader as a streaming content source.
    pub fn stream(reader: impl Read + 'a) -> Self {
        Self::Stream(Box::new(reader))
    }

    /// Drain the entire content into `dest`, returning the bytes written.
    pub(crate) fn drain_to(self, dest: &mut dyn Write) -> io::Result<u64> {
        match self {
            Self::Bytes(bytes) => {
                dest.write_all(bytes)?;
                Ok(bytes.len() as u64)
            }
            Self::Stream(mut reader) => {
                let mut buffer = [0u8; CHUNK_SIZE];
                let mut written = 0u64;

                loop {
                    let n = reader.read(&mut buffer)?;
                    if n == 0 {
                        break;
                    }
                    dest.write_all(&buffer[..n])?;
                    written += n as u64;
                }

                Ok(written)
            }
        }
    }
}

impl fmt::Debug for ContentSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(bytes) => write!(f, "ContentSource::Bytes({} bytes)", bytes.len()),
            Self::Stream(_) => write!(f, "ContentSource::Stream"),
        }
    }
}

impl<'a> From<&'a [u8]> for ContentSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ContentSource<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for ContentSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::Bytes(text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_drain_bytes() {
        let mut dest = Vec::new();
        let written = ContentSource::from(b"hello").drain_to(&mut dest).unwrap();

        assert_eq!(written, 5);
        assert_eq!(dest, b"hello");
    }

    #[test]
    fn test_drain_stream() {
        let mut dest = Vec::new();
        let source = ContentSource::stream(Cursor::new(b"streamed".to_vec()));
        let written = source.drain_to(&mut dest).unwrap();

        assert_eq!(written, 8);
        assert_eq!(dest, b"streamed");
    }

    #[test]
    fn test_drain_stream_larger_than_chunk() {
        let data = vec![0x41u8; CHUNK_SIZE * 2 + 17];
        let mut dest = Vec::new();
        let written = ContentSource::stream(Cursor::new(data.clone()))
            .drain_to(&mut dest)
            .unwrap();

        assert_eq!(written, data.len() as u64);
        assert_eq!(dest, data);
    }

    #[test]
    fn test_drain_empty_stream() {
        let mut dest = Vec::new();
        let written = ContentSource::stream(Cursor::new(Vec::new()))
            .drain_to(&mut dest)
            .unwrap();

        assert_eq!(written, 0);
        assert!(dest.is_empty());
    }

    #[test]
    fn test_from_str() {
        let mut dest = Vec::new();
        ContentSource::from("text").drain_to(&mut dest).unwrap();
        assert_eq!(dest, b"text");
    }
}
