// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Body serialization strategies
//!
//! A `BodyProcessor` knows how to write one kind of payload onto an output
//! sink and to contribute transport-level headers before the write begins.
//! The variant set is closed: string, bytes, file, stream, and the three
//! multipart form-data wrappers.
//!
//! Processors are single-use per write invocation. A stream-backed processor
//! requests a fresh stream from its supplier on every `write_content` call,
//! since a consumed stream cannot be replayed.

mod multipart;

pub use multipart::{MultipartBody, MULTIPART_BOUNDARY};

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use bytes::Bytes;

use crate::error::Result;

/// Copy-buffer size used when none is supplied
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Zero-argument factory producing a fresh readable stream per invocation
pub type StreamSupplier = Box<dyn Fn() -> io::Result<Box<dyn Read + Send>> + Send + Sync>;

/// Body payload strategy attached to a request
pub enum BodyProcessor {
    /// In-memory text, written as UTF-8 and flushed
    Text(String),
    /// In-memory byte buffer, written verbatim
    Bytes(Bytes),
    /// File on disk, copied whole
    File(PathBuf),
    /// Stream supplier, invoked fresh per write
    Stream(StreamSupplier),
    /// Single-part multipart/form-data envelope
    Multipart(MultipartBody),
}

impl BodyProcessor {
    /// Plain text payload
    pub fn text(content: impl Into<String>) -> Self {
        BodyProcessor::Text(content.into())
    }

    /// Raw bytes payload
    pub fn bytes(data: impl Into<Bytes>) -> Self {
        BodyProcessor::Bytes(data.into())
    }

    /// File payload; the file is opened at write time
    pub fn file(path: impl Into<PathBuf>) -> Self {
        BodyProcessor::File(path.into())
    }

    /// Streamed payload; the supplier must hand out a fresh stream each call
    pub fn stream<F>(supplier: F) -> Self
    where
        F: Fn() -> io::Result<Box<dyn Read + Send>> + Send + Sync + 'static,
    {
        BodyProcessor::Stream(Box::new(supplier))
    }

    /// Multipart form-data file upload
    ///
    /// `key` defaults to the file name, `buffer_size` to
    /// [`DEFAULT_BUFFER_SIZE`].
    pub fn multipart_file(
        path: impl Into<PathBuf>,
        key: Option<&str>,
        buffer_size: Option<usize>,
    ) -> Self {
        BodyProcessor::Multipart(MultipartBody::from_file(path.into(), key, buffer_size))
    }

    /// Multipart form-data upload of an in-memory buffer
    ///
    /// `name` is the filename advertised in the part header; `key` defaults
    /// to `name`.
    pub fn multipart_bytes(
        data: impl Into<Bytes>,
        name: impl Into<String>,
        key: Option<&str>,
        buffer_size: Option<usize>,
    ) -> Self {
        BodyProcessor::Multipart(MultipartBody::from_bytes(
            data.into(),
            name.into(),
            key,
            buffer_size,
        ))
    }

    /// Multipart form-data upload of a streamed payload
    pub fn multipart_stream<F>(
        supplier: F,
        name: impl Into<String>,
        key: Option<&str>,
        buffer_size: Option<usize>,
    ) -> Self
    where
        F: Fn() -> io::Result<Box<dyn Read + Send>> + Send + Sync + 'static,
    {
        BodyProcessor::Multipart(MultipartBody::from_stream(
            Box::new(supplier),
            name.into(),
            key,
            buffer_size,
        ))
    }

    /// Write the payload fully onto the sink
    ///
    /// Resources opened here (file handles, streams) are released before
    /// this returns, on every exit path. I/O failures propagate unmodified;
    /// a failed write may leave the sink partially written.
    pub fn write_content(&self, sink: &mut dyn Write) -> Result<()> {
        match self {
            BodyProcessor::Text(content) => {
                sink.write_all(content.as_bytes())?;
                sink.flush()?;
            }
            BodyProcessor::Bytes(data) => {
                sink.write_all(data)?;
            }
            BodyProcessor::File(path) => {
                let mut file = fs::File::open(path)?;
                io::copy(&mut file, sink)?;
            }
            BodyProcessor::Stream(supplier) => {
                let mut stream = supplier()?;
                io::copy(&mut stream, sink)?;
            }
            BodyProcessor::Multipart(body) => {
                body.write(sink)?;
            }
        }
        Ok(())
    }

    /// Contribute transport-level headers before the write begins
    ///
    /// No-op for the simple variants; multipart sets keep-alive, no-cache
    /// and the boundary-carrying content type.
    pub fn prepare_transport(&self, headers: &mut HashMap<String, String>) {
        if let BodyProcessor::Multipart(body) = self {
            body.prepare_transport(headers);
        }
    }
}

impl fmt::Debug for BodyProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyProcessor::Text(content) => {
                f.debug_struct("Text").field("len", &content.len()).finish()
            }
            BodyProcessor::Bytes(data) => {
                f.debug_struct("Bytes").field("len", &data.len()).finish()
            }
            BodyProcessor::File(path) => f.debug_struct("File").field("path", path).finish(),
            BodyProcessor::Stream(_) => f.debug_struct("Stream").finish_non_exhaustive(),
            BodyProcessor::Multipart(body) => fmt::Debug::fmt(body, f),
        }
    }
}

/// Copy `reader` to `sink` through a bounded buffer
pub(crate) fn copy_buffered(
    reader: &mut dyn Read,
    sink: &mut dyn Write,
    buffer_size: usize,
) -> io::Result<u64> {
    let mut buffer = vec![0u8; buffer_size.max(1)];
    let mut total = 0u64;
    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            return Ok(total);
        }
        sink.write_all(&buffer[..n])?;
        total += n as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_text_round_trip() {
        let processor = BodyProcessor::text("hello, sink");
        let mut sink = Vec::new();
        processor.write_content(&mut sink).unwrap();
        assert_eq!(sink, b"hello, sink");
    }

    #[test]
    fn test_bytes_round_trip() {
        let payload = vec![0u8, 1, 2, 254, 255];
        let processor = BodyProcessor::bytes(payload.clone());
        let mut sink = Vec::new();
        processor.write_content(&mut sink).unwrap();
        assert_eq!(sink, payload);
    }

    #[test]
    fn test_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"file payload bytes").unwrap();
        file.flush().unwrap();

        let processor = BodyProcessor::file(file.path());
        let mut sink = Vec::new();
        processor.write_content(&mut sink).unwrap();
        assert_eq!(sink, b"file payload bytes");
    }

    #[test]
    fn test_missing_file_surfaces_io_error() {
        let processor = BodyProcessor::file("/definitely/not/a/real/path");
        let mut sink = Vec::new();
        let err = processor.write_content(&mut sink).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_stream_round_trip() {
        let processor = BodyProcessor::stream(|| {
            Ok(Box::new(io::Cursor::new(b"streamed".to_vec())) as Box<dyn Read + Send>)
        });
        let mut sink = Vec::new();
        processor.write_content(&mut sink).unwrap();
        assert_eq!(sink, b"streamed");
    }

    #[test]
    fn test_stream_supplier_invoked_per_write() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let processor = BodyProcessor::stream(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(io::Cursor::new(b"fresh".to_vec())) as Box<dyn Read + Send>)
        });

        let mut first = Vec::new();
        processor.write_content(&mut first).unwrap();
        let mut second = Vec::new();
        processor.write_content(&mut second).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(first, b"fresh");
        assert_eq!(second, b"fresh");
    }

    #[test]
    fn test_simple_variants_add_no_transport_headers() {
        let mut headers = HashMap::new();
        BodyProcessor::text("x").prepare_transport(&mut headers);
        BodyProcessor::bytes(vec![1]).prepare_transport(&mut headers);
        assert!(headers.is_empty());
    }

    #[test]
    fn test_copy_buffered_smaller_buffer_than_payload() {
        let payload: Vec<u8> = (0..=255).collect();
        let mut reader = io::Cursor::new(payload.clone());
        let mut sink = Vec::new();
        let copied = copy_buffered(&mut reader, &mut sink, 7).unwrap();
        assert_eq!(copied, payload.len() as u64);
        assert_eq!(sink, payload);
    }
}
