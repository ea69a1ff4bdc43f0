// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Multipart form-data envelope
//!
//! Each request carries exactly one part, so the boundary is a fixed
//! literal rather than a per-request random token. That constraint holds
//! only as long as the envelope stays single-part.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use bytes::Bytes;

use super::{copy_buffered, StreamSupplier, DEFAULT_BUFFER_SIZE};
use crate::error::Result;
use crate::headers::{CACHE_CONTROL, CONNECTION, CONTENT_TYPE};

/// Fixed boundary literal shared by all multipart requests
pub const MULTIPART_BOUNDARY: &str = "----remora-form-boundary";

/// Payload source wrapped by the multipart envelope
enum MultipartSource {
    File(PathBuf),
    Bytes(Bytes),
    Stream(StreamSupplier),
}

/// One-part multipart/form-data body
///
/// Wraps a file, byte buffer or stream source together with the form field
/// key, the advertised filename, and the copy-buffer size.
pub struct MultipartBody {
    source: MultipartSource,
    name: String,
    key: String,
    buffer_size: usize,
}

impl MultipartBody {
    pub(super) fn from_file(path: PathBuf, key: Option<&str>, buffer_size: Option<usize>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            key: key.map(str::to_string).unwrap_or_else(|| name.clone()),
            name,
            source: MultipartSource::File(path),
            buffer_size: buffer_size.unwrap_or(DEFAULT_BUFFER_SIZE),
        }
    }

    pub(super) fn from_bytes(
        data: Bytes,
        name: String,
        key: Option<&str>,
        buffer_size: Option<usize>,
    ) -> Self {
        Self {
            key: key.map(str::to_string).unwrap_or_else(|| name.clone()),
            name,
            source: MultipartSource::Bytes(data),
            buffer_size: buffer_size.unwrap_or(DEFAULT_BUFFER_SIZE),
        }
    }

    pub(super) fn from_stream(
        supplier: StreamSupplier,
        name: String,
        key: Option<&str>,
        buffer_size: Option<usize>,
    ) -> Self {
        Self {
            key: key.map(str::to_string).unwrap_or_else(|| name.clone()),
            name,
            source: MultipartSource::Stream(supplier),
            buffer_size: buffer_size.unwrap_or(DEFAULT_BUFFER_SIZE),
        }
    }

    /// Form field key for the single part
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Filename advertised in the part header
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Copy-buffer size used for the payload copy
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// The content type carried by the transport header, boundary included
    pub fn content_type() -> String {
        format!("multipart/form-data;boundary={MULTIPART_BOUNDARY}")
    }

    /// Transport headers required before a multipart write
    pub(super) fn prepare_transport(&self, headers: &mut HashMap<String, String>) {
        headers.insert(CONNECTION.to_string(), "Keep-Alive".to_string());
        headers.insert(CACHE_CONTROL.to_string(), "no-cache".to_string());
        headers.insert(CONTENT_TYPE.to_string(), Self::content_type());
    }

    /// Write the full envelope: boundary line, part header, payload,
    /// trailing CRLF and closing boundary
    pub(super) fn write(&self, sink: &mut dyn Write) -> Result<()> {
        write!(sink, "--{MULTIPART_BOUNDARY}\r\n")?;
        write!(
            sink,
            "Content-Disposition: form-data; name=\"{}\";filename=\"{}\"\r\n\r\n",
            self.key, self.name
        )?;

        match &self.source {
            MultipartSource::File(path) => {
                let mut file = fs::File::open(path)?;
                copy_buffered(&mut file, sink, self.buffer_size)?;
            }
            MultipartSource::Bytes(data) => {
                copy_buffered(&mut data.as_ref(), sink, self.buffer_size)?;
            }
            MultipartSource::Stream(supplier) => {
                let mut stream = supplier()?;
                copy_buffered(&mut stream, sink, self.buffer_size)?;
            }
        }

        write!(sink, "\r\n--{MULTIPART_BOUNDARY}--\r\n")?;
        sink.flush()?;
        Ok(())
    }
}

impl fmt::Debug for MultipartBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source {
            MultipartSource::File(_) => "file",
            MultipartSource::Bytes(_) => "bytes",
            MultipartSource::Stream(_) => "stream",
        };
        f.debug_struct("Multipart")
            .field("source", &source)
            .field("name", &self.name)
            .field("key", &self.key)
            .field("buffer_size", &self.buffer_size)
            .finish()
    }
}
