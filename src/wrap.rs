//! Re-wrap an extracted sub-message as field 1 of a fresh top-level message.
//!
//! A `ResourceMetrics` wrapped this way is a complete
//! `ExportMetricsServiceRequest` with one resource, and likewise for logs and
//! traces, so everything that works on a batch works on the result.

use std::io::{self, Write};

use crate::wire::{
    encode_length_delimited, encode_length_delimited_header, length_delimited_header_len,
    MAX_VARINT_LEN,
};

/// Field the payload is written under.
pub const WRAPPED_FIELD: u32 = 1;

// One-byte key for field 1 plus the longest length prefix
const MAX_HEADER_LEN: usize = 1 + MAX_VARINT_LEN;

/// Size of `wrap(payload)` for a payload of `payload_len` bytes.
pub fn wrapped_len(payload_len: usize) -> usize {
    length_delimited_header_len(WRAPPED_FIELD, payload_len) + payload_len
}

/// Copy `payload` into a new buffer as a single length-delimited field 1.
pub fn wrap(payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(wrapped_len(payload.len()));
    encode_length_delimited(WRAPPED_FIELD, payload, &mut buf);
    buf
}

/// Write `wrap(payload)` to `sink` without building it in memory first.
///
/// Only the tag and length prefix are staged; the payload goes straight from
/// the caller's buffer to the sink. Returns the number of bytes written.
pub fn write_wrapped<W: Write + ?Sized>(payload: &[u8], sink: &mut W) -> io::Result<usize> {
    let mut header = [0u8; MAX_HEADER_LEN];
    let mut cursor = &mut header[..];
    encode_length_delimited_header(WRAPPED_FIELD, payload.len(), &mut cursor);
    let header_len = MAX_HEADER_LEN - cursor.len();

    sink.write_all(&header[..header_len])?;
    sink.write_all(payload)?;
    Ok(header_len + payload.len())
}
