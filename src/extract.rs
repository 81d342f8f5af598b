//! Pull single fields out of a message without walking past them.

use crate::descent::FieldCursor;
use crate::error::{MessageKind, WireError};
use crate::schema::RESOURCE;
use crate::Result;

/// Payload of the first occurrence of `field`, which must be
/// length-delimited. Scanning stops at the match.
pub fn find_bytes(data: &[u8], message: MessageKind, field: u32) -> Result<Option<&[u8]>> {
    let mut cursor = FieldCursor::new(data, message);
    Ok(cursor.next_match(&[field])?.map(|(_, bytes)| bytes))
}

/// Raw `Resource` bytes from a `ResourceMetrics`, `ResourceLogs` or
/// `ResourceSpans` message.
///
/// A missing resource is an error: routing keys off resource identity, and an
/// empty slice would silently hash every resourceless batch to one place.
pub fn extract_resource(data: &[u8], message: MessageKind) -> Result<&[u8]> {
    find_bytes(data, message, RESOURCE)?.ok_or(WireError::FieldNotFound {
        message,
        field: RESOURCE,
    })
}

/// A `bytes` field that is either unset or exactly `N` bytes long.
///
/// Proto3 writes an unset `bytes` field as nothing at all, and some encoders
/// write it as a zero-length value; both come back as `None`. Any other
/// length is a [`WireError::SizeMismatch`].
pub fn extract_fixed_bytes<const N: usize>(
    data: &[u8],
    message: MessageKind,
    field: u32,
) -> Result<Option<&[u8; N]>> {
    match find_bytes(data, message, field)? {
        None | Some([]) => Ok(None),
        Some(bytes) => <&[u8; N]>::try_from(bytes)
            .map(Some)
            .map_err(|_| WireError::SizeMismatch {
                message,
                field,
                expected: N,
                actual: bytes.len(),
            }),
    }
}
