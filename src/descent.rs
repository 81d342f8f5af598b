//! Generic recursive descent over wire bytes.
//!
//! All traversals are a single forward pass over one message. Fields whose
//! number is not being looked for are skipped by wire type; a matching field
//! must be length-delimited. The first decode error aborts the pass.

use std::ops::ControlFlow;

use crate::error::{MessageKind, WireError};
use crate::iter::{DeferredError, FieldIter};
use crate::wire::{FieldTag, ProtobufParser, SkipError, WireType};
use crate::Result;

/// Forward-only position within one message.
#[derive(Debug, Clone)]
pub(crate) struct FieldCursor<'a> {
    parser: ProtobufParser<'a>,
    pos: usize,
    message: MessageKind,
}

impl<'a> FieldCursor<'a> {
    pub(crate) fn new(data: &'a [u8], message: MessageKind) -> Self {
        Self {
            parser: ProtobufParser::new(data),
            pos: 0,
            message,
        }
    }

    #[inline]
    pub(crate) fn message(&self) -> MessageKind {
        self.message
    }

    /// Decode the next tag, or `None` once the message is exhausted.
    #[inline]
    pub(crate) fn next_tag(&mut self) -> Result<Option<FieldTag>> {
        if self.pos >= self.parser.len() {
            return Ok(None);
        }
        match self.parser.parse_tag(self.pos) {
            Some((tag, pos)) => {
                self.pos = pos;
                Ok(Some(tag))
            }
            None => Err(WireError::MalformedTag {
                message: self.message,
                offset: self.pos,
            }),
        }
    }

    /// Read the payload of `tag`, which must be length-delimited.
    #[inline]
    pub(crate) fn read_bytes(&mut self, tag: FieldTag) -> Result<&'a [u8]> {
        if tag.wire_type != WireType::LengthDelimited {
            return Err(WireError::UnexpectedWireType {
                message: self.message,
                field: tag.number,
                expected: WireType::LengthDelimited,
                actual: tag.wire_type,
            });
        }
        match self.parser.parse_length_delimited(self.pos) {
            Some((bytes, end)) => {
                self.pos = end;
                Ok(bytes)
            }
            None => Err(self.truncated(tag)),
        }
    }

    /// Skip the value of `tag`.
    #[inline]
    pub(crate) fn skip(&mut self, tag: FieldTag) -> Result<()> {
        match self.parser.skip_field(self.pos, tag.wire_type) {
            Ok(end) => {
                self.pos = end;
                Ok(())
            }
            Err(SkipError::Truncated) => Err(self.truncated(tag)),
            Err(SkipError::Unsupported) => Err(WireError::UnsupportedWireType {
                message: self.message,
                field: tag.number,
                wire_type: tag.wire_type,
            }),
        }
    }

    /// Advance to the next field numbered in `fields` and return its number
    /// and payload, skipping everything else.
    #[inline]
    pub(crate) fn next_match(&mut self, fields: &[u32]) -> Result<Option<(u32, &'a [u8])>> {
        while let Some(tag) = self.next_tag()? {
            if fields.contains(&tag.number) {
                let bytes = self.read_bytes(tag)?;
                return Ok(Some((tag.number, bytes)));
            }
            self.skip(tag)?;
        }
        Ok(None)
    }

    fn truncated(&self, tag: FieldTag) -> WireError {
        WireError::TruncatedPayload {
            message: self.message,
            field: tag.number,
            wire_type: tag.wire_type,
            offset: self.pos,
        }
    }
}

/// Count the occurrences of `field` in `data` without looking inside them.
pub fn count_occurrences(data: &[u8], message: MessageKind, field: u32) -> Result<usize> {
    count_occurrences_any(data, message, &[field])
}

/// Count the fields of `data` whose number is any of `fields`.
pub fn count_occurrences_any(data: &[u8], message: MessageKind, fields: &[u32]) -> Result<usize> {
    let mut cursor = FieldCursor::new(data, message);
    let mut count = 0;
    while cursor.next_match(fields)?.is_some() {
        count += 1;
    }
    Ok(count)
}

/// Hand each occurrence of `field` to `count` and sum what it returns.
pub fn count_via<'a, F>(data: &'a [u8], message: MessageKind, field: u32, count: F) -> Result<usize>
where
    F: FnMut(&'a [u8]) -> Result<usize>,
{
    count_via_any(data, message, &[field], count)
}

/// Like [`count_via`], matching any of `fields`.
pub fn count_via_any<'a, F>(
    data: &'a [u8],
    message: MessageKind,
    fields: &[u32],
    mut count: F,
) -> Result<usize>
where
    F: FnMut(&'a [u8]) -> Result<usize>,
{
    let mut cursor = FieldCursor::new(data, message);
    let mut total = 0;
    while let Some((_, bytes)) = cursor.next_match(fields)? {
        total += count(bytes)?;
    }
    Ok(total)
}

/// Hand each occurrence of `field` to `visit` until it breaks or the message
/// ends.
///
/// A decode error stops the walk and is recorded in the returned
/// [`DeferredError`] instead of being raised; check it once `visit` has been
/// called for the last time.
pub fn for_each<'a, F>(data: &'a [u8], message: MessageKind, field: u32, visit: F) -> DeferredError
where
    F: FnMut(&'a [u8]) -> ControlFlow<()>,
{
    let mut fields = FieldIter::new(data, message, field);
    fields.drive(visit);
    fields.into_deferred()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::wire::encode_length_delimited;
    use prost::encoding::{encode_key, encode_varint, WireType as ProstWireType};

    const KIND: MessageKind = MessageKind::ScopeLogs;

    fn message_field(buf: &mut Vec<u8>, field: u32, payload: &[u8]) {
        encode_length_delimited(field, payload, buf);
    }

    fn varint_field(buf: &mut Vec<u8>, field: u32, value: u64) {
        encode_key(field, ProstWireType::Varint, buf);
        encode_varint(value, buf);
    }

    #[test]
    fn test_count_occurrences_skips_other_fields() {
        let mut buf = Vec::new();
        message_field(&mut buf, 1, b"scope");
        message_field(&mut buf, 2, b"a");
        varint_field(&mut buf, 7, 300);
        message_field(&mut buf, 2, b"bb");
        buf.extend_from_slice(&[0x1D, 1, 2, 3, 4]); // field 3, fixed32
        buf.extend_from_slice(&[0x21, 0, 0, 0, 0, 0, 0, 0, 0]); // field 4, fixed64
        message_field(&mut buf, 2, b"");

        assert_eq!(count_occurrences(&buf, KIND, 2), Ok(3));
        assert_eq!(count_occurrences(&buf, KIND, 1), Ok(1));
        assert_eq!(count_occurrences(&buf, KIND, 9), Ok(0));
        assert_eq!(count_occurrences_any(&buf, KIND, &[1, 2]), Ok(4));
    }

    #[test]
    fn test_count_occurrences_empty() {
        assert_eq!(count_occurrences(&[], KIND, 2), Ok(0));
    }

    #[test]
    fn test_matching_field_with_wrong_wire_type_is_an_error() {
        let mut buf = Vec::new();
        message_field(&mut buf, 2, b"a");
        varint_field(&mut buf, 2, 1);

        let err = count_occurrences(&buf, KIND, 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedWireType);
        assert_eq!(err.message_kind(), KIND);
    }

    #[test]
    fn test_group_is_unsupported() {
        let buf = [0x1B, 0x1C]; // field 3 start group, field 3 end group
        let err = count_occurrences(&buf, KIND, 2).unwrap_err();
        assert_eq!(
            err,
            WireError::UnsupportedWireType {
                message: KIND,
                field: 3,
                wire_type: WireType::StartGroup,
            }
        );
    }

    #[test]
    fn test_truncated_payload() {
        let buf = [0x12, 0x10, 0x01, 0x02]; // field 2 claims 16 bytes, 2 remain
        let err = count_occurrences(&buf, KIND, 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TruncatedPayload);

        // Same when the truncated field is only being skipped
        let err = count_occurrences(&buf, KIND, 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TruncatedPayload);
    }

    #[test]
    fn test_malformed_tag_reports_offset() {
        let mut buf = Vec::new();
        message_field(&mut buf, 2, b"ok");
        let offset = buf.len();
        buf.push(0x80); // unterminated varint

        let err = count_occurrences(&buf, KIND, 2).unwrap_err();
        assert_eq!(err, WireError::MalformedTag { message: KIND, offset });
    }

    #[test]
    fn test_count_via_recurses_and_sums() {
        let mut inner_a = Vec::new();
        message_field(&mut inner_a, 1, b"x");
        message_field(&mut inner_a, 1, b"y");
        let mut inner_b = Vec::new();
        message_field(&mut inner_b, 1, b"z");

        let mut outer = Vec::new();
        message_field(&mut outer, 2, &inner_a);
        message_field(&mut outer, 3, b"ignored");
        message_field(&mut outer, 2, &inner_b);

        let total = count_via(&outer, KIND, 2, |sub| count_occurrences(sub, MessageKind::Span, 1));
        assert_eq!(total, Ok(3));
    }

    #[test]
    fn test_count_via_propagates_inner_error() {
        let mut outer = Vec::new();
        message_field(&mut outer, 2, &[0x0A, 0x05]);

        let err = count_via(&outer, KIND, 2, |sub| count_occurrences(sub, MessageKind::Span, 1))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TruncatedPayload);
        assert_eq!(err.message_kind(), MessageKind::Span);
    }

    #[test]
    fn test_for_each_stops_when_told() {
        let mut buf = Vec::new();
        message_field(&mut buf, 1, b"first");
        message_field(&mut buf, 1, b"second");
        buf.push(0x80); // corrupt, never reached

        let mut seen = Vec::new();
        let deferred = for_each(&buf, KIND, 1, |bytes| {
            seen.push(bytes);
            ControlFlow::Break(())
        });
        assert_eq!(seen, vec![&b"first"[..]]);
        assert!(deferred.get().is_none());
    }

    #[test]
    fn test_for_each_records_error() {
        let mut buf = Vec::new();
        message_field(&mut buf, 1, b"first");
        buf.push(0x80);

        let mut seen = 0;
        let deferred = for_each(&buf, KIND, 1, |_| {
            seen += 1;
            ControlFlow::Continue(())
        });
        assert_eq!(seen, 1);
        assert_eq!(deferred.get().map(WireError::kind), Some(ErrorKind::MalformedTag));
        assert!(deferred.into_result().is_err());
    }
}
