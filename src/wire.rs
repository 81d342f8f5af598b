//! Protobuf wire primitives: tag, varint, fixed-width and length-delimited
//! decoding over a borrowed slice, plus the field skipper.
//!
//! Decoding is position based: every `parse_*` takes the offset to read at and
//! returns the decoded value together with the offset just past it, or `None`
//! when the bytes run out. Nothing here knows about OTLP; callers attach the
//! message context when turning a `None` into an error.
//!
//! Encoding goes through `prost::encoding` so headers we emit are exactly what
//! prost would write for the same field.

use std::fmt;

use prost::bytes::BufMut;
use prost::encoding;

/// Largest field number protobuf allows (2^29 - 1).
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// Longest varint encoding of a u64.
pub const MAX_VARINT_LEN: usize = 10;

/// Wire types that can appear in a tag.
///
/// Raw values 6 and 7 are not wire types at all and make the tag malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    StartGroup = 3,
    EndGroup = 4,
    Fixed32 = 5,
}

impl WireType {
    #[inline]
    pub const fn from_raw(raw: u8) -> Option<WireType> {
        match raw {
            0 => Some(WireType::Varint),
            1 => Some(WireType::Fixed64),
            2 => Some(WireType::LengthDelimited),
            3 => Some(WireType::StartGroup),
            4 => Some(WireType::EndGroup),
            5 => Some(WireType::Fixed32),
            _ => None,
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WireType::Varint => "varint",
            WireType::Fixed64 => "fixed64",
            WireType::LengthDelimited => "length-delimited",
            WireType::StartGroup => "start-group",
            WireType::EndGroup => "end-group",
            WireType::Fixed32 => "fixed32",
        };
        f.write_str(name)
    }
}

/// A decoded field key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTag {
    pub number: u32,
    pub wire_type: WireType,
}

/// Why a field could not be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipError {
    /// The value runs past the end of the data.
    Truncated,
    /// Group wire types have no length we can skip by.
    Unsupported,
}

/// Slice-backed protobuf decoder.
#[derive(Debug, Clone, Copy)]
pub struct ProtobufParser<'a> {
    data: &'a [u8],
}

impl<'a> ProtobufParser<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Varint with a fast path for single-byte values
    #[inline]
    pub fn parse_varint(&self, mut pos: usize) -> Option<(u64, usize)> {
        let byte = *self.data.get(pos)?;
        pos += 1;

        // Values 0-127 are the common case: tags and small lengths
        if byte & 0x80 == 0 {
            return Some((byte as u64, pos));
        }

        let mut result = (byte & 0x7F) as u64;
        let mut shift = 7;
        while shift < 64 {
            let byte = *self.data.get(pos)?;
            pos += 1;

            // Tenth byte may only contribute the top bit
            if shift == 63 && byte > 1 {
                return None;
            }
            result |= ((byte & 0x7F) as u64) << shift;

            if byte & 0x80 == 0 {
                return Some((result, pos));
            }

            shift += 7;
        }

        None
    }

    /// Field key: number and wire type
    #[inline]
    pub fn parse_tag(&self, pos: usize) -> Option<(FieldTag, usize)> {
        let (key, pos) = self.parse_varint(pos)?;
        let number = u32::try_from(key >> 3).ok()?;
        if number == 0 || number > MAX_FIELD_NUMBER {
            return None;
        }
        let wire_type = WireType::from_raw((key & 0x7) as u8)?;
        Some((FieldTag { number, wire_type }, pos))
    }

    /// Length prefix followed by that many bytes
    #[inline]
    pub fn parse_length_delimited(&self, pos: usize) -> Option<(&'a [u8], usize)> {
        let (length, pos) = self.parse_varint(pos)?;
        let length = usize::try_from(length).ok()?;
        let end = pos.checked_add(length)?;
        let bytes = self.data.get(pos..end)?;
        Some((bytes, end))
    }

    #[inline]
    pub fn parse_fixed32(&self, pos: usize) -> Option<(u32, usize)> {
        let bytes = self.data.get(pos..pos.checked_add(4)?)?;
        let value = u32::from_le_bytes(bytes.try_into().ok()?);
        Some((value, pos + 4))
    }

    #[inline]
    pub fn parse_fixed64(&self, pos: usize) -> Option<(u64, usize)> {
        let bytes = self.data.get(pos..pos.checked_add(8)?)?;
        let value = u64::from_le_bytes(bytes.try_into().ok()?);
        Some((value, pos + 8))
    }

    /// Consume one field value of the given wire type starting at `pos`,
    /// returning the offset just past it.
    #[inline]
    pub fn skip_field(&self, pos: usize, wire_type: WireType) -> Result<usize, SkipError> {
        let end = match wire_type {
            WireType::Varint => self.parse_varint(pos).map(|(_, end)| end),
            WireType::Fixed64 => self.parse_fixed64(pos).map(|(_, end)| end),
            WireType::LengthDelimited => self.parse_length_delimited(pos).map(|(_, end)| end),
            WireType::Fixed32 => self.parse_fixed32(pos).map(|(_, end)| end),
            WireType::StartGroup | WireType::EndGroup => return Err(SkipError::Unsupported),
        };
        end.ok_or(SkipError::Truncated)
    }
}

/// Decode the tag at the start of `bytes`: `(tag, bytes consumed)`.
pub fn decode_tag(bytes: &[u8]) -> Option<(FieldTag, usize)> {
    ProtobufParser::new(bytes).parse_tag(0)
}

/// Decode the varint at the start of `bytes`: `(value, bytes consumed)`.
pub fn decode_varint(bytes: &[u8]) -> Option<(u64, usize)> {
    ProtobufParser::new(bytes).parse_varint(0)
}

/// Decode the length-delimited value at the start of `bytes`:
/// `(payload, bytes consumed including the prefix)`.
pub fn decode_length_delimited(bytes: &[u8]) -> Option<(&[u8], usize)> {
    ProtobufParser::new(bytes).parse_length_delimited(0)
}

/// Bytes needed for the key and length prefix of a length-delimited field.
pub fn length_delimited_header_len(field: u32, payload_len: usize) -> usize {
    encoding::key_len(field) + encoding::encoded_len_varint(payload_len as u64)
}

/// Write the key and length prefix of a length-delimited field.
pub fn encode_length_delimited_header(field: u32, payload_len: usize, buf: &mut impl BufMut) {
    encoding::encode_key(field, encoding::WireType::LengthDelimited, buf);
    encoding::encode_varint(payload_len as u64, buf);
}

/// Write a complete length-delimited field.
pub fn encode_length_delimited(field: u32, payload: &[u8], buf: &mut impl BufMut) {
    encode_length_delimited_header(field, payload.len(), buf);
    buf.put_slice(payload);
}
