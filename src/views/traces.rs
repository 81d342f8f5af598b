use std::fmt;

use super::WireView;
use crate::error::MessageKind;
use crate::extract::{extract_fixed_bytes, find_bytes};
use crate::iter::Messages;
use crate::schema::{
    RESOURCE_SCOPES, SCOPE_INSTRUMENTATION, SCOPE_ITEMS, SPAN_ID_LEN, SPAN_PARENT_SPAN_ID,
    SPAN_SPAN_ID, SPAN_TRACE_ID, TRACES, TRACE_ID_LEN,
};
use crate::Result;

super::signal_views! {
    /// An encoded `ExportTracesServiceRequest`.
    batch: ExportTracesServiceRequest,
    /// One encoded `ResourceSpans` from a traces batch.
    resource: ResourceSpans,
    schema: crate::schema::TRACES,
    /// Number of spans across all scopes.
    count: span_count,
    resources: resource_spans,
}

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name([u8; $len]);

        impl $name {
            /// The all-zero ID, which OTLP treats as unset.
            pub const INVALID: Self = Self([0; $len]);

            pub const fn from_bytes(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            pub const fn to_bytes(self) -> [u8; $len] {
                self.0
            }

            pub fn is_valid(&self) -> bool {
                *self != Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for byte in self.0 {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }
    };
}

id_type!(
    /// 16-byte trace identifier.
    TraceId,
    TRACE_ID_LEN
);

id_type!(
    /// 8-byte span identifier.
    SpanId,
    SPAN_ID_LEN
);

impl<'a> ResourceSpans<'a> {
    /// Lazily iterate the scopes of this resource.
    pub fn scope_spans(&self) -> Messages<'a, ScopeSpans<'a>> {
        Messages::new(self.as_bytes(), MessageKind::ResourceSpans, RESOURCE_SCOPES)
    }
}

/// One encoded `ScopeSpans`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeSpans<'a> {
    bytes: &'a [u8],
}

impl<'a> ScopeSpans<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Raw `InstrumentationScope` bytes, if the scope carries one.
    pub fn scope(&self) -> Result<Option<&'a [u8]>> {
        find_bytes(self.bytes, MessageKind::ScopeSpans, SCOPE_INSTRUMENTATION)
    }

    pub fn span_count(&self) -> Result<usize> {
        TRACES.count_in_scope(self.bytes)
    }

    pub fn spans(&self) -> Messages<'a, Span<'a>> {
        Messages::new(self.bytes, MessageKind::ScopeSpans, SCOPE_ITEMS)
    }
}

/// One encoded `Span`.
///
/// ID accessors scan from the start of the span and stop at the first
/// occurrence of the field. An unset or zero-length ID reads as `INVALID`;
/// any other length than the ID's own is
/// [`WireError::SizeMismatch`](crate::WireError::SizeMismatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span<'a> {
    bytes: &'a [u8],
}

impl<'a> Span<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn trace_id(&self) -> Result<TraceId> {
        let id = extract_fixed_bytes::<TRACE_ID_LEN>(self.bytes, MessageKind::Span, SPAN_TRACE_ID)?;
        Ok(id.map_or(TraceId::INVALID, |bytes| TraceId(*bytes)))
    }

    pub fn span_id(&self) -> Result<SpanId> {
        self.span_id_field(SPAN_SPAN_ID)
    }

    /// `INVALID` for a root span.
    pub fn parent_span_id(&self) -> Result<SpanId> {
        self.span_id_field(SPAN_PARENT_SPAN_ID)
    }

    fn span_id_field(&self, field: u32) -> Result<SpanId> {
        let id = extract_fixed_bytes::<SPAN_ID_LEN>(self.bytes, MessageKind::Span, field)?;
        Ok(id.map_or(SpanId::INVALID, |bytes| SpanId(*bytes)))
    }
}

impl<'a> WireView<'a> for ScopeSpans<'a> {
    const KIND: MessageKind = MessageKind::ScopeSpans;

    fn from_bytes(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }

    fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> WireView<'a> for Span<'a> {
    const KIND: MessageKind = MessageKind::Span;

    fn from_bytes(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }

    fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> From<&'a [u8]> for ScopeSpans<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a [u8]> for Span<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}
