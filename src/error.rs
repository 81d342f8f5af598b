//! Errors raised while walking OTLP wire bytes.
//!
//! Every error names the message being walked when it occurred, so a failure
//! deep inside a batch still says whether it was a `Metric`, a `ScopeSpans`
//! or the top-level request that was corrupt.

use std::fmt;

use thiserror::Error;

use crate::wire::WireType;

/// The OTLP message a traversal was walking when it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    ExportMetricsServiceRequest,
    ResourceMetrics,
    ScopeMetrics,
    Metric,
    /// Gauge, Sum, Histogram, ExponentialHistogram or Summary.
    MetricData,
    ExportLogsServiceRequest,
    ResourceLogs,
    ScopeLogs,
    ExportTracesServiceRequest,
    ResourceSpans,
    ScopeSpans,
    Span,
}

impl MessageKind {
    pub const fn name(self) -> &'static str {
        match self {
            MessageKind::ExportMetricsServiceRequest => "ExportMetricsServiceRequest",
            MessageKind::ResourceMetrics => "ResourceMetrics",
            MessageKind::ScopeMetrics => "ScopeMetrics",
            MessageKind::Metric => "Metric",
            MessageKind::MetricData => "metric data",
            MessageKind::ExportLogsServiceRequest => "ExportLogsServiceRequest",
            MessageKind::ResourceLogs => "ResourceLogs",
            MessageKind::ScopeLogs => "ScopeLogs",
            MessageKind::ExportTracesServiceRequest => "ExportTracesServiceRequest",
            MessageKind::ResourceSpans => "ResourceSpans",
            MessageKind::ScopeSpans => "ScopeSpans",
            MessageKind::Span => "Span",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Discriminant of a [`WireError`], for callers that branch on the failure
/// class without caring about the context fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedTag,
    TruncatedPayload,
    UnsupportedWireType,
    UnexpectedWireType,
    FieldNotFound,
    SizeMismatch,
}

/// Errors that can occur while walking wire bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// Tag could not be decoded: truncated or overlong varint, field number
    /// out of range, or a wire type outside 0..=5.
    #[error("malformed protobuf tag in {message} at offset {offset}")]
    MalformedTag { message: MessageKind, offset: usize },

    /// A field value runs past the end of the enclosing message.
    #[error("truncated payload in {message}: field {field} ({wire_type}) at offset {offset}")]
    TruncatedPayload {
        message: MessageKind,
        field: u32,
        wire_type: WireType,
        offset: usize,
    },

    /// Groups are not supported.
    #[error("unsupported wire type {wire_type} for field {field} in {message}")]
    UnsupportedWireType {
        message: MessageKind,
        field: u32,
        wire_type: WireType,
    },

    /// Field number matches the schema but the wire type does not.
    #[error("wrong wire type for field {field} in {message}: expected {expected}, got {actual}")]
    UnexpectedWireType {
        message: MessageKind,
        field: u32,
        expected: WireType,
        actual: WireType,
    },

    /// A required field never appeared.
    #[error("field {field} not found in {message}")]
    FieldNotFound { message: MessageKind, field: u32 },

    /// Fixed-size field encoded with the wrong length.
    #[error("field {field} in {message} has unexpected size: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        message: MessageKind,
        field: u32,
        expected: usize,
        actual: usize,
    },
}

impl WireError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WireError::MalformedTag { .. } => ErrorKind::MalformedTag,
            WireError::TruncatedPayload { .. } => ErrorKind::TruncatedPayload,
            WireError::UnsupportedWireType { .. } => ErrorKind::UnsupportedWireType,
            WireError::UnexpectedWireType { .. } => ErrorKind::UnexpectedWireType,
            WireError::FieldNotFound { .. } => ErrorKind::FieldNotFound,
            WireError::SizeMismatch { .. } => ErrorKind::SizeMismatch,
        }
    }

    /// The message being walked when the error occurred.
    pub fn message_kind(&self) -> MessageKind {
        match *self {
            WireError::MalformedTag { message, .. }
            | WireError::TruncatedPayload { message, .. }
            | WireError::UnsupportedWireType { message, .. }
            | WireError::UnexpectedWireType { message, .. }
            | WireError::FieldNotFound { message, .. }
            | WireError::SizeMismatch { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_message_kind() {
        let err = WireError::MalformedTag {
            message: MessageKind::ExportMetricsServiceRequest,
            offset: 3,
        };
        assert_eq!(
            err.to_string(),
            "malformed protobuf tag in ExportMetricsServiceRequest at offset 3"
        );
        assert_eq!(err.kind(), ErrorKind::MalformedTag);
        assert_eq!(err.message_kind(), MessageKind::ExportMetricsServiceRequest);
    }

    #[test]
    fn test_display_phrases() {
        let wrong = WireError::UnexpectedWireType {
            message: MessageKind::ResourceLogs,
            field: 1,
            expected: WireType::LengthDelimited,
            actual: WireType::Varint,
        };
        assert!(wrong.to_string().contains("wrong wire type"));

        let missing = WireError::FieldNotFound {
            message: MessageKind::ResourceSpans,
            field: 1,
        };
        assert!(missing.to_string().contains("not found"));

        let size = WireError::SizeMismatch {
            message: MessageKind::Span,
            field: 1,
            expected: 16,
            actual: 8,
        };
        assert!(size.to_string().contains("unexpected size"));
        assert_eq!(size.kind(), ErrorKind::SizeMismatch);
    }
}
