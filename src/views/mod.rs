//! Borrowed, zero-copy views over encoded OTLP messages.
//!
//! A view is just a `&[u8]` that knows which message it holds. Nothing is
//! decoded up front; each accessor walks the bytes it needs when called.

use crate::error::MessageKind;

/// A typed handle on the encoded bytes of one message.
pub trait WireView<'a>: Copy {
    /// The message these bytes hold.
    const KIND: MessageKind;

    fn from_bytes(bytes: &'a [u8]) -> Self;

    fn as_bytes(&self) -> &'a [u8];
}

/// Declares the export-request view and the resource view for one signal.
///
/// Both names double as [`MessageKind`] variants. The resource view gets
/// `resource`, the leaf count, and the wrap/write pair; the batch view gets
/// the leaf count, lazy resource iteration and `split_by_resource`.
macro_rules! signal_views {
    (
        $(#[$batch_meta:meta])*
        batch: $batch:ident,
        $(#[$resource_meta:meta])*
        resource: $resource:ident,
        schema: $schema:expr,
        $(#[$count_meta:meta])*
        count: $count:ident,
        resources: $resources:ident,
    ) => {
        $(#[$batch_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $batch<'a> {
            bytes: &'a [u8],
        }

        impl<'a> $batch<'a> {
            pub fn new(bytes: &'a [u8]) -> Self {
                Self { bytes }
            }

            pub fn as_bytes(&self) -> &'a [u8] {
                self.bytes
            }

            $(#[$count_meta])*
            ///
            /// Fails on the first malformed field anywhere in the batch; no
            /// partial count is returned.
            pub fn $count(&self) -> $crate::Result<usize> {
                $schema.count_in_batch(self.bytes)
            }

            /// Lazily iterate the resources in encoding order.
            ///
            /// Call `finish` (or `error`) on the iterator once done to learn
            /// whether it stopped because of corrupt bytes.
            pub fn $resources(&self) -> $crate::iter::Messages<'a, $resource<'a>> {
                $crate::iter::Messages::new(
                    self.bytes,
                    $crate::error::MessageKind::$batch,
                    $crate::schema::REQUEST_RESOURCES,
                )
            }

            /// All resources at once, or the error that cut the walk short.
            pub fn split_by_resource(&self) -> $crate::Result<Vec<$resource<'a>>> {
                self.$resources().collect_all()
            }
        }

        impl<'a> $crate::views::WireView<'a> for $batch<'a> {
            const KIND: $crate::error::MessageKind = $crate::error::MessageKind::$batch;

            fn from_bytes(bytes: &'a [u8]) -> Self {
                Self::new(bytes)
            }

            fn as_bytes(&self) -> &'a [u8] {
                self.bytes
            }
        }

        impl<'a> From<&'a [u8]> for $batch<'a> {
            fn from(bytes: &'a [u8]) -> Self {
                Self::new(bytes)
            }
        }

        $(#[$resource_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $resource<'a> {
            bytes: &'a [u8],
        }

        impl<'a> $resource<'a> {
            pub fn new(bytes: &'a [u8]) -> Self {
                Self { bytes }
            }

            pub fn as_bytes(&self) -> &'a [u8] {
                self.bytes
            }

            /// Raw bytes of the `Resource` message (field 1).
            ///
            /// Equal attribute sets encoded the same way give equal bytes, so
            /// the slice can be hashed directly for routing. A missing
            /// resource is [`WireError::FieldNotFound`](crate::WireError::FieldNotFound).
            pub fn resource(&self) -> $crate::Result<&'a [u8]> {
                $crate::extract::extract_resource(self.bytes, $crate::error::MessageKind::$resource)
            }

            $(#[$count_meta])*
            pub fn $count(&self) -> $crate::Result<usize> {
                $schema.count_in_resource(self.bytes)
            }

            /// This resource as a standalone export request holding only it.
            pub fn to_export_request(&self) -> Vec<u8> {
                $crate::wrap::wrap(self.bytes)
            }

            /// Write [`to_export_request`](Self::to_export_request) to `sink`
            /// without materializing it. Returns bytes written.
            pub fn write_to<W: std::io::Write + ?Sized>(&self, sink: &mut W) -> std::io::Result<usize> {
                $crate::wrap::write_wrapped(self.bytes, sink)
            }

            /// Size of the export request `write_to` would produce.
            pub fn export_request_len(&self) -> usize {
                $crate::wrap::wrapped_len(self.bytes.len())
            }
        }

        impl<'a> $crate::views::WireView<'a> for $resource<'a> {
            const KIND: $crate::error::MessageKind = $crate::error::MessageKind::$resource;

            fn from_bytes(bytes: &'a [u8]) -> Self {
                Self::new(bytes)
            }

            fn as_bytes(&self) -> &'a [u8] {
                self.bytes
            }
        }

        impl<'a> From<&'a [u8]> for $resource<'a> {
            fn from(bytes: &'a [u8]) -> Self {
                Self::new(bytes)
            }
        }
    };
}

pub(crate) use signal_views;

mod logs;
mod metrics;
mod traces;

pub use logs::{ExportLogsServiceRequest, ResourceLogs};
pub use metrics::{ExportMetricsServiceRequest, ResourceMetrics};
pub use traces::{ExportTracesServiceRequest, ResourceSpans, ScopeSpans, Span, SpanId, TraceId};
