//! Zero-copy traversal of encoded OTLP export requests.
//!
//! Metrics, logs and traces batches are read straight from their protobuf
//! bytes: leaf items are counted, batches are split into one borrowed slice
//! per resource, resource identity is exposed as raw bytes for routing, and
//! any resource can be re-wrapped as a standalone export request. Nothing is
//! decoded beyond the fields a given operation needs.
//!
//! ```
//! use otlp_wire::ExportMetricsServiceRequest;
//!
//! # fn run(batch: &[u8]) -> otlp_wire::Result<()> {
//! let batch = ExportMetricsServiceRequest::new(batch);
//! let total = batch.data_point_count()?;
//! for resource in batch.split_by_resource()? {
//!     let key = resource.resource()?;
//!     let points = resource.data_point_count()?;
//!     let forward = resource.to_export_request();
//!     # let _ = (total, key, points, forward);
//! }
//! # Ok(())
//! # }
//! ```

pub mod descent;
pub mod error;
pub mod extract;
pub mod iter;
pub mod proto;
pub mod schema;
pub mod views;
pub mod wire;
pub mod wrap;

#[cfg(test)]
mod testing;

pub use error::{ErrorKind, MessageKind, WireError};
pub use iter::{DeferredError, FieldIter, Messages};
pub use schema::{Depth, Signal, SignalSchema};
pub use views::{
    ExportLogsServiceRequest, ExportMetricsServiceRequest, ExportTracesServiceRequest,
    ResourceLogs, ResourceMetrics, ResourceSpans, ScopeSpans, Span, SpanId, TraceId, WireView,
};

pub type Result<T> = std::result::Result<T, WireError>;
