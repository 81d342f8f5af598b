//! Field-number paths from each export request down to its countable leaf.
//!
//! ```text
//! ExportMetricsServiceRequest
//!   └─ 1: ResourceMetrics[]
//!       └─ 2: ScopeMetrics[]
//!           └─ 2: Metric[]
//!               └─ 5 Gauge | 7 Sum | 9 Histogram | 10 ExponentialHistogram | 11 Summary
//!                   └─ 1: data points[]            <- counted
//!
//! ExportLogsServiceRequest                ExportTracesServiceRequest
//!   └─ 1: ResourceLogs[]                    └─ 1: ResourceSpans[]
//!       └─ 2: ScopeLogs[]                       └─ 2: ScopeSpans[]
//!           └─ 2: LogRecord[]  <- counted           └─ 2: Span[]  <- counted
//! ```
//!
//! The three signals differ only in table data. Counting from any depth walks
//! the remaining suffix of the same path, so a resource is counted by exactly
//! the code that counts a batch, one step further down.

use crate::descent::{count_occurrences_any, count_via_any};
use crate::error::MessageKind;
use crate::Result;

/// `Export*ServiceRequest.resource_*`
pub const REQUEST_RESOURCES: u32 = 1;
/// `Resource*.resource`
pub const RESOURCE: u32 = 1;
/// `Resource*.scope_*`
pub const RESOURCE_SCOPES: u32 = 2;
/// `Scope*.scope`
pub const SCOPE_INSTRUMENTATION: u32 = 1;
/// `ScopeMetrics.metrics`, `ScopeLogs.log_records`, `ScopeSpans.spans`
pub const SCOPE_ITEMS: u32 = 2;

pub const METRIC_GAUGE: u32 = 5;
pub const METRIC_SUM: u32 = 7;
pub const METRIC_HISTOGRAM: u32 = 9;
pub const METRIC_EXPONENTIAL_HISTOGRAM: u32 = 10;
pub const METRIC_SUMMARY: u32 = 11;

/// The `Metric.data` oneof. Exactly one is expected per metric.
pub const METRIC_DATA: [u32; 5] = [
    METRIC_GAUGE,
    METRIC_SUM,
    METRIC_HISTOGRAM,
    METRIC_EXPONENTIAL_HISTOGRAM,
    METRIC_SUMMARY,
];

/// `data_points` in every metric variant
pub const DATA_POINTS: u32 = 1;

pub const SPAN_TRACE_ID: u32 = 1;
pub const SPAN_SPAN_ID: u32 = 2;
pub const SPAN_PARENT_SPAN_ID: u32 = 4;

pub const TRACE_ID_LEN: usize = 16;
pub const SPAN_ID_LEN: usize = 8;

/// One level of descent: while walking `message`, follow (or at the last
/// step, count) the fields numbered `fields`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub message: MessageKind,
    pub fields: &'static [u32],
}

/// Where along a signal's path a message sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    Batch,
    Resource,
    Scope,
}

impl Depth {
    const fn index(self) -> usize {
        match self {
            Depth::Batch => 0,
            Depth::Resource => 1,
            Depth::Scope => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Metrics,
    Logs,
    Traces,
}

impl Signal {
    pub fn schema(self) -> &'static SignalSchema {
        match self {
            Signal::Metrics => &METRICS,
            Signal::Logs => &LOGS,
            Signal::Traces => &TRACES,
        }
    }
}

/// Descent path for one signal, starting at the export request.
#[derive(Debug, PartialEq, Eq)]
pub struct SignalSchema {
    pub signal: Signal,
    pub path: &'static [Step],
}

pub static METRICS: SignalSchema = SignalSchema {
    signal: Signal::Metrics,
    path: &[
        Step {
            message: MessageKind::ExportMetricsServiceRequest,
            fields: &[REQUEST_RESOURCES],
        },
        Step {
            message: MessageKind::ResourceMetrics,
            fields: &[RESOURCE_SCOPES],
        },
        Step {
            message: MessageKind::ScopeMetrics,
            fields: &[SCOPE_ITEMS],
        },
        Step {
            message: MessageKind::Metric,
            fields: &METRIC_DATA,
        },
        Step {
            message: MessageKind::MetricData,
            fields: &[DATA_POINTS],
        },
    ],
};

pub static LOGS: SignalSchema = SignalSchema {
    signal: Signal::Logs,
    path: &[
        Step {
            message: MessageKind::ExportLogsServiceRequest,
            fields: &[REQUEST_RESOURCES],
        },
        Step {
            message: MessageKind::ResourceLogs,
            fields: &[RESOURCE_SCOPES],
        },
        Step {
            message: MessageKind::ScopeLogs,
            fields: &[SCOPE_ITEMS],
        },
    ],
};

pub static TRACES: SignalSchema = SignalSchema {
    signal: Signal::Traces,
    path: &[
        Step {
            message: MessageKind::ExportTracesServiceRequest,
            fields: &[REQUEST_RESOURCES],
        },
        Step {
            message: MessageKind::ResourceSpans,
            fields: &[RESOURCE_SCOPES],
        },
        Step {
            message: MessageKind::ScopeSpans,
            fields: &[SCOPE_ITEMS],
        },
    ],
};

impl SignalSchema {
    fn steps_from(&self, depth: Depth) -> &'static [Step] {
        self.path.get(depth.index()..).unwrap_or_default()
    }

    /// The message kind found at `depth`.
    pub fn message_at(&self, depth: Depth) -> MessageKind {
        self.path[depth.index()].message
    }

    /// Count leaves in `data`, which holds one message found at `depth`.
    pub fn count_at(&self, depth: Depth, data: &[u8]) -> Result<usize> {
        count_along(data, self.steps_from(depth))
    }

    pub fn count_in_batch(&self, data: &[u8]) -> Result<usize> {
        self.count_at(Depth::Batch, data)
    }

    pub fn count_in_resource(&self, data: &[u8]) -> Result<usize> {
        self.count_at(Depth::Resource, data)
    }

    pub fn count_in_scope(&self, data: &[u8]) -> Result<usize> {
        self.count_at(Depth::Scope, data)
    }
}

fn count_along(data: &[u8], steps: &[Step]) -> Result<usize> {
    match steps {
        [] => Ok(0),
        [leaf] => count_occurrences_any(data, leaf.message, leaf.fields),
        [step, rest @ ..] => count_via_any(data, step.message, step.fields, |sub| count_along(sub, rest)),
    }
}
