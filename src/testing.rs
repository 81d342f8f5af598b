//! Builders for realistic OTLP batches used across the unit tests.

use crate::proto::collector::logs::v1::ExportLogsServiceRequest;
use crate::proto::collector::metrics::v1::ExportMetricsServiceRequest;
use crate::proto::collector::trace::v1::ExportTracesServiceRequest;
use crate::proto::common::v1::{InstrumentationScope, KeyValue};
use crate::proto::logs::v1::{LogRecord, ResourceLogs, ScopeLogs};
use crate::proto::metrics::v1::{
    metric, number_data_point, ExponentialHistogram, ExponentialHistogramDataPoint, Gauge,
    Histogram, HistogramDataPoint, Metric, NumberDataPoint, ResourceMetrics, ScopeMetrics, Sum,
    Summary, SummaryDataPoint,
};
use crate::proto::resource::v1::Resource;
use crate::proto::trace::v1::{ResourceSpans, ScopeSpans, Span};

pub(crate) fn resource(service: &str) -> Resource {
    Resource {
        attributes: vec![
            KeyValue::string("service.name", service),
            KeyValue::string("host.name", "test-host"),
        ],
        dropped_attributes_count: 0,
    }
}

pub(crate) fn scope(name: &str) -> InstrumentationScope {
    InstrumentationScope {
        name: name.to_string(),
        version: "1.0.0".to_string(),
        ..Default::default()
    }
}

pub(crate) fn metrics_request(resource_metrics: Vec<ResourceMetrics>) -> ExportMetricsServiceRequest {
    ExportMetricsServiceRequest { resource_metrics }
}

/// One resource holding a single scope with `metrics`.
pub(crate) fn resource_metrics(service: &str, metrics: Vec<Metric>) -> ResourceMetrics {
    ResourceMetrics {
        resource: Some(resource(service)),
        scope_metrics: vec![ScopeMetrics {
            scope: Some(scope("meter")),
            metrics,
            schema_url: String::new(),
        }],
        schema_url: String::new(),
    }
}

fn number_points(n: usize) -> Vec<NumberDataPoint> {
    (0..n)
        .map(|i| NumberDataPoint {
            attributes: vec![KeyValue::string("point", i.to_string())],
            time_unix_nano: 1_700_000_000_000_000_000 + i as u64,
            value: Some(number_data_point::Value::AsInt(i as i64)),
            ..Default::default()
        })
        .collect()
}

fn with_data(name: &str, data: metric::Data) -> Metric {
    Metric {
        name: name.to_string(),
        unit: "1".to_string(),
        data: Some(data),
        ..Default::default()
    }
}

pub(crate) fn gauge_metric(name: &str, points: usize) -> Metric {
    with_data(
        name,
        metric::Data::Gauge(Gauge {
            data_points: number_points(points),
        }),
    )
}

pub(crate) fn sum_metric(name: &str, points: usize) -> Metric {
    with_data(
        name,
        metric::Data::Sum(Sum {
            data_points: number_points(points),
            aggregation_temporality: 2,
            is_monotonic: true,
        }),
    )
}

pub(crate) fn histogram_metric(name: &str, points: usize) -> Metric {
    let data_points = (0..points)
        .map(|i| HistogramDataPoint {
            count: 3,
            sum: Some(i as f64),
            bucket_counts: vec![1, 1, 1],
            explicit_bounds: vec![0.5, 1.0],
            ..Default::default()
        })
        .collect();
    with_data(
        name,
        metric::Data::Histogram(Histogram {
            data_points,
            aggregation_temporality: 2,
        }),
    )
}

pub(crate) fn exponential_histogram_metric(name: &str, points: usize) -> Metric {
    let data_points = (0..points)
        .map(|i| ExponentialHistogramDataPoint {
            count: i as u64,
            scale: 1,
            ..Default::default()
        })
        .collect();
    with_data(
        name,
        metric::Data::ExponentialHistogram(ExponentialHistogram {
            data_points,
            aggregation_temporality: 1,
        }),
    )
}

pub(crate) fn summary_metric(name: &str, points: usize) -> Metric {
    let data_points = (0..points)
        .map(|i| SummaryDataPoint {
            count: 1,
            sum: i as f64,
            ..Default::default()
        })
        .collect();
    with_data(name, metric::Data::Summary(Summary { data_points }))
}

pub(crate) fn logs_request(resource_logs: Vec<ResourceLogs>) -> ExportLogsServiceRequest {
    ExportLogsServiceRequest { resource_logs }
}

/// One resource with a scope per entry of `records_per_scope`.
pub(crate) fn resource_logs(service: &str, records_per_scope: &[usize]) -> ResourceLogs {
    let scope_logs = records_per_scope
        .iter()
        .enumerate()
        .map(|(s, &n)| ScopeLogs {
            scope: Some(scope(&format!("logger-{s}"))),
            log_records: (0..n).map(log_record).collect(),
            schema_url: String::new(),
        })
        .collect();
    ResourceLogs {
        resource: Some(resource(service)),
        scope_logs,
        schema_url: String::new(),
    }
}

fn log_record(i: usize) -> LogRecord {
    LogRecord {
        time_unix_nano: 1_700_000_000_000_000_000 + i as u64,
        severity_number: 9,
        severity_text: "INFO".to_string(),
        body: Some(crate::proto::common::v1::AnyValue {
            value: Some(crate::proto::common::v1::any_value::Value::StringValue(format!(
                "record {i}"
            ))),
        }),
        ..Default::default()
    }
}

pub(crate) fn traces_request(resource_spans: Vec<ResourceSpans>) -> ExportTracesServiceRequest {
    ExportTracesServiceRequest { resource_spans }
}

pub(crate) fn resource_spans(service: &str, scope_spans: Vec<ScopeSpans>) -> ResourceSpans {
    ResourceSpans {
        resource: Some(resource(service)),
        scope_spans,
        schema_url: String::new(),
    }
}

pub(crate) fn scope_spans(spans: Vec<Span>) -> ScopeSpans {
    ScopeSpans {
        scope: Some(scope("tracer")),
        spans,
        schema_url: String::new(),
    }
}

/// A span whose IDs are filled with the given bytes. `parent: None` makes a
/// root span with no parent ID on the wire.
pub(crate) fn span(trace: u8, span: u8, parent: Option<u8>) -> Span {
    Span {
        trace_id: vec![trace; 16],
        span_id: vec![span; 8],
        parent_span_id: parent.map(|p| vec![p; 8]).unwrap_or_default(),
        name: format!("span-{span}"),
        kind: 1,
        start_time_unix_nano: 1_700_000_000_000_000_000,
        end_time_unix_nano: 1_700_000_000_000_001_000,
        ..Default::default()
    }
}
