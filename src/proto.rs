//! Prost definitions for the part of OTLP this crate walks.
//!
//! Field numbers follow `opentelemetry/proto` v1. Only the fields needed to
//! build realistic batches and to read an extracted `Resource` back are
//! declared; prost skips the rest when decoding.

pub mod common {
    pub mod v1 {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct AnyValue {
            #[prost(oneof = "any_value::Value", tags = "1, 2, 3, 4, 5, 6, 7")]
            pub value: Option<any_value::Value>,
        }

        pub mod any_value {
            #[derive(Clone, PartialEq, ::prost::Oneof)]
            pub enum Value {
                #[prost(string, tag = "1")]
                StringValue(String),
                #[prost(bool, tag = "2")]
                BoolValue(bool),
                #[prost(int64, tag = "3")]
                IntValue(i64),
                #[prost(double, tag = "4")]
                DoubleValue(f64),
                #[prost(message, tag = "5")]
                ArrayValue(super::ArrayValue),
                #[prost(message, tag = "6")]
                KvlistValue(super::KeyValueList),
                #[prost(bytes, tag = "7")]
                BytesValue(Vec<u8>),
            }
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ArrayValue {
            #[prost(message, repeated, tag = "1")]
            pub values: Vec<AnyValue>,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct KeyValueList {
            #[prost(message, repeated, tag = "1")]
            pub values: Vec<KeyValue>,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct KeyValue {
            #[prost(string, tag = "1")]
            pub key: String,
            #[prost(message, optional, tag = "2")]
            pub value: Option<AnyValue>,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct InstrumentationScope {
            #[prost(string, tag = "1")]
            pub name: String,
            #[prost(string, tag = "2")]
            pub version: String,
            #[prost(message, repeated, tag = "3")]
            pub attributes: Vec<KeyValue>,
            #[prost(uint32, tag = "4")]
            pub dropped_attributes_count: u32,
        }

        impl KeyValue {
            pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
                Self {
                    key: key.into(),
                    value: Some(AnyValue {
                        value: Some(any_value::Value::StringValue(value.into())),
                    }),
                }
            }
        }
    }
}

pub mod resource {
    pub mod v1 {
        use crate::proto::common::v1::KeyValue;

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Resource {
            #[prost(message, repeated, tag = "1")]
            pub attributes: Vec<KeyValue>,
            #[prost(uint32, tag = "2")]
            pub dropped_attributes_count: u32,
        }
    }
}

pub mod metrics {
    pub mod v1 {
        use crate::proto::common::v1::{InstrumentationScope, KeyValue};
        use crate::proto::resource::v1::Resource;

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ResourceMetrics {
            #[prost(message, optional, tag = "1")]
            pub resource: Option<Resource>,
            #[prost(message, repeated, tag = "2")]
            pub scope_metrics: Vec<ScopeMetrics>,
            #[prost(string, tag = "3")]
            pub schema_url: String,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ScopeMetrics {
            #[prost(message, optional, tag = "1")]
            pub scope: Option<InstrumentationScope>,
            #[prost(message, repeated, tag = "2")]
            pub metrics: Vec<Metric>,
            #[prost(string, tag = "3")]
            pub schema_url: String,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Metric {
            #[prost(string, tag = "1")]
            pub name: String,
            #[prost(string, tag = "2")]
            pub description: String,
            #[prost(string, tag = "3")]
            pub unit: String,
            #[prost(oneof = "metric::Data", tags = "5, 7, 9, 10, 11")]
            pub data: Option<metric::Data>,
            #[prost(message, repeated, tag = "12")]
            pub metadata: Vec<KeyValue>,
        }

        pub mod metric {
            #[derive(Clone, PartialEq, ::prost::Oneof)]
            pub enum Data {
                #[prost(message, tag = "5")]
                Gauge(super::Gauge),
                #[prost(message, tag = "7")]
                Sum(super::Sum),
                #[prost(message, tag = "9")]
                Histogram(super::Histogram),
                #[prost(message, tag = "10")]
                ExponentialHistogram(super::ExponentialHistogram),
                #[prost(message, tag = "11")]
                Summary(super::Summary),
            }
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Gauge {
            #[prost(message, repeated, tag = "1")]
            pub data_points: Vec<NumberDataPoint>,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Sum {
            #[prost(message, repeated, tag = "1")]
            pub data_points: Vec<NumberDataPoint>,
            #[prost(int32, tag = "2")]
            pub aggregation_temporality: i32,
            #[prost(bool, tag = "3")]
            pub is_monotonic: bool,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Histogram {
            #[prost(message, repeated, tag = "1")]
            pub data_points: Vec<HistogramDataPoint>,
            #[prost(int32, tag = "2")]
            pub aggregation_temporality: i32,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ExponentialHistogram {
            #[prost(message, repeated, tag = "1")]
            pub data_points: Vec<ExponentialHistogramDataPoint>,
            #[prost(int32, tag = "2")]
            pub aggregation_temporality: i32,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Summary {
            #[prost(message, repeated, tag = "1")]
            pub data_points: Vec<SummaryDataPoint>,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct NumberDataPoint {
            #[prost(message, repeated, tag = "7")]
            pub attributes: Vec<KeyValue>,
            #[prost(fixed64, tag = "2")]
            pub start_time_unix_nano: u64,
            #[prost(fixed64, tag = "3")]
            pub time_unix_nano: u64,
            #[prost(oneof = "number_data_point::Value", tags = "4, 6")]
            pub value: Option<number_data_point::Value>,
            #[prost(uint32, tag = "8")]
            pub flags: u32,
        }

        pub mod number_data_point {
            #[derive(Clone, Copy, PartialEq, ::prost::Oneof)]
            pub enum Value {
                #[prost(double, tag = "4")]
                AsDouble(f64),
                #[prost(sfixed64, tag = "6")]
                AsInt(i64),
            }
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct HistogramDataPoint {
            #[prost(message, repeated, tag = "9")]
            pub attributes: Vec<KeyValue>,
            #[prost(fixed64, tag = "2")]
            pub start_time_unix_nano: u64,
            #[prost(fixed64, tag = "3")]
            pub time_unix_nano: u64,
            #[prost(fixed64, tag = "4")]
            pub count: u64,
            #[prost(double, optional, tag = "5")]
            pub sum: Option<f64>,
            #[prost(fixed64, repeated, tag = "6")]
            pub bucket_counts: Vec<u64>,
            #[prost(double, repeated, tag = "7")]
            pub explicit_bounds: Vec<f64>,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ExponentialHistogramDataPoint {
            #[prost(message, repeated, tag = "1")]
            pub attributes: Vec<KeyValue>,
            #[prost(fixed64, tag = "2")]
            pub start_time_unix_nano: u64,
            #[prost(fixed64, tag = "3")]
            pub time_unix_nano: u64,
            #[prost(fixed64, tag = "4")]
            pub count: u64,
            #[prost(double, optional, tag = "5")]
            pub sum: Option<f64>,
            #[prost(sint32, tag = "6")]
            pub scale: i32,
            #[prost(fixed64, tag = "7")]
            pub zero_count: u64,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct SummaryDataPoint {
            #[prost(message, repeated, tag = "7")]
            pub attributes: Vec<KeyValue>,
            #[prost(fixed64, tag = "2")]
            pub start_time_unix_nano: u64,
            #[prost(fixed64, tag = "3")]
            pub time_unix_nano: u64,
            #[prost(fixed64, tag = "4")]
            pub count: u64,
            #[prost(double, tag = "5")]
            pub sum: f64,
        }
    }
}

pub mod logs {
    pub mod v1 {
        use crate::proto::common::v1::{AnyValue, InstrumentationScope, KeyValue};
        use crate::proto::resource::v1::Resource;

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ResourceLogs {
            #[prost(message, optional, tag = "1")]
            pub resource: Option<Resource>,
            #[prost(message, repeated, tag = "2")]
            pub scope_logs: Vec<ScopeLogs>,
            #[prost(string, tag = "3")]
            pub schema_url: String,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ScopeLogs {
            #[prost(message, optional, tag = "1")]
            pub scope: Option<InstrumentationScope>,
            #[prost(message, repeated, tag = "2")]
            pub log_records: Vec<LogRecord>,
            #[prost(string, tag = "3")]
            pub schema_url: String,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct LogRecord {
            #[prost(fixed64, tag = "1")]
            pub time_unix_nano: u64,
            #[prost(fixed64, tag = "11")]
            pub observed_time_unix_nano: u64,
            #[prost(int32, tag = "2")]
            pub severity_number: i32,
            #[prost(string, tag = "3")]
            pub severity_text: String,
            #[prost(message, optional, tag = "5")]
            pub body: Option<AnyValue>,
            #[prost(message, repeated, tag = "6")]
            pub attributes: Vec<KeyValue>,
            #[prost(uint32, tag = "7")]
            pub dropped_attributes_count: u32,
            #[prost(fixed32, tag = "8")]
            pub flags: u32,
            #[prost(bytes = "vec", tag = "9")]
            pub trace_id: Vec<u8>,
            #[prost(bytes = "vec", tag = "10")]
            pub span_id: Vec<u8>,
            #[prost(string, tag = "12")]
            pub event_name: String,
        }
    }
}

pub mod trace {
    pub mod v1 {
        use crate::proto::common::v1::{InstrumentationScope, KeyValue};
        use crate::proto::resource::v1::Resource;

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ResourceSpans {
            #[prost(message, optional, tag = "1")]
            pub resource: Option<Resource>,
            #[prost(message, repeated, tag = "2")]
            pub scope_spans: Vec<ScopeSpans>,
            #[prost(string, tag = "3")]
            pub schema_url: String,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ScopeSpans {
            #[prost(message, optional, tag = "1")]
            pub scope: Option<InstrumentationScope>,
            #[prost(message, repeated, tag = "2")]
            pub spans: Vec<Span>,
            #[prost(string, tag = "3")]
            pub schema_url: String,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Span {
            #[prost(bytes = "vec", tag = "1")]
            pub trace_id: Vec<u8>,
            #[prost(bytes = "vec", tag = "2")]
            pub span_id: Vec<u8>,
            #[prost(string, tag = "3")]
            pub trace_state: String,
            #[prost(bytes = "vec", tag = "4")]
            pub parent_span_id: Vec<u8>,
            #[prost(string, tag = "5")]
            pub name: String,
            #[prost(int32, tag = "6")]
            pub kind: i32,
            #[prost(fixed64, tag = "7")]
            pub start_time_unix_nano: u64,
            #[prost(fixed64, tag = "8")]
            pub end_time_unix_nano: u64,
            #[prost(message, repeated, tag = "9")]
            pub attributes: Vec<KeyValue>,
            #[prost(fixed32, tag = "16")]
            pub flags: u32,
        }
    }
}

/// `Export*ServiceRequest` messages from the OTLP collector services.
pub mod collector {
    pub mod metrics {
        pub mod v1 {
            use crate::proto::metrics::v1::ResourceMetrics;

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct ExportMetricsServiceRequest {
                #[prost(message, repeated, tag = "1")]
                pub resource_metrics: Vec<ResourceMetrics>,
            }
        }
    }

    pub mod logs {
        pub mod v1 {
            use crate::proto::logs::v1::ResourceLogs;

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct ExportLogsServiceRequest {
                #[prost(message, repeated, tag = "1")]
                pub resource_logs: Vec<ResourceLogs>,
            }
        }
    }

    pub mod trace {
        pub mod v1 {
            use crate::proto::trace::v1::ResourceSpans;

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct ExportTracesServiceRequest {
                #[prost(message, repeated, tag = "1")]
                pub resource_spans: Vec<ResourceSpans>,
            }
        }
    }
}
