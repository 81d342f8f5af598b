super::signal_views! {
    /// An encoded `ExportMetricsServiceRequest`.
    batch: ExportMetricsServiceRequest,
    /// One encoded `ResourceMetrics` from a metrics batch.
    resource: ResourceMetrics,
    schema: crate::schema::METRICS,
    /// Number of data points across every metric type.
    count: data_point_count,
    resources: resource_metrics,
}
