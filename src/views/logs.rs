super::signal_views! {
    /// An encoded `ExportLogsServiceRequest`.
    batch: ExportLogsServiceRequest,
    /// One encoded `ResourceLogs` from a logs batch.
    resource: ResourceLogs,
    schema: crate::schema::LOGS,
    /// Number of log records across all scopes.
    count: log_record_count,
    resources: resource_logs,
}
