//! Diagnostic side channels.
//!
//! [`DiagnosticSink`] receives response envelopes that could not be
//! classified, for offline debugging. [`log_response_details`] dumps an HTTP
//! response handed over by the transport layer when a request failed.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use bytes::Bytes;
use serde_json::Value;
use tracing::error;

/// Default file name for unclassified envelopes, placed in the temp dir.
pub const DEFAULT_DIAGNOSTIC_FILE_NAME: &str = "snowflake_unclassified_response.json";

/// Receiver for response envelopes that matched no known error shape.
///
/// Callers treat writes as best effort: an `Err` is logged and dropped.
pub trait DiagnosticSink: Send + Sync {
    /// Record the raw envelope.
    fn record_unclassified(&self, payload: &Value) -> io::Result<()>;
}

/// Writes the most recent unclassified envelope to a file, replacing the previous one.
#[derive(Debug, Clone)]
pub struct FileDiagnosticSink {
    path: PathBuf,
}

impl FileDiagnosticSink {
    /// Create a sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileDiagnosticSink {
    fn default() -> Self {
        Self::new(std::env::temp_dir().join(DEFAULT_DIAGNOSTIC_FILE_NAME))
    }
}

impl DiagnosticSink for FileDiagnosticSink {
    fn record_unclassified(&self, payload: &Value) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer(&mut writer, payload)?;
        writer.flush()
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnosticSink;

impl DiagnosticSink for NoopDiagnosticSink {
    fn record_unclassified(&self, _payload: &Value) -> io::Result<()> {
        Ok(())
    }
}

/// The parts of an HTTP response worth logging after a failed request.
#[derive(Debug, Clone, Default)]
pub struct HttpResponseDetails {
    /// Status line reason phrase, e.g. `"Bad Gateway"`.
    pub reason: Option<String>,
    /// Response headers in received order.
    pub headers: Vec<(String, String)>,
    /// Raw body.
    pub body: Option<Bytes>,
}

impl HttpResponseDetails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Log status reason, headers and body of a failed HTTP response at error level.
pub fn log_response_details(response: Option<&HttpResponseDetails>) {
    let Some(response) = response else {
        error!("null response");
        return;
    };

    if let Some(reason) = &response.reason {
        error!("Response status line reason: {}", reason);
    }

    for (name, value) in &response.headers {
        error!("Header name: {}, value: {}", name, value);
    }

    if let Some(body) = &response.body {
        match std::str::from_utf8(body) {
            Ok(content) => error!("Response content: {}", content),
            Err(e) => error!("Failed to read content due to exception: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_file_sink_writes_payload() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileDiagnosticSink::new(dir.path().join("output.json"));
        let payload = json!({"success": false, "data": null});

        sink.record_unclassified(&payload).unwrap();

        let written = std::fs::read_to_string(sink.path()).unwrap();
        let parsed: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn test_file_sink_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileDiagnosticSink::new(dir.path().join("missing").join("output.json"));
        assert!(sink.record_unclassified(&json!({})).is_err());
    }

    #[test]
    fn test_default_sink_path() {
        let sink = FileDiagnosticSink::default();
        assert!(sink.path().ends_with(DEFAULT_DIAGNOSTIC_FILE_NAME));
    }

    #[test]
    fn test_log_response_details_does_not_panic() {
        log_response_details(None);

        let response = HttpResponseDetails::new()
            .with_reason("Service Unavailable")
            .with_header("Content-Type", "application/json")
            .with_body(Bytes::from_static(b"{\"message\":\"retry\"}"));
        log_response_details(Some(&response));

        let binary = HttpResponseDetails::new().with_body(vec![0xffu8, 0xfe, 0x00]);
        log_response_details(Some(&binary));
    }
}
