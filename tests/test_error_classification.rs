//! Integration tests for response envelope classification.

use std::io;
use std::sync::Mutex;

use serde_json::{json, Value};
use snowflake_wire_rs::protocol::constants::{
    ERROR_CODE_INTERNAL_ERROR, MESSAGE_NO_ERROR_CODE, SQL_STATE_INTERNAL_ERROR,
};
use snowflake_wire_rs::{check_error, DiagnosticSink, Error, FileDiagnosticSink, NoopDiagnosticSink};

/// Keeps every recorded payload in memory.
#[derive(Default)]
struct RecordingSink {
    payloads: Mutex<Vec<Value>>,
}

impl DiagnosticSink for RecordingSink {
    fn record_unclassified(&self, payload: &Value) -> io::Result<()> {
        self.payloads.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

/// Always fails.
struct BrokenSink;

impl DiagnosticSink for BrokenSink {
    fn record_unclassified(&self, _payload: &Value) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only filesystem"))
    }
}

#[test]
fn test_success_envelopes_pass() {
    let sink = RecordingSink::default();
    let envelopes = [
        json!({"success": true}),
        json!({"success": true, "message": "ignored", "code": 1}),
        json!({"success": true, "data": {"sqlState": "42000", "errorCode": 1003}}),
    ];

    for envelope in &envelopes {
        assert!(check_error(envelope, &sink).is_ok(), "envelope {}", envelope);
    }
    assert!(sink.payloads.lock().unwrap().is_empty());
}

#[test]
fn test_sql_error_fields_verbatim() {
    let envelope = json!({
        "success": false,
        "message": "SQL compilation error:\nsyntax error line 1 at position 0 unexpected 'SELEC'.",
        "data": {
            "sqlState": "42000",
            "errorCode": 1003,
            "queryId": "01b2c3d4-0601-2a3b-0000-4c5d0001e00e"
        }
    });

    let err = check_error(&envelope, &NoopDiagnosticSink).unwrap_err();
    assert_eq!(err.sql_state(), "42000");
    assert_eq!(err.error_code(), 1003);
    assert_eq!(err.query_id(), Some("01b2c3d4-0601-2a3b-0000-4c5d0001e00e"));

    let server = err.as_server_error().expect("server error");
    assert_eq!(
        server.message,
        "SQL compilation error:\nsyntax error line 1 at position 0 unexpected 'SELEC'."
    );
}

#[test]
fn test_sql_state_wins_over_envelope_code() {
    let envelope = json!({
        "success": false,
        "code": 390100,
        "message": "Incorrect username or password was specified.",
        "data": {"sqlState": "08004", "errorCode": 390100, "queryId": "q-1"}
    });

    let err = check_error(&envelope, &NoopDiagnosticSink).unwrap_err();
    assert_eq!(err.sql_state(), "08004");
    assert_eq!(err.query_id(), Some("q-1"));
}

#[test]
fn test_envelope_error_defaults() {
    let envelope = json!({"success": false, "code": 100051, "message": "bad request"});

    let err = check_error(&envelope, &NoopDiagnosticSink).unwrap_err();
    match err {
        Error::Server(e) => {
            assert_eq!(e.sql_state, SQL_STATE_INTERNAL_ERROR);
            assert_eq!(e.error_code, 100051);
            assert_eq!(e.query_id, "unknown");
            assert_eq!(e.message, "bad request");
        }
        other => panic!("Expected server error, got {:?}", other),
    }
}

#[test]
fn test_unclassified_error_records_envelope() {
    let sink = RecordingSink::default();
    let envelope = json!({"success": false, "data": {"nextAction": "RETRY_LOGIN"}});

    let err = check_error(&envelope, &sink).unwrap_err();
    assert_eq!(err.sql_state(), SQL_STATE_INTERNAL_ERROR);
    assert_eq!(err.error_code(), ERROR_CODE_INTERNAL_ERROR);
    assert_eq!(err.query_id(), Some("unknown"));
    assert_eq!(err.as_server_error().unwrap().message, MESSAGE_NO_ERROR_CODE);

    let payloads = sink.payloads.lock().unwrap();
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0], envelope);
}

#[test]
fn test_sink_failure_does_not_mask_error() {
    let envelope = json!({"success": false});

    let err = check_error(&envelope, &BrokenSink).unwrap_err();
    assert_eq!(err.error_code(), ERROR_CODE_INTERNAL_ERROR);
    assert_eq!(err.sql_state(), SQL_STATE_INTERNAL_ERROR);
}

#[test]
fn test_unclassified_error_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let sink = FileDiagnosticSink::new(dir.path().join("output.json"));
    let envelope = json!({"success": false, "headers": null});

    assert!(check_error(&envelope, &sink).is_err());

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(sink.path()).unwrap()).unwrap();
    assert_eq!(written, envelope);
}

#[test]
fn test_classification_is_reentrant() {
    let sink = std::sync::Arc::new(RecordingSink::default());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let sink = sink.clone();
            std::thread::spawn(move || {
                let envelope = json!({"success": false, "code": 390000 + i, "message": "m"});
                check_error(&envelope, sink.as_ref()).unwrap_err().error_code()
            })
        })
        .collect();

    let mut codes: Vec<i32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    codes.sort();
    assert_eq!(codes, (390000..390008).collect::<Vec<_>>());
    assert!(sink.payloads.lock().unwrap().is_empty());
}
