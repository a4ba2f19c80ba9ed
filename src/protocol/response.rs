//! Response envelope classification.
//!
//! A response envelope is either successful or one of three failure shapes,
//! checked in this order:
//!
//! 1. SQL error: `data.sqlState` is present.
//! 2. Envelope error: no `data.sqlState`, but a top-level `code`.
//! 3. Unclassified: neither. The raw envelope goes to a [`DiagnosticSink`].
//!
//! Every unsuccessful envelope yields exactly one [`ServerError`].

use serde_json::Value;
use tracing::{debug, warn};

use crate::diagnostics::DiagnosticSink;
use crate::error::{Error, Result, ServerError};
use crate::protocol::constants::*;
use crate::protocol::json::{as_bool, as_int, as_text};
use crate::protocol::mapper::extract_row_type;
use crate::protocol::types::ColumnInfo;

/// Decoded shape of a response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorEnvelope {
    /// `success` is true.
    Success,
    /// Server-side SQL error with full details under `data`.
    Sql(ServerError),
    /// Request-level error carrying only a top-level `code` and `message`.
    Envelope(ServerError),
    /// Nothing usable; placeholder code and message.
    Unclassified(ServerError),
}

impl ErrorEnvelope {
    /// Convert into a result, discarding the shape.
    pub fn into_result(self) -> Result<()> {
        match self {
            ErrorEnvelope::Success => Ok(()),
            ErrorEnvelope::Sql(e) | ErrorEnvelope::Envelope(e) | ErrorEnvelope::Unclassified(e) => {
                Err(Error::Server(e))
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ErrorEnvelope::Success)
    }
}

/// Look up a field. An explicit `null` counts as present.
fn field<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    node.get(key)
}

/// Classify a response envelope without side effects.
pub fn classify_envelope(envelope: &Value) -> ErrorEnvelope {
    if as_bool(field(envelope, FIELD_SUCCESS)) {
        return ErrorEnvelope::Success;
    }

    let data = field(envelope, FIELD_DATA);

    if let Some((data, sql_state)) = data.and_then(|d| field(d, FIELD_SQL_STATE).map(|s| (d, s))) {
        return ErrorEnvelope::Sql(ServerError::new(
            as_text(field(data, FIELD_QUERY_ID)),
            as_text(field(envelope, FIELD_MESSAGE)),
            as_text(Some(sql_state)),
            as_int(field(data, FIELD_ERROR_CODE)),
        ));
    }

    if let Some(code) = field(envelope, FIELD_CODE) {
        return ErrorEnvelope::Envelope(ServerError::new(
            QUERY_ID_UNKNOWN,
            as_text(field(envelope, FIELD_MESSAGE)),
            SQL_STATE_INTERNAL_ERROR,
            as_int(Some(code)),
        ));
    }

    ErrorEnvelope::Unclassified(ServerError::new(
        QUERY_ID_UNKNOWN,
        MESSAGE_NO_ERROR_CODE,
        SQL_STATE_INTERNAL_ERROR,
        ERROR_CODE_INTERNAL_ERROR,
    ))
}

/// Check a response envelope and turn any failure into an error.
///
/// Unclassified envelopes are written to `sink` first; a failed write is
/// logged and does not replace the classified error.
pub fn check_error(envelope: &Value, sink: &dyn DiagnosticSink) -> Result<()> {
    let classified = classify_envelope(envelope);

    match &classified {
        ErrorEnvelope::Success => {}
        ErrorEnvelope::Sql(e) => {
            debug!(query_id = %e.query_id, sql_state = %e.sql_state, error_code = e.error_code, "SQL error response");
        }
        ErrorEnvelope::Envelope(e) => {
            debug!(error_code = e.error_code, "envelope error response");
        }
        ErrorEnvelope::Unclassified(_) => {
            warn!("response carries neither sqlState nor code; saving envelope for diagnosis");
            if let Err(e) = sink.record_unclassified(envelope) {
                warn!("failed to record unclassified response: {}", e);
            }
        }
    }

    classified.into_result()
}

/// Check a response and map its `data.rowtype` into a result schema.
///
/// A successful response without `data.rowtype` yields an empty schema.
pub fn describe_result_columns(
    envelope: &Value,
    treat_decimal_as_int: bool,
    sink: &dyn DiagnosticSink,
) -> Result<ColumnInfo> {
    check_error(envelope, sink)?;

    let row_type = field(envelope, FIELD_DATA)
        .and_then(|d| field(d, FIELD_ROW_TYPE))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    Ok(ColumnInfo::new(extract_row_type(row_type, treat_decimal_as_int)?))
}
