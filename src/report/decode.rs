// src/report/decode.rs
//
// The analysis service wraps its report twice: the HTTP body is a JSON object
// whose `result` field is itself a JSON document encoded as a string. This is
// the only place that knows about that envelope.
use serde_json::Value;
use thiserror::Error;

use super::model::AnalysisReport;

pub const RESULT_FIELD: &str = "result";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("response body is not valid JSON: {0}")]
    Body(serde_json::Error),
    #[error("response has no `result` field")]
    MissingResult,
    #[error("`result` field is a JSON {0}, expected a string")]
    ResultNotString(&'static str),
    #[error("`result` holds a JSON {0}, expected a report object")]
    ReportNotObject(&'static str),
    #[error("`result` does not contain a valid report: {0}")]
    Report(serde_json::Error),
}

impl DecodeError {
    /// An unparseable body is a transport-level failure; everything past the
    /// outer envelope is a decode failure proper.
    pub fn is_transport(&self) -> bool {
        matches!(self, DecodeError::Body(_))
    }
}

pub fn decode_envelope(body: &str) -> Result<AnalysisReport, DecodeError> {
    let envelope: Value = serde_json::from_str(body).map_err(DecodeError::Body)?;

    let result = match envelope.get(RESULT_FIELD) {
        Some(Value::String(inner)) => inner,
        Some(other) => return Err(DecodeError::ResultNotString(json_kind(other))),
        None => return Err(DecodeError::MissingResult),
    };

    // Derived struct impls also take arrays positionally; only an object is a report
    let inner: Value = serde_json::from_str(result).map_err(DecodeError::Report)?;
    if !inner.is_object() {
        return Err(DecodeError::ReportNotObject(json_kind(&inner)));
    }

    serde_json::from_value(inner).map_err(DecodeError::Report)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
