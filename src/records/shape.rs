//! Reshaping Table API responses.
//!
//! # Design Decisions
//! - Only successful responses reach this module; errors are never reshaped
//! - Anything unexpected in the body falls back to the untouched response

use serde::Serialize;
use serde_json::Value;

use crate::connector::HttpResponse;
use crate::records::normalize::NormalizedChangeRecord;

/// What a successful record operation yields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AdapterData {
    /// Normalized `result` array of a read, upstream order kept.
    Records(Vec<NormalizedChangeRecord>),
    /// Normalized `result` object of a create.
    Record(NormalizedChangeRecord),
    /// The response as received.
    Passthrough(HttpResponse),
}

impl AdapterData {
    pub fn is_passthrough(&self) -> bool {
        matches!(self, AdapterData::Passthrough(_))
    }

    /// Number of normalized records carried.
    pub fn record_count(&self) -> usize {
        match self {
            AdapterData::Records(records) => records.len(),
            AdapterData::Record(_) => 1,
            AdapterData::Passthrough(_) => 0,
        }
    }
}

/// Shape a read response: a non-empty `result` array becomes normalized records.
pub fn shape_read(response: HttpResponse) -> AdapterData {
    match envelope_result(&response) {
        Some(Value::Array(items)) if !items.is_empty() => AdapterData::Records(
            items
                .iter()
                .map(NormalizedChangeRecord::from_value)
                .collect(),
        ),
        _ => AdapterData::Passthrough(response),
    }
}

/// Shape a create response: a `result` object becomes one normalized record.
pub fn shape_create(response: HttpResponse) -> AdapterData {
    match envelope_result(&response) {
        None | Some(Value::Null) => AdapterData::Passthrough(response),
        Some(result) => AdapterData::Record(NormalizedChangeRecord::from_value(&result)),
    }
}

/// The `result` member of a JSON object body, if there is one.
fn envelope_result(response: &HttpResponse) -> Option<Value> {
    match serde_json::from_str::<Value>(&response.body) {
        Ok(Value::Object(mut envelope)) => envelope.remove("result"),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(
                status = response.status,
                error = %e,
                "Response body is not JSON, passing it through"
            );
            None
        }
    }
}
