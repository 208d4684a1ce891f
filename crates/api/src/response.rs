//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope per project
//! conventions. List endpoints additionally carry the degrade-to-empty
//! read contract: a store error becomes an empty `data` plus a
//! human-readable `warning`, never a failed response.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Envelope for list endpoints.
///
/// `warning` is set when the store read failed and `data` degraded to
/// empty; `message` is set when the result is legitimately empty (the
/// explicit "no data" state the UI renders instead of a blank page).
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ListResponse<T> {
    /// Successful read; attaches the empty-state message when the list
    /// has nothing to show.
    pub fn ok(data: Vec<T>, empty_message: &str) -> Self {
        let message = data.is_empty().then(|| empty_message.to_string());
        Self {
            data,
            warning: None,
            message,
        }
    }

    /// Failed read degraded to an empty result.
    pub fn degraded(warning: String) -> Self {
        Self {
            data: Vec::new(),
            warning: Some(warning),
            message: None,
        }
    }
}

/// Response for the stubbed actions (fine-tuning job creation,
/// marketplace subscription): a success message and nothing else.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
