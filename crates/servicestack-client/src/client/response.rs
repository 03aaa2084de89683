//! Response decoding and status translation.

use serde::de::DeserializeOwned;

use crate::error::{ClientResult, WebServiceError};
use crate::http::HttpResponse;

/// Decode a successful body, or turn a failure status into an error.
pub(crate) fn decode_response<T: DeserializeOwned>(response: HttpResponse) -> ClientResult<T> {
    if !response.is_success() {
        return Err(WebServiceError::from_response(
            response.status,
            status_description(response.status),
            response.body,
        )
        .into());
    }

    // Void responses decode from `null` so `()` and `Option<_>` work.
    let body = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };

    Ok(serde_json::from_str(body)?)
}

/// Reason phrase for a status code, e.g. `Unauthorized` for 401.
///
/// Unknown codes fall back to the number itself.
pub(crate) fn status_description(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map_or_else(|| status.to_string(), String::from)
}
