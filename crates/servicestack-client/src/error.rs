//! Error types for service client operations.
//!
//! Every failed call surfaces as a [`ClientError`]. Non-success HTTP
//! responses are carried by [`WebServiceError`], which keeps the status code,
//! the status description and the structured `ResponseStatus` body that
//! ServiceStack services return on failure.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::json::null_default;

/// Result type alias for service client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors returned by the JSON service client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with a non-success status.
    #[error(transparent)]
    WebService(#[from] WebServiceError),

    /// A route template references a parameter the request did not supply.
    #[error("Cannot build route '{route}': {message}")]
    InvalidRoute {
        /// The route template
        route: &'static str,
        /// What was missing
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// The web service error, if this failure came from an HTTP status.
    pub const fn as_web_service(&self) -> Option<&WebServiceError> {
        match self {
            Self::WebService(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the service rejected the call for missing or bad credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.as_web_service()
            .is_some_and(WebServiceError::is_unauthorized)
    }
}

/// A non-success HTTP response translated into a typed error.
#[derive(Debug, Clone, Error)]
#[error("{status_code} {status_description}")]
pub struct WebServiceError {
    /// HTTP status code
    pub status_code: u16,
    /// HTTP status text (e.g. "Unauthorized")
    pub status_description: String,
    /// Structured error body, when the service sent one
    pub response_status: Option<ResponseStatus>,
    /// Raw response body
    pub body: String,
}

impl WebServiceError {
    /// Build an error from a status code and the raw response body.
    ///
    /// The body is probed for a `responseStatus` object; bodies that are not
    /// JSON are kept verbatim without a structured status.
    pub fn from_response(status_code: u16, status_description: String, body: String) -> Self {
        let response_status = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|r| r.response_status);

        Self {
            status_code,
            status_description,
            response_status,
            body,
        }
    }

    pub const fn is_unauthorized(&self) -> bool {
        self.status_code == 401
    }

    /// Machine-readable error code from the structured body.
    pub fn error_code(&self) -> Option<&str> {
        self.response_status
            .as_ref()
            .and_then(|s| s.error_code.as_deref())
    }

    /// Human-readable message from the structured body, falling back to the
    /// status description.
    pub fn error_message(&self) -> &str {
        self.response_status
            .as_ref()
            .and_then(|s| s.message.as_deref())
            .unwrap_or(&self.status_description)
    }

    /// Field-level validation errors reported by the service.
    pub fn field_errors(&self) -> &[ResponseError] {
        self.response_status
            .as_ref()
            .map(|s| s.errors.as_slice())
            .unwrap_or_default()
    }
}

/// ServiceStack's structured error payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
    #[serde(default, deserialize_with = "null_default", skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, String>>,
}

/// A single field-level error inside a [`ResponseStatus`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, String>>,
}

/// Envelope used to pull `responseStatus` out of an error body.
#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(rename = "responseStatus", alias = "ResponseStatus")]
    response_status: Option<ResponseStatus>,
}
