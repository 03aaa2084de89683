//! The typed JSON service client.
//!
//! `JsonServiceClient` turns a [`ServiceRequest`](crate::ServiceRequest) into
//! an HTTP call using the request's declared route, then decodes the typed
//! response or translates the failure status into a
//! [`WebServiceError`](crate::WebServiceError).

mod requests;
mod response;

use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::{HttpBackend, ReqwestBackend};

// ============================================================================
// Type Aliases
// ============================================================================

/// Client using the reqwest HTTP backend.
pub type DefaultJsonServiceClient = JsonServiceClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for a ServiceStack-style JSON API rooted at one base URL.
///
/// The client holds only its base URL and backend, so one instance can be
/// reused for every call. The generic parameter exists for testing; use
/// [`DefaultJsonServiceClient`] in production code.
pub struct JsonServiceClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
}

impl DefaultJsonServiceClient {
    /// Create a client from a configuration.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(config.base_url())?;
        let backend = ReqwestBackend::new(config)?;
        tracing::debug!(base_url = %base_url, "Created JSON service client");
        Ok(Self { backend, base_url })
    }

    /// Create a client for `base_url` with default settings.
    pub fn for_base_url(base_url: &str) -> ClientResult<Self> {
        Self::new(&ClientConfig::new(base_url))
    }
}

impl<B: HttpBackend> JsonServiceClient<B> {
    /// Create a client with a custom backend.
    pub const fn with_backend(base_url: Url, backend: B) -> Self {
        Self { backend, base_url }
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}
