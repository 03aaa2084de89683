//! Typed JSON client for ServiceStack-style REST services.
//!
//! Request DTOs implement [`ServiceRequest`], which binds them at compile
//! time to a verb, a path template and a response type. The client fills the
//! template from the request's parameters, sends the rest as query string or
//! JSON body, and decodes the typed response. Non-success statuses become a
//! [`WebServiceError`] carrying the status code, description and structured
//! `ResponseStatus`.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod autoquery;
mod client;
mod config;
pub mod dates;
mod error;
mod http;
pub mod json;
mod route;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultJsonServiceClient, JsonServiceClient};

// Configuration
pub use config::{ClientConfig, Credentials};

// Errors
pub use error::{ClientError, ClientResult, ResponseError, ResponseStatus, WebServiceError};

// Routing contract
pub use route::{HttpMethod, Route, RouteParams, ServiceRequest};

// AutoQuery
pub use autoquery::{QueryBase, QueryRequest, QueryResponse};

// Transport seam
pub use http::{HttpBackend, HttpRequest, HttpResponse, ReqwestBackend};
