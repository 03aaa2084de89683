//! HTTP backend abstraction.
//!
//! The client builds [`HttpRequest`]s and interprets [`HttpResponse`]s; the
//! backend only moves bytes. Keeping status translation out of the backend
//! lets tests swap in a mock without re-implementing error handling.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use crate::config::{ClientConfig, Credentials};
use crate::error::ClientResult;
use crate::route::HttpMethod;

/// A fully resolved outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    /// JSON body for verbs that carry one
    pub body: Option<String>,
}

/// Raw response as received from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Trait for HTTP backends that can execute a request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Execute the request, returning whatever status the server sent.
    ///
    /// Only transport failures are errors here.
    async fn execute(&self, request: HttpRequest) -> ClientResult<HttpResponse>;
}

/// Production backend on top of a pooled `reqwest::Client`.
pub struct ReqwestBackend {
    client: reqwest::Client,
    credentials: Option<Credentials>,
}

impl ReqwestBackend {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            credentials: config.credentials.clone(),
        })
    }

    fn build_request(&self, request: HttpRequest) -> reqwest::RequestBuilder {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, request.url)
            .header(ACCEPT, "application/json");

        builder = match &self.credentials {
            Some(Credentials::Bearer(token)) => {
                builder.header(AUTHORIZATION, format!("Bearer {token}"))
            }
            Some(Credentials::Basic { username, password }) => {
                builder.basic_auth(username, Some(password))
            }
            None => builder,
        };

        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        builder
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn execute(&self, request: HttpRequest) -> ClientResult<HttpResponse> {
        let response = self.build_request(request).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
