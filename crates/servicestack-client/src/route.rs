//! Static request-to-route contract.
//!
//! Each request DTO declares, at compile time, the verb and path template it
//! is sent to and the wire parameters it carries. The client resolves
//! `{Name}` placeholders in the template from those parameters and sends the
//! rest as query-string pairs (GET) or leaves them in the JSON body (POST).

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// HTTP verbs the client can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Whether requests with this verb carry the DTO as a JSON body.
    pub const fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A route declaration: default verb and path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Verb used by `send()`
    pub method: HttpMethod,
    /// Path relative to the base URL, with `{Name}` placeholders
    pub path: &'static str,
}

impl Route {
    pub const fn get(path: &'static str) -> Self {
        Self {
            method: HttpMethod::Get,
            path,
        }
    }

    pub const fn post(path: &'static str) -> Self {
        Self {
            method: HttpMethod::Post,
            path,
        }
    }

    /// Placeholder names referenced by the path template, in order.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        let path = self.path;
        path.split('{')
            .skip(1)
            .filter_map(|segment| segment.split_once('}').map(|(name, _)| name))
    }
}

/// Ordered wire parameters of a request.
///
/// Names are the ServiceStack property names (`Slug`, `Take`, ...). Unset
/// optional fields are simply not pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    pairs: Vec<(String, String)>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.push(name, value);
        self
    }

    /// Append a parameter only if it has a value.
    #[must_use]
    pub fn with_opt<V: ToString>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.push(name, value);
        }
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl ToString) {
        self.pairs.push((name.into(), value.to_string()));
    }

    /// Append every pair from `other`, keeping order.
    pub fn extend<K, V, I>(&mut self, other: I)
    where
        K: Into<String>,
        V: ToString,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, value) in other {
            self.push(name, value);
        }
    }

    /// First value for `name`, compared case-insensitively as ServiceStack does.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

/// A typed request bound to a route and a response type.
///
/// Implementations are generated-code style: one `impl` per DTO, listing the
/// DTO's parameters explicitly.
pub trait ServiceRequest: Serialize + Send + Sync {
    /// The DTO the service answers with.
    type Response: DeserializeOwned + Send;

    /// Where this request is sent.
    const ROUTE: Route;

    /// Wire parameters in declaration order.
    fn params(&self) -> RouteParams {
        RouteParams::new()
    }
}
