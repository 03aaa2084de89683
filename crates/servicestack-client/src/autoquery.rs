//! AutoQuery request and response shapes.
//!
//! AutoQuery services turn request fields into filters server-side. The
//! client only needs the shared paging/ordering fields and the generic
//! result envelope.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ResponseStatus;
use crate::json::null_default;
use crate::route::RouteParams;

/// Paging and ordering fields shared by every AutoQuery request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

impl QueryBase {
    /// Wire parameters, after any request-specific ones.
    pub fn append_params(&self, params: RouteParams) -> RouteParams {
        params
            .with_opt("Skip", self.skip)
            .with_opt("Take", self.take)
            .with_opt("OrderBy", self.order_by.as_deref())
            .with_opt("OrderByDesc", self.order_by_desc.as_deref())
            .with_opt("Include", self.include.as_deref())
            .with_opt("Fields", self.fields.as_deref())
    }
}

/// Builder methods for requests that embed a [`QueryBase`].
pub trait QueryRequest: Sized {
    fn query_base_mut(&mut self) -> &mut QueryBase;

    #[must_use]
    fn with_skip(mut self, skip: u32) -> Self {
        self.query_base_mut().skip = Some(skip);
        self
    }

    #[must_use]
    fn with_take(mut self, take: u32) -> Self {
        self.query_base_mut().take = Some(take);
        self
    }

    #[must_use]
    fn with_order_by(mut self, fields: impl Into<String>) -> Self {
        self.query_base_mut().order_by = Some(fields.into());
        self
    }

    #[must_use]
    fn with_order_by_desc(mut self, fields: impl Into<String>) -> Self {
        self.query_base_mut().order_by_desc = Some(fields.into());
        self
    }

    #[must_use]
    fn with_include(mut self, include: impl Into<String>) -> Self {
        self.query_base_mut().include = Some(include.into());
        self
    }

    #[must_use]
    fn with_fields(mut self, fields: impl Into<String>) -> Self {
        self.query_base_mut().fields = Some(fields.into());
        self
    }
}

/// Result envelope of an AutoQuery service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct QueryResponse<T> {
    #[serde(default, deserialize_with = "null_default")]
    pub offset: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub total: u32,
    #[serde(
        default = "Vec::new",
        deserialize_with = "null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub results: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_status: Option<ResponseStatus>,
}
