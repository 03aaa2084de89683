//! Request and response DTOs bound to TechStacks routes.
//!
//! | Request | Route | Response |
//! |---------|-------|----------|
//! | [`Overview`] | `GET /overview` | [`OverviewResponse`] |
//! | [`AppOverview`] | `GET /app-overview` | [`AppOverviewResponse`] |
//! | [`GetTechnology`] | `GET /technology/{Slug}` | [`GetTechnologyResponse`] |
//! | [`GetAllTechnologies`] | `GET /technology` | [`GetAllTechnologiesResponse`] |
//! | [`FindTechnologies`] | `GET /technology/search` | `QueryResponse<Technology>` |
//! | [`GetTechnologyStack`] | `GET /techstacks/{Slug}` | [`GetTechnologyStackResponse`] |
//! | [`FindTechStacks`] | `GET /techstacks/search` | `QueryResponse<TechnologyStack>` |

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use servicestack_client::json::null_default;
use servicestack_client::{
    QueryBase, QueryRequest, QueryResponse, ResponseStatus, Route, RouteParams, ServiceRequest,
};

use crate::tier::{self, TechnologyTier};
use crate::types::{
    TechStackDetails, Technology, TechnologyInfo, TechnologyStack, TierOption, UserInfo,
};

// ============================================================================
// Overview
// ============================================================================

/// Landing-page rankings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Overview {
    /// Bypass the server-side cache
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reload: Option<bool>,
}

impl Overview {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_reload(mut self, reload: bool) -> Self {
        self.reload = Some(reload);
        self
    }
}

impl ServiceRequest for Overview {
    type Response = OverviewResponse;
    const ROUTE: Route = Route::get("/overview");

    fn params(&self) -> RouteParams {
        RouteParams::new().with_opt("Reload", self.reload)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    #[serde(default, with = "servicestack_client::dates::option", skip_serializing_if = "Option::is_none")]
    pub created: Option<NaiveDateTime>,
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub top_users: Vec<UserInfo>,
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub top_technologies: Vec<TechnologyInfo>,
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub latest_tech_stacks: Vec<TechStackDetails>,
    #[serde(
        default,
        deserialize_with = "tier::lenient::map",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub top_technologies_by_tier: HashMap<TechnologyTier, Vec<TechnologyInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_status: Option<ResponseStatus>,
}

// ============================================================================
// App Overview
// ============================================================================

/// Data the TechStacks app needs at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppOverview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reload: Option<bool>,
}

impl AppOverview {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_reload(mut self, reload: bool) -> Self {
        self.reload = Some(reload);
        self
    }
}

impl ServiceRequest for AppOverview {
    type Response = AppOverviewResponse;
    const ROUTE: Route = Route::get("/app-overview");

    fn params(&self) -> RouteParams {
        RouteParams::new().with_opt("Reload", self.reload)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppOverviewResponse {
    #[serde(default, with = "servicestack_client::dates::option", skip_serializing_if = "Option::is_none")]
    pub created: Option<NaiveDateTime>,
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub all_tiers: Vec<TierOption>,
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub top_technologies: Vec<TechnologyInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_status: Option<ResponseStatus>,
}

// ============================================================================
// Technologies
// ============================================================================

/// A single technology and the stacks using it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTechnology {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reload: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl GetTechnology {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    #[must_use]
    pub const fn with_reload(mut self, reload: bool) -> Self {
        self.reload = Some(reload);
        self
    }
}

impl ServiceRequest for GetTechnology {
    type Response = GetTechnologyResponse;
    const ROUTE: Route = Route::get("/technology/{Slug}");

    fn params(&self) -> RouteParams {
        RouteParams::new()
            .with_opt("Reload", self.reload)
            .with_opt("Slug", self.slug.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTechnologyResponse {
    #[serde(default, with = "servicestack_client::dates::option", skip_serializing_if = "Option::is_none")]
    pub created: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technology: Option<Technology>,
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub technology_stacks: Vec<TechnologyStack>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_status: Option<ResponseStatus>,
}

/// Every technology, unpaged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAllTechnologies {}

impl ServiceRequest for GetAllTechnologies {
    type Response = GetAllTechnologiesResponse;
    const ROUTE: Route = Route::get("/technology");
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAllTechnologiesResponse {
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub results: Vec<Technology>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_status: Option<ResponseStatus>,
}

/// AutoQuery over technologies.
///
/// Fields left unset add no filter. Filters the DTO doesn't declare can be
/// passed as extra arguments with `get_with_args`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FindTechnologies {
    #[serde(flatten)]
    pub query: QueryBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_contains: Option<String>,
}

impl FindTechnologies {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_name_contains(mut self, fragment: impl Into<String>) -> Self {
        self.name_contains = Some(fragment.into());
        self
    }

    #[must_use]
    pub fn with_vendor_name(mut self, vendor: impl Into<String>) -> Self {
        self.vendor_name = Some(vendor.into());
        self
    }

    #[must_use]
    pub fn with_description_contains(mut self, fragment: impl Into<String>) -> Self {
        self.description_contains = Some(fragment.into());
        self
    }
}

impl QueryRequest for FindTechnologies {
    fn query_base_mut(&mut self) -> &mut QueryBase {
        &mut self.query
    }
}

impl ServiceRequest for FindTechnologies {
    type Response = QueryResponse<Technology>;
    const ROUTE: Route = Route::get("/technology/search");

    fn params(&self) -> RouteParams {
        self.query.append_params(
            RouteParams::new()
                .with_opt("Name", self.name.as_deref())
                .with_opt("NameContains", self.name_contains.as_deref())
                .with_opt("VendorName", self.vendor_name.as_deref())
                .with_opt("DescriptionContains", self.description_contains.as_deref()),
        )
    }
}

// ============================================================================
// Tech Stacks
// ============================================================================

/// A single stack with its technology choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTechnologyStack {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl GetTechnologyStack {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
        }
    }
}

impl ServiceRequest for GetTechnologyStack {
    type Response = GetTechnologyStackResponse;
    const ROUTE: Route = Route::get("/techstacks/{Slug}");

    fn params(&self) -> RouteParams {
        RouteParams::new().with_opt("Slug", self.slug.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTechnologyStackResponse {
    #[serde(default, with = "servicestack_client::dates::option", skip_serializing_if = "Option::is_none")]
    pub created: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TechStackDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_status: Option<ResponseStatus>,
}

/// AutoQuery over tech stacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FindTechStacks {
    #[serde(flatten)]
    pub query: QueryBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_contains: Option<String>,
}

impl FindTechStacks {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name_contains(mut self, fragment: impl Into<String>) -> Self {
        self.name_contains = Some(fragment.into());
        self
    }

    #[must_use]
    pub fn with_vendor_name(mut self, vendor: impl Into<String>) -> Self {
        self.vendor_name = Some(vendor.into());
        self
    }

    #[must_use]
    pub fn with_description_contains(mut self, fragment: impl Into<String>) -> Self {
        self.description_contains = Some(fragment.into());
        self
    }
}

impl QueryRequest for FindTechStacks {
    fn query_base_mut(&mut self) -> &mut QueryBase {
        &mut self.query
    }
}

impl ServiceRequest for FindTechStacks {
    type Response = QueryResponse<TechnologyStack>;
    const ROUTE: Route = Route::get("/techstacks/search");

    fn params(&self) -> RouteParams {
        self.query.append_params(
            RouteParams::new()
                .with_opt("NameContains", self.name_contains.as_deref())
                .with_opt("VendorName", self.vendor_name.as_deref())
                .with_opt("DescriptionContains", self.description_contains.as_deref()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use servicestack_client::HttpMethod;

    fn pairs(params: &RouteParams) -> Vec<(&str, &str)> {
        params.iter().collect()
    }

    #[test]
    fn test_routes_are_declared_get() {
        assert_eq!(Overview::ROUTE.path, "/overview");
        assert_eq!(AppOverview::ROUTE.path, "/app-overview");
        assert_eq!(GetTechnology::ROUTE.path, "/technology/{Slug}");
        assert_eq!(GetAllTechnologies::ROUTE.path, "/technology");
        assert_eq!(FindTechnologies::ROUTE.path, "/technology/search");
        assert_eq!(GetTechnologyStack::ROUTE.path, "/techstacks/{Slug}");
        assert_eq!(FindTechStacks::ROUTE.path, "/techstacks/search");

        for method in [
            Overview::ROUTE.method,
            AppOverview::ROUTE.method,
            GetTechnology::ROUTE.method,
            GetAllTechnologies::ROUTE.method,
            FindTechnologies::ROUTE.method,
            GetTechnologyStack::ROUTE.method,
            FindTechStacks::ROUTE.method,
        ] {
            assert_eq!(method, HttpMethod::Get);
        }
    }

    #[test]
    fn test_empty_requests_have_no_params() {
        assert!(Overview::new().params().is_empty());
        assert!(AppOverview::new().params().is_empty());
        assert!(GetAllTechnologies::default().params().is_empty());
        assert!(FindTechnologies::new().params().is_empty());
    }

    #[test]
    fn test_get_technology_params() {
        let request = GetTechnology::new().with_slug("servicestack");
        assert_eq!(pairs(&request.params()), vec![("Slug", "servicestack")]);

        let request = request.with_reload(true);
        assert_eq!(
            pairs(&request.params()),
            vec![("Reload", "true"), ("Slug", "servicestack")]
        );
    }

    #[test]
    fn test_find_technologies_params_put_filters_before_paging() {
        let request = FindTechnologies::new()
            .with_name("ServiceStack")
            .with_take(5)
            .with_order_by_desc("StacksCount");

        assert_eq!(
            pairs(&request.params()),
            vec![
                ("Name", "ServiceStack"),
                ("Take", "5"),
                ("OrderByDesc", "StacksCount")
            ]
        );
    }

    #[test]
    fn test_find_tech_stacks_params() {
        let request = FindTechStacks::new()
            .with_vendor_name("ServiceStack")
            .with_skip(20);
        assert_eq!(
            pairs(&request.params()),
            vec![("VendorName", "ServiceStack"), ("Skip", "20")]
        );
    }

    #[test]
    fn test_get_technology_stack_params() {
        let request = GetTechnologyStack::new("techstacks-website");
        assert_eq!(pairs(&request.params()), vec![("Slug", "techstacks-website")]);
    }

    #[test]
    fn test_request_bodies_are_pascal_case_and_sparse() {
        let body = serde_json::to_string(&FindTechnologies::new().with_name("Redis").with_take(1))
            .unwrap();
        assert_eq!(body, r#"{"Take":1,"Name":"Redis"}"#);

        assert_eq!(serde_json::to_string(&Overview::new()).unwrap(), "{}");
    }

    #[test]
    fn test_overview_response_tolerates_nulls() {
        let response: OverviewResponse = serde_json::from_str(
            r#"{"topUsers":null,"topTechnologies":null,"latestTechStacks":null,"topTechnologiesByTier":null}"#,
        )
        .unwrap();
        assert!(response.top_users.is_empty());
        assert!(response.top_technologies_by_tier.is_empty());
        assert!(response.response_status.is_none());
    }

    #[test]
    fn test_overview_null_tier_group_reads_empty() {
        let response: OverviewResponse =
            serde_json::from_str(r#"{"topTechnologiesByTier":{"Data":null}}"#).unwrap();
        assert!(response.top_technologies_by_tier[&TechnologyTier::Data].is_empty());
    }

    #[test]
    fn test_overview_skips_unknown_tiers() {
        let response: OverviewResponse = serde_json::from_str(
            r#"{"topTechnologies":[{"slug":"cobol","tier":"Mainframe"}],
                "topTechnologiesByTier":{"Mainframe":[{"slug":"cobol"}],"Http":[]}}"#,
        )
        .unwrap();
        assert!(response.top_technologies[0].tier.is_none());
        assert_eq!(response.top_technologies[0].slug.as_deref(), Some("cobol"));
        assert_eq!(response.top_technologies_by_tier.len(), 1);
        assert!(response.top_technologies_by_tier.contains_key(&TechnologyTier::Http));
    }

    #[test]
    fn test_absent_collections_stay_absent() {
        let response: OverviewResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(serde_json::to_string(&response).unwrap(), "{}");

        let response: GetTechnologyResponse =
            serde_json::from_str(r#"{"technologyStacks":null}"#).unwrap();
        assert_eq!(serde_json::to_string(&response).unwrap(), "{}");
    }

    #[test]
    fn test_get_technology_response_shape() {
        let response: GetTechnologyResponse = serde_json::from_str(
            r#"{
                "created": "2015-02-01T10:00:00",
                "technology": {"id": 1, "name": "ServiceStack", "slug": "servicestack", "tier": "Server"},
                "technologyStacks": [{"id": 1, "name": "TechStacks Website"}]
            }"#,
        )
        .unwrap();

        let technology = response.technology.unwrap();
        assert_eq!(technology.name.as_deref(), Some("ServiceStack"));
        assert_eq!(technology.tier, Some(TechnologyTier::Server));
        assert_eq!(response.technology_stacks.len(), 1);
        assert!(response.created.is_some());
    }
}
