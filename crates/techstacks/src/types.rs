//! TechStacks entities.
//!
//! Every scalar is optional on the wire: unset values are omitted when
//! serialized and `null` reads back as unset. Collections read `null` as
//! empty. Wire names are camelCase.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use servicestack_client::json::null_default;

use crate::tier::{self, TechnologyTier};

/// A user ranked by number of stacks created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacks_count: Option<u32>,
}

/// Technology summary as listed in rankings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyInfo {
    #[serde(
        default,
        deserialize_with = "tier::lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub tier: Option<TechnologyTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacks_count: Option<u32>,
}

/// A technology with its audit and approval metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, with = "servicestack_client::dates::option", skip_serializing_if = "Option::is_none")]
    pub created: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, with = "servicestack_client::dates::option", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_approved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(
        default,
        deserialize_with = "tier::lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub tier: Option<TechnologyTier>,
    #[serde(default, with = "servicestack_client::dates::option", skip_serializing_if = "Option::is_none")]
    pub last_status_update: Option<NaiveDateTime>,
}

/// A technology stack (an application and what it is built with).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyStack {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot_url: Option<String>,
    #[serde(default, with = "servicestack_client::dates::option", skip_serializing_if = "Option::is_none")]
    pub created: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, with = "servicestack_client::dates::option", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Markdown source of the stack write-up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, with = "servicestack_client::dates::option", skip_serializing_if = "Option::is_none")]
    pub last_status_update: Option<NaiveDateTime>,
}

/// A technology as chosen by one stack.
///
/// The join row has its own `id`; `technology_id` points at the technology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyInStack {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technology_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technology_stack_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
    #[serde(flatten)]
    pub technology: Technology,
}

/// A stack with its rendered details and ordered technology choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStackDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details_html: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub technology_choices: Vec<TechnologyInStack>,
    #[serde(flatten)]
    pub stack: TechnologyStack,
}

/// The `Option` DTO: a selectable tier with its display title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "tier::lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<TechnologyTier>,
}

impl TierOption {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub const fn with_value(mut self, value: TechnologyTier) -> Self {
        self.value = Some(value);
        self
    }
}

impl From<TechnologyTier> for TierOption {
    fn from(tier: TechnologyTier) -> Self {
        Self::new()
            .with_name(tier.as_str())
            .with_title(tier.title())
            .with_value(tier)
    }
}
