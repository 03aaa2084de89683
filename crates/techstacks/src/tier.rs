//! Technology tiers.
//!
//! Tiers travel as their symbolic name (`"ProgrammingLanguage"`), never as
//! an ordinal. The name table below is the single source for both
//! directions of the codec.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Categorical classification of a technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TechnologyTier {
    ProgrammingLanguage,
    Client,
    Http,
    Server,
    Data,
    SoftwareInfrastructure,
    OperatingSystem,
    HardwareInfrastructure,
    ThirdPartyServices,
}

/// `(tier, wire name, display title)`, indexed by discriminant.
const TIERS: [(TechnologyTier, &str, &str); 9] = [
    (TechnologyTier::ProgrammingLanguage, "ProgrammingLanguage", "Programming Languages"),
    (TechnologyTier::Client, "Client", "Client Libraries"),
    (TechnologyTier::Http, "Http", "HTTP Server Technologies"),
    (TechnologyTier::Server, "Server", "Server Libraries"),
    (TechnologyTier::Data, "Data", "Databases and NoSQL Stores"),
    (TechnologyTier::SoftwareInfrastructure, "SoftwareInfrastructure", "Server Software"),
    (TechnologyTier::OperatingSystem, "OperatingSystem", "Operating Systems"),
    (TechnologyTier::HardwareInfrastructure, "HardwareInfrastructure", "Hardware Infrastructure"),
    (TechnologyTier::ThirdPartyServices, "ThirdPartyServices", "3rd Party API Services"),
];

impl TechnologyTier {
    /// Every tier, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::ProgrammingLanguage,
        Self::Client,
        Self::Http,
        Self::Server,
        Self::Data,
        Self::SoftwareInfrastructure,
        Self::OperatingSystem,
        Self::HardwareInfrastructure,
        Self::ThirdPartyServices,
    ];

    /// Wire name, e.g. `"ProgrammingLanguage"`.
    pub const fn as_str(self) -> &'static str {
        TIERS[self as usize].1
    }

    /// Human-readable title, e.g. `"Programming Languages"`.
    pub const fn title(self) -> &'static str {
        TIERS[self as usize].2
    }

    /// Look up a tier by wire name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        TIERS
            .iter()
            .find(|(_, wire, _)| wire.eq_ignore_ascii_case(name))
            .map(|(tier, _, _)| *tier)
    }
}

impl fmt::Display for TechnologyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no tier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown technology tier '{0}'")]
pub struct ParseTierError(pub String);

impl FromStr for TechnologyTier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseTierError(s.to_string()))
    }
}

impl Serialize for TechnologyTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

struct TierVisitor;

impl Visitor<'_> for TierVisitor {
    type Value = TechnologyTier;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a technology tier name")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for TechnologyTier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(TierVisitor)
    }
}

/// Response-field readers that drop tier names this client doesn't know.
///
/// The service can add tiers at any time; a new name must not fail the whole
/// response. The strict [`Deserialize`] impl stays available for direct use.
pub mod lenient {
    use super::{Deserialize, Deserializer, HashMap, TechnologyTier};

    /// `Option<TechnologyTier>` field: unknown names and `null` read as `None`.
    pub fn option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<TechnologyTier>, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?
            .and_then(|name| TechnologyTier::from_name(&name)))
    }

    /// Tier-keyed map: unknown keys are skipped, `null` values read as empty.
    pub fn map<'de, D, V>(deserializer: D) -> Result<HashMap<TechnologyTier, V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Default + Deserialize<'de>,
    {
        let raw = Option::<HashMap<String, Option<V>>>::deserialize(deserializer)?;
        Ok(raw
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(name, value)| {
                TechnologyTier::from_name(&name).map(|tier| (tier, value.unwrap_or_default()))
            })
            .collect())
    }
}
