//! Typed client surface for the TechStacks API.
//!
//! Request DTOs in this crate implement
//! [`ServiceRequest`](servicestack_client::ServiceRequest), so any
//! [`JsonServiceClient`](servicestack_client::JsonServiceClient) can send
//! them:
//!
//! ```no_run
//! use techstacks::{FindTechnologies, QueryRequest};
//!
//! # async fn run() -> servicestack_client::ClientResult<()> {
//! let client = techstacks::client()?;
//! let response = client
//!     .get(&FindTechnologies::new().with_name("ServiceStack").with_take(1))
//!     .await?;
//! println!("{} matches", response.total);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod operations;
mod tier;
mod types;

// Only used by integration tests
#[cfg(test)]
use anyhow as _;
#[cfg(test)]
use tokio as _;
#[cfg(test)]
use tracing_subscriber as _;
#[cfg(test)]
use wiremock as _;

use servicestack_client::{ClientConfig, ClientResult, DefaultJsonServiceClient};

// ============================================================================
// Public API
// ============================================================================

pub use operations::{
    AppOverview, AppOverviewResponse, FindTechStacks, FindTechnologies, GetAllTechnologies,
    GetAllTechnologiesResponse, GetTechnology, GetTechnologyResponse, GetTechnologyStack,
    GetTechnologyStackResponse, Overview, OverviewResponse,
};
pub use tier::{ParseTierError, TechnologyTier};
pub use types::{
    TechStackDetails, Technology, TechnologyInStack, TechnologyInfo, TechnologyStack, TierOption,
    UserInfo,
};

// AutoQuery builders are needed to page the Find* requests
pub use servicestack_client::{QueryRequest, QueryResponse};

/// Public TechStacks deployment.
pub const BASE_URL: &str = "http://techstacks.io";

/// Default configuration for [`BASE_URL`].
pub fn config() -> ClientConfig {
    ClientConfig::new(BASE_URL).with_user_agent(concat!("techstacks/", env!("CARGO_PKG_VERSION")))
}

/// Client for the public TechStacks deployment.
pub fn client() -> ClientResult<DefaultJsonServiceClient> {
    DefaultJsonServiceClient::new(&config())
}
