//! Resource groups (`Microsoft.Resources/resourceGroups`).
//!
//! Resource groups are addressed with [`ResourceGroupId`] and listed per
//! [`SubscriptionId`], both from `core::commonids`.

pub mod constants;
pub mod models;
mod operations;

pub use crate::core::commonids::{ResourceGroupId, SubscriptionId};
pub use constants::*;
pub use models::*;

use crate::core::Client;

pub const API_VERSION: &str = "2022-09-01";

#[derive(Debug, Clone)]
pub struct ResourceGroupsClient {
    client: Client,
}

impl ResourceGroupsClient {
    pub fn new(base: &Client) -> Self {
        Self {
            client: base.with_api_version(API_VERSION),
        }
    }
}
