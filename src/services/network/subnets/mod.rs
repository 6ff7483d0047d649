//! Subnets of a virtual network (`Microsoft.Network/virtualNetworks/subnets`).

pub mod constants;
pub mod id_subnet;
pub mod models;
mod operations;

pub use constants::*;
pub use id_subnet::SubnetId;
pub use models::*;

use crate::core::Client;

pub const API_VERSION: &str = "2023-11-01";

#[derive(Debug, Clone)]
pub struct SubnetsClient {
    client: Client,
}

impl SubnetsClient {
    pub fn new(base: &Client) -> Self {
        Self {
            client: base.with_api_version(API_VERSION),
        }
    }
}
