//! Virtual networks (`Microsoft.Network/virtualNetworks`).

pub mod constants;
pub mod id_virtualnetwork;
pub mod models;
mod operations;

pub use constants::*;
pub use id_virtualnetwork::VirtualNetworkId;
pub use models::*;

use crate::core::Client;

pub const API_VERSION: &str = "2023-11-01";

#[derive(Debug, Clone)]
pub struct VirtualNetworksClient {
    client: Client,
}

impl VirtualNetworksClient {
    pub fn new(base: &Client) -> Self {
        Self {
            client: base.with_api_version(API_VERSION),
        }
    }
}
