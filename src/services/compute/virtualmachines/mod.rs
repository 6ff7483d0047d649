//! Virtual machines (`Microsoft.Compute/virtualMachines`).

pub mod constants;
pub mod id_virtualmachine;
pub mod models;
mod operations;

pub use constants::*;
pub use id_virtualmachine::VirtualMachineId;
pub use models::*;

use crate::core::Client;

pub const API_VERSION: &str = "2021-11-01";

#[derive(Debug, Clone)]
pub struct VirtualMachinesClient {
    client: Client,
}

impl VirtualMachinesClient {
    pub fn new(base: &Client) -> Self {
        Self {
            client: base.with_api_version(API_VERSION),
        }
    }
}
