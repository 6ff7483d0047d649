//! Resource manager service packages, one module per API.

pub mod authorization;
pub mod compute;
pub mod dns;
pub mod network;
pub mod resources;
pub mod storage;

use crate::core::Client;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use authorization::roleassignments::RoleAssignmentsClient;
use compute::virtualmachines::VirtualMachinesClient;
use dns::recordsets::RecordSetsClient;
use network::subnets::SubnetsClient;
use network::virtualnetworks::VirtualNetworksClient;
use resources::resourcegroups::ResourceGroupsClient;
use std::sync::Arc;
use storage::storageaccounts::StorageAccountsClient;

/// One client per service package, all sharing the same endpoint, credentials
/// and retry settings.
#[derive(Debug, Clone)]
pub struct ResourceManagerClient {
    pub record_sets: RecordSetsClient,
    pub resource_groups: ResourceGroupsClient,
    pub role_assignments: RoleAssignmentsClient,
    pub storage_accounts: StorageAccountsClient,
    pub subnets: SubnetsClient,
    pub virtual_machines: VirtualMachinesClient,
    pub virtual_networks: VirtualNetworksClient,
}

impl ResourceManagerClient {
    pub fn new(base: &Client) -> Self {
        tracing::debug!("Building service clients for {}", base.endpoint());
        Self {
            record_sets: RecordSetsClient::new(base),
            resource_groups: ResourceGroupsClient::new(base),
            role_assignments: RoleAssignmentsClient::new(base),
            storage_accounts: StorageAccountsClient::new(base),
            subnets: SubnetsClient::new(base),
            virtual_machines: VirtualMachinesClient::new(base),
            virtual_networks: VirtualNetworksClient::new(base),
        }
    }

    pub fn from_config<C: ConfigProvider>(
        config: &C,
        authorizer: Option<Arc<dyn crate::domain::ports::Authorizer>>,
    ) -> Result<Self> {
        let mut base = Client::from_config(config)?;
        if let Some(authorizer) = authorizer {
            base = base.with_authorizer(authorizer);
        }
        Ok(Self::new(&base))
    }
}
