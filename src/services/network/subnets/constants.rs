use crate::core::open_enum::open_enum;

pub use crate::services::network::virtualnetworks::constants::ProvisioningState;

open_enum! {
    pub enum VirtualNetworkPrivateEndpointNetworkPolicies {
        Disabled => "Disabled",
        Enabled => "Enabled",
        NetworkSecurityGroupEnabled => "NetworkSecurityGroupEnabled",
        RouteTableEnabled => "RouteTableEnabled",
    }
}

open_enum! {
    pub enum VirtualNetworkPrivateLinkServiceNetworkPolicies {
        Disabled => "Disabled",
        Enabled => "Enabled",
    }
}
