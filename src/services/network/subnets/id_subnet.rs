use crate::core::resourceids::{
    describe_components, impl_resource_id_traits, ParseResult, ResourceId, Segment,
};
use crate::services::network::virtualnetworks::VirtualNetworkId;
use crate::utils::error::Result;

/// A subnet, nested under its virtual network.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubnetId {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub virtual_network_name: String,
    pub subnet_name: String,
}

impl SubnetId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        virtual_network_name: impl Into<String>,
        subnet_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            virtual_network_name: virtual_network_name.into(),
            subnet_name: subnet_name.into(),
        }
    }

    pub fn virtual_network(&self) -> VirtualNetworkId {
        VirtualNetworkId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.virtual_network_name.clone(),
        )
    }
}

const SEGMENTS: &[Segment] = &[
    Segment::static_segment("staticSubscriptions", "subscriptions"),
    Segment::subscription_id("subscriptionId"),
    Segment::static_segment("staticResourceGroups", "resourceGroups"),
    Segment::resource_group("resourceGroupName"),
    Segment::static_segment("staticProviders", "providers"),
    Segment::resource_provider("staticMicrosoftNetwork", "Microsoft.Network"),
    Segment::static_segment("staticVirtualNetworks", "virtualNetworks"),
    Segment::user_specified("virtualNetworkName", "virtualNetworkValue"),
    Segment::static_segment("staticSubnets", "subnets"),
    Segment::user_specified("subnetName", "subnetValue"),
];

impl ResourceId for SubnetId {
    const ID_TYPE: &'static str = "Subnet";

    fn segments() -> &'static [Segment] {
        SEGMENTS
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self> {
        Ok(Self {
            subscription_id: result.get("subscriptionId")?,
            resource_group_name: result.get("resourceGroupName")?,
            virtual_network_name: result.get("virtualNetworkName")?,
            subnet_name: result.get("subnetName")?,
        })
    }

    fn id(&self) -> String {
        format!("{}/subnets/{}", self.virtual_network().id(), self.subnet_name)
    }

    fn describe(&self) -> String {
        describe_components(
            Self::ID_TYPE,
            &[
                ("Subscription", self.subscription_id.as_str()),
                ("Resource Group Name", self.resource_group_name.as_str()),
                ("Virtual Network Name", self.virtual_network_name.as_str()),
                ("Subnet Name", self.subnet_name.as_str()),
            ],
        )
    }
}

impl_resource_id_traits!(SubnetId);
