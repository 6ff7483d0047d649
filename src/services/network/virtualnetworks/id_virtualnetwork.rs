use crate::core::commonids::ResourceGroupId;
use crate::core::resourceids::{
    describe_components, impl_resource_id_traits, ParseResult, ResourceId, Segment,
};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VirtualNetworkId {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub virtual_network_name: String,
}

impl VirtualNetworkId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        virtual_network_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            virtual_network_name: virtual_network_name.into(),
        }
    }

    pub fn resource_group(&self) -> ResourceGroupId {
        ResourceGroupId::new(self.subscription_id.clone(), self.resource_group_name.clone())
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
];

impl ResourceId for VirtualNetworkId {
    const ID_TYPE: &'static str = "Virtual Network";

    fn segments() -> &'static [Segment] {
        SEGMENTS
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self> {
        Ok(Self {
            subscription_id: result.get("subscriptionId")?,
            resource_group_name: result.get("resourceGroupName")?,
            virtual_network_name: result.get("virtualNetworkName")?,
        })
    }

    fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Network/virtualNetworks/{}",
            self.subscription_id, self.resource_group_name, self.virtual_network_name
        )
    }

    fn describe(&self) -> String {
        describe_components(
            Self::ID_TYPE,
            &[
                ("Subscription", self.subscription_id.as_str()),
                ("Resource Group Name", self.resource_group_name.as_str()),
                ("Virtual Network Name", self.virtual_network_name.as_str()),
            ],
        )
    }
}

impl_resource_id_traits!(VirtualNetworkId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let input = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.Network/virtualNetworks/virtualNetworkValue";
        let id = VirtualNetworkId::parse(input).unwrap();
        assert_eq!(id.virtual_network_name, "virtualNetworkValue");
        assert_eq!(id.id(), input);
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let id = VirtualNetworkId::parse(
            "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Network/virtualNetworks/vnet/",
        )
        .unwrap();
        assert_eq!(id, VirtualNetworkId::new("sub", "rg", "vnet"));
    }
}
