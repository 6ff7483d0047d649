use crate::core::resourceids::{
    describe_components, impl_resource_id_traits, ParseResult, ResourceId, Segment,
};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnsZoneId {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub dns_zone_name: String,
}

impl DnsZoneId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        dns_zone_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            dns_zone_name: dns_zone_name.into(),
        }
    }
}

const SEGMENTS: &[Segment] = &[
    Segment::static_segment("staticSubscriptions", "subscriptions"),
    Segment::subscription_id("subscriptionId"),
    Segment::static_segment("staticResourceGroups", "resourceGroups"),
    Segment::resource_group("resourceGroupName"),
    Segment::static_segment("staticProviders", "providers"),
    Segment::resource_provider("staticMicrosoftNetwork", "Microsoft.Network"),
    Segment::static_segment("staticDnsZones", "dnsZones"),
    Segment::user_specified("dnsZoneName", "dnsZoneValue"),
];

impl ResourceId for DnsZoneId {
    const ID_TYPE: &'static str = "Dns Zone";

    fn segments() -> &'static [Segment] {
        SEGMENTS
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self> {
        Ok(Self {
            subscription_id: result.get("subscriptionId")?,
            resource_group_name: result.get("resourceGroupName")?,
            dns_zone_name: result.get("dnsZoneName")?,
        })
    }

    fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Network/dnsZones/{}",
            self.subscription_id, self.resource_group_name, self.dns_zone_name
        )
    }

    fn describe(&self) -> String {
        describe_components(
            Self::ID_TYPE,
            &[
                ("Subscription", self.subscription_id.as_str()),
                ("Resource Group Name", self.resource_group_name.as_str()),
                ("Dns Zone Name", self.dns_zone_name.as_str()),
            ],
        )
    }
}

impl_resource_id_traits!(DnsZoneId);
