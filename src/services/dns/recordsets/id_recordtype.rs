use super::constants::RecordType;
use super::id_dnszone::DnsZoneId;
use crate::core::resourceids::{
    describe_components, impl_resource_id_traits, ParseResult, ResourceId, Segment,
};
use crate::utils::error::Result;

/// A record set within a DNS zone, addressed by record type and relative name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordTypeId {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub dns_zone_name: String,
    pub record_type: RecordType,
    pub relative_record_set_name: String,
}

impl RecordTypeId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        dns_zone_name: impl Into<String>,
        record_type: RecordType,
        relative_record_set_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            dns_zone_name: dns_zone_name.into(),
            record_type,
            relative_record_set_name: relative_record_set_name.into(),
        }
    }

    pub fn dns_zone(&self) -> DnsZoneId {
        DnsZoneId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.dns_zone_name.clone(),
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
    Segment::static_segment("staticDnsZones", "dnsZones"),
    Segment::user_specified("dnsZoneName", "dnsZoneValue"),
    Segment::constant("recordType", RecordType::possible_values(), "A"),
    Segment::user_specified("relativeRecordSetName", "relativeRecordSetValue"),
];

impl ResourceId for RecordTypeId {
    const ID_TYPE: &'static str = "Record Type";

    fn segments() -> &'static [Segment] {
        SEGMENTS
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self> {
        Ok(Self {
            subscription_id: result.get("subscriptionId")?,
            resource_group_name: result.get("resourceGroupName")?,
            dns_zone_name: result.get("dnsZoneName")?,
            record_type: RecordType::from(result.get("recordType")?),
            relative_record_set_name: result.get("relativeRecordSetName")?,
        })
    }

    fn id(&self) -> String {
        format!(
            "{}/{}/{}",
            self.dns_zone().id(),
            self.record_type,
            self.relative_record_set_name
        )
    }

    fn describe(&self) -> String {
        describe_components(
            Self::ID_TYPE,
            &[
                ("Subscription", self.subscription_id.as_str()),
                ("Resource Group Name", self.resource_group_name.as_str()),
                ("Dns Zone Name", self.dns_zone_name.as_str()),
                ("Record Type", self.record_type.as_str()),
                ("Relative Record Set Name", self.relative_record_set_name.as_str()),
            ],
        )
    }
}

impl_resource_id_traits!(RecordTypeId);
