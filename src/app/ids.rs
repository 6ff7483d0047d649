use crate::config::IdKind;
use crate::core::commonids::{ResourceGroupId, ScopeId, SubscriptionId};
use crate::core::ResourceId;
use crate::services::authorization::roleassignments::ScopedRoleAssignmentId;
use crate::services::compute::virtualmachines::VirtualMachineId;
use crate::services::dns::recordsets::{DnsZoneId, RecordTypeId};
use crate::services::network::subnets::SubnetId;
use crate::services::network::virtualnetworks::VirtualNetworkId;
use crate::services::storage::storageaccounts::StorageAccountId;
use crate::utils::error::{ArmError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Any ID the command line knows how to work with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyResourceId {
    Subscription(SubscriptionId),
    ResourceGroup(ResourceGroupId),
    Scope(ScopeId),
    StorageAccount(StorageAccountId),
    VirtualMachine(VirtualMachineId),
    VirtualNetwork(VirtualNetworkId),
    Subnet(SubnetId),
    DnsZone(DnsZoneId),
    RecordSet(RecordTypeId),
    RoleAssignment(ScopedRoleAssignmentId),
}

macro_rules! each_id {
    ($value:expr, $id:ident => $body:expr) => {
        match $value {
            AnyResourceId::Subscription($id) => $body,
            AnyResourceId::ResourceGroup($id) => $body,
            AnyResourceId::Scope($id) => $body,
            AnyResourceId::StorageAccount($id) => $body,
            AnyResourceId::VirtualMachine($id) => $body,
            AnyResourceId::VirtualNetwork($id) => $body,
            AnyResourceId::Subnet($id) => $body,
            AnyResourceId::DnsZone($id) => $body,
            AnyResourceId::RecordSet($id) => $body,
            AnyResourceId::RoleAssignment($id) => $body,
        }
    };
}

fn parse_as<T: ResourceId>(input: &str, insensitively: bool) -> Result<T> {
    if insensitively {
        T::parse_insensitively(input)
    } else {
        T::parse(input)
    }
}

impl AnyResourceId {
    pub fn parse(kind: IdKind, input: &str, insensitively: bool) -> Result<Self> {
        Ok(match kind {
            IdKind::Subscription => Self::Subscription(parse_as(input, insensitively)?),
            IdKind::ResourceGroup => Self::ResourceGroup(parse_as(input, insensitively)?),
            IdKind::Scope => Self::Scope(parse_as(input, insensitively)?),
            IdKind::StorageAccount => Self::StorageAccount(parse_as(input, insensitively)?),
            IdKind::VirtualMachine => Self::VirtualMachine(parse_as(input, insensitively)?),
            IdKind::VirtualNetwork => Self::VirtualNetwork(parse_as(input, insensitively)?),
            IdKind::Subnet => Self::Subnet(parse_as(input, insensitively)?),
            IdKind::DnsZone => Self::DnsZone(parse_as(input, insensitively)?),
            IdKind::RecordSet => Self::RecordSet(parse_as(input, insensitively)?),
            IdKind::RoleAssignment => Self::RoleAssignment(parse_as(input, insensitively)?),
        })
    }

    /// Works out which kind of ID `input` is, most specific first. Fixed
    /// segments are matched without regard to casing.
    pub fn detect(input: &str) -> Result<Self> {
        const ORDER: &[IdKind] = &[
            IdKind::RoleAssignment,
            IdKind::Subnet,
            IdKind::RecordSet,
            IdKind::StorageAccount,
            IdKind::VirtualMachine,
            IdKind::VirtualNetwork,
            IdKind::DnsZone,
            IdKind::ResourceGroup,
            IdKind::Subscription,
        ];

        for kind in ORDER {
            if let Ok(id) = Self::parse(*kind, input, true) {
                tracing::debug!("Detected {:?} ID", kind);
                return Ok(id);
            }
        }

        Err(ArmError::InvalidResourceId {
            id_type: "Resource".to_string(),
            input: input.to_string(),
            reason: "not a recognised resource ID".to_string(),
        })
    }

    pub fn id_type(&self) -> &'static str {
        fn type_of<T: ResourceId>(_: &T) -> &'static str {
            T::ID_TYPE
        }
        each_id!(self, id => type_of(id))
    }

    pub fn id(&self) -> String {
        each_id!(self, id => id.id())
    }

    pub fn describe(&self) -> String {
        each_id!(self, id => id.describe())
    }

    pub fn segment_values(&self) -> Result<Vec<(&'static str, String)>> {
        each_id!(self, id => id.segment_values())
    }

    pub fn summary(&self) -> Result<IdSummary> {
        Ok(IdSummary {
            id_type: self.id_type(),
            id: self.id(),
            segments: self.segment_values()?.into_iter().collect(),
            description: self.describe(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdSummary {
    #[serde(rename = "type")]
    pub id_type: &'static str,
    pub id: String,
    pub segments: BTreeMap<&'static str, String>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const RG: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group";

    #[test]
    fn test_detect_most_specific_type() {
        let vm = format!("{RG}/providers/Microsoft.Compute/virtualMachines/vm1");
        assert!(matches!(
            AnyResourceId::detect(&vm).unwrap(),
            AnyResourceId::VirtualMachine(_)
        ));

        let subnet = format!("{RG}/providers/Microsoft.Network/virtualNetworks/vnet/subnets/default");
        assert!(matches!(
            AnyResourceId::detect(&subnet).unwrap(),
            AnyResourceId::Subnet(_)
        ));

        let assignment = format!(
            "{RG}/providers/Microsoft.Authorization/roleAssignments/00000000-0000-0000-0000-000000000001"
        );
        assert!(matches!(
            AnyResourceId::detect(&assignment).unwrap(),
            AnyResourceId::RoleAssignment(_)
        ));

        assert!(matches!(
            AnyResourceId::detect(RG).unwrap(),
            AnyResourceId::ResourceGroup(_)
        ));
    }

    #[test]
    fn test_detect_normalises_casing() {
        let input = "/SUBSCRIPTIONS/sub/RESOURCEGROUPS/rg/providers/microsoft.storage/storageaccounts/acct";
        let id = AnyResourceId::detect(input).unwrap();
        assert_eq!(
            id.id(),
            "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts/acct"
        );
        assert_eq!(id.id_type(), "Storage Account");
    }

    #[test]
    fn test_detect_unknown_path() {
        let err = AnyResourceId::detect("/providers/Microsoft.Widgets/widgets/w").unwrap_err();
        assert!(matches!(err, ArmError::InvalidResourceId { .. }));
    }

    #[test]
    fn test_parse_with_explicit_kind_is_case_sensitive() {
        let input = format!("{RG}/providers/microsoft.compute/virtualMachines/vm1");
        assert!(AnyResourceId::parse(IdKind::VirtualMachine, &input, false).is_err());
        assert!(AnyResourceId::parse(IdKind::VirtualMachine, &input, true).is_ok());
    }

    #[test]
    fn test_segment_values_for_scoped_id() {
        let input = format!(
            "{RG}/providers/Microsoft.Authorization/roleAssignments/assignment-1"
        );
        let id = AnyResourceId::parse(IdKind::RoleAssignment, &input, false).unwrap();
        let values = id.segment_values().unwrap();
        assert_eq!(
            values,
            vec![
                ("scope", RG.to_string()),
                ("roleAssignmentName", "assignment-1".to_string()),
            ]
        );
    }

    #[test]
    fn test_summary_serializes() {
        let id = AnyResourceId::parse(IdKind::ResourceGroup, RG, false).unwrap();
        let json = serde_json::to_value(id.summary().unwrap()).unwrap();
        assert_eq!(json["type"], "Resource Group");
        assert_eq!(json["id"], RG);
        assert_eq!(
            json["segments"]["subscriptionId"],
            "12345678-1234-9876-4563-123456789012"
        );
        assert_eq!(json["segments"]["resourceGroupName"], "example-resource-group");
        assert!(json["segments"].get("staticSubscriptions").is_none());
        assert!(json["description"]
            .as_str()
            .unwrap()
            .contains("example-resource-group"));
    }
}
