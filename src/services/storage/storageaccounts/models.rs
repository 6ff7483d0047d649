use super::constants::{
    AccessTier, AccountStatus, KeyPermission, Kind, ListKeyExpand, MinimumTlsVersion,
    ProvisioningState, PublicNetworkAccess, Reason, SkuName, SkuTier, StorageAccountExpand,
};
use crate::core::client::Options;
use crate::core::Predicate;
use crate::domain::model::{ManagedServiceIdentity, SystemData, Tags};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sku {
    pub name: SkuName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<SkuTier>,
}

impl Sku {
    pub fn new(name: SkuName) -> Self {
        Self { name, tier: None }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dfs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccountProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_tier: Option<AccessTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_blob_public_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_shared_key_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hns_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_tls_version: Option<MinimumTlsVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_endpoints: Option<Endpoints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<ProvisioningState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_network_access: Option<PublicNetworkAccess>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_of_primary: Option<AccountStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_of_secondary: Option<AccountStatus>,
    #[serde(rename = "supportsHttpsTrafficOnly", skip_serializing_if = "Option::is_none")]
    pub supports_https_traffic_only: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<ManagedServiceIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<StorageAccountProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_data: Option<SystemData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccountPropertiesCreateParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_tier: Option<AccessTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_blob_public_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_shared_key_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hns_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_tls_version: Option<MinimumTlsVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_network_access: Option<PublicNetworkAccess>,
    #[serde(rename = "supportsHttpsTrafficOnly", skip_serializing_if = "Option::is_none")]
    pub supports_https_traffic_only: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccountCreateParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<ManagedServiceIdentity>,
    pub kind: Kind,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<StorageAccountPropertiesCreateParameters>,
    pub sku: Sku,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccountPropertiesUpdateParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_tier: Option<AccessTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_blob_public_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_shared_key_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_tls_version: Option<MinimumTlsVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_network_access: Option<PublicNetworkAccess>,
    #[serde(rename = "supportsHttpsTrafficOnly", skip_serializing_if = "Option::is_none")]
    pub supports_https_traffic_only: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccountUpdateParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<ManagedServiceIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<StorageAccountPropertiesUpdateParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccountKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<KeyPermission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageAccountListKeysResult {
    #[serde(default)]
    pub keys: Vec<StorageAccountKey>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageAccountCheckNameAvailabilityParameters {
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
}

impl StorageAccountCheckNameAvailabilityParameters {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_type: "Microsoft.Storage/storageAccounts".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckNameAvailabilityResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
}

/// Matches storage accounts whose populated fields are all equal.
#[derive(Debug, Clone, Default)]
pub struct StorageAccountOperationPredicate {
    pub id: Option<String>,
    pub location: Option<String>,
    pub name: Option<String>,
    pub resource_type: Option<String>,
}

impl Predicate<StorageAccount> for StorageAccountOperationPredicate {
    fn matches(&self, input: &StorageAccount) -> bool {
        if self.id.is_some() && self.id != input.id {
            return false;
        }
        if matches!(&self.location, Some(location) if *location != input.location) {
            return false;
        }
        if self.name.is_some() && self.name != input.name {
            return false;
        }
        if self.resource_type.is_some() && self.resource_type != input.resource_type {
            return false;
        }
        true
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetPropertiesOperationOptions {
    pub expand: Option<StorageAccountExpand>,
}

impl Options for GetPropertiesOperationOptions {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        self.expand
            .iter()
            .map(|v| ("$expand", v.to_string()))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListKeysOperationOptions {
    pub expand: Option<ListKeyExpand>,
}

impl Options for ListKeysOperationOptions {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        self.expand
            .iter()
            .map(|v| ("$expand", v.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_parameters_serialize_camel_case() {
        let params = StorageAccountCreateParameters {
            identity: None,
            kind: Kind::StorageVTwo,
            location: "westeurope".to_string(),
            properties: Some(StorageAccountPropertiesCreateParameters {
                minimum_tls_version: Some(MinimumTlsVersion::TlsOneTwo),
                supports_https_traffic_only: Some(true),
                ..Default::default()
            }),
            sku: Sku::new(SkuName::StandardLrs),
            tags: None,
        };

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "kind": "StorageV2",
                "location": "westeurope",
                "properties": {
                    "minimumTlsVersion": "TLS1_2",
                    "supportsHttpsTrafficOnly": true
                },
                "sku": {"name": "Standard_LRS"}
            })
        );
    }

    #[test]
    fn test_storage_account_tolerates_unknown_values() {
        let account: StorageAccount = serde_json::from_value(serde_json::json!({
            "id": "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts/acct",
            "name": "acct",
            "location": "westeurope",
            "kind": "StorageV9",
            "sku": {"name": "Standard_LRS", "tier": "Standard"},
            "properties": {"provisioningState": "Succeeded", "unknownField": 1}
        }))
        .unwrap();

        assert_eq!(account.kind, Some(Kind::Other("StorageV9".to_string())));
        assert_eq!(
            account.properties.and_then(|p| p.provisioning_state),
            Some(ProvisioningState::Succeeded)
        );
    }

    #[test]
    fn test_predicate_matches_populated_fields_only() {
        let account: StorageAccount = serde_json::from_value(serde_json::json!({
            "name": "acct",
            "location": "westeurope"
        }))
        .unwrap();

        assert!(StorageAccountOperationPredicate::default().matches(&account));
        let by_location = StorageAccountOperationPredicate {
            location: Some("westeurope".to_string()),
            ..Default::default()
        };
        assert!(by_location.matches(&account));
        let by_name = StorageAccountOperationPredicate {
            name: Some("other".to_string()),
            ..Default::default()
        };
        assert!(!by_name.matches(&account));
    }

    #[test]
    fn test_get_properties_options_query() {
        let options = GetPropertiesOperationOptions {
            expand: Some(StorageAccountExpand::GeoReplicationStats),
        };
        assert_eq!(
            options.to_query(),
            vec![("$expand", "geoReplicationStats".to_string())]
        );
    }
}
