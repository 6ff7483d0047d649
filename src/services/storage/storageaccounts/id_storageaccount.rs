use crate::core::commonids::ResourceGroupId;
use crate::core::resourceids::{
    describe_components, impl_resource_id_traits, ParseResult, ResourceId, Segment,
};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageAccountId {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub storage_account_name: String,
}

impl StorageAccountId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        storage_account_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            storage_account_name: storage_account_name.into(),
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
    Segment::resource_provider("staticMicrosoftStorage", "Microsoft.Storage"),
    Segment::static_segment("staticStorageAccounts", "storageAccounts"),
    Segment::user_specified("storageAccountName", "storageAccountValue"),
];

impl ResourceId for StorageAccountId {
    const ID_TYPE: &'static str = "Storage Account";

    fn segments() -> &'static [Segment] {
        SEGMENTS
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self> {
        Ok(Self {
            subscription_id: result.get("subscriptionId")?,
            resource_group_name: result.get("resourceGroupName")?,
            storage_account_name: result.get("storageAccountName")?,
        })
    }

    fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Storage/storageAccounts/{}",
            self.subscription_id, self.resource_group_name, self.storage_account_name
        )
    }

    fn describe(&self) -> String {
        describe_components(
            Self::ID_TYPE,
            &[
                ("Subscription", self.subscription_id.as_str()),
                ("Resource Group Name", self.resource_group_name.as_str()),
                ("Storage Account Name", self.storage_account_name.as_str()),
            ],
        )
    }
}

impl_resource_id_traits!(StorageAccountId);
