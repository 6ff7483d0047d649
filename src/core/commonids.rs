//! IDs shared by every service: subscriptions, resource groups and arbitrary scopes.

use crate::core::resourceids::{
    describe_components, impl_resource_id_traits, ParseResult, ResourceId, Segment,
};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    pub subscription_id: String,
}

impl SubscriptionId {
    pub fn new(subscription_id: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
        }
    }
}

const SUBSCRIPTION_SEGMENTS: &[Segment] = &[
    Segment::static_segment("staticSubscriptions", "subscriptions"),
    Segment::subscription_id("subscriptionId"),
];

impl ResourceId for SubscriptionId {
    const ID_TYPE: &'static str = "Subscription";

    fn segments() -> &'static [Segment] {
        SUBSCRIPTION_SEGMENTS
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self> {
        Ok(Self {
            subscription_id: result.get("subscriptionId")?,
        })
    }

    fn id(&self) -> String {
        format!("/subscriptions/{}", self.subscription_id)
    }

    fn describe(&self) -> String {
        describe_components(Self::ID_TYPE, &[("Subscription", self.subscription_id.as_str())])
    }
}

impl_resource_id_traits!(SubscriptionId);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceGroupId {
    pub subscription_id: String,
    pub resource_group_name: String,
}

impl ResourceGroupId {
    pub fn new(subscription_id: impl Into<String>, resource_group_name: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
        }
    }

    pub fn subscription(&self) -> SubscriptionId {
        SubscriptionId::new(self.subscription_id.clone())
    }
}

const RESOURCE_GROUP_SEGMENTS: &[Segment] = &[
    Segment::static_segment("staticSubscriptions", "subscriptions"),
    Segment::subscription_id("subscriptionId"),
    Segment::static_segment("staticResourceGroups", "resourceGroups"),
    Segment::resource_group("resourceGroupName"),
];

impl ResourceId for ResourceGroupId {
    const ID_TYPE: &'static str = "Resource Group";

    fn segments() -> &'static [Segment] {
        RESOURCE_GROUP_SEGMENTS
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self> {
        Ok(Self {
            subscription_id: result.get("subscriptionId")?,
            resource_group_name: result.get("resourceGroupName")?,
        })
    }

    fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}",
            self.subscription_id, self.resource_group_name
        )
    }

    fn describe(&self) -> String {
        describe_components(
            Self::ID_TYPE,
            &[
                ("Subscription", self.subscription_id.as_str()),
                ("Resource Group Name", self.resource_group_name.as_str()),
            ],
        )
    }
}

impl_resource_id_traits!(ResourceGroupId);

/// Any resource path used as the parent of an extension resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopeId {
    pub scope: String,
}

impl ScopeId {
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
        }
    }
}

const SCOPE_SEGMENTS: &[Segment] = &[Segment::scope("scope")];

impl ResourceId for ScopeId {
    const ID_TYPE: &'static str = "Scope";

    fn segments() -> &'static [Segment] {
        SCOPE_SEGMENTS
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self> {
        Ok(Self {
            scope: result.get("scope")?,
        })
    }

    fn id(&self) -> String {
        format!("/{}", self.scope.trim_start_matches('/'))
    }

    fn describe(&self) -> String {
        describe_components(Self::ID_TYPE, &[("Scope", self.scope.as_str())])
    }
}

impl_resource_id_traits!(ScopeId);
