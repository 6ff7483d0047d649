use super::constants::ForceDeletionTypes;
use crate::core::client::Options;
use crate::core::Predicate;
use crate::domain::model::Tags;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroupProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<ResourceGroupProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

impl ResourceGroup {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResourceGroupOperationPredicate {
    pub id: Option<String>,
    pub location: Option<String>,
    pub managed_by: Option<String>,
    pub name: Option<String>,
    pub resource_type: Option<String>,
}

impl Predicate<ResourceGroup> for ResourceGroupOperationPredicate {
    fn matches(&self, input: &ResourceGroup) -> bool {
        if self.id.is_some() && self.id != input.id {
            return false;
        }
        if matches!(&self.location, Some(location) if *location != input.location) {
            return false;
        }
        if self.managed_by.is_some() && self.managed_by != input.managed_by {
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
pub struct DeleteOperationOptions {
    pub force_deletion_types: Option<ForceDeletionTypes>,
}

impl Options for DeleteOperationOptions {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        self.force_deletion_types
            .iter()
            .map(|v| ("forceDeletionTypes", v.to_string()))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListOperationOptions {
    pub filter: Option<String>,
    pub top: Option<u32>,
}

impl Options for ListOperationOptions {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(filter) = &self.filter {
            query.push(("$filter", filter.clone()));
        }
        if let Some(top) = self.top {
            query.push(("$top", top.to_string()));
        }
        query
    }
}
