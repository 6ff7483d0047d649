use super::constants::PrincipalType;
use crate::core::client::Options;
use crate::core::Predicate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignmentProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegated_managed_identity_resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub principal_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_type: Option<PrincipalType>,
    pub role_definition_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleAssignment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<RoleAssignmentProperties>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleAssignmentCreateParameters {
    pub properties: RoleAssignmentProperties,
}

impl RoleAssignmentCreateParameters {
    pub fn new(role_definition_id: impl Into<String>, principal_id: impl Into<String>) -> Self {
        Self {
            properties: RoleAssignmentProperties {
                role_definition_id: role_definition_id.into(),
                principal_id: principal_id.into(),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoleAssignmentOperationPredicate {
    pub id: Option<String>,
    pub name: Option<String>,
    pub resource_type: Option<String>,
}

impl Predicate<RoleAssignment> for RoleAssignmentOperationPredicate {
    fn matches(&self, input: &RoleAssignment) -> bool {
        if self.id.is_some() && self.id != input.id {
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
pub struct GetOperationOptions {
    pub tenant_id: Option<String>,
}

impl Options for GetOperationOptions {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        self.tenant_id
            .iter()
            .map(|v| ("tenantId", v.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteOperationOptions {
    pub tenant_id: Option<String>,
}

impl Options for DeleteOperationOptions {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        self.tenant_id
            .iter()
            .map(|v| ("tenantId", v.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListForScopeOperationOptions {
    pub filter: Option<String>,
    pub tenant_id: Option<String>,
}

impl ListForScopeOperationOptions {
    /// Only assignments at or above the scope (`atScope()`).
    pub fn at_scope() -> Self {
        Self {
            filter: Some("atScope()".to_string()),
            tenant_id: None,
        }
    }

    /// Only assignments for the given principal.
    pub fn for_principal(principal_id: &str) -> Self {
        Self {
            filter: Some(format!("principalId eq '{principal_id}'")),
            tenant_id: None,
        }
    }
}

impl Options for ListForScopeOperationOptions {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(filter) = &self.filter {
            query.push(("$filter", filter.clone()));
        }
        if let Some(tenant_id) = &self.tenant_id {
            query.push(("tenantId", tenant_id.clone()));
        }
        query
    }
}
