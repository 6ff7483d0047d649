//! Role assignments (`Microsoft.Authorization/roleAssignments`) on any scope.

pub mod constants;
pub mod id_scopedroleassignment;
pub mod models;
mod operations;

pub use crate::core::commonids::ScopeId;
pub use constants::*;
pub use id_scopedroleassignment::ScopedRoleAssignmentId;
pub use models::*;

use crate::core::Client;

pub const API_VERSION: &str = "2022-04-01";

#[derive(Debug, Clone)]
pub struct RoleAssignmentsClient {
    client: Client,
}

impl RoleAssignmentsClient {
    pub fn new(base: &Client) -> Self {
        Self {
            client: base.with_api_version(API_VERSION),
        }
    }
}
