use crate::core::commonids::ScopeId;
use crate::core::resourceids::{
    describe_components, impl_resource_id_traits, ParseResult, ResourceId, Segment,
};
use crate::utils::error::Result;

/// A role assignment on an arbitrary scope: a subscription, a resource group or
/// any resource beneath them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopedRoleAssignmentId {
    pub scope: String,
    pub role_assignment_name: String,
}

impl ScopedRoleAssignmentId {
    pub fn new(scope: impl Into<String>, role_assignment_name: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            role_assignment_name: role_assignment_name.into(),
        }
    }

    pub fn scope_id(&self) -> ScopeId {
        ScopeId::new(self.scope.clone())
    }
}

const SEGMENTS: &[Segment] = &[
    Segment::scope("scope"),
    Segment::static_segment("staticProviders", "providers"),
    Segment::resource_provider("staticMicrosoftAuthorization", "Microsoft.Authorization"),
    Segment::static_segment("staticRoleAssignments", "roleAssignments"),
    Segment::user_specified("roleAssignmentName", "roleAssignmentValue"),
];

impl ResourceId for ScopedRoleAssignmentId {
    const ID_TYPE: &'static str = "Scoped Role Assignment";

    fn segments() -> &'static [Segment] {
        SEGMENTS
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self> {
        Ok(Self {
            scope: result.get("scope")?,
            role_assignment_name: result.get("roleAssignmentName")?,
        })
    }

    fn id(&self) -> String {
        format!(
            "/{}/providers/Microsoft.Authorization/roleAssignments/{}",
            self.scope.trim_start_matches('/'),
            self.role_assignment_name
        )
    }

    fn describe(&self) -> String {
        describe_components(
            Self::ID_TYPE,
            &[
                ("Scope", self.scope.as_str()),
                ("Role Assignment Name", self.role_assignment_name.as_str()),
            ],
        )
    }
}

impl_resource_id_traits!(ScopedRoleAssignmentId);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ArmError;

    #[test]
    fn test_subscription_scope() {
        let id = ScopedRoleAssignmentId::parse(
            "/subscriptions/sub/providers/Microsoft.Authorization/roleAssignments/11111111-2222-3333-4444-555555555555",
        )
        .unwrap();
        assert_eq!(id.scope, "/subscriptions/sub");
        assert_eq!(id.role_assignment_name, "11111111-2222-3333-4444-555555555555");
    }

    #[test]
    fn test_nested_resource_scope() {
        let input = "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts/acct/providers/Microsoft.Authorization/roleAssignments/ra";
        let id = ScopedRoleAssignmentId::parse(input).unwrap();
        assert_eq!(
            id.scope,
            "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts/acct"
        );
        assert_eq!(id.id(), input);
        assert_eq!(id.scope_id().id(), id.scope);
    }

    #[test]
    fn test_missing_scope() {
        let err =
            ScopedRoleAssignmentId::parse("/providers/Microsoft.Authorization/roleAssignments/ra")
                .unwrap_err();
        match err {
            ArmError::SegmentNotSpecified { segment, .. } => assert_eq!(segment, "scope"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_new_without_leading_slash() {
        let id = ScopedRoleAssignmentId::new("subscriptions/sub", "ra");
        assert_eq!(
            id.id(),
            "/subscriptions/sub/providers/Microsoft.Authorization/roleAssignments/ra"
        );
    }
}
