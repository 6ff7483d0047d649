use super::id_scopedroleassignment::ScopedRoleAssignmentId;
use super::models::{
    DeleteOperationOptions, GetOperationOptions, ListForScopeOperationOptions, RoleAssignment,
    RoleAssignmentCreateParameters, RoleAssignmentOperationPredicate,
};
use super::RoleAssignmentsClient;
use crate::core::client::{NoOptions, RequestOptions, CONTENT_TYPE_JSON};
use crate::core::commonids::ScopeId;
use crate::core::pager::{filter_items, LIST_EXPECTED_STATUS};
use crate::core::{ListResponse, OperationResponse, Predicate, ResourceId};
use crate::utils::error::Result;
use reqwest::{Method, StatusCode};

impl RoleAssignmentsClient {
    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn get(
        &self,
        id: &ScopedRoleAssignmentId,
        options: GetOperationOptions,
    ) -> Result<OperationResponse<RoleAssignment>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK],
            http_method: Method::GET,
            path: id.id(),
            options: &options,
        })?;

        self.client
            .execute(request, "roleassignments.RoleAssignmentsClient#Get")
            .await?
            .into_operation_response()
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn create(
        &self,
        id: &ScopedRoleAssignmentId,
        input: RoleAssignmentCreateParameters,
    ) -> Result<OperationResponse<RoleAssignment>> {
        let mut request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK, StatusCode::CREATED],
            http_method: Method::PUT,
            path: id.id(),
            options: &NoOptions,
        })?;
        request.marshal(&input)?;

        self.client
            .execute(request, "roleassignments.RoleAssignmentsClient#Create")
            .await?
            .into_operation_response()
    }

    /// Deletes the assignment; the model of the removed assignment is returned
    /// on `200`, while `204` means there was nothing to delete.
    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn delete(
        &self,
        id: &ScopedRoleAssignmentId,
        options: DeleteOperationOptions,
    ) -> Result<OperationResponse<RoleAssignment>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK, StatusCode::NO_CONTENT],
            http_method: Method::DELETE,
            path: id.id(),
            options: &options,
        })?;

        self.client
            .execute(request, "roleassignments.RoleAssignmentsClient#Delete")
            .await?
            .into_operation_response()
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn list_for_scope(
        &self,
        id: &ScopeId,
        options: ListForScopeOperationOptions,
    ) -> Result<ListResponse<RoleAssignment>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: LIST_EXPECTED_STATUS,
            http_method: Method::GET,
            path: format!(
                "{}/providers/Microsoft.Authorization/roleAssignments",
                id.id()
            ),
            options: &options,
        })?;

        self.client
            .execute_paged(request, "roleassignments.RoleAssignmentsClient#ListForScope")
            .await
    }

    pub async fn list_for_scope_complete(
        &self,
        id: &ScopeId,
        options: ListForScopeOperationOptions,
    ) -> Result<ListResponse<RoleAssignment>> {
        self.list_for_scope_complete_matching_predicate(
            id,
            options,
            RoleAssignmentOperationPredicate::default(),
        )
        .await
    }

    pub async fn list_for_scope_complete_matching_predicate(
        &self,
        id: &ScopeId,
        options: ListForScopeOperationOptions,
        predicate: impl Predicate<RoleAssignment>,
    ) -> Result<ListResponse<RoleAssignment>> {
        let response = self.list_for_scope(id, options).await?;
        Ok(ListResponse {
            status: response.status,
            items: filter_items(response.items, &predicate),
        })
    }
}
