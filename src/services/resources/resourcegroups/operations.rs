use super::models::{
    DeleteOperationOptions, ListOperationOptions, ResourceGroup, ResourceGroupOperationPredicate,
};
use super::ResourceGroupsClient;
use crate::core::client::{NoOptions, RequestOptions, CONTENT_TYPE_JSON};
use crate::core::commonids::{ResourceGroupId, SubscriptionId};
use crate::core::pager::{filter_items, LIST_EXPECTED_STATUS};
use crate::core::{ListResponse, LroResponse, OperationResponse, Predicate, ResourceId};
use crate::utils::error::Result;
use reqwest::{Method, StatusCode};

impl ResourceGroupsClient {
    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn get(&self, id: &ResourceGroupId) -> Result<OperationResponse<ResourceGroup>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK],
            http_method: Method::GET,
            path: id.id(),
            options: &NoOptions,
        })?;

        self.client
            .execute(request, "resourcegroups.ResourceGroupsClient#Get")
            .await?
            .into_operation_response()
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn create_or_update(
        &self,
        id: &ResourceGroupId,
        input: ResourceGroup,
    ) -> Result<OperationResponse<ResourceGroup>> {
        let mut request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK, StatusCode::CREATED],
            http_method: Method::PUT,
            path: id.id(),
            options: &NoOptions,
        })?;
        request.marshal(&input)?;

        self.client
            .execute(request, "resourcegroups.ResourceGroupsClient#CreateOrUpdate")
            .await?
            .into_operation_response()
    }

    /// Returns whether the resource group exists (`204`) or not (`404`).
    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn check_existence(&self, id: &ResourceGroupId) -> Result<bool> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::NO_CONTENT, StatusCode::NOT_FOUND],
            http_method: Method::HEAD,
            path: id.id(),
            options: &NoOptions,
        })?;

        let response = self
            .client
            .execute(request, "resourcegroups.ResourceGroupsClient#CheckExistence")
            .await?;
        Ok(response.status == StatusCode::NO_CONTENT)
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn delete(
        &self,
        id: &ResourceGroupId,
        options: DeleteOperationOptions,
    ) -> Result<LroResponse<()>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK, StatusCode::ACCEPTED],
            http_method: Method::DELETE,
            path: id.id(),
            options: &options,
        })?;

        self.client
            .execute_empty_lro(request, "resourcegroups.ResourceGroupsClient#Delete")
            .await
    }

    /// Deletes the resource group and everything in it, waiting until the
    /// deletion has finished.
    pub async fn delete_then_poll(
        &self,
        id: &ResourceGroupId,
        options: DeleteOperationOptions,
    ) -> Result<()> {
        let mut result = self.delete(id, options).await?;
        result.poller.poll_until_done().await
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn list(
        &self,
        id: &SubscriptionId,
        options: ListOperationOptions,
    ) -> Result<ListResponse<ResourceGroup>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: LIST_EXPECTED_STATUS,
            http_method: Method::GET,
            path: format!("{}/resourceGroups", id.id()),
            options: &options,
        })?;

        self.client
            .execute_paged(request, "resourcegroups.ResourceGroupsClient#List")
            .await
    }

    pub async fn list_complete(
        &self,
        id: &SubscriptionId,
        options: ListOperationOptions,
    ) -> Result<ListResponse<ResourceGroup>> {
        self.list_complete_matching_predicate(id, options, ResourceGroupOperationPredicate::default())
            .await
    }

    pub async fn list_complete_matching_predicate(
        &self,
        id: &SubscriptionId,
        options: ListOperationOptions,
        predicate: impl Predicate<ResourceGroup>,
    ) -> Result<ListResponse<ResourceGroup>> {
        let response = self.list(id, options).await?;
        Ok(ListResponse {
            status: response.status,
            items: filter_items(response.items, &predicate),
        })
    }
}
