use super::id_storageaccount::StorageAccountId;
use super::models::{
    CheckNameAvailabilityResult, GetPropertiesOperationOptions, ListKeysOperationOptions,
    StorageAccount, StorageAccountCheckNameAvailabilityParameters, StorageAccountCreateParameters,
    StorageAccountListKeysResult, StorageAccountOperationPredicate, StorageAccountUpdateParameters,
};
use super::StorageAccountsClient;
use crate::core::client::{NoOptions, RequestOptions, CONTENT_TYPE_JSON};
use crate::core::commonids::{ResourceGroupId, SubscriptionId};
use crate::core::pager::{filter_items, LIST_EXPECTED_STATUS};
use crate::core::{ListResponse, LroResponse, OperationResponse, Predicate, ResourceId};
use crate::utils::error::Result;
use reqwest::{Method, StatusCode};

impl StorageAccountsClient {
    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn get_properties(
        &self,
        id: &StorageAccountId,
        options: GetPropertiesOperationOptions,
    ) -> Result<OperationResponse<StorageAccount>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK],
            http_method: Method::GET,
            path: id.id(),
            options: &options,
        })?;

        self.client
            .execute(request, "storageaccounts.StorageAccountsClient#GetProperties")
            .await?
            .into_operation_response()
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn create(
        &self,
        id: &StorageAccountId,
        input: StorageAccountCreateParameters,
    ) -> Result<LroResponse<StorageAccount>> {
        let mut request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK, StatusCode::ACCEPTED],
            http_method: Method::PUT,
            path: id.id(),
            options: &NoOptions,
        })?;
        request.marshal(&input)?;

        self.client
            .execute_lro(request, "storageaccounts.StorageAccountsClient#Create")
            .await
    }

    /// Creates the storage account and waits for provisioning to finish.
    pub async fn create_then_poll(
        &self,
        id: &StorageAccountId,
        input: StorageAccountCreateParameters,
    ) -> Result<()> {
        let mut result = self.create(id, input).await?;
        result.poller.poll_until_done().await
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn update(
        &self,
        id: &StorageAccountId,
        input: StorageAccountUpdateParameters,
    ) -> Result<OperationResponse<StorageAccount>> {
        let mut request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK],
            http_method: Method::PATCH,
            path: id.id(),
            options: &NoOptions,
        })?;
        request.marshal(&input)?;

        self.client
            .execute(request, "storageaccounts.StorageAccountsClient#Update")
            .await?
            .into_operation_response()
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn delete(&self, id: &StorageAccountId) -> Result<OperationResponse<()>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK, StatusCode::NO_CONTENT],
            http_method: Method::DELETE,
            path: id.id(),
            options: &NoOptions,
        })?;

        Ok(self
            .client
            .execute(request, "storageaccounts.StorageAccountsClient#Delete")
            .await?
            .into_empty_response())
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn list_keys(
        &self,
        id: &StorageAccountId,
        options: ListKeysOperationOptions,
    ) -> Result<OperationResponse<StorageAccountListKeysResult>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK],
            http_method: Method::POST,
            path: format!("{}/listKeys", id.id()),
            options: &options,
        })?;

        self.client
            .execute(request, "storageaccounts.StorageAccountsClient#ListKeys")
            .await?
            .into_operation_response()
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn check_name_availability(
        &self,
        id: &SubscriptionId,
        input: StorageAccountCheckNameAvailabilityParameters,
    ) -> Result<OperationResponse<CheckNameAvailabilityResult>> {
        let mut request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK],
            http_method: Method::POST,
            path: format!("{}/providers/Microsoft.Storage/checkNameAvailability", id.id()),
            options: &NoOptions,
        })?;
        request.marshal(&input)?;

        self.client
            .execute(
                request,
                "storageaccounts.StorageAccountsClient#CheckNameAvailability",
            )
            .await?
            .into_operation_response()
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn list_by_resource_group(
        &self,
        id: &ResourceGroupId,
    ) -> Result<ListResponse<StorageAccount>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: LIST_EXPECTED_STATUS,
            http_method: Method::GET,
            path: format!("{}/providers/Microsoft.Storage/storageAccounts", id.id()),
            options: &NoOptions,
        })?;

        self.client
            .execute_paged(
                request,
                "storageaccounts.StorageAccountsClient#ListByResourceGroup",
            )
            .await
    }

    pub async fn list_by_resource_group_complete(
        &self,
        id: &ResourceGroupId,
    ) -> Result<ListResponse<StorageAccount>> {
        self.list_by_resource_group_complete_matching_predicate(
            id,
            StorageAccountOperationPredicate::default(),
        )
        .await
    }

    pub async fn list_by_resource_group_complete_matching_predicate(
        &self,
        id: &ResourceGroupId,
        predicate: impl Predicate<StorageAccount>,
    ) -> Result<ListResponse<StorageAccount>> {
        let response = self.list_by_resource_group(id).await?;
        Ok(ListResponse {
            status: response.status,
            items: filter_items(response.items, &predicate),
        })
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn list(&self, id: &SubscriptionId) -> Result<ListResponse<StorageAccount>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: LIST_EXPECTED_STATUS,
            http_method: Method::GET,
            path: format!("{}/providers/Microsoft.Storage/storageAccounts", id.id()),
            options: &NoOptions,
        })?;

        self.client
            .execute_paged(request, "storageaccounts.StorageAccountsClient#List")
            .await
    }

    pub async fn list_complete(&self, id: &SubscriptionId) -> Result<ListResponse<StorageAccount>> {
        self.list_complete_matching_predicate(id, StorageAccountOperationPredicate::default())
            .await
    }

    pub async fn list_complete_matching_predicate(
        &self,
        id: &SubscriptionId,
        predicate: impl Predicate<StorageAccount>,
    ) -> Result<ListResponse<StorageAccount>> {
        let response = self.list(id).await?;
        Ok(ListResponse {
            status: response.status,
            items: filter_items(response.items, &predicate),
        })
    }
}
