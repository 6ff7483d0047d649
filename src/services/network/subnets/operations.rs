use super::id_subnet::SubnetId;
use super::models::{Subnet, SubnetOperationPredicate};
use super::SubnetsClient;
use crate::core::client::{NoOptions, RequestOptions, CONTENT_TYPE_JSON};
use crate::core::pager::{filter_items, LIST_EXPECTED_STATUS};
use crate::core::{ListResponse, LroResponse, OperationResponse, Predicate, ResourceId};
use crate::services::network::virtualnetworks::VirtualNetworkId;
use crate::utils::error::Result;
use reqwest::{Method, StatusCode};

impl SubnetsClient {
    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn get(&self, id: &SubnetId) -> Result<OperationResponse<Subnet>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK],
            http_method: Method::GET,
            path: id.id(),
            options: &NoOptions,
        })?;

        self.client
            .execute(request, "subnets.SubnetsClient#Get")
            .await?
            .into_operation_response()
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn create_or_update(
        &self,
        id: &SubnetId,
        input: Subnet,
    ) -> Result<LroResponse<Subnet>> {
        let mut request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK, StatusCode::CREATED],
            http_method: Method::PUT,
            path: id.id(),
            options: &NoOptions,
        })?;
        request.marshal(&input)?;

        self.client
            .execute_lro(request, "subnets.SubnetsClient#CreateOrUpdate")
            .await
    }

    pub async fn create_or_update_then_poll(&self, id: &SubnetId, input: Subnet) -> Result<()> {
        let mut result = self.create_or_update(id, input).await?;
        result.poller.poll_until_done().await
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn delete(&self, id: &SubnetId) -> Result<LroResponse<()>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK, StatusCode::ACCEPTED, StatusCode::NO_CONTENT],
            http_method: Method::DELETE,
            path: id.id(),
            options: &NoOptions,
        })?;

        self.client
            .execute_empty_lro(request, "subnets.SubnetsClient#Delete")
            .await
    }

    pub async fn delete_then_poll(&self, id: &SubnetId) -> Result<()> {
        let mut result = self.delete(id).await?;
        result.poller.poll_until_done().await
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn list(&self, id: &VirtualNetworkId) -> Result<ListResponse<Subnet>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: LIST_EXPECTED_STATUS,
            http_method: Method::GET,
            path: format!("{}/subnets", id.id()),
            options: &NoOptions,
        })?;

        self.client
            .execute_paged(request, "subnets.SubnetsClient#List")
            .await
    }

    pub async fn list_complete(&self, id: &VirtualNetworkId) -> Result<ListResponse<Subnet>> {
        self.list_complete_matching_predicate(id, SubnetOperationPredicate::default())
            .await
    }

    pub async fn list_complete_matching_predicate(
        &self,
        id: &VirtualNetworkId,
        predicate: impl Predicate<Subnet>,
    ) -> Result<ListResponse<Subnet>> {
        let response = self.list(id).await?;
        Ok(ListResponse {
            status: response.status,
            items: filter_items(response.items, &predicate),
        })
    }
}
