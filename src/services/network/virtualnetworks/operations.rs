use super::id_virtualnetwork::VirtualNetworkId;
use super::models::{VirtualNetwork, VirtualNetworkOperationPredicate};
use super::VirtualNetworksClient;
use crate::core::client::{NoOptions, RequestOptions, CONTENT_TYPE_JSON};
use crate::core::commonids::ResourceGroupId;
use crate::core::pager::{filter_items, LIST_EXPECTED_STATUS};
use crate::core::{ListResponse, LroResponse, OperationResponse, Predicate, ResourceId};
use crate::utils::error::Result;
use reqwest::{Method, StatusCode};

impl VirtualNetworksClient {
    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn get(
        &self,
        id: &VirtualNetworkId,
    ) -> Result<OperationResponse<VirtualNetwork>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK],
            http_method: Method::GET,
            path: id.id(),
            options: &NoOptions,
        })?;

        self.client
            .execute(request, "virtualnetworks.VirtualNetworksClient#Get")
            .await?
            .into_operation_response()
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn create_or_update(
        &self,
        id: &VirtualNetworkId,
        input: VirtualNetwork,
    ) -> Result<LroResponse<VirtualNetwork>> {
        let mut request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK, StatusCode::CREATED],
            http_method: Method::PUT,
            path: id.id(),
            options: &NoOptions,
        })?;
        request.marshal(&input)?;

        self.client
            .execute_lro(request, "virtualnetworks.VirtualNetworksClient#CreateOrUpdate")
            .await
    }

    pub async fn create_or_update_then_poll(
        &self,
        id: &VirtualNetworkId,
        input: VirtualNetwork,
    ) -> Result<()> {
        let mut result = self.create_or_update(id, input).await?;
        result.poller.poll_until_done().await
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn delete(&self, id: &VirtualNetworkId) -> Result<LroResponse<()>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK, StatusCode::ACCEPTED, StatusCode::NO_CONTENT],
            http_method: Method::DELETE,
            path: id.id(),
            options: &NoOptions,
        })?;

        self.client
            .execute_empty_lro(request, "virtualnetworks.VirtualNetworksClient#Delete")
            .await
    }

    pub async fn delete_then_poll(&self, id: &VirtualNetworkId) -> Result<()> {
        let mut result = self.delete(id).await?;
        result.poller.poll_until_done().await
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn list(&self, id: &ResourceGroupId) -> Result<ListResponse<VirtualNetwork>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: LIST_EXPECTED_STATUS,
            http_method: Method::GET,
            path: format!("{}/providers/Microsoft.Network/virtualNetworks", id.id()),
            options: &NoOptions,
        })?;

        self.client
            .execute_paged(request, "virtualnetworks.VirtualNetworksClient#List")
            .await
    }

    pub async fn list_complete(&self, id: &ResourceGroupId) -> Result<ListResponse<VirtualNetwork>> {
        self.list_complete_matching_predicate(id, VirtualNetworkOperationPredicate::default())
            .await
    }

    pub async fn list_complete_matching_predicate(
        &self,
        id: &ResourceGroupId,
        predicate: impl Predicate<VirtualNetwork>,
    ) -> Result<ListResponse<VirtualNetwork>> {
        let response = self.list(id).await?;
        Ok(ListResponse {
            status: response.status,
            items: filter_items(response.items, &predicate),
        })
    }
}
