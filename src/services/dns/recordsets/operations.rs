use super::id_dnszone::DnsZoneId;
use super::id_recordtype::RecordTypeId;
use super::models::{
    CreateOrUpdateOperationOptions, DeleteOperationOptions, ListByDnsZoneOperationOptions,
    RecordSet, RecordSetOperationPredicate, UpdateOperationOptions,
};
use super::RecordSetsClient;
use crate::core::client::{NoOptions, RequestOptions, CONTENT_TYPE_JSON};
use crate::core::pager::{filter_items, LIST_EXPECTED_STATUS};
use crate::core::{ListResponse, OperationResponse, Predicate, ResourceId};
use crate::utils::error::Result;
use reqwest::{Method, StatusCode};

impl RecordSetsClient {
    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn get(&self, id: &RecordTypeId) -> Result<OperationResponse<RecordSet>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK],
            http_method: Method::GET,
            path: id.id(),
            options: &NoOptions,
        })?;

        self.client
            .execute(request, "recordsets.RecordSetsClient#Get")
            .await?
            .into_operation_response()
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn create_or_update(
        &self,
        id: &RecordTypeId,
        input: RecordSet,
        options: CreateOrUpdateOperationOptions,
    ) -> Result<OperationResponse<RecordSet>> {
        let mut request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK, StatusCode::CREATED],
            http_method: Method::PUT,
            path: id.id(),
            options: &options,
        })?;
        request.marshal(&input)?;

        self.client
            .execute(request, "recordsets.RecordSetsClient#CreateOrUpdate")
            .await?
            .into_operation_response()
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn update(
        &self,
        id: &RecordTypeId,
        input: RecordSet,
        options: UpdateOperationOptions,
    ) -> Result<OperationResponse<RecordSet>> {
        let mut request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK],
            http_method: Method::PATCH,
            path: id.id(),
            options: &options,
        })?;
        request.marshal(&input)?;

        self.client
            .execute(request, "recordsets.RecordSetsClient#Update")
            .await?
            .into_operation_response()
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn delete(
        &self,
        id: &RecordTypeId,
        options: DeleteOperationOptions,
    ) -> Result<OperationResponse<()>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK, StatusCode::NO_CONTENT],
            http_method: Method::DELETE,
            path: id.id(),
            options: &options,
        })?;

        Ok(self
            .client
            .execute(request, "recordsets.RecordSetsClient#Delete")
            .await?
            .into_empty_response())
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn list_by_dns_zone(
        &self,
        id: &DnsZoneId,
        options: ListByDnsZoneOperationOptions,
    ) -> Result<ListResponse<RecordSet>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: LIST_EXPECTED_STATUS,
            http_method: Method::GET,
            path: format!("{}/recordsets", id.id()),
            options: &options,
        })?;

        self.client
            .execute_paged(request, "recordsets.RecordSetsClient#ListByDnsZone")
            .await
    }

    pub async fn list_by_dns_zone_complete(
        &self,
        id: &DnsZoneId,
        options: ListByDnsZoneOperationOptions,
    ) -> Result<ListResponse<RecordSet>> {
        self.list_by_dns_zone_complete_matching_predicate(
            id,
            options,
            RecordSetOperationPredicate::default(),
        )
        .await
    }

    pub async fn list_by_dns_zone_complete_matching_predicate(
        &self,
        id: &DnsZoneId,
        options: ListByDnsZoneOperationOptions,
        predicate: impl Predicate<RecordSet>,
    ) -> Result<ListResponse<RecordSet>> {
        let response = self.list_by_dns_zone(id, options).await?;
        Ok(ListResponse {
            status: response.status,
            items: filter_items(response.items, &predicate),
        })
    }
}
