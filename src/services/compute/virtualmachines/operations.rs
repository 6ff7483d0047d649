use super::id_virtualmachine::VirtualMachineId;
use super::models::{
    DeleteOperationOptions, GetOperationOptions, PowerOffOperationOptions, VirtualMachine,
    VirtualMachineOperationPredicate,
};
use super::VirtualMachinesClient;
use crate::core::client::{NoOptions, Options, RequestOptions, CONTENT_TYPE_JSON};
use crate::core::commonids::ResourceGroupId;
use crate::core::pager::{filter_items, LIST_EXPECTED_STATUS};
use crate::core::{ListResponse, LroResponse, OperationResponse, Predicate, ResourceId};
use crate::utils::error::Result;
use reqwest::{Method, StatusCode};

const ACTION_EXPECTED_STATUS: &[StatusCode] = &[StatusCode::OK, StatusCode::ACCEPTED];

impl VirtualMachinesClient {
    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn get(
        &self,
        id: &VirtualMachineId,
        options: GetOperationOptions,
    ) -> Result<OperationResponse<VirtualMachine>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK],
            http_method: Method::GET,
            path: id.id(),
            options: &options,
        })?;

        self.client
            .execute(request, "virtualmachines.VirtualMachinesClient#Get")
            .await?
            .into_operation_response()
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn create_or_update(
        &self,
        id: &VirtualMachineId,
        input: VirtualMachine,
    ) -> Result<LroResponse<VirtualMachine>> {
        let mut request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK, StatusCode::CREATED],
            http_method: Method::PUT,
            path: id.id(),
            options: &NoOptions,
        })?;
        request.marshal(&input)?;

        self.client
            .execute_lro(request, "virtualmachines.VirtualMachinesClient#CreateOrUpdate")
            .await
    }

    pub async fn create_or_update_then_poll(
        &self,
        id: &VirtualMachineId,
        input: VirtualMachine,
    ) -> Result<()> {
        let mut result = self.create_or_update(id, input).await?;
        result.poller.poll_until_done().await
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn delete(
        &self,
        id: &VirtualMachineId,
        options: DeleteOperationOptions,
    ) -> Result<LroResponse<()>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: &[StatusCode::OK, StatusCode::ACCEPTED, StatusCode::NO_CONTENT],
            http_method: Method::DELETE,
            path: id.id(),
            options: &options,
        })?;

        self.client
            .execute_empty_lro(request, "virtualmachines.VirtualMachinesClient#Delete")
            .await
    }

    pub async fn delete_then_poll(
        &self,
        id: &VirtualMachineId,
        options: DeleteOperationOptions,
    ) -> Result<()> {
        let mut result = self.delete(id, options).await?;
        result.poller.poll_until_done().await
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn start(&self, id: &VirtualMachineId) -> Result<LroResponse<()>> {
        self.action(id, "start", &NoOptions, "virtualmachines.VirtualMachinesClient#Start")
            .await
    }

    pub async fn start_then_poll(&self, id: &VirtualMachineId) -> Result<()> {
        let mut result = self.start(id).await?;
        result.poller.poll_until_done().await
    }

    /// Powers the machine off without releasing its compute resources.
    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn power_off(
        &self,
        id: &VirtualMachineId,
        options: PowerOffOperationOptions,
    ) -> Result<LroResponse<()>> {
        self.action(id, "powerOff", &options, "virtualmachines.VirtualMachinesClient#PowerOff")
            .await
    }

    pub async fn power_off_then_poll(
        &self,
        id: &VirtualMachineId,
        options: PowerOffOperationOptions,
    ) -> Result<()> {
        let mut result = self.power_off(id, options).await?;
        result.poller.poll_until_done().await
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn restart(&self, id: &VirtualMachineId) -> Result<LroResponse<()>> {
        self.action(id, "restart", &NoOptions, "virtualmachines.VirtualMachinesClient#Restart")
            .await
    }

    pub async fn restart_then_poll(&self, id: &VirtualMachineId) -> Result<()> {
        let mut result = self.restart(id).await?;
        result.poller.poll_until_done().await
    }

    async fn action(
        &self,
        id: &VirtualMachineId,
        action: &str,
        options: &dyn Options,
        operation: &str,
    ) -> Result<LroResponse<()>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: ACTION_EXPECTED_STATUS,
            http_method: Method::POST,
            path: format!("{}/{}", id.id(), action),
            options,
        })?;

        self.client.execute_empty_lro(request, operation).await
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn list(&self, id: &ResourceGroupId) -> Result<ListResponse<VirtualMachine>> {
        let request = self.client.new_request(RequestOptions {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: LIST_EXPECTED_STATUS,
            http_method: Method::GET,
            path: format!("{}/providers/Microsoft.Compute/virtualMachines", id.id()),
            options: &NoOptions,
        })?;

        self.client
            .execute_paged(request, "virtualmachines.VirtualMachinesClient#List")
            .await
    }

    pub async fn list_complete(&self, id: &ResourceGroupId) -> Result<ListResponse<VirtualMachine>> {
        self.list_complete_matching_predicate(id, VirtualMachineOperationPredicate::default())
            .await
    }

    pub async fn list_complete_matching_predicate(
        &self,
        id: &ResourceGroupId,
        predicate: impl Predicate<VirtualMachine>,
    ) -> Result<ListResponse<VirtualMachine>> {
        let response = self.list(id).await?;
        Ok(ListResponse {
            status: response.status,
            items: filter_items(response.items, &predicate),
        })
    }
}
