use super::ids::AnyResourceId;
use crate::config::{Command, IdKind, VmAction};
use crate::core::commonids::SubscriptionId;
use crate::core::{LroResponse, ResourceId};
use crate::services::compute::virtualmachines::{self, PowerOffOperationOptions};
use crate::services::ResourceManagerClient;
use crate::services::{authorization, dns, resources, storage};
use crate::utils::error::{ArmError, Result};
use serde::Serialize;
use serde_json::{json, Value};

/// Runs a command that needs no service calls.
pub fn run_offline(command: &Command) -> Option<Result<Value>> {
    match command {
        Command::ParseId {
            kind,
            id,
            insensitively,
        } => Some(parse_id(*kind, id, *insensitively)),
        _ => None,
    }
}

fn parse_id(kind: IdKind, id: &str, insensitively: bool) -> Result<Value> {
    let parsed = AnyResourceId::parse(kind, id, insensitively)?;
    to_json(&parsed.summary()?)
}

/// Runs `command` against the service and returns what should be printed.
pub async fn run(client: &ResourceManagerClient, command: &Command) -> Result<Value> {
    match command {
        Command::ParseId {
            kind,
            id,
            insensitively,
        } => parse_id(*kind, id, *insensitively),
        Command::Get { id } => get(client, &AnyResourceId::detect(id)?).await,
        Command::ListResourceGroups {
            subscription_id,
            filter,
            top,
        } => {
            let id = SubscriptionId::new(subscription_id.trim());
            let options = resources::resourcegroups::ListOperationOptions {
                filter: filter.clone(),
                top: *top,
            };
            let response = client.resource_groups.list_complete(&id, options).await?;
            tracing::info!("Found {} resource groups", response.items.len());
            to_json(&response.items)
        }
        Command::Delete { id, wait } => delete(client, &AnyResourceId::detect(id)?, *wait).await,
        Command::Vm {
            action,
            id,
            skip_shutdown,
            no_wait,
        } => {
            let id = virtualmachines::VirtualMachineId::parse_insensitively(id)?;
            let vms = &client.virtual_machines;
            let lro = match action {
                VmAction::Start => vms.start(&id).await?,
                VmAction::PowerOff => {
                    let options = PowerOffOperationOptions {
                        skip_shutdown: skip_shutdown.then_some(true),
                    };
                    vms.power_off(&id, options).await?
                }
                VmAction::Restart => vms.restart(&id).await?,
            };
            finish_lro(id.id(), lro, !*no_wait).await
        }
    }
}

async fn get(client: &ResourceManagerClient, id: &AnyResourceId) -> Result<Value> {
    tracing::info!("Fetching {} {}", id.id_type(), id.id());

    match id {
        AnyResourceId::ResourceGroup(id) => to_json(&client.resource_groups.get(id).await?.model),
        AnyResourceId::StorageAccount(id) => to_json(
            &client
                .storage_accounts
                .get_properties(id, storage::storageaccounts::GetPropertiesOperationOptions::default())
                .await?
                .model,
        ),
        AnyResourceId::VirtualMachine(id) => to_json(
            &client
                .virtual_machines
                .get(id, virtualmachines::GetOperationOptions::default())
                .await?
                .model,
        ),
        AnyResourceId::VirtualNetwork(id) => {
            to_json(&client.virtual_networks.get(id).await?.model)
        }
        AnyResourceId::Subnet(id) => to_json(&client.subnets.get(id).await?.model),
        AnyResourceId::RecordSet(id) => to_json(&client.record_sets.get(id).await?.model),
        AnyResourceId::RoleAssignment(id) => to_json(
            &client
                .role_assignments
                .get(id, authorization::roleassignments::GetOperationOptions::default())
                .await?
                .model,
        ),
        other => Err(unsupported("get", other)),
    }
}

async fn delete(client: &ResourceManagerClient, id: &AnyResourceId, wait: bool) -> Result<Value> {
    tracing::info!("Deleting {} {}", id.id_type(), id.id());

    let status = match id {
        AnyResourceId::ResourceGroup(rg) => {
            let lro = client
                .resource_groups
                .delete(rg, resources::resourcegroups::DeleteOperationOptions::default())
                .await?;
            return finish_lro(id.id(), lro, wait).await;
        }
        AnyResourceId::VirtualMachine(vm) => {
            let lro = client
                .virtual_machines
                .delete(vm, virtualmachines::DeleteOperationOptions::default())
                .await?;
            return finish_lro(id.id(), lro, wait).await;
        }
        AnyResourceId::VirtualNetwork(vnet) => {
            let lro = client.virtual_networks.delete(vnet).await?;
            return finish_lro(id.id(), lro, wait).await;
        }
        AnyResourceId::Subnet(subnet) => {
            let lro = client.subnets.delete(subnet).await?;
            return finish_lro(id.id(), lro, wait).await;
        }
        AnyResourceId::StorageAccount(account) => {
            client.storage_accounts.delete(account).await?.status
        }
        AnyResourceId::RecordSet(record_set) => {
            client
                .record_sets
                .delete(record_set, dns::recordsets::DeleteOperationOptions::default())
                .await?
                .status
        }
        AnyResourceId::RoleAssignment(assignment) => {
            client
                .role_assignments
                .delete(
                    assignment,
                    authorization::roleassignments::DeleteOperationOptions::default(),
                )
                .await?
                .status
        }
        other => return Err(unsupported("delete", other)),
    };

    Ok(json!({
        "id": id.id(),
        "status": status.as_u16(),
        "completed": true,
    }))
}

async fn finish_lro<T>(id: String, mut lro: LroResponse<T>, wait: bool) -> Result<Value> {
    let status = lro.status.as_u16();
    if wait && !lro.poller.is_done() {
        tracing::info!("Waiting for {} to finish", id);
        lro.poller.poll_until_done().await?;
    }

    Ok(json!({
        "id": id,
        "status": status,
        "completed": lro.poller.is_done(),
    }))
}

fn unsupported(operation: &str, id: &AnyResourceId) -> ArmError {
    ArmError::ValidationError {
        field: "id".to_string(),
        message: format!("{} is not supported for {} IDs", operation, id.id_type()),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Client;
    use httpmock::prelude::*;
    use std::time::Duration;

    const RG: &str = "/subscriptions/sub/resourceGroups/rg";

    fn client(server: &MockServer) -> ResourceManagerClient {
        let base = Client::new(&server.base_url())
            .unwrap()
            .with_retry(0, Duration::from_millis(1))
            .with_poll_interval(Duration::from_millis(5));
        ResourceManagerClient::new(&base)
    }

    #[test]
    fn test_parse_id_runs_offline() {
        let command = Command::ParseId {
            kind: IdKind::ResourceGroup,
            id: RG.to_string(),
            insensitively: false,
        };
        let value = run_offline(&command).unwrap().unwrap();
        assert_eq!(value["type"], "Resource Group");
        assert_eq!(value["segments"]["resourceGroupName"], "rg");
        assert_eq!(value["segments"]["subscriptionId"], "sub");

        let command = Command::Get { id: RG.to_string() };
        assert!(run_offline(&command).is_none());
    }

    #[tokio::test]
    async fn test_get_detects_storage_account() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path(format!("{RG}/providers/Microsoft.Storage/storageAccounts/acct"))
                .query_param("api-version", "2023-01-01");
            then.status(200).json_body(serde_json::json!({
                "id": format!("{RG}/providers/Microsoft.Storage/storageAccounts/acct"),
                "name": "acct",
                "location": "westeurope"
            }));
        });

        let command = Command::Get {
            id: format!("{RG}/providers/microsoft.storage/storageaccounts/acct"),
        };
        let value = run(&client(&server), &command).await.unwrap();

        mock.assert();
        assert_eq!(value["name"], "acct");
    }

    #[tokio::test]
    async fn test_get_subscription_is_unsupported() {
        let server = MockServer::start();
        let command = Command::Get {
            id: "/subscriptions/sub".to_string(),
        };
        let err = run(&client(&server), &command).await.unwrap_err();
        assert!(matches!(err, ArmError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn test_delete_resource_group_without_waiting() {
        let server = MockServer::start();
        let delete = server.mock(|when, then| {
            when.method(DELETE).path(RG);
            then.status(202)
                .header("Location", server.url("/operations/op1"));
        });
        let poll = server.mock(|when, then| {
            when.method(GET).path("/operations/op1");
            then.status(200);
        });

        let command = Command::Delete {
            id: RG.to_string(),
            wait: false,
        };
        let value = run(&client(&server), &command).await.unwrap();

        delete.assert();
        poll.assert_hits(0);
        assert_eq!(value["status"], 202);
        assert_eq!(value["completed"], false);
    }

    #[tokio::test]
    async fn test_vm_power_off_waits() {
        let server = MockServer::start();
        let vm = format!("{RG}/providers/Microsoft.Compute/virtualMachines/vm1");
        let action = server.mock(|when, then| {
            when.method(POST)
                .path(format!("{vm}/powerOff"))
                .query_param("skipShutdown", "true");
            then.status(202)
                .header("Azure-AsyncOperation", server.url("/operations/op2"));
        });
        let status = server.mock(|when, then| {
            when.method(GET).path("/operations/op2");
            then.status(200).json_body(serde_json::json!({ "status": "Succeeded" }));
        });

        let command = Command::Vm {
            action: VmAction::PowerOff,
            id: vm.clone(),
            skip_shutdown: true,
            no_wait: false,
        };
        let value = run(&client(&server), &command).await.unwrap();

        action.assert();
        status.assert();
        assert_eq!(value["completed"], true);
    }
}
