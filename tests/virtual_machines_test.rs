use armkit::core::commonids::ResourceGroupId;
use armkit::services::compute::virtualmachines::*;
use armkit::{ArmError, Client};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

const VM: &str =
    "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Compute/virtualMachines/vm1";

fn vm_client(server: &MockServer) -> VirtualMachinesClient {
    let base = Client::new(&server.base_url())
        .unwrap()
        .with_retry(0, Duration::from_millis(1))
        .with_poll_interval(Duration::from_millis(5));
    VirtualMachinesClient::new(&base)
}

fn vm_json(name: &str, provisioning_state: &str) -> serde_json::Value {
    json!({
        "id": format!("/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Compute/virtualMachines/{name}"),
        "name": name,
        "location": "westeurope",
        "type": "Microsoft.Compute/virtualMachines",
        "properties": {
            "provisioningState": provisioning_state,
            "hardwareProfile": { "vmSize": "Standard_B2s" },
            "storageProfile": {
                "osDisk": { "createOption": "FromImage", "osType": "Linux" }
            }
        }
    })
}

#[tokio::test]
async fn test_get_with_instance_view() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(VM)
            .query_param("api-version", "2021-11-01")
            .query_param("$expand", "instanceView");
        then.status(200).json_body(json!({
            "name": "vm1",
            "location": "westeurope",
            "properties": {
                "hardwareProfile": { "vmSize": "Standard_NV6ads_A10_v5" },
                "instanceView": {
                    "statuses": [
                        { "code": "ProvisioningState/succeeded", "level": "Info" },
                        { "code": "PowerState/running", "level": "Info", "displayStatus": "VM running" }
                    ]
                }
            }
        }));
    });

    let options = GetOperationOptions {
        expand: Some(InstanceViewTypes::InstanceView),
    };
    let vm = vm_client(&server)
        .get(&VirtualMachineId::new("sub", "rg", "vm1"), options)
        .await
        .unwrap()
        .model
        .unwrap();

    mock.assert();
    let properties = vm.properties.unwrap();
    let size = properties.hardware_profile.unwrap().vm_size.unwrap();
    assert!(!size.is_known());
    assert_eq!(size.to_string(), "Standard_NV6ads_A10_v5");
    assert_eq!(
        properties.instance_view.unwrap().power_state(),
        Some("PowerState/running")
    );
}

#[tokio::test]
async fn test_create_or_update_polls_provisioning_state() {
    let server = MockServer::start();
    let put = server.mock(|when, then| {
        when.method(PUT)
            .path(VM)
            .json_body_partial(r#"{"location":"westeurope","properties":{"hardwareProfile":{"vmSize":"Standard_B2s"}}}"#);
        then.status(201).json_body(vm_json("vm1", "Creating"));
    });
    let get = server.mock(|when, then| {
        when.method(GET).path(VM);
        then.status(200).json_body(vm_json("vm1", "Succeeded"));
    });

    let input = VirtualMachine {
        location: "westeurope".to_string(),
        properties: Some(VirtualMachineProperties {
            hardware_profile: Some(HardwareProfile {
                vm_size: Some(VirtualMachineSizeTypes::StandardB2s),
            }),
            ..Default::default()
        }),
        ..Default::default()
    };

    let mut lro = vm_client(&server)
        .create_or_update(&VirtualMachineId::new("sub", "rg", "vm1"), input)
        .await
        .unwrap();
    assert_eq!(lro.status.as_u16(), 201);
    assert!(!lro.poller.is_done());
    assert_eq!(lro.model.as_ref().and_then(|vm| vm.name.as_deref()), Some("vm1"));

    lro.poller.poll_until_done().await.unwrap();

    put.assert();
    get.assert();
}

#[tokio::test]
async fn test_power_off_skip_shutdown() {
    let server = MockServer::start();
    let action = server.mock(|when, then| {
        when.method(POST)
            .path(format!("{VM}/powerOff"))
            .query_param("skipShutdown", "true");
        then.status(202)
            .header("Azure-AsyncOperation", server.url("/operations/poweroff"));
    });
    let status = server.mock(|when, then| {
        when.method(GET).path("/operations/poweroff");
        then.status(200).json_body(json!({ "status": "Succeeded" }));
    });

    let options = PowerOffOperationOptions {
        skip_shutdown: Some(true),
    };
    vm_client(&server)
        .power_off_then_poll(&VirtualMachineId::new("sub", "rg", "vm1"), options)
        .await
        .unwrap();

    action.assert();
    status.assert();
}

#[tokio::test]
async fn test_start_completing_synchronously() {
    let server = MockServer::start();
    let action = server.mock(|when, then| {
        when.method(POST).path(format!("{VM}/start"));
        then.status(200);
    });

    let lro = vm_client(&server)
        .start(&VirtualMachineId::new("sub", "rg", "vm1"))
        .await
        .unwrap();

    action.assert();
    assert!(lro.poller.is_done());
}

#[tokio::test]
async fn test_restart_gives_up_after_poll_timeout() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(format!("{VM}/restart"));
        then.status(202)
            .header("Azure-AsyncOperation", server.url("/operations/restart"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/operations/restart");
        then.status(200).json_body(json!({ "status": "InProgress" }));
    });

    let base = Client::new(&server.base_url())
        .unwrap()
        .with_retry(0, Duration::from_millis(1))
        .with_poll_interval(Duration::from_millis(10))
        .with_poll_timeout(Some(Duration::from_millis(100)));
    let err = VirtualMachinesClient::new(&base)
        .restart_then_poll(&VirtualMachineId::new("sub", "rg", "vm1"))
        .await
        .unwrap_err();

    assert!(matches!(err, ArmError::PollingTimeout { .. }));
}

#[tokio::test]
async fn test_delete_with_force_deletion() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE)
            .path(VM)
            .query_param("forceDeletion", "true");
        then.status(204);
    });

    let options = DeleteOperationOptions {
        force_deletion: Some(true),
    };
    vm_client(&server)
        .delete_then_poll(&VirtualMachineId::new("sub", "rg", "vm1"), options)
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_list_matching_predicate() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Compute/virtualMachines");
        then.status(200).json_body(json!({
            "value": [vm_json("vm1", "Succeeded"), vm_json("vm2", "Failed")]
        }));
    });

    let predicate = VirtualMachineOperationPredicate {
        name: Some("vm2".to_string()),
        ..Default::default()
    };
    let response = vm_client(&server)
        .list_complete_matching_predicate(&ResourceGroupId::new("sub", "rg"), predicate)
        .await
        .unwrap();

    assert_eq!(response.items.len(), 1);
    assert_eq!(
        response.items[0]
            .properties
            .as_ref()
            .and_then(|p| p.provisioning_state.as_deref()),
        Some("Failed")
    );
}
