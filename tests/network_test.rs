use armkit::core::commonids::ResourceGroupId;
use armkit::core::ResourceId;
use armkit::services::network::subnets::{
    Subnet, SubnetId, SubnetOperationPredicate, SubnetPropertiesFormat, SubnetsClient,
    VirtualNetworkPrivateEndpointNetworkPolicies,
};
use armkit::services::network::virtualnetworks::{
    AddressSpace, ProvisioningState, VirtualNetwork, VirtualNetworkId,
    VirtualNetworkPropertiesFormat, VirtualNetworksClient,
};
use armkit::services::ResourceManagerClient;
use armkit::Client;
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

const VNET: &str =
    "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Network/virtualNetworks/vnet";

fn base_client(server: &MockServer) -> Client {
    Client::new(&server.base_url())
        .unwrap()
        .with_retry(0, Duration::from_millis(1))
        .with_poll_interval(Duration::from_millis(5))
}

fn subnet_json(name: &str, prefix: &str, state: &str) -> serde_json::Value {
    json!({
        "id": format!("{VNET}/subnets/{name}"),
        "name": name,
        "etag": "W/\"00000000-0000-0000-0000-000000000000\"",
        "type": "Microsoft.Network/virtualNetworks/subnets",
        "properties": {
            "addressPrefix": prefix,
            "provisioningState": state,
            "privateEndpointNetworkPolicies": "Disabled"
        }
    })
}

#[tokio::test]
async fn test_virtual_network_create_with_async_operation() {
    let server = MockServer::start();
    let put = server.mock(|when, then| {
        when.method(PUT)
            .path(VNET)
            .query_param("api-version", "2023-11-01")
            .json_body_partial(r#"{"location":"westeurope","properties":{"addressSpace":{"addressPrefixes":["10.0.0.0/16"]}}}"#);
        then.status(201)
            .header("Azure-AsyncOperation", server.url("/operations/vnet"))
            .json_body(json!({
                "name": "vnet",
                "location": "westeurope",
                "properties": { "provisioningState": "Updating" }
            }));
    });
    let status = server.mock(|when, then| {
        when.method(GET).path("/operations/vnet");
        then.status(200).json_body(json!({ "status": "Succeeded" }));
    });

    let input = VirtualNetwork {
        location: Some("westeurope".to_string()),
        properties: Some(VirtualNetworkPropertiesFormat {
            address_space: Some(AddressSpace {
                address_prefixes: vec!["10.0.0.0/16".to_string()],
            }),
            ..Default::default()
        }),
        ..Default::default()
    };

    VirtualNetworksClient::new(&base_client(&server))
        .create_or_update_then_poll(&VirtualNetworkId::new("sub", "rg", "vnet"), input)
        .await
        .unwrap();

    put.assert();
    status.assert();
}

#[tokio::test]
async fn test_virtual_network_get_includes_subnets() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(VNET);
        then.status(200).json_body(json!({
            "name": "vnet",
            "location": "westeurope",
            "properties": {
                "provisioningState": "Succeeded",
                "addressSpace": { "addressPrefixes": ["10.0.0.0/16"] },
                "subnets": [subnet_json("default", "10.0.0.0/24", "Succeeded")]
            }
        }));
    });

    let vnet = VirtualNetworksClient::new(&base_client(&server))
        .get(&VirtualNetworkId::new("sub", "rg", "vnet"))
        .await
        .unwrap()
        .model
        .unwrap();

    let properties = vnet.properties.unwrap();
    assert_eq!(properties.provisioning_state, Some(ProvisioningState::Succeeded));
    let subnets = properties.subnets.unwrap();
    assert_eq!(subnets.len(), 1);
    let subnet_id = SubnetId::parse(subnets[0].id.as_deref().unwrap()).unwrap();
    assert_eq!(subnet_id.subnet_name, "default");
    assert_eq!(subnet_id.virtual_network().id(), VNET);
}

#[tokio::test]
async fn test_virtual_networks_list_by_resource_group() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Network/virtualNetworks");
        then.status(200).json_body(json!({
            "value": [
                { "name": "vnet", "location": "westeurope" },
                { "name": "other", "location": "eastus" }
            ]
        }));
    });

    let response = VirtualNetworksClient::new(&base_client(&server))
        .list_complete(&ResourceGroupId::new("sub", "rg"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(response.items.len(), 2);
}

#[tokio::test]
async fn test_subnet_create_polls_resource_until_succeeded() {
    let server = MockServer::start();
    let subnet_path = format!("{VNET}/subnets/apps");
    let put = server.mock(|when, then| {
        when.method(PUT)
            .path(subnet_path.as_str())
            .json_body(json!({
                "properties": {
                    "addressPrefix": "10.0.1.0/24",
                    "privateEndpointNetworkPolicies": "Disabled"
                }
            }));
        then.status(201)
            .json_body(subnet_json("apps", "10.0.1.0/24", "Updating"));
    });
    let get = server.mock(|when, then| {
        when.method(GET)
            .path(subnet_path.as_str())
            .query_param("api-version", "2023-11-01");
        then.status(200)
            .json_body(subnet_json("apps", "10.0.1.0/24", "Succeeded"));
    });

    let input = Subnet {
        properties: Some(SubnetPropertiesFormat {
            address_prefix: Some("10.0.1.0/24".to_string()),
            private_endpoint_network_policies: Some(
                VirtualNetworkPrivateEndpointNetworkPolicies::Disabled,
            ),
            ..Default::default()
        }),
        ..Default::default()
    };

    SubnetsClient::new(&base_client(&server))
        .create_or_update_then_poll(&SubnetId::new("sub", "rg", "vnet", "apps"), input)
        .await
        .unwrap();

    put.assert();
    get.assert();
}

#[tokio::test]
async fn test_subnet_delete_and_list_through_aggregate_client() {
    let server = MockServer::start();
    let delete = server.mock(|when, then| {
        when.method(DELETE).path(format!("{VNET}/subnets/old"));
        then.status(202)
            .header("Location", server.url("/operations/subnet-delete"));
    });
    let result = server.mock(|when, then| {
        when.method(GET).path("/operations/subnet-delete");
        then.status(204);
    });
    let list = server.mock(|when, then| {
        when.method(GET).path(format!("{VNET}/subnets"));
        then.status(200).json_body(json!({
            "value": [
                subnet_json("default", "10.0.0.0/24", "Succeeded"),
                subnet_json("apps", "10.0.1.0/24", "Succeeded")
            ]
        }));
    });

    let client = ResourceManagerClient::new(&base_client(&server));
    client
        .subnets
        .delete_then_poll(&SubnetId::new("sub", "rg", "vnet", "old"))
        .await
        .unwrap();

    let predicate = SubnetOperationPredicate {
        name: Some("apps".to_string()),
        ..Default::default()
    };
    let response = client
        .subnets
        .list_complete_matching_predicate(&VirtualNetworkId::new("sub", "rg", "vnet"), predicate)
        .await
        .unwrap();

    delete.assert();
    result.assert();
    list.assert();
    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].name.as_deref(), Some("apps"));
}
