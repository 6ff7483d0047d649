use armkit::core::commonids::{ResourceGroupId, SubscriptionId};
use armkit::services::storage::storageaccounts::*;
use armkit::Client;
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

const ACCOUNT: &str =
    "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts/acct";

fn storage_client(server: &MockServer) -> StorageAccountsClient {
    let base = Client::new(&server.base_url())
        .unwrap()
        .with_retry(0, Duration::from_millis(1))
        .with_poll_interval(Duration::from_millis(5));
    StorageAccountsClient::new(&base)
}

fn account_json(name: &str, location: &str) -> serde_json::Value {
    json!({
        "id": format!("/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts/{name}"),
        "name": name,
        "location": location,
        "type": "Microsoft.Storage/storageAccounts",
        "kind": "StorageV2",
        "sku": { "name": "Standard_LRS", "tier": "Standard" },
        "properties": {
            "provisioningState": "Succeeded",
            "accessTier": "Hot",
            "minimumTlsVersion": "TLS1_2",
            "primaryEndpoints": { "blob": format!("https://{name}.blob.core.windows.net/") }
        }
    })
}

#[tokio::test]
async fn test_get_properties_with_expand() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(ACCOUNT)
            .query_param("api-version", "2023-01-01")
            .query_param("$expand", "geoReplicationStats");
        then.status(200).json_body(account_json("acct", "westeurope"));
    });

    let id = StorageAccountId::new("sub", "rg", "acct");
    let options = GetPropertiesOperationOptions {
        expand: Some(StorageAccountExpand::GeoReplicationStats),
    };
    let response = storage_client(&server)
        .get_properties(&id, options)
        .await
        .unwrap();

    mock.assert();
    let account = response.model.unwrap();
    assert_eq!(account.name.as_deref(), Some("acct"));
    assert_eq!(account.kind, Some(Kind::StorageVTwo));
    assert_eq!(account.sku.unwrap().name, SkuName::StandardLrs);
    let properties = account.properties.unwrap();
    assert_eq!(properties.access_tier, Some(AccessTier::Hot));
    assert_eq!(properties.provisioning_state, Some(ProvisioningState::Succeeded));
}

#[tokio::test]
async fn test_get_missing_account_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(ACCOUNT);
        then.status(404).json_body(json!({
            "error": {
                "code": "ResourceNotFound",
                "message": "The Resource 'Microsoft.Storage/storageAccounts/acct' was not found."
            }
        }));
    });

    let id = StorageAccountId::new("sub", "rg", "acct");
    let err = storage_client(&server)
        .get_properties(&id, GetPropertiesOperationOptions::default())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    let message = err.to_string();
    assert!(message.contains("storageaccounts.StorageAccountsClient#GetProperties"));
    assert!(message.contains("ResourceNotFound"));
}

#[tokio::test]
async fn test_create_then_poll_follows_location() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(PUT)
            .path(ACCOUNT)
            .json_body_partial(r#"{"kind":"StorageV2","location":"westeurope","sku":{"name":"Standard_LRS"}}"#);
        then.status(202)
            .header("Location", server.url("/operations/create-acct"));
    });
    let status = server.mock(|when, then| {
        when.method(GET).path("/operations/create-acct");
        then.status(200).json_body(account_json("acct", "westeurope"));
    });

    let id = StorageAccountId::new("sub", "rg", "acct");
    let input = StorageAccountCreateParameters {
        identity: None,
        kind: Kind::StorageVTwo,
        location: "westeurope".to_string(),
        properties: None,
        sku: Sku::new(SkuName::StandardLrs),
        tags: None,
    };
    storage_client(&server)
        .create_then_poll(&id, input)
        .await
        .unwrap();

    create.assert();
    status.assert();
}

#[tokio::test]
async fn test_create_with_mistyped_body_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PUT).path(ACCOUNT);
        then.status(200)
            .json_body(json!({ "name": "acct", "location": 42 }));
    });

    let input = StorageAccountCreateParameters {
        identity: None,
        kind: Kind::StorageVTwo,
        location: "westeurope".to_string(),
        properties: None,
        sku: Sku::new(SkuName::StandardLrs),
        tags: None,
    };
    let err = storage_client(&server)
        .create(&StorageAccountId::new("sub", "rg", "acct"), input)
        .await
        .unwrap_err();

    assert!(matches!(err, armkit::ArmError::SerializationError(_)));
}

#[tokio::test]
async fn test_delete_accepts_no_content() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path(ACCOUNT);
        then.status(204);
    });

    let id = StorageAccountId::new("sub", "rg", "acct");
    let response = storage_client(&server).delete(&id).await.unwrap();

    mock.assert();
    assert_eq!(response.status.as_u16(), 204);
    assert!(response.model.is_none());
}

#[tokio::test]
async fn test_list_keys() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(format!("{ACCOUNT}/listKeys"))
            .query_param("$expand", "kerb");
        then.status(200).json_body(json!({
            "keys": [
                { "keyName": "key1", "value": "secret-1", "permissions": "FULL" },
                { "keyName": "key2", "value": "secret-2", "permissions": "Full" }
            ]
        }));
    });

    let id = StorageAccountId::new("sub", "rg", "acct");
    let options = ListKeysOperationOptions {
        expand: Some(ListKeyExpand::Kerb),
    };
    let keys = storage_client(&server)
        .list_keys(&id, options)
        .await
        .unwrap()
        .model
        .unwrap()
        .keys;

    mock.assert();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[0].permissions, Some(KeyPermission::Full));
    assert_eq!(keys[1].permissions, Some(KeyPermission::Full));
}

#[tokio::test]
async fn test_check_name_availability() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/subscriptions/sub/providers/Microsoft.Storage/checkNameAvailability")
            .json_body(json!({
                "name": "taken",
                "type": "Microsoft.Storage/storageAccounts"
            }));
        then.status(200).json_body(json!({
            "nameAvailable": false,
            "reason": "AlreadyExists",
            "message": "The storage account named taken is already taken."
        }));
    });

    let result = storage_client(&server)
        .check_name_availability(
            &SubscriptionId::new("sub"),
            StorageAccountCheckNameAvailabilityParameters::new("taken"),
        )
        .await
        .unwrap()
        .model
        .unwrap();

    mock.assert();
    assert_eq!(result.name_available, Some(false));
    assert_eq!(result.reason, Some(Reason::AlreadyExists));
}

#[tokio::test]
async fn test_list_by_resource_group_follows_pages_and_filters() {
    let server = MockServer::start();
    let path = "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts";
    let first = server.mock(|when, then| {
        when.method(GET)
            .path(path)
            .query_param("api-version", "2023-01-01");
        then.status(200).json_body(json!({
            "value": [account_json("one", "westeurope"), account_json("two", "northeurope")],
            "nextLink": server.url("/pages/storage?page=2")
        }));
    });
    let second = server.mock(|when, then| {
        when.method(GET).path("/pages/storage").query_param("page", "2");
        then.status(200).json_body(json!({
            "value": [account_json("three", "westeurope")]
        }));
    });

    let client = storage_client(&server);
    let predicate = StorageAccountOperationPredicate {
        location: Some("westeurope".to_string()),
        ..Default::default()
    };
    let response = client
        .list_by_resource_group_complete_matching_predicate(&ResourceGroupId::new("sub", "rg"), predicate)
        .await
        .unwrap();

    first.assert();
    second.assert();
    let names: Vec<_> = response
        .items
        .iter()
        .filter_map(|a| a.name.as_deref())
        .collect();
    assert_eq!(names, vec!["one", "three"]);
}

#[tokio::test]
async fn test_list_across_subscription() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/subscriptions/sub/providers/Microsoft.Storage/storageAccounts");
        then.status(200).json_body(json!({
            "value": [account_json("one", "westeurope")]
        }));
    });

    let response = storage_client(&server)
        .list_complete(&SubscriptionId::new("sub"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].location, "westeurope");
}
