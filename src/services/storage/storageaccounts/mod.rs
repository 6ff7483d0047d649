//! Storage accounts (`Microsoft.Storage/storageAccounts`).

pub mod constants;
pub mod id_storageaccount;
pub mod models;
mod operations;

pub use constants::*;
pub use id_storageaccount::StorageAccountId;
pub use models::*;

use crate::core::Client;

pub const API_VERSION: &str = "2023-01-01";

#[derive(Debug, Clone)]
pub struct StorageAccountsClient {
    client: Client,
}

impl StorageAccountsClient {
    pub fn new(base: &Client) -> Self {
        Self {
            client: base.with_api_version(API_VERSION),
        }
    }
}
