//! DNS record sets (`Microsoft.Network/dnsZones/{recordType}`).

pub mod constants;
pub mod id_dnszone;
pub mod id_recordtype;
pub mod models;
mod operations;

pub use constants::*;
pub use id_dnszone::DnsZoneId;
pub use id_recordtype::RecordTypeId;
pub use models::*;

use crate::core::Client;

pub const API_VERSION: &str = "2018-05-01";

#[derive(Debug, Clone)]
pub struct RecordSetsClient {
    client: Client,
}

impl RecordSetsClient {
    pub fn new(base: &Client) -> Self {
        Self {
            client: base.with_api_version(API_VERSION),
        }
    }
}
