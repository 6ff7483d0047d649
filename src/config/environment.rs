use crate::utils::error::{ArmError, Result};
use std::fmt;
use std::str::FromStr;

/// A named cloud and its resource manager endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Public,
    China,
    UsGovernment,
}

impl Environment {
    pub fn resource_manager_endpoint(&self) -> &'static str {
        match self {
            Environment::Public => "https://management.azure.com",
            Environment::China => "https://management.chinacloudapi.cn",
            Environment::UsGovernment => "https://management.usgovcloudapi.net",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Environment::Public => "public",
            Environment::China => "china",
            Environment::UsGovernment => "usgovernment",
        }
    }
}

impl FromStr for Environment {
    type Err = ArmError;

    fn from_str(input: &str) -> Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "public" | "azurecloud" => Ok(Environment::Public),
            "china" | "azurechinacloud" => Ok(Environment::China),
            "usgovernment" | "azureusgovernmentcloud" => Ok(Environment::UsGovernment),
            _ => Err(ArmError::InvalidConfigValueError {
                field: "environment.name".to_string(),
                value: input.to_string(),
                reason: "Unknown environment. Valid names: public, china, usgovernment"
                    .to_string(),
            }),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
