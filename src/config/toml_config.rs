use crate::config::environment::Environment;
use crate::core::client::{DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ArmError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_DELAY_MS: u64 = 2_000;
const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 10;
const MAX_RETRY_ATTEMPTS: u32 = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSettings {
    #[serde(default)]
    pub environment: EnvironmentSettings,
    #[serde(default)]
    pub client: HttpSettings,
    #[serde(default)]
    pub polling: PollingSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentSettings {
    /// `public`, `china` or `usgovernment`.
    pub name: Option<String>,
    /// Overrides the endpoint derived from `name`.
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpSettings {
    pub user_agent: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub retry_attempts: Option<u32>,
    pub retry_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PollingSettings {
    pub interval_seconds: Option<u64>,
    /// No timeout when unset.
    pub timeout_seconds: Option<u64>,
}

impl ClientSettings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ArmError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| ArmError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unset
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        static PATTERN: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();
        let re = PATTERN
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}"))
            .as_ref()
            .map_err(|e| ArmError::ConfigError {
                message: format!("invalid substitution pattern: {}", e),
            })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Sets an explicit endpoint, taking precedence over the environment name.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.environment.endpoint = Some(endpoint.into());
        self
    }

    pub fn named_environment(&self) -> Result<Option<Environment>> {
        self.environment
            .name
            .as_deref()
            .map(str::parse)
            .transpose()
    }
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<()> {
        self.named_environment()?;
        validate_url("environment.endpoint", self.endpoint())?;

        if let Some(user_agent) = &self.client.user_agent {
            validate_non_empty_string("client.user_agent", user_agent)?;
        }
        if let Some(timeout) = self.client.timeout_seconds {
            validate_positive_number("client.timeout_seconds", timeout, 1)?;
        }
        if let Some(attempts) = self.client.retry_attempts {
            validate_range("client.retry_attempts", attempts, 0, MAX_RETRY_ATTEMPTS)?;
        }
        if let Some(interval) = self.polling.interval_seconds {
            validate_positive_number("polling.interval_seconds", interval, 1)?;
        }
        if let Some(timeout) = self.polling.timeout_seconds {
            validate_positive_number("polling.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}

impl ConfigProvider for ClientSettings {
    fn endpoint(&self) -> &str {
        if let Some(endpoint) = &self.environment.endpoint {
            return endpoint;
        }
        match self.named_environment() {
            Ok(Some(environment)) => environment.resource_manager_endpoint(),
            _ => DEFAULT_ENDPOINT,
        }
    }

    fn user_agent(&self) -> &str {
        self.client.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.client.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn retry_attempts(&self) -> u32 {
        self.client.retry_attempts.unwrap_or(DEFAULT_RETRY_ATTEMPTS)
    }

    fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.client.retry_delay_ms.unwrap_or(DEFAULT_RETRY_DELAY_MS))
    }

    fn poll_interval(&self) -> Duration {
        Duration::from_secs(
            self.polling
                .interval_seconds
                .unwrap_or(DEFAULT_POLL_INTERVAL_SECONDS),
        )
    }

    fn poll_timeout(&self) -> Option<Duration> {
        self.polling.timeout_seconds.map(Duration::from_secs)
    }
}
