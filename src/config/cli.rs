use crate::domain::ports::Authorizer;
use crate::utils::error::{ArmError, Result};
use async_trait::async_trait;

pub const ACCESS_TOKEN_VAR: &str = "ARM_ACCESS_TOKEN";

/// Bearer token taken from the environment, for callers that obtain tokens
/// out of band (e.g. `az account get-access-token`).
#[derive(Clone)]
pub struct EnvironmentAuthorizer {
    token: String,
}

impl EnvironmentAuthorizer {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Reads the token from `ARM_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self> {
        Self::from_var(ACCESS_TOKEN_VAR)
    }

    pub fn from_var(name: &str) -> Result<Self> {
        match std::env::var(name) {
            Ok(token) if !token.trim().is_empty() => Ok(Self::new(token.trim())),
            _ => Err(ArmError::MissingConfigError {
                field: name.to_string(),
            }),
        }
    }
}

impl std::fmt::Debug for EnvironmentAuthorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvironmentAuthorizer")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl Authorizer for EnvironmentAuthorizer {
    async fn token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_token_from_var() {
        std::env::set_var("ARMKIT_TEST_TOKEN", "  abc123 ");
        let authorizer = EnvironmentAuthorizer::from_var("ARMKIT_TEST_TOKEN").unwrap();
        assert_eq!(authorizer.token().await.unwrap(), "abc123");
        std::env::remove_var("ARMKIT_TEST_TOKEN");
    }

    #[test]
    fn test_missing_var() {
        let err = EnvironmentAuthorizer::from_var("ARMKIT_TEST_TOKEN_UNSET").unwrap_err();
        match err {
            ArmError::MissingConfigError { field } => assert_eq!(field, "ARMKIT_TEST_TOKEN_UNSET"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_debug_redacts_token() {
        let authorizer = EnvironmentAuthorizer::new("secret");
        assert!(!format!("{authorizer:?}").contains("secret"));
    }
}
