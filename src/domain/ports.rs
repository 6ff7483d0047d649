use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Supplies the bearer token attached to every outgoing request.
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn token(&self) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn retry_attempts(&self) -> u32;
    fn retry_delay(&self) -> Duration;
    fn poll_interval(&self) -> Duration;
    fn poll_timeout(&self) -> Option<Duration>;
}
