//! Long-running operation polling.
//!
//! The resource manager reports progress of an asynchronous operation in one of
//! three ways, checked in this order on the initial response:
//!
//! 1. an `Azure-AsyncOperation` header pointing at a status document whose
//!    `status` field reaches `Succeeded`, `Failed` or `Canceled`;
//! 2. a `Location` header which answers `202` while the operation runs and any
//!    other success status once it is finished;
//! 3. for `PUT`/`PATCH`, the resource's own `properties.provisioningState`.
//!
//! Anything else means the operation completed synchronously.

use crate::core::client::{Client, Request, Response};
use crate::core::open_enum::open_enum;
use crate::domain::model::CloudErrorBody;
use crate::utils::error::{ArmError, Result};
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

open_enum! {
    pub enum OperationStatus {
        Canceled => "Canceled",
        Cancelled => "Cancelled",
        Failed => "Failed",
        InProgress => "InProgress",
        Succeeded => "Succeeded",
    }
}

impl OperationStatus {
    fn outcome(&self) -> Option<bool> {
        match self {
            OperationStatus::Succeeded => Some(true),
            OperationStatus::Failed | OperationStatus::Canceled | OperationStatus::Cancelled => {
                Some(false)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OperationStatusResult {
    status: OperationStatus,
    #[serde(default)]
    error: Option<CloudErrorBody>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProvisioningStateProperties {
    provisioning_state: Option<OperationStatus>,
}

#[derive(Debug, Default, Deserialize)]
struct ProvisioningStateResult {
    #[serde(default)]
    properties: Option<ProvisioningStateProperties>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PollingStrategy {
    AsyncOperation(Url),
    Location(Url),
    ProvisioningState(Url),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PollerState {
    Polling(PollingStrategy),
    Succeeded,
    Failed {
        status: String,
        message: Option<String>,
    },
}

const ASYNC_OPERATION_HEADER: &str = "azure-asyncoperation";
const LOCATION_HEADER: &str = "location";

const ASYNC_OPERATION_STATUS: &[StatusCode] =
    &[StatusCode::OK, StatusCode::CREATED, StatusCode::ACCEPTED];
const LOCATION_STATUS: &[StatusCode] = &[
    StatusCode::OK,
    StatusCode::CREATED,
    StatusCode::ACCEPTED,
    StatusCode::NO_CONTENT,
];
const PROVISIONING_STATE_STATUS: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED];

/// Tracks a long-running operation until it reaches a terminal state.
///
/// Dropping the future returned by [`Poller::poll_until_done`] stops polling.
#[derive(Debug)]
pub struct Poller {
    client: Client,
    operation: String,
    state: PollerState,
    next_delay: Option<std::time::Duration>,
}

impl Poller {
    pub fn new(
        client: &Client,
        method: &Method,
        request_url: &Url,
        response: &Response,
        operation: &str,
    ) -> Result<Self> {
        let state = initial_state(method, request_url, response)?;
        tracing::debug!("{}: initial polling state {:?}", operation, state);

        Ok(Self {
            client: client.clone(),
            operation: operation.to_string(),
            state,
            next_delay: response.retry_after(),
        })
    }

    pub fn is_done(&self) -> bool {
        !matches!(self.state, PollerState::Polling(_))
    }

    /// Polls until the operation finishes, failing once the client's poll
    /// timeout (if any) has elapsed.
    pub async fn poll_until_done(&mut self) -> Result<()> {
        let operation = self.operation.clone();
        match self.client.poll_timeout() {
            Some(timeout) => match tokio::time::timeout(timeout, self.poll_loop()).await {
                Ok(result) => result,
                Err(_) => Err(ArmError::PollingTimeout {
                    operation,
                    elapsed: timeout,
                }),
            },
            None => self.poll_loop().await,
        }
    }

    async fn poll_loop(&mut self) -> Result<()> {
        loop {
            match &self.state {
                PollerState::Succeeded => return Ok(()),
                PollerState::Failed { status, message } => {
                    return Err(ArmError::PollingFailed {
                        operation: self.operation.clone(),
                        status: status.clone(),
                        message: message.clone(),
                    })
                }
                PollerState::Polling(_) => {}
            }

            let delay = self
                .next_delay
                .take()
                .unwrap_or_else(|| self.client.poll_interval());
            tokio::time::sleep(delay).await;
            self.poll_once().await?;
        }
    }

    async fn poll_once(&mut self) -> Result<()> {
        let strategy = match &self.state {
            PollerState::Polling(strategy) => strategy.clone(),
            _ => return Ok(()),
        };

        let (url, expected) = match &strategy {
            PollingStrategy::AsyncOperation(url) => (url.clone(), ASYNC_OPERATION_STATUS),
            PollingStrategy::Location(url) => (url.clone(), LOCATION_STATUS),
            PollingStrategy::ProvisioningState(url) => (url.clone(), PROVISIONING_STATE_STATUS),
        };
        let request = self
            .client
            .new_request_for_url(Method::GET, url, expected);
        let response = self.client.execute(request, &self.operation).await?;
        self.next_delay = response.retry_after();

        let next = match &strategy {
            PollingStrategy::AsyncOperation(url) => {
                let result: OperationStatusResult = response.unmarshal()?;
                let url = header_url(&response.headers, ASYNC_OPERATION_HEADER)?
                    .unwrap_or_else(|| url.clone());
                state_from_status(
                    &result.status,
                    result.error.and_then(|e| e.message),
                    PollingStrategy::AsyncOperation(url),
                )
            }
            PollingStrategy::Location(url) => {
                if response.status == StatusCode::ACCEPTED {
                    let url = header_url(&response.headers, LOCATION_HEADER)?
                        .unwrap_or_else(|| url.clone());
                    PollerState::Polling(PollingStrategy::Location(url))
                } else {
                    PollerState::Succeeded
                }
            }
            PollingStrategy::ProvisioningState(url) => {
                let result: ProvisioningStateResult =
                    response.unmarshal_optional()?.unwrap_or_default();
                match result.properties.and_then(|p| p.provisioning_state) {
                    Some(status) => state_from_status(
                        &status,
                        None,
                        PollingStrategy::ProvisioningState(url.clone()),
                    ),
                    None => PollerState::Succeeded,
                }
            }
        };

        tracing::debug!("{}: polling state {:?}", self.operation, next);
        self.state = next;
        Ok(())
    }
}

fn initial_state(method: &Method, request_url: &Url, response: &Response) -> Result<PollerState> {
    if let Some(url) = header_url(&response.headers, ASYNC_OPERATION_HEADER)? {
        return Ok(PollerState::Polling(PollingStrategy::AsyncOperation(url)));
    }
    if let Some(url) = header_url(&response.headers, LOCATION_HEADER)? {
        return Ok(PollerState::Polling(PollingStrategy::Location(url)));
    }

    if *method == Method::PUT || *method == Method::PATCH {
        let result: Option<ProvisioningStateResult> =
            response.unmarshal_optional().unwrap_or_default();
        if let Some(status) = result
            .and_then(|r| r.properties)
            .and_then(|p| p.provisioning_state)
        {
            return Ok(state_from_status(
                &status,
                None,
                PollingStrategy::ProvisioningState(request_url.clone()),
            ));
        }
    }

    if response.status == StatusCode::ACCEPTED {
        tracing::warn!("202 Accepted without a polling URL, treating the operation as complete");
    }
    Ok(PollerState::Succeeded)
}

fn state_from_status(
    status: &OperationStatus,
    message: Option<String>,
    strategy: PollingStrategy,
) -> PollerState {
    match status.outcome() {
        Some(true) => PollerState::Succeeded,
        Some(false) => PollerState::Failed {
            status: status.to_string(),
            message,
        },
        None => PollerState::Polling(strategy),
    }
}

fn header_url(headers: &HeaderMap, name: &str) -> Result<Option<Url>> {
    match headers.get(name).and_then(|v| v.to_str().ok()) {
        Some(value) if !value.trim().is_empty() => Ok(Some(Url::parse(value.trim())?)),
        _ => Ok(None),
    }
}

/// Initial response of a long-running operation together with its poller.
#[derive(Debug)]
pub struct LroResponse<T> {
    pub status: StatusCode,
    pub model: Option<T>,
    pub poller: Poller,
}

impl Client {
    /// Sends the initial request of a long-running operation, decoding the
    /// resource model from any non-202 body.
    pub async fn execute_lro<T: DeserializeOwned>(
        &self,
        request: Request,
        operation: &str,
    ) -> Result<LroResponse<T>> {
        let (response, poller) = self.start_lro(request, operation).await?;
        // status documents returned alongside 202s are not the resource model
        let model = if response.status == StatusCode::ACCEPTED {
            None
        } else {
            response.unmarshal_optional()?
        };

        Ok(LroResponse {
            status: response.status,
            model,
            poller,
        })
    }

    /// Sends the initial request of a long-running operation that returns no model.
    pub async fn execute_empty_lro(
        &self,
        request: Request,
        operation: &str,
    ) -> Result<LroResponse<()>> {
        let (response, poller) = self.start_lro(request, operation).await?;
        Ok(LroResponse {
            status: response.status,
            model: None,
            poller,
        })
    }

    async fn start_lro(&self, request: Request, operation: &str) -> Result<(Response, Poller)> {
        let method = request.method.clone();
        let url = request.url.clone();
        let response = self.execute(request, operation).await?;
        let poller = Poller::new(self, &method, &url, &response, operation)?;
        Ok((response, poller))
    }
}
