use crate::domain::model::{CloudError, CloudErrorBody, OperationResponse};
use crate::domain::ports::{Authorizer, ConfigProvider};
use crate::utils::error::{ArmError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";
pub const DEFAULT_ENDPOINT: &str = "https://management.azure.com";
pub const DEFAULT_USER_AGENT: &str = concat!("armkit/", env!("CARGO_PKG_VERSION"));

const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Query parameters and headers contributed by an operation's options object.
pub trait Options: Send + Sync {
    fn to_headers(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn to_query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Options for operations that take none.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOptions;

impl Options for NoOptions {}

pub struct RequestOptions<'a> {
    pub content_type: &'static str,
    pub expected_status_codes: &'a [StatusCode],
    pub http_method: Method,
    pub path: String,
    pub options: &'a dyn Options,
}

#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    pub expected_status_codes: Vec<StatusCode>,
}

impl Request {
    pub fn marshal<T: Serialize>(&mut self, body: &T) -> Result<()> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Response {
    pub fn unmarshal<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Decodes the body unless the service sent none.
    pub fn unmarshal_optional<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        if self.body.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(None);
        }
        self.unmarshal().map(Some)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Wraps the response, decoding the body into `T` when there is one.
    pub fn into_operation_response<T: DeserializeOwned>(self) -> Result<OperationResponse<T>> {
        let model = self.unmarshal_optional()?;
        Ok(OperationResponse {
            status: self.status,
            headers: self.headers,
            model,
        })
    }

    /// Wraps the response of an operation that returns no model.
    pub fn into_empty_response(self) -> OperationResponse<()> {
        OperationResponse {
            status: self.status,
            headers: self.headers,
            model: None,
        }
    }

    /// `Retry-After` expressed in whole seconds.
    pub fn retry_after(&self) -> Option<Duration> {
        self.header("retry-after")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
    }
}

/// Shared HTTP client every service client wraps.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
    api_version: Option<String>,
    authorizer: Option<Arc<dyn Authorizer>>,
    user_agent: String,
    retry_attempts: u32,
    retry_delay: Duration,
    poll_interval: Duration,
    poll_timeout: Option<Duration>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_version", &self.api_version)
            .field("authorized", &self.authorizer.is_some())
            .field("user_agent", &self.user_agent)
            .field("retry_attempts", &self.retry_attempts)
            .finish()
    }
}

impl Client {
    pub fn new(endpoint: &str) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: Url::parse(endpoint)?,
            api_version: None,
            authorizer: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
            poll_interval: DEFAULT_POLL_INTERVAL,
            poll_timeout: None,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            endpoint: Url::parse(config.endpoint())?,
            api_version: None,
            authorizer: None,
            user_agent: config.user_agent().to_string(),
            retry_attempts: config.retry_attempts(),
            retry_delay: config.retry_delay(),
            poll_interval: config.poll_interval(),
            poll_timeout: config.poll_timeout(),
        })
    }

    pub fn with_authorizer(mut self, authorizer: Arc<dyn Authorizer>) -> Self {
        self.authorizer = Some(authorizer);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_retry(mut self, attempts: u32, delay: Duration) -> Self {
        self.retry_attempts = attempts;
        self.retry_delay = delay;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_poll_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.poll_timeout = timeout;
        self
    }

    /// A copy of this client sending `api-version` on every request.
    pub fn with_api_version(&self, api_version: &str) -> Self {
        let mut client = self.clone();
        client.api_version = Some(api_version.to_string());
        client
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn poll_timeout(&self) -> Option<Duration> {
        self.poll_timeout
    }

    pub fn new_request(&self, options: RequestOptions<'_>) -> Result<Request> {
        let mut url = self.endpoint.clone();
        // operation paths are relative to any prefix on the endpoint
        let path = format!(
            "{}/{}",
            self.endpoint.path().trim_end_matches('/'),
            options.path.trim_start_matches('/')
        );
        url.set_path(&path);

        {
            let mut query = url.query_pairs_mut();
            if let Some(api_version) = &self.api_version {
                query.append_pair("api-version", api_version);
            }
            for (key, value) in options.options.to_query() {
                query.append_pair(key, &value);
            }
        }

        let mut headers = HeaderMap::new();
        if !options.content_type.is_empty() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(options.content_type));
        }
        for (name, value) in options.options.to_headers() {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| ArmError::RequestError {
                    operation: options.path.clone(),
                    message: format!("invalid header name {name:?}: {e}"),
                })?;
            let header_value =
                HeaderValue::from_str(&value).map_err(|e| ArmError::RequestError {
                    operation: options.path.clone(),
                    message: format!("invalid value for header {name:?}: {e}"),
                })?;
            headers.insert(header_name, header_value);
        }

        Ok(Request {
            method: options.http_method,
            url,
            headers,
            body: None,
            expected_status_codes: options.expected_status_codes.to_vec(),
        })
    }

    /// A request for an absolute URL handed back by the service (next links,
    /// polling URLs), which already carries its own query string.
    pub(crate) fn new_request_for_url(
        &self,
        method: Method,
        url: Url,
        expected_status_codes: &[StatusCode],
    ) -> Request {
        Request {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            expected_status_codes: expected_status_codes.to_vec(),
        }
    }

    /// Sends the request, retrying transient failures, and checks the status
    /// against the request's expected codes.
    #[tracing::instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    pub async fn execute(&self, request: Request, operation: &str) -> Result<Response> {
        let mut attempt = 0;
        loop {
            match self.send_once(&request).await {
                Ok(response)
                    if attempt < self.retry_attempts && is_retryable_status(response.status) =>
                {
                    let delay = response.retry_after().unwrap_or(self.retry_delay);
                    tracing::warn!(
                        "{}: status {} on attempt {}, retrying in {:?}",
                        operation,
                        response.status,
                        attempt + 1,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Ok(response) => {
                    tracing::debug!("{}: response status {}", operation, response.status);
                    if request.expected_status_codes.contains(&response.status) {
                        return Ok(response);
                    }
                    return Err(unexpected_status(operation, &response));
                }
                Err(ArmError::TransportError(e))
                    if attempt < self.retry_attempts && (e.is_connect() || e.is_timeout()) =>
                {
                    tracing::warn!(
                        "{}: transport error on attempt {}: {}, retrying in {:?}",
                        operation,
                        attempt + 1,
                        e,
                        self.retry_delay
                    );
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(e) => return Err(e),
            }
            attempt += 1;
        }
    }

    async fn send_once(&self, request: &Request) -> Result<Response> {
        let mut builder = self
            .http
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone())
            .header(USER_AGENT, self.user_agent.as_str())
            .header(ACCEPT, "application/json");

        if let Some(authorizer) = &self.authorizer {
            builder = builder.bearer_auth(authorizer.token().await?);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        tracing::debug!("Sending {} {}", request.method, request.url);
        let response = builder.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

fn is_retryable_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    )
}

fn unexpected_status(operation: &str, response: &Response) -> ArmError {
    let (code, message) = match serde_json::from_slice::<CloudError>(&response.body) {
        Ok(CloudError { error: Some(body) }) => (body.code, body.message.unwrap_or_default()),
        _ => match serde_json::from_slice::<CloudErrorBody>(&response.body) {
            Ok(body) if body.code.is_some() || body.message.is_some() => {
                (body.code, body.message.unwrap_or_default())
            }
            _ => {
                let raw = String::from_utf8_lossy(&response.body).trim().to_string();
                if raw.is_empty() {
                    let reason = response.status.canonical_reason().unwrap_or_default();
                    (None, reason.to_string())
                } else {
                    (None, raw)
                }
            }
        },
    };

    ArmError::UnexpectedStatus {
        operation: operation.to_string(),
        status: response.status.as_u16(),
        code,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use httpmock::prelude::*;

    struct StaticToken(&'static str);

    #[async_trait]
    impl Authorizer for StaticToken {
        async fn token(&self) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct ListOptions {
        filter: Option<String>,
        if_match: Option<String>,
    }

    impl Options for ListOptions {
        fn to_headers(&self) -> Vec<(&'static str, String)> {
            self.if_match
                .iter()
                .map(|v| ("If-Match", v.clone()))
                .collect()
        }

        fn to_query(&self) -> Vec<(&'static str, String)> {
            self.filter.iter().map(|v| ("$filter", v.clone())).collect()
        }
    }

    fn test_client(server: &MockServer) -> Client {
        Client::new(&server.base_url())
            .unwrap()
            .with_api_version("2023-01-01")
            .with_retry(2, Duration::from_millis(1))
    }

    #[test]
    fn test_new_request_builds_url_and_headers() {
        let client = Client::new("https://management.azure.com")
            .unwrap()
            .with_api_version("2023-01-01");
        let options = ListOptions {
            filter: Some("name eq 'a'".to_string()),
            if_match: Some("*".to_string()),
        };

        let request = client
            .new_request(RequestOptions {
                content_type: CONTENT_TYPE_JSON,
                expected_status_codes: &[StatusCode::OK],
                http_method: Method::GET,
                path: "/subscriptions/sub/resourceGroups/rg".to_string(),
                options: &options,
            })
            .unwrap();

        assert_eq!(request.url.path(), "/subscriptions/sub/resourceGroups/rg");
        let query: Vec<(String, String)> = request.url.query_pairs().into_owned().collect();
        assert_eq!(
            query,
            vec![
                ("api-version".to_string(), "2023-01-01".to_string()),
                ("$filter".to_string(), "name eq 'a'".to_string()),
            ]
        );
        assert_eq!(request.headers.get("if-match").unwrap(), "*");
        assert_eq!(request.headers.get(CONTENT_TYPE).unwrap(), CONTENT_TYPE_JSON);
    }

    #[tokio::test]
    async fn test_endpoint_path_prefix_is_kept() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/arm/subscriptions/sub")
                .query_param("api-version", "2023-01-01");
            then.status(200).json_body(serde_json::json!({}));
        });

        for endpoint in [server.url("/arm"), server.url("/arm/")] {
            let client = Client::new(&endpoint)
                .unwrap()
                .with_api_version("2023-01-01")
                .with_retry(0, Duration::from_millis(1));
            let request = client
                .new_request(RequestOptions {
                    content_type: CONTENT_TYPE_JSON,
                    expected_status_codes: &[StatusCode::OK],
                    http_method: Method::GET,
                    path: "/subscriptions/sub".to_string(),
                    options: &NoOptions,
                })
                .unwrap();
            assert_eq!(request.url.path(), "/arm/subscriptions/sub");
            client.execute(request, "subscriptions#Get").await.unwrap();
        }

        mock.assert_hits(2);
    }

    #[tokio::test]
    async fn test_execute_sends_token_and_user_agent() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/subscriptions/sub")
                .query_param("api-version", "2023-01-01")
                .header("authorization", "Bearer secret-token")
                .header("user-agent", "armkit-tests");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"subscriptionId": "sub"}));
        });

        let client = test_client(&server)
            .with_authorizer(Arc::new(StaticToken("secret-token")))
            .with_user_agent("armkit-tests");
        let request = client
            .new_request(RequestOptions {
                content_type: CONTENT_TYPE_JSON,
                expected_status_codes: &[StatusCode::OK],
                http_method: Method::GET,
                path: "/subscriptions/sub".to_string(),
                options: &NoOptions,
            })
            .unwrap();

        let response = client.execute(request, "test#Get").await.unwrap();

        api_mock.assert();
        let body: serde_json::Value = response.unmarshal().unwrap();
        assert_eq!(body["subscriptionId"], "sub");
    }

    #[tokio::test]
    async fn test_unexpected_status_uses_error_envelope() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404).json_body(serde_json::json!({
                "error": {"code": "ResourceNotFound", "message": "The resource was not found."}
            }));
        });

        let client = test_client(&server);
        let request = client
            .new_request(RequestOptions {
                content_type: CONTENT_TYPE_JSON,
                expected_status_codes: &[StatusCode::OK],
                http_method: Method::GET,
                path: "/missing".to_string(),
                options: &NoOptions,
            })
            .unwrap();

        let err = client.execute(request, "widgets.WidgetsClient#Get").await.unwrap_err();

        assert!(err.is_not_found());
        match err {
            ArmError::UnexpectedStatus {
                operation,
                code,
                message,
                ..
            } => {
                assert_eq!(operation, "widgets.WidgetsClient#Get");
                assert_eq!(code.as_deref(), Some("ResourceNotFound"));
                assert_eq!(message, "The resource was not found.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unexpected_status_with_plain_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/thing");
            then.status(409).body("conflict happened");
        });

        let client = test_client(&server);
        let request = client
            .new_request(RequestOptions {
                content_type: CONTENT_TYPE_JSON,
                expected_status_codes: &[StatusCode::OK, StatusCode::NO_CONTENT],
                http_method: Method::DELETE,
                path: "/thing".to_string(),
                options: &NoOptions,
            })
            .unwrap();

        let err = client.execute(request, "op").await.unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert!(err.to_string().contains("conflict happened"));
    }

    #[tokio::test]
    async fn test_retries_transient_statuses() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/busy");
            then.status(503);
        });

        let client = test_client(&server);
        let request = client
            .new_request(RequestOptions {
                content_type: CONTENT_TYPE_JSON,
                expected_status_codes: &[StatusCode::OK],
                http_method: Method::GET,
                path: "/busy".to_string(),
                options: &NoOptions,
            })
            .unwrap();

        let err = client.execute(request, "op").await.unwrap_err();

        // first attempt plus two retries
        api_mock.assert_hits(3);
        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    async fn test_client_errors_are_not_retried() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/bad");
            then.status(400);
        });

        let client = test_client(&server);
        let request = client
            .new_request(RequestOptions {
                content_type: CONTENT_TYPE_JSON,
                expected_status_codes: &[StatusCode::OK],
                http_method: Method::GET,
                path: "/bad".to_string(),
                options: &NoOptions,
            })
            .unwrap();

        let err = client.execute(request, "op").await.unwrap_err();
        api_mock.assert_hits(1);
        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("Bad Request"));
    }

    #[test]
    fn test_unmarshal_optional_empty_body() {
        let response = Response {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Vec::new(),
        };
        let model: Option<serde_json::Value> = response.unmarshal_optional().unwrap();
        assert!(model.is_none());
    }
}
