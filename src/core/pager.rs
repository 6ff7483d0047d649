use crate::core::client::{Client, Request};
use crate::domain::model::ListResponse;
use crate::utils::error::{ArmError, Result};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

/// One page of a list operation.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    #[serde(rename = "nextLink", default)]
    pub next_link: Option<String>,
}

/// Filters the results of the `*_complete_matching_predicate` list operations.
pub trait Predicate<T> {
    fn matches(&self, item: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, item: &T) -> bool {
        self(item)
    }
}

impl Client {
    /// Executes a list request and follows `nextLink` until the last page.
    pub async fn execute_paged<T: DeserializeOwned>(
        &self,
        request: Request,
        operation: &str,
    ) -> Result<ListResponse<T>> {
        let expected = request.expected_status_codes.clone();
        let response = self.execute(request, operation).await?;
        let status = response.status;

        let mut page: Page<T> = response.unmarshal()?;
        let mut items = std::mem::take(&mut page.value);
        let mut pages = 1;

        while let Some(next_link) = page.next_link.take().filter(|link| !link.is_empty()) {
            let url = self.resolve_next_link(&next_link)?;
            tracing::debug!("{}: fetching page {} from {}", operation, pages + 1, url);

            let request = self.new_request_for_url(Method::GET, url, &expected);
            page = self.execute(request, operation).await?.unmarshal()?;
            items.append(&mut page.value);
            pages += 1;
        }

        tracing::debug!("{}: {} items across {} pages", operation, items.len(), pages);
        Ok(ListResponse { status, items })
    }

    fn resolve_next_link(&self, next_link: &str) -> Result<Url> {
        match Url::parse(next_link) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(self.endpoint().join(next_link)?),
            Err(e) => Err(ArmError::UrlError(e)),
        }
    }
}

/// Applies `predicate` to the items of a completed list.
pub fn filter_items<T>(items: Vec<T>, predicate: &impl Predicate<T>) -> Vec<T> {
    items.into_iter().filter(|item| predicate.matches(item)).collect()
}

pub(crate) const LIST_EXPECTED_STATUS: &[StatusCode] = &[StatusCode::OK];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::{NoOptions, RequestOptions, CONTENT_TYPE_JSON};
    use httpmock::prelude::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        name: String,
    }

    #[tokio::test]
    async fn test_follows_next_links() {
        let server = MockServer::start();
        let first = server.mock(|when, then| {
            when.method(GET)
                .path("/items")
                .query_param("api-version", "2020-01-01");
            then.status(200).json_body(serde_json::json!({
                "value": [{"name": "a"}, {"name": "b"}],
                "nextLink": server.url("/items/page2?api-version=2020-01-01&$skiptoken=x")
            }));
        });
        let second = server.mock(|when, then| {
            when.method(GET)
                .path("/items/page2")
                .query_param("$skiptoken", "x");
            then.status(200).json_body(serde_json::json!({
                "value": [{"name": "c"}],
                "nextLink": ""
            }));
        });

        let client = Client::new(&server.base_url())
            .unwrap()
            .with_api_version("2020-01-01");
        let request = client
            .new_request(RequestOptions {
                content_type: CONTENT_TYPE_JSON,
                expected_status_codes: LIST_EXPECTED_STATUS,
                http_method: Method::GET,
                path: "/items".to_string(),
                options: &NoOptions,
            })
            .unwrap();

        let result: ListResponse<Item> = client.execute_paged(request, "items#List").await.unwrap();

        first.assert();
        second.assert();
        let names: Vec<&str> = result.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_page_without_value() {
        let page: Page<Item> = serde_json::from_str("{}").unwrap();
        assert!(page.value.is_empty());
        assert!(page.next_link.is_none());
    }

    #[test]
    fn test_filter_items_with_closure() {
        let items = vec![
            Item {
                name: "keep".to_string(),
            },
            Item {
                name: "drop".to_string(),
            },
        ];
        let kept = filter_items(items, &|item: &Item| item.name == "keep");
        assert_eq!(kept.len(), 1);
    }
}
