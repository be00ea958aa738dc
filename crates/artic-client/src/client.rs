//! Collection API client for fetching artwork pages.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{StatusCode, Url};

use artic_model::{ApiResponse, ArtworkPage, PageNumber, PageSize};

use crate::config::{ClientConfig, DISPLAY_FIELDS};
use crate::error::{ClientError, Result};

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("artic-browser/", env!("CARGO_PKG_VERSION"));

/// Longest error body kept in [`ClientError::Api`].
const MAX_ERROR_BODY: usize = 512;

/// Client for the artworks listing endpoint.
#[derive(Debug, Clone)]
pub struct ArticClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ArticClient {
    /// Creates a client from configuration.
    ///
    /// Fails when the endpoint is not a URL or the user agent is not a valid
    /// header value.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Url::parse(&config.endpoint)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", config.endpoint)))?;

        let user_agent = match &config.user_agent {
            Some(value) => HeaderValue::from_str(value)
                .map_err(|e| ClientError::InvalidHeader(format!("user agent: {e}")))?,
            None => HeaderValue::from_static(USER_AGENT_VALUE),
        };

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, user_agent);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// URL of one page: `<endpoint>?page=<n>&limit=<size>[&fields=...]`.
    pub fn page_url(&self, page: PageNumber, size: PageSize) -> Result<Url> {
        let mut url = Url::parse(&self.config.endpoint)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", self.config.endpoint)))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("page", &page.to_string());
            query.append_pair("limit", &size.to_string());
            if self.config.request_display_fields {
                query.append_pair("fields", &DISPLAY_FIELDS.join(","));
            }
        }
        Ok(url)
    }

    /// Fetches and normalizes one page.
    pub async fn fetch_page(&self, page: PageNumber, size: PageSize) -> Result<ArtworkPage> {
        let url = self.page_url(page, size)?;

        tracing::debug!(%url, "Fetching artworks page");

        let response = self.client.get(url).send().await?;
        let body = Self::handle_response(response).await?;
        let page = parse_page(page, &body)?;

        if page.skipped > 0 {
            tracing::warn!(
                page = %page.number,
                skipped = page.skipped,
                "Dropped artworks without an id"
            );
        }

        Ok(page)
    }

    /// Checks the status and returns the body text.
    async fn handle_response(response: reqwest::Response) -> Result<String> {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS
            || (status == StatusCode::FORBIDDEN
                && response
                    .headers()
                    .get("x-ratelimit-remaining")
                    .is_some_and(|remaining| remaining.to_str().unwrap_or("1") == "0"))
        {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(60);

            return Err(ClientError::RateLimited { retry_after });
        }

        if !status.is_success() {
            let mut message = response.text().await.unwrap_or_default();
            truncate_at_char_boundary(&mut message, MAX_ERROR_BODY);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.text().await?)
    }
}

/// Decodes a response body into a normalized page.
pub fn parse_page(page: PageNumber, body: &str) -> Result<ArtworkPage> {
    let response: ApiResponse = serde_json::from_str(body)?;
    Ok(ArtworkPage::from_response(page, response))
}

fn truncate_at_char_boundary(text: &mut String, max: usize) {
    if text.len() <= max {
        return;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: u32) -> PageNumber {
        PageNumber::new(n).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = ArticClient::new(ClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let config = ClientConfig::default().with_endpoint("not a url");
        let err = ArticClient::new(config).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_page_url_with_fields() {
        let client = ArticClient::new(ClientConfig::default()).unwrap();
        let url = client.page_url(page(3), PageSize::Twelve).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.artic.edu/api/v1/artworks?page=3&limit=12\
             &fields=id%2Ctitle%2Cplace_of_origin%2Cartist_display\
             %2Cinscriptions%2Cdate_start%2Cdate_end"
        );
    }

    #[test]
    fn test_page_url_without_fields() {
        let config = ClientConfig {
            request_display_fields: false,
            ..ClientConfig::default()
        };
        let client = ArticClient::new(config).unwrap();
        let url = client.page_url(page(1), PageSize::Six).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.artic.edu/api/v1/artworks?page=1&limit=6"
        );
    }

    #[test]
    fn test_parse_page_rejects_garbage() {
        let err = parse_page(page(1), "<html>").unwrap_err();
        assert!(matches!(err, ClientError::JsonParse(_)));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let mut text = "ééé".to_string();
        truncate_at_char_boundary(&mut text, 3);
        assert_eq!(text, "é");
    }
}
