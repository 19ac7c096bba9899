use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::errors::{ClientError, ErrorHandler, ErrorResponse};
use crate::rest::rate_limiter::RateLimiter;

const USER_AGENT: &str = concat!("catalog-client/", env!("CARGO_PKG_VERSION"));

/// Rate-limited HTTP transport for the catalog REST API
///
/// Every non-2xx response is parsed as an [`ErrorResponse`] and handed to the
/// caller-supplied [`ErrorHandler`], whose translation becomes the returned
/// error. Bodies that don't parse are wrapped in a synthesized REST error so
/// the handler chain still decides the outcome.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    rate_limiter: RateLimiter,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()?;

        info!(
            "Initialized catalog HTTP client for {} with rate limit: {} req/sec",
            config.uri, config.rate_limit_per_second
        );

        Ok(Self {
            client,
            base_uri: config.uri.trim_end_matches('/').to_string(),
            rate_limiter: RateLimiter::new(config.rate_limit_per_second),
        })
    }

    /// Base URI requests are resolved against, without a trailing slash
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        error_handler: &dyn ErrorHandler,
    ) -> Result<T, ClientError> {
        self.execute(Method::GET, path, None::<&()>, error_handler)
            .await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
        error_handler: &dyn ErrorHandler,
    ) -> Result<T, ClientError> {
        self.execute(Method::POST, path, Some(body), error_handler)
            .await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
        error_handler: &dyn ErrorHandler,
    ) -> Result<T, ClientError> {
        self.execute(Method::PUT, path, Some(body), error_handler)
            .await
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
        error_handler: &dyn ErrorHandler,
    ) -> Result<T, ClientError> {
        self.execute(Method::PATCH, path, Some(body), error_handler)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        error_handler: &dyn ErrorHandler,
    ) -> Result<T, ClientError> {
        self.execute(Method::DELETE, path, None::<&()>, error_handler)
            .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
        error_handler: &dyn ErrorHandler,
    ) -> Result<T, ClientError> {
        let url = format!("{}/{}", self.base_uri, path.trim_start_matches('/'));
        debug!("{} {}", method, url);

        // Wait for rate limit first
        self.rate_limiter.acquire().await;

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let error_response = Self::parse_error_body(status, &text);
        warn!(
            "Catalog request to {} failed: {} ({})",
            url,
            status,
            error_response.code()
        );

        Err(error_handler.handle(&error_response))
    }

    fn parse_error_body(status: StatusCode, text: &str) -> ErrorResponse {
        serde_json::from_str(text).unwrap_or_else(|_| {
            ErrorResponse::rest_error(format!(
                "Error operating on catalog service ({}): {}",
                status, text
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use nonzero_ext::nonzero;

    #[test]
    fn test_client_creation_strips_trailing_slash() {
        let config = ClientConfig::new("http://localhost:8090/");
        let client = HttpClient::new(&config).unwrap();
        assert_eq!(client.base_uri(), "http://localhost:8090");
    }

    #[test]
    fn test_error_body_parsing() {
        let body = r#"{"code": 1003, "type": "NoSuchMetalakeException", "message": "gone"}"#;
        let response = HttpClient::parse_error_body(StatusCode::NOT_FOUND, body);
        assert_eq!(response.code(), ErrorCode::NotFound);
        assert_eq!(response.message(), "gone");
    }

    #[test]
    fn test_unparseable_error_body_becomes_rest_error() {
        let response = HttpClient::parse_error_body(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(response.code(), ErrorCode::RestError);
        assert!(response.message().contains("502"));
        assert!(response.message().contains("<html>oops</html>"));
    }

    #[test]
    fn test_rate_limiter_initialization() {
        let config = ClientConfig::new("http://localhost:8090").with_rate_limit(nonzero!(7u32));
        let client = HttpClient::new(&config).unwrap();
        assert_eq!(client.rate_limiter.requests_per_second(), 7);
    }
}
