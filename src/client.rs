use std::collections::HashMap;
use tracing::debug;

use crate::config::ClientConfig;
use crate::errors::{ClientError, MetalakeErrorHandler};
use crate::models::{
    BaseResponse, DropResponse, Metalake, MetalakeCreateRequest, MetalakeListResponse,
    MetalakeResponse, MetalakeSetRequest, MetalakeUpdate, MetalakeUpdatesRequest,
};
use crate::rest::HttpClient;

const METALAKES_PATH: &str = "api/metalakes";

/// Client for the metadata-catalog REST service
///
/// Metalake operations route their error path through
/// [`MetalakeErrorHandler`], so callers get resource-specific
/// [`ClientError`] variants for the known error codes and the generic REST
/// translations for everything else.
#[derive(Clone)]
pub struct CatalogClient {
    http: HttpClient,
    metalake_errors: MetalakeErrorHandler,
}

impl CatalogClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            http: HttpClient::new(config)?,
            metalake_errors: MetalakeErrorHandler::new(),
        })
    }

    /// Client with default settings for the given service URI
    pub fn connect(uri: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(&ClientConfig::new(uri))
    }

    /// List all metalakes the caller can see
    pub async fn list_metalakes(&self) -> Result<Vec<Metalake>, ClientError> {
        let response: MetalakeListResponse = self
            .http
            .get(METALAKES_PATH, &self.metalake_errors)
            .await?;
        Self::check_envelope(response.code)?;

        debug!("Listed {} metalakes", response.metalakes.len());
        Ok(response.metalakes)
    }

    /// Load a metalake by name
    pub async fn load_metalake(&self, name: &str) -> Result<Metalake, ClientError> {
        let response: MetalakeResponse = self
            .http
            .get(&Self::metalake_path(name), &self.metalake_errors)
            .await?;
        Self::check_envelope(response.code)?;

        Ok(response.metalake)
    }

    /// Create a metalake
    pub async fn create_metalake(
        &self,
        name: &str,
        comment: Option<&str>,
        properties: HashMap<String, String>,
    ) -> Result<Metalake, ClientError> {
        let request = MetalakeCreateRequest {
            name: name.to_string(),
            comment: comment.map(str::to_string),
            properties,
        };

        let response: MetalakeResponse = self
            .http
            .post(METALAKES_PATH, &request, &self.metalake_errors)
            .await?;
        Self::check_envelope(response.code)?;

        debug!("Created metalake {}", response.metalake.name);
        Ok(response.metalake)
    }

    /// Apply a list of changes to a metalake
    pub async fn alter_metalake(
        &self,
        name: &str,
        updates: Vec<MetalakeUpdate>,
    ) -> Result<Metalake, ClientError> {
        let request = MetalakeUpdatesRequest { updates };

        let response: MetalakeResponse = self
            .http
            .put(&Self::metalake_path(name), &request, &self.metalake_errors)
            .await?;
        Self::check_envelope(response.code)?;

        Ok(response.metalake)
    }

    /// Drop a metalake; returns whether the server actually removed it
    ///
    /// With `force` the server drops the metalake even while it is in use.
    pub async fn drop_metalake(&self, name: &str, force: bool) -> Result<bool, ClientError> {
        let path = format!("{}?force={}", Self::metalake_path(name), force);

        let response: DropResponse = self.http.delete(&path, &self.metalake_errors).await?;
        Self::check_envelope(response.code)?;

        debug!("Dropped metalake {}: {}", name, response.dropped);
        Ok(response.dropped)
    }

    /// Mark a metalake as in use
    pub async fn enable_metalake(&self, name: &str) -> Result<(), ClientError> {
        self.set_metalake_in_use(name, true).await
    }

    /// Mark a metalake as not in use
    pub async fn disable_metalake(&self, name: &str) -> Result<(), ClientError> {
        self.set_metalake_in_use(name, false).await
    }

    async fn set_metalake_in_use(&self, name: &str, in_use: bool) -> Result<(), ClientError> {
        let request = MetalakeSetRequest { in_use };

        let response: BaseResponse = self
            .http
            .patch(&Self::metalake_path(name), &request, &self.metalake_errors)
            .await?;
        Self::check_envelope(response.code)
    }

    fn metalake_path(name: &str) -> String {
        format!("{}/{}", METALAKES_PATH, urlencoding::encode(name))
    }

    fn check_envelope(code: u32) -> Result<(), ClientError> {
        if code == 0 {
            Ok(())
        } else {
            Err(ClientError::UnexpectedResponseCode { code })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metalake_path_encodes_names() {
        assert_eq!(
            CatalogClient::metalake_path("my lake"),
            "api/metalakes/my%20lake"
        );
        assert_eq!(CatalogClient::metalake_path("plain"), "api/metalakes/plain");
    }

    #[test]
    fn test_envelope_check() {
        assert!(CatalogClient::check_envelope(0).is_ok());
        let err = CatalogClient::check_envelope(7).unwrap_err();
        assert!(matches!(
            err,
            ClientError::UnexpectedResponseCode { code: 7 }
        ));
    }

    #[test]
    fn test_connect_builds_client() {
        let client = CatalogClient::connect("http://localhost:8090").unwrap();
        assert_eq!(client.http.base_uri(), "http://localhost:8090");
    }
}
