/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::http::query::QueryParams;
use crate::http::signature::{NonceGenerator, RequestSigner};
use crate::http::{BittrexError, Result};
use crate::types::ApiResponse;

/// Base URL for the Bittrex v1.1 REST API
const API_URL: &str = "https://bittrex.com/api/v1.1/";

/// Header carrying the HMAC-SHA512 request signature
const APISIGN_HEADER: &str = "apisign";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Credentials for signed requests
#[derive(Clone)]
pub struct Credentials {
    pub key: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

// Credentials must never leak through logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &"<redacted>")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the Bittrex v1.1 API
#[derive(Debug)]
pub struct BittrexClient {
    http_client: Client,
    base_url: Url,
    credentials: Option<Credentials>,
    nonce: NonceGenerator,
}

impl BittrexClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, API_URL)
    }

    /// Create a new client against an explicit base URL.
    ///
    /// Used by tests to point the client at a mock server.
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        Ok(Self {
            http_client,
            base_url: Url::parse(&base)?,
            credentials: None,
            nonce: NonceGenerator::new(),
        })
    }

    /// Set credentials for signed requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Build the absolute URL for an endpoint path plus query string
    fn request_url(&self, path: &str, params: &QueryParams) -> Result<Url> {
        let path_and_query = if params.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, params.encode())
        };
        Ok(self.base_url.join(&path_and_query)?)
    }

    /// Issue an unauthenticated GET against a `public/` endpoint
    pub(crate) async fn public_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: QueryParams,
    ) -> Result<ApiResponse<T>> {
        let path = format!("public/{endpoint}");
        let url = self.request_url(&path, &params)?;
        debug!(endpoint = %path, "sending public request");
        self.send_json(self.http_client.get(url)).await
    }

    /// Issue a signed GET against an `account/` endpoint
    pub(crate) async fn account_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: QueryParams,
    ) -> Result<ApiResponse<T>> {
        self.private_request(format!("account/{endpoint}"), params)
            .await
    }

    /// Issue a signed GET against a `market/` endpoint
    pub(crate) async fn market_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: QueryParams,
    ) -> Result<ApiResponse<T>> {
        self.private_request(format!("market/{endpoint}"), params)
            .await
    }

    /// Sign and send a private request.
    ///
    /// `apikey` and `nonce` are appended after the endpoint parameters,
    /// then the absolute URL is signed into the `apisign` header.
    async fn private_request<T: DeserializeOwned>(
        &self,
        path: String,
        mut params: QueryParams,
    ) -> Result<ApiResponse<T>> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(BittrexError::MissingCredentials)?;

        params.push("apikey", &credentials.key);
        params.push("nonce", self.nonce.next());

        let url = self.request_url(&path, &params)?;
        let signature = RequestSigner::new(&credentials.secret).sign(url.as_str());
        debug!(endpoint = %path, "sending signed request");

        let builder = self
            .http_client
            .get(url)
            .header(APISIGN_HEADER, signature);
        self.send_json(builder).await
    }

    /// Send a request and decode the JSON body.
    ///
    /// Error statuses surface through the transport error path; the body
    /// is returned verbatim as the decoded envelope, `success`/`message`
    /// included.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = builder.send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
