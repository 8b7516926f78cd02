use crate::core::errors::ExchangeError;
use async_trait::async_trait;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument, trace, warn};

/// Content type of every signed request body
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// REST transport trait
///
/// Implementations deliver a request and hand back the raw response body. The
/// HTTP status line is not interpreted: the exchange reports success or failure
/// inside the JSON body, so only transport-level failures become errors.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Make an unauthenticated GET request
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path
    /// * `query_params` - Query parameters as key-value pairs
    async fn get(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
    ) -> Result<Vec<u8>, ExchangeError>;

    /// POST a form-encoded body with the given authentication headers
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path
    /// * `body` - Encoded body, sent byte-for-byte as it was signed
    /// * `headers` - Extra headers, typically `Key` and `Sign`
    async fn post_form(
        &self,
        endpoint: &str,
        body: Vec<u8>,
        headers: &HashMap<String, String>,
    ) -> Result<Vec<u8>, ExchangeError>;
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Exchange name for logging and tracing
    pub exchange_name: String,
    /// Request timeout in seconds, none by default
    pub timeout_seconds: Option<u64>,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    /// Create a new configuration
    ///
    /// # Arguments
    /// * `base_url` - Base URL for the API
    /// * `exchange_name` - Name of the exchange
    pub fn new(base_url: String, exchange_name: String) -> Self {
        Self {
            base_url,
            exchange_name,
            timeout_seconds: None,
            user_agent: format!("btce-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = Some(timeout_seconds);
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
}

impl RestClientBuilder {
    pub fn new(config: RestClientConfig) -> Self {
        Self { config }
    }

    /// Build the REST client
    pub fn build(self) -> Result<ReqwestRest, ExchangeError> {
        let mut builder = Client::builder().user_agent(&self.config.user_agent);
        if let Some(timeout) = self.config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder.build().map_err(|e| {
            ExchangeError::InvalidParameters(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(ReqwestRest {
            client,
            config: self.config,
        })
    }
}

/// Implementation of `RestClient` using reqwest
#[derive(Clone, Debug)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
}

impl ReqwestRest {
    /// Create a new `ReqwestRest` instance with default settings
    pub fn new(base_url: String, exchange_name: String) -> Result<Self, ExchangeError> {
        RestClientBuilder::new(RestClientConfig::new(base_url, exchange_name)).build()
    }

    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    /// Build the full URL for an endpoint
    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint)
    }

    /// Read the raw body, whatever the status
    #[instrument(skip(self, response), fields(exchange = %self.config.exchange_name, status = %response.status()))]
    async fn read_body(&self, response: Response) -> Result<Vec<u8>, ExchangeError> {
        let status = response.status();
        if status.is_success() {
            debug!("HTTP {}", status);
        } else {
            warn!("HTTP {}, passing body to decoder", status);
        }

        let body = response.bytes().await.map_err(|e| {
            ExchangeError::NetworkError(format!("Failed to read response body: {}", e))
        })?;

        trace!("Response body: {}", String::from_utf8_lossy(&body));
        Ok(body.to_vec())
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    #[instrument(skip(self, query_params), fields(exchange = %self.config.exchange_name, endpoint = %endpoint, param_count = query_params.len()))]
    async fn get(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
    ) -> Result<Vec<u8>, ExchangeError> {
        let mut request = self.client.get(self.build_url(endpoint));
        if !query_params.is_empty() {
            request = request.query(query_params);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ExchangeError::NetworkError(format!("Request failed: {}", e)))?;

        self.read_body(response).await
    }

    #[instrument(skip(self, body, headers), fields(exchange = %self.config.exchange_name, endpoint = %endpoint, body_len = body.len()))]
    async fn post_form(
        &self,
        endpoint: &str,
        body: Vec<u8>,
        headers: &HashMap<String, String>,
    ) -> Result<Vec<u8>, ExchangeError> {
        let mut request = self
            .client
            .post(self.build_url(endpoint))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(CONTENT_LENGTH, body.len());

        for (key, value) in headers {
            request = request.header(key.as_str(), value.as_str());
        }

        let response = request
            .body(body)
            .send()
            .await
            .map_err(|e| ExchangeError::NetworkError(format!("Request failed: {}", e)))?;

        self.read_body(response).await
    }
}
