/*
[INPUT]:  Access token, client configuration, optional base URL override
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::marker::PhantomData;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::revision::{Revision, V3};
use crate::http::status::StatusTable;
use crate::http::{DiscoinError, Result};
use crate::types::ApiVersion;

/// Environment variable holding the access token
pub const TOKEN_ENV: &str = "DISCOIN_TOKEN";
/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "DISCOIN_BASE_URL";

/// HTTP client configuration
///
/// Timeouts are unset by default, leaving reqwest's defaults in place.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: None,
            user_agent: concat!("discoin-adapter/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Main HTTP client for the Discoin API
///
/// `R` selects the API revision and with it the available operations.
#[derive(Debug, Clone)]
pub struct DiscoinClient<R: Revision = V3> {
    http_client: Client,
    base_url: Url,
    authorization: HeaderValue,
    revision: PhantomData<R>,
}

impl<R: Revision> DiscoinClient<R> {
    /// Create a new client with default configuration
    pub fn new(token: &str) -> Result<Self> {
        Self::with_config(token, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(token: &str, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(token, config, R::VERSION.base_url())
    }

    /// Create a new client against a custom base URL
    pub fn with_config_and_base_url(
        token: &str,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder.build()?;

        let mut authorization = HeaderValue::from_str(&R::VERSION.authorization(token))
            .map_err(|e| DiscoinError::Config(format!("Token is not a valid header value: {e}")))?;
        authorization.set_sensitive(true);

        Ok(Self {
            http_client,
            base_url: parse_base_url(base_url)?,
            authorization,
            revision: PhantomData,
        })
    }

    /// Create a client from `DISCOIN_TOKEN` and optional `DISCOIN_BASE_URL`
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV)
            .map_err(|_| DiscoinError::Config(format!("{TOKEN_ENV} is not set")))?;

        match std::env::var(BASE_URL_ENV) {
            Ok(base_url) => {
                Self::with_config_and_base_url(&token, ClientConfig::default(), &base_url)
            }
            Err(_) => Self::with_config(&token, ClientConfig::default()),
        }
    }

    /// API revision this client speaks
    pub fn version(&self) -> ApiVersion {
        R::VERSION
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL from path segments, percent-encoding each one
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DiscoinError::Config(format!("Base URL {} cannot hold a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build an authorized request builder
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(version = %R::VERSION, %method, path = url.path(), "discoin request");
        self.http_client
            .request(method, url)
            .header(AUTHORIZATION, self.authorization.clone())
    }

    /// Send a request and return the body of a successful response
    pub(crate) async fn send(&self, builder: RequestBuilder, table: &StatusTable) -> Result<String> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(
            version = %R::VERSION,
            status = status.as_u16(),
            bytes = body.len(),
            "discoin response"
        );

        match table.classify(status, &body) {
            Some(err) => Err(err),
            None => Ok(body),
        }
    }

    /// Send a request and deserialize the body of a successful response
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        table: &StatusTable,
    ) -> Result<T> {
        let body = self.send(builder, table).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = if base_url.ends_with('/') {
        Url::parse(base_url)?
    } else {
        Url::parse(&format!("{base_url}/"))?
    };

    if url.cannot_be_a_base() {
        return Err(DiscoinError::Config(format!(
            "Base URL {base_url} cannot hold a path"
        )));
    }
    Ok(url)
}
