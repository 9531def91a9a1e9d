// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::error::{AppError, Result};
use crate::models::HttpConfig;

/// Source of raw page markup.
///
/// Scrapers receive a fetcher instead of owning a client, so tests and
/// callers can substitute their own transport.
pub trait Fetch: Send + Sync {
    /// Fetch `url` and return the response body.
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Create a configured blocking HTTP client.
pub fn create_client(config: &HttpConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(&config.user_agent);
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// Blocking fetcher backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with a client built from the given settings.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        Ok(Self::with_client(create_client(config)?))
    }

    /// Wrap an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::fetch(url, status.as_u16()));
        }
        let body = response.text()?;
        log::debug!("Fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}
