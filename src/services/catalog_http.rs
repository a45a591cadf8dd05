//! Catalog HTTP service - fetches the catalog document from a URL.
//!
//! The one network call this tool makes. A single blocking GET per load; no
//! retries.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::{AppError, ToolCatalog};
use crate::ports::CatalogSource;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Catalog fetched from a remote `tools.json`.
#[derive(Debug, Clone)]
pub struct CatalogUrl {
    url: Url,
}

impl CatalogUrl {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    fn fetch_error(&self, details: impl Into<String>) -> AppError {
        AppError::CatalogFetch { url: self.url.to_string(), details: details.into() }
    }
}

impl CatalogSource for CatalogUrl {
    fn load(&self) -> Result<ToolCatalog, AppError> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| self.fetch_error(format!("failed to create HTTP client: {e}")))?;

        let response = client
            .get(self.url.clone())
            .send()
            .map_err(|e| self.fetch_error(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.fetch_error(format!("server returned {status}")));
        }

        let body =
            response.text().map_err(|e| self.fetch_error(format!("failed to read body: {e}")))?;
        let catalog: ToolCatalog = serde_json::from_str(&body)
            .map_err(|e| self.fetch_error(format!("invalid catalog document: {e}")))?;
        Ok(catalog)
    }
}
