//! HTTP retrieval of the rate and name payloads.
use std::collections::BTreeMap;

use currency_common::{Config, ConverterError, DataSource, Result};
use log::{debug, info};
use reqwest::blocking::Client;

/// [`DataSource`] backed by blocking HTTP GET requests with a bounded timeout.
pub struct HttpSource {
    client: Client,
    rates_url: String,
    name_sources: BTreeMap<String, String>,
}

impl HttpSource {
    /// Creates a source for the URLs in `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("currency-converter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConverterError::Network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            rates_url: config.rates_url.clone(),
            name_sources: config.name_sources.clone(),
        })
    }

    fn get(&self, url: &str) -> Result<String> {
        info!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    ConverterError::Network(format!("timed out fetching {}", url))
                } else {
                    ConverterError::Network(format!("failed to fetch {}: {}", url, e))
                }
            })?;

        let status = response.status();
        debug!("{} -> {}", url, status);
        if !status.is_success() {
            return Err(ConverterError::Network(format!("HTTP {} from {}", status, url)));
        }

        response
            .text()
            .map_err(|e| ConverterError::Network(format!("failed to read body of {}: {}", url, e)))
    }
}

impl DataSource for HttpSource {
    fn fetch_rates(&self) -> Result<String> {
        self.get(&self.rates_url)
    }

    fn fetch_names(&self, language: &str) -> Result<String> {
        let url = self.name_sources.get(language).ok_or_else(|| {
            ConverterError::UnknownLanguageCodes(vec![language.to_string()])
        })?;
        self.get(url)
    }
}
