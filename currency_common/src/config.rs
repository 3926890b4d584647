//! Runtime configuration: data sources, languages and timeouts.
//!
//! Every field has a default, so a config file only needs to name what it
//! overrides. Language and currency codes are normalised to upper case.
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::result::Result;

/// NBP table A, mid rates of foreign currencies in PLN.
pub const NBP_RATES_URL: &str = "https://api.nbp.pl/api/exchangerates/tables/a?format=json";
/// English currency names keyed by code.
pub const OPEN_EXCHANGE_NAMES_URL: &str = "https://openexchangerates.org/api/currencies.json";

/// Data sources, languages and other runtime settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Currency every rate is expressed in.
    pub pivot: String,
    /// Endpoint of the rate table.
    pub rates_url: String,
    /// Language of the names shipped inside the rate payload.
    pub rates_names_language: String,
    /// Additional name sources, language code to URL.
    pub name_sources: BTreeMap<String, String>,
    /// Language used by `TABLE ... -N` when none is given.
    pub default_names_language: String,
    /// Timeout of every HTTP request, in seconds.
    pub request_timeout_secs: u64,
    /// Shown by `AUTHOR`.
    pub author: String,
}

impl Default for Config {
    fn default() -> Self {
        let mut name_sources = BTreeMap::new();
        name_sources.insert("EN".to_string(), OPEN_EXCHANGE_NAMES_URL.to_string());
        Self {
            pivot: "PLN".to_string(),
            rates_url: NBP_RATES_URL.to_string(),
            rates_names_language: "PL".to_string(),
            name_sources,
            default_names_language: "EN".to_string(),
            request_timeout_secs: 10,
            author: env!("CARGO_PKG_AUTHORS").to_string(),
        }
    }
}

impl Config {
    /// Reads a JSON config document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let config: Config = serde_json::from_reader(reader)?;
        Ok(config.normalized())
    }

    /// Reads a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Timeout of every HTTP request.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn normalized(mut self) -> Self {
        self.pivot = self.pivot.to_uppercase();
        self.rates_names_language = self.rates_names_language.to_uppercase();
        self.default_names_language = self.default_names_language.to_uppercase();
        self.name_sources = self
            .name_sources
            .into_iter()
            .map(|(lang, url)| (lang.to_uppercase(), url))
            .collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_sources() {
        let config = Config::default();
        assert_eq!(config.pivot, "PLN");
        assert_eq!(config.rates_url, NBP_RATES_URL);
        assert_eq!(config.name_sources.get("EN").map(String::as_str), Some(OPEN_EXCHANGE_NAMES_URL));
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let json = r#"{ "request_timeout_secs": 3, "name_sources": { "de": "http://localhost/de.json" }, "default_names_language": "de" }"#;
        let config = Config::from_reader(json.as_bytes()).unwrap();
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.default_names_language, "DE");
        assert!(config.name_sources.contains_key("DE"));
        assert!(!config.name_sources.contains_key("EN"));
        assert_eq!(config.pivot, "PLN");
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(Config::from_reader("{ not json".as_bytes()).is_err());
    }
}
