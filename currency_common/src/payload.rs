//! Decoding of the remote payloads into rate and name tables.
//!
//! The rate payload follows the NBP table format: a JSON array whose first
//! element carries the publication date and one `{currency, code, mid}`
//! record per currency. Name payloads are flat `code -> name` objects.
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ConverterError;
use crate::rates::RateTable;
use crate::result::Result;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RateTablePayload {
    effective_date: NaiveDate,
    rates: Vec<RatePayload>,
}

#[derive(Debug, Deserialize)]
struct RatePayload {
    currency: String,
    code: String,
    mid: f64,
}

/// Everything a rate payload yields.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRates {
    /// Rates, pivot included.
    pub rates: RateTable,
    /// Publication date of the table.
    pub published: NaiveDate,
    /// Names bundled with the rates, in the language of the rate source.
    pub names: BTreeMap<String, String>,
}

/// Decodes a rate payload. `pivot` is added with rate 1.
pub fn decode_rates(raw: &str, pivot: &str) -> Result<DecodedRates> {
    let tables: Vec<RateTablePayload> =
        serde_json::from_str(raw).map_err(|e| ConverterError::Decode(e.to_string()))?;
    let table = tables
        .into_iter()
        .next()
        .ok_or_else(|| ConverterError::Decode("empty rate table list".to_string()))?;

    let mut rates = RateTable::new(pivot);
    let mut names = BTreeMap::new();
    for rate in table.rates {
        let code = rate.code.trim().to_uppercase();
        rates.insert(&code, rate.mid)?;
        names.insert(code, capitalize_words(&rate.currency));
    }

    Ok(DecodedRates {
        rates,
        published: table.effective_date,
        names,
    })
}

/// Decodes a `code -> name` object.
pub fn decode_names(raw: &str) -> Result<BTreeMap<String, String>> {
    let names: BTreeMap<String, String> =
        serde_json::from_str(raw).map_err(|e| ConverterError::Decode(e.to_string()))?;
    Ok(names
        .into_iter()
        .map(|(code, name)| (code.trim().to_uppercase(), capitalize_words(&name)))
        .collect())
}

/// Upper-cases the first letter of every whitespace-separated word.
pub fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut done = false;
            word.chars()
                .flat_map(|c| {
                    if !done && c.is_alphabetic() {
                        done = true;
                        c.to_uppercase().collect::<Vec<char>>()
                    } else {
                        vec![c]
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const NBP_SAMPLE: &str = r#"[{
        "table": "A",
        "no": "203/A/NBP/2026",
        "effectiveDate": "2026-10-16",
        "rates": [
            {"currency": "dolar amerykański", "code": "USD", "mid": 3.6512},
            {"currency": "euro", "code": "EUR", "mid": 4.2431},
            {"currency": "bat (Tajlandia)", "code": "THB", "mid": 0.1124}
        ]
    }]"#;

    #[test]
    fn decodes_nbp_table() {
        let decoded = decode_rates(NBP_SAMPLE, "PLN").unwrap();
        assert_eq!(decoded.published, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(decoded.rates.rate("PLN"), Some(1.0));
        assert_eq!(decoded.rates.rate("USD"), Some(3.6512));
        assert_eq!(decoded.rates.len(), 4);
        assert_eq!(decoded.names.get("USD").map(String::as_str), Some("Dolar Amerykański"));
        assert_eq!(decoded.names.get("THB").map(String::as_str), Some("Bat (Tajlandia)"));
    }

    #[test]
    fn rejects_broken_rate_payloads() {
        assert!(decode_rates("not json", "PLN").is_err());
        assert!(decode_rates("[]", "PLN").is_err());
        let negative = r#"[{"effectiveDate": "2026-10-16", "rates": [{"currency": "x", "code": "XXX", "mid": -1.0}]}]"#;
        assert!(matches!(decode_rates(negative, "PLN"), Err(ConverterError::Decode(_))));
    }

    #[test]
    fn decodes_name_object() {
        let names = decode_names(r#"{"usd": "United States dollar", "EUR": "Euro"}"#).unwrap();
        assert_eq!(names.get("USD").map(String::as_str), Some("United States Dollar"));
        assert_eq!(names.get("EUR").map(String::as_str), Some("Euro"));
        assert!(decode_names("[1, 2]").is_err());
    }

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(capitalize_words("  funt  szterling "), "Funt Szterling");
        assert_eq!(capitalize_words("SDR (MFW)"), "SDR (MFW)");
        assert_eq!(capitalize_words("(specjalne) prawa"), "(Specjalne) Prawa");
    }
}
