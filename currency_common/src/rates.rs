//! Exchange-rate and currency-name tables.
//!
//! Both tables are populated once per successful fetch and then frozen into
//! a [`Snapshot`]. Command handlers only ever see a shared, immutable
//! snapshot; an update builds a new one and swaps it in wholesale.
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::ConverterError;
use crate::result::Result;

/// Rates of every known currency relative to a single pivot currency.
///
/// A rate is the number of pivot units per one unit of the currency, so the
/// pivot itself always maps to exactly `1.0`. Codes iterate in lexicographic
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    pivot: String,
    rates: BTreeMap<String, f64>,
}

impl RateTable {
    /// Creates a table that only knows the pivot currency.
    pub fn new(pivot: &str) -> Self {
        let pivot = pivot.to_uppercase();
        let mut rates = BTreeMap::new();
        rates.insert(pivot.clone(), 1.0);
        Self { pivot, rates }
    }

    /// Inserts or replaces the rate of `code`.
    ///
    /// Rejects non-finite and non-positive rates, and any attempt to move the
    /// pivot away from `1.0`.
    pub fn insert(&mut self, code: &str, rate: f64) -> Result<()> {
        let code = code.to_uppercase();
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ConverterError::Decode(format!(
                "Invalid rate {} for currency {}",
                rate, code
            )));
        }
        if code == self.pivot && rate != 1.0 {
            return Err(ConverterError::Decode(format!(
                "Pivot currency {} must have rate 1, got {}",
                code, rate
            )));
        }
        self.rates.insert(code, rate);
        Ok(())
    }

    /// Code of the pivot currency.
    pub fn pivot(&self) -> &str {
        &self.pivot
    }

    /// Rate of `code`, if the currency is known.
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// True if `code` is a known currency.
    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    /// Known codes in lexicographic order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    /// Number of known currencies, pivot included.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Always false: the pivot is present in every table.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Localized currency names keyed by language code, then by currency code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameTable {
    languages: BTreeMap<String, BTreeMap<String, String>>,
}

impl NameTable {
    /// Creates a table with no languages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every name registered for `language`.
    pub fn set_language(&mut self, language: &str, names: BTreeMap<String, String>) {
        self.languages.insert(language.to_uppercase(), names);
    }

    /// A language is known iff it has at least one entry.
    pub fn has_language(&self, language: &str) -> bool {
        self.languages
            .get(language)
            .map(|names| !names.is_empty())
            .unwrap_or(false)
    }

    /// Display name of `code` in `language`.
    pub fn name(&self, language: &str, code: &str) -> Option<&str> {
        self.languages
            .get(language)
            .and_then(|names| names.get(code))
            .map(String::as_str)
    }
}

/// Immutable view of the data one fetch cycle produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Rates of every known currency.
    pub rates: RateTable,
    /// Localized currency names.
    pub names: NameTable,
    /// Publication date of the rates, when the source reports one.
    pub published: Option<NaiveDate>,
}

impl Snapshot {
    /// Bundles the tables of one fetch cycle.
    pub fn new(rates: RateTable, names: NameTable, published: Option<NaiveDate>) -> Self {
        Self {
            rates,
            names,
            published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivot_is_always_present_with_rate_one() {
        let table = RateTable::new("pln");
        assert_eq!(table.pivot(), "PLN");
        assert_eq!(table.rate("PLN"), Some(1.0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn rejects_non_positive_rates() {
        let mut table = RateTable::new("PLN");
        assert!(table.insert("USD", 0.0).is_err());
        assert!(table.insert("USD", -4.0).is_err());
        assert!(table.insert("USD", f64::NAN).is_err());
        assert!(table.insert("PLN", 2.0).is_err());
        assert!(!table.contains("USD"));
    }

    #[test]
    fn codes_iterate_lexicographically() {
        let mut table = RateTable::new("PLN");
        table.insert("USD", 4.0).unwrap();
        table.insert("EUR", 4.3).unwrap();
        table.insert("CHF", 4.5).unwrap();
        let codes: Vec<&str> = table.codes().collect();
        assert_eq!(codes, vec!["CHF", "EUR", "PLN", "USD"]);
    }

    #[test]
    fn empty_language_is_not_known() {
        let mut names = NameTable::new();
        names.set_language("en", BTreeMap::new());
        assert!(!names.has_language("EN"));

        let mut en = BTreeMap::new();
        en.insert("USD".to_string(), "US Dollar".to_string());
        names.set_language("en", en);
        assert!(names.has_language("EN"));
        assert_eq!(names.name("EN", "USD"), Some("US Dollar"));
        assert_eq!(names.name("EN", "EUR"), None);
    }
}
