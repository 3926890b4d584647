//! Conversion arithmetic through the pivot currency, with fixed-point rounding.
use std::fmt;

use crate::conversion::ConversionRequest;
use crate::error::ConverterError;
use crate::rates::RateTable;
use crate::result::Result;

/// Number of decimal places every displayed amount is rounded to.
pub const DECIMAL_PLACES: usize = 4;

/// Binary representation noise removed from the scaled value before rounding.
const SNAP: f64 = 1e6;

/// Rounds half-up at [`DECIMAL_PLACES`] on the scaled value.
///
/// The scaled value is first snapped to [`SNAP`] fractional steps, so decimal
/// halves such as `0.00015` that land just below `.5` in binary still round up.
pub fn round(value: f64) -> f64 {
    let scale = 10f64.powi(DECIMAL_PLACES as i32);
    let scaled = (value * scale * SNAP).round() / SNAP;
    (scaled + 0.5).floor() / scale
}

/// Rounds and renders `value` with exactly [`DECIMAL_PLACES`] decimals.
pub fn format_amount(value: f64) -> String {
    format!("{:.*}", DECIMAL_PLACES, round(value))
}

/// Converts `amount` of `from` into `to`, unrounded.
pub fn convert(amount: f64, from: &str, to: &str, rates: &RateTable) -> Result<f64> {
    let unknown: Vec<String> = [from, to]
        .iter()
        .filter(|code| !rates.contains(code))
        .map(|code| code.to_string())
        .collect();
    match (rates.rate(from), rates.rate(to)) {
        (Some(from_rate), Some(to_rate)) => Ok(amount * from_rate / to_rate),
        _ => Err(ConverterError::UnknownCurrencyCodes(unknown)),
    }
}

/// Outcome of a conversion command.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Source amounts in order of first appearance.
    pub terms: Vec<(String, f64)>,
    /// Currency of the total.
    pub target: String,
    /// Rounded sum in the target currency.
    pub total: f64,
    /// Render the total alone.
    pub result_only: bool,
}

impl fmt::Display for Conversion {
    /// Either `total` alone, or `a1 C1 + a2 C2 = total T`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.result_only {
            return write!(f, "{}", format_amount(self.total));
        }
        let terms: Vec<String> = self
            .terms
            .iter()
            .map(|(code, amount)| format!("{} {}", format_amount(*amount), code))
            .collect();
        write!(
            f,
            "{} = {} {}",
            terms.join(" + "),
            format_amount(self.total),
            self.target
        )
    }
}

/// Sums every requested amount in the target currency.
pub fn evaluate(request: &ConversionRequest, rates: &RateTable) -> Result<Conversion> {
    let mut total = 0.0;
    for (code, amount) in request.amounts() {
        total += convert(*amount, code, &request.target, rates)?;
    }
    Ok(Conversion {
        terms: request.amounts().to_vec(),
        target: request.target.clone(),
        total: round(total),
        result_only: request.result_only,
    })
}
