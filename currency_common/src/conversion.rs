//! Parser of the implicit conversion grammar
//! `(code | amount code)... TO target [-R|--RESULT-ONLY]`.
//!
//! Amounts and codes share one token stream with no lexical markers, so each
//! token left of `TO` is tried as a known currency code first and as a number
//! second. Everything that is neither is reported as an unknown code.
use log::debug;

use crate::command::{Flag, is_to};
use crate::error::ConverterError;
use crate::rates::RateTable;
use crate::result::Result;

const COMMAND: &str = "TO";

/// Amounts to convert, summed per currency in order of first appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    amounts: Vec<(String, f64)>,
    /// Currency the sum is expressed in.
    pub target: String,
    /// Print only the total.
    pub result_only: bool,
}

impl ConversionRequest {
    /// Creates an empty request for `target`.
    pub fn new(target: &str, result_only: bool) -> Self {
        Self {
            amounts: Vec::new(),
            target: target.to_string(),
            result_only,
        }
    }

    /// Adds `amount` to the running total of `code`.
    pub fn add(&mut self, code: &str, amount: f64) {
        match self.amounts.iter_mut().find(|(c, _)| c == code) {
            Some((_, total)) => *total += amount,
            None => self.amounts.push((code.to_string(), amount)),
        }
    }

    /// Per-currency totals in order of first appearance.
    pub fn amounts(&self) -> &[(String, f64)] {
        &self.amounts
    }
}

/// Parses a token as an amount. Non-finite values do not count as numbers.
fn parse_amount(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn push_unknown(unknown: &mut Vec<String>, token: &str) {
    if !unknown.iter().any(|u| u == token) {
        unknown.push(token.to_string());
    }
}

/// Builds a [`ConversionRequest`] from the full token sequence of a
/// conversion command.
///
/// The target follows `TO` directly and is the last token, or the one before
/// a trailing result-only flag. All unknown codes, target included, are
/// collected before failing. An amount followed by an unknown code is
/// dropped along with that code.
pub fn parse_conversion(tokens: &[String], rates: &RateTable) -> Result<ConversionRequest> {
    let syntax = || ConverterError::syntax(COMMAND);

    let cmd_idx = tokens.iter().position(|t| is_to(t)).ok_or_else(syntax)?;
    if cmd_idx == 0 {
        return Err(syntax());
    }

    let last = tokens.len() - 1;
    let result_only = tokens.iter().any(|t| Flag::ResultOnly.matches(t));
    let target_idx = if result_only {
        if !Flag::ResultOnly.matches(&tokens[last]) {
            return Err(syntax());
        }
        last - 1
    } else {
        last
    };
    if cmd_idx + 1 != target_idx {
        return Err(syntax());
    }

    let target = &tokens[target_idx];
    let mut unknown = Vec::new();
    if !rates.contains(target) {
        push_unknown(&mut unknown, target);
    }

    let mut request = ConversionRequest::new(target, result_only);
    let mut i = 0;
    while i < cmd_idx {
        let token = &tokens[i];
        if rates.contains(token) {
            request.add(token, 1.0);
            i += 1;
            continue;
        }

        let Some(amount) = parse_amount(token) else {
            push_unknown(&mut unknown, token);
            i += 1;
            continue;
        };

        if i + 1 >= cmd_idx {
            return Err(syntax());
        }
        let code = &tokens[i + 1];
        if rates.contains(code) {
            request.add(code, amount);
        } else {
            push_unknown(&mut unknown, code);
        }
        i += 2;
    }

    if !unknown.is_empty() {
        return Err(ConverterError::UnknownCurrencyCodes(unknown));
    }
    debug!("Conversion request: {:?}", request);
    Ok(request)
}
