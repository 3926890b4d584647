//! Error types shared by the converter core and the command-line front end.
//!
//! `ConverterError` covers both command-time failures (syntax, unknown
//! currency or language codes) and fetch-time failures (network, payload
//! decoding). Command-time errors are printed and discarded; fetch-time
//! errors end up in an [`ErrorList`](crate::error_list::ErrorList).
use std::io;

use thiserror::Error;

/// Unified error type of the workspace.
#[derive(Error, Debug)]
pub enum ConverterError {
    /// The command has a malformed shape. Carries the usage template.
    #[error("Syntax error in {command} command, usage: {usage}")]
    Syntax {
        /// Name of the command as listed in the help catalog.
        command: String,
        /// Usage template of that command.
        usage: String,
    },

    /// First token matched no command and no `TO` keyword was present.
    #[error("Unknown command: {0}, type HELP to see the list of commands")]
    UnknownCommand(String),

    /// One or more currency codes are absent from the rate table.
    #[error("Unknown currency codes: {}", .0.join(", "))]
    UnknownCurrencyCodes(Vec<String>),

    /// One or more language codes have no currency names loaded.
    #[error("Unknown language codes: {}", .0.join(", "))]
    UnknownLanguageCodes(Vec<String>),

    /// Transport failure or non-success HTTP status, including timeouts.
    #[error("{0}")]
    Network(String),

    /// Remote payload could not be decoded.
    #[error("{0}")]
    Decode(String),

    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Line editor failure in interactive mode.
    #[error("Line editor error: {0}")]
    Readline(String),
}

impl ConverterError {
    /// Builds a syntax error for `command`, attaching its usage from the help catalog.
    pub fn syntax(command: &str) -> Self {
        let usage = crate::help::usage_of(command).unwrap_or_default();
        ConverterError::Syntax {
            command: command.to_string(),
            usage: usage.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_are_comma_joined() {
        let err = ConverterError::UnknownCurrencyCodes(vec!["XXX".into(), "YYY".into()]);
        assert_eq!(err.to_string(), "Unknown currency codes: XXX, YYY");
    }

    #[test]
    fn syntax_error_carries_usage() {
        let err = ConverterError::syntax("TABLE");
        let text = err.to_string();
        assert!(text.starts_with("Syntax error in TABLE command"));
        assert!(text.contains("TABLE <code>"));
    }
}
