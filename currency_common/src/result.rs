//! Crate-wide result alias.
//!
//! The error type defaults to `ConverterError`; pass a second parameter for
//! anything else.
use crate::error::ConverterError;

/// `Result` with `ConverterError` as the default error.
pub type Result<T, E = ConverterError> = std::result::Result<T, E>;
