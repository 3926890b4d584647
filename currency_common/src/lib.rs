//!
//! Core of the currency converter shared by the command-line front end.
//!
//! This crate aggregates:
//! - `tokenizer` and `command` — splitting and classifying command lines.
//! - `conversion` and `engine` — the conversion grammar and arithmetic.
//! - `table` — rate tables and their column layout.
//! - `help` — the static command catalog.
//! - `rates`, `payload`, `loader` — data tables, payload decoding and the fetch cycle.
//! - `error`, `error_list`, `result` — error types and the fetch problem list.
//! - `config` — data sources and defaults.
//! - `interpreter` — command dispatch producing displayable outcomes.
#![warn(missing_docs)]
pub mod command;
pub mod config;
pub mod conversion;
pub mod engine;
pub mod error;
pub mod error_list;
pub mod help;
pub mod interpreter;
pub mod loader;
pub mod payload;
pub mod rates;
pub mod result;
pub mod table;
pub mod tokenizer;

pub use config::Config;
pub use error::ConverterError;
pub use error_list::ErrorList;
pub use interpreter::{Interpreter, Mode, Outcome};
pub use loader::{DataSource, load};
pub use rates::Snapshot;
pub use result::Result;
