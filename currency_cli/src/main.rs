//! Currency Converter — converts amounts between currencies and prints rate
//! tables using the exchange rates published by the National Bank of Poland.
//!
//! Without arguments the converter starts an interactive prompt. Otherwise
//! all arguments are joined into one command line, executed once, and the
//! process exits.
//!
//! Usage example (CLI):
//! ```bash
//! currency-converter 100 usd 20 eur to pln
//! currency-converter table pln to usd eur -n
//! currency-converter --timeout 5
//! ```
#![warn(missing_docs)]
mod args;
mod display;
mod http;
mod session;

use std::process::ExitCode;

use clap::Parser;
use currency_common::{Config, Mode, Result};
use log::{error, info};

use crate::args::Args;
use crate::http::HttpSource;
use crate::session::Session;

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            error!("{:?}", e);
            display::error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(timeout) = args.timeout {
        config.request_timeout_secs = timeout;
    }

    let command_line = args.command_line();
    let mode = match command_line {
        Some(_) => Mode::OneShot,
        None => Mode::Interactive,
    };

    let source = HttpSource::new(&config)?;
    let mut session = match Session::start(source, config, mode) {
        Ok(session) => session,
        Err(errors) => {
            display::problems(&errors);
            return Ok(ExitCode::FAILURE);
        }
    };

    match command_line {
        Some(line) => {
            info!("Running one-shot command: {}", line);
            session.handle_line(&line);
        }
        None => session.repl()?,
    }
    Ok(ExitCode::SUCCESS)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
