//! Dispatch of classified commands against a data snapshot.
//!
//! Execution is synchronous and side-effect free: every command produces an
//! [`Outcome`] for the front end to display. `UPDATE` and `EXIT` are returned
//! as outcomes too, since refetching and loop control belong to the caller.
use chrono::NaiveDate;

use crate::command::{Flag, ParsedCommand};
use crate::config::Config;
use crate::conversion::parse_conversion;
use crate::engine::{Conversion, evaluate};
use crate::error::ConverterError;
use crate::help::{self, HelpListing};
use crate::rates::Snapshot;
use crate::result::Result;
use crate::table::{Table, TableSpec, build_table};

/// ASCII art printed by `LOGO`.
pub const LOGO: &str = r#"
  ____ _   _ ____  ____  _____ _   _  ______   __
 / ___| | | |  _ \|  _ \| ____| \ | |/ ___\ \ / /
| |   | | | | |_) | |_) |  _| |  \| | |    \ V /
| |___| |_| |  _ <|  _ <| |___| |\  | |___  | |
 \____|\___/|_| \_\_| \_\_____|_| \_|\____| |_|
"#;

/// Whether commands come from the interactive loop or a single invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Lines come from the prompt loop.
    Interactive,
    /// A single line built from the process arguments.
    OneShot,
}

/// Result of one command, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Help entries and names without one.
    Help(HelpListing),
    /// Author of the program.
    Author(String),
    /// Publication date of the current rates.
    Date(Option<NaiveDate>),
    /// ASCII logo.
    Logo(&'static str),
    /// Converted amount.
    Conversion(Conversion),
    /// Rate table.
    Table(Table),
    /// The caller should refetch the data.
    Update {
        /// Suppress the success message.
        silent: bool,
    },
    /// The caller should leave the command loop.
    Exit,
}

/// Executes commands for one mode and configuration.
pub struct Interpreter {
    config: Config,
    mode: Mode,
}

impl Interpreter {
    /// Creates an interpreter.
    pub fn new(config: Config, mode: Mode) -> Self {
        Self { config, mode }
    }

    /// Configuration commands run with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Executes one classified command.
    pub fn execute(&self, command: &ParsedCommand, snapshot: &Snapshot) -> Result<Outcome> {
        match command {
            ParsedCommand::Help(names) => Ok(Outcome::Help(help::lookup(
                names,
                self.mode == Mode::Interactive,
            ))),
            ParsedCommand::Author => Ok(Outcome::Author(self.config.author.clone())),
            ParsedCommand::Date => Ok(Outcome::Date(snapshot.published)),
            ParsedCommand::Exit => Ok(Outcome::Exit),
            ParsedCommand::Logo => Ok(Outcome::Logo(LOGO)),
            ParsedCommand::Table(args) => {
                let spec = TableSpec::parse(args, &self.config.default_names_language)?;
                Ok(Outcome::Table(build_table(&spec, snapshot)?))
            }
            ParsedCommand::Convert(tokens) => {
                let request = parse_conversion(tokens, &snapshot.rates)?;
                Ok(Outcome::Conversion(evaluate(&request, &snapshot.rates)?))
            }
            ParsedCommand::Update(args) => match args.as_slice() {
                [] => Ok(Outcome::Update { silent: false }),
                [flag] if Flag::SilentMode.matches(flag) => Ok(Outcome::Update { silent: true }),
                _ => Err(ConverterError::syntax("UPDATE")),
            },
            ParsedCommand::Unknown(tokens) => Err(ConverterError::UnknownCommand(
                tokens.first().cloned().unwrap_or_default(),
            )),
        }
    }

    /// Tokenizes, classifies and executes a raw line. Blank lines yield `None`.
    pub fn run_line(&self, line: &str, snapshot: &Snapshot) -> Result<Option<Outcome>> {
        match ParsedCommand::parse_line(line) {
            Some(command) => self.execute(&command, snapshot).map(Some),
            None => Ok(None),
        }
    }
}
