//! Command session: startup fetch gate, interactive loop and one-shot runs.
//!
//! The session owns the current data snapshot. Each command receives a
//! shared handle to it; a successful `UPDATE` swaps in a new snapshot and a
//! failed one leaves the old snapshot untouched.
use std::sync::Arc;

use currency_common::{
    Config, ConverterError, DataSource, ErrorList, Interpreter, Mode, Outcome, Result, Snapshot,
    load,
};
use log::{debug, info};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::display;

const PROMPT: &str = "> ";

/// What the command loop should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<S: DataSource> {
    source: S,
    interpreter: Interpreter,
    snapshot: Arc<Snapshot>,
}

impl<S: DataSource> Session<S> {
    /// Performs the startup fetch. No session exists unless it succeeds.
    pub fn start(source: S, config: Config, mode: Mode) -> std::result::Result<Self, ErrorList> {
        let snapshot = load(&source, &config)?;
        info!("Session started in {:?} mode", mode);
        Ok(Self {
            source,
            interpreter: Interpreter::new(config, mode),
            snapshot: Arc::new(snapshot),
        })
    }

    /// Data every command currently runs against.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Runs one command line and prints its outcome or error.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        let snapshot = self.snapshot();
        match self.interpreter.run_line(line, &snapshot) {
            Ok(None) => Flow::Continue,
            Ok(Some(Outcome::Exit)) => Flow::Exit,
            Ok(Some(Outcome::Update { silent })) => {
                self.update(silent);
                Flow::Continue
            }
            Ok(Some(outcome)) => {
                display::outcome(&outcome);
                Flow::Continue
            }
            Err(e) => {
                debug!("Command {:?} failed: {:?}", line, e);
                display::error(&e);
                Flow::Continue
            }
        }
    }

    /// Refetches all data. Returns true when a new snapshot was installed.
    ///
    /// Problems of a failed refetch are printed and dropped; the previous
    /// snapshot stays in place.
    fn update(&mut self, silent: bool) -> bool {
        match load(&self.source, self.interpreter.config()) {
            Ok(snapshot) => {
                self.snapshot = Arc::new(snapshot);
                if !silent {
                    display::update_succeeded();
                }
                true
            }
            Err(errors) => {
                display::update_failed(&errors);
                false
            }
        }
    }

    /// Interactive loop. Ends on `EXIT`, end of input or interrupt.
    pub fn repl(&mut self) -> Result<()> {
        display::banner();
        let mut editor = DefaultEditor::new().map_err(|e| ConverterError::Readline(e.to_string()))?;

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    if self.handle_line(&line) == Flow::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(ConverterError::Readline(e.to_string())),
            }
        }

        display::bye();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    const RATES_A: &str = r#"[{"effectiveDate": "2026-10-15", "rates": [{"currency": "dolar", "code": "USD", "mid": 4.0}]}]"#;
    const RATES_B: &str = r#"[{"effectiveDate": "2026-10-16", "rates": [{"currency": "dolar", "code": "USD", "mid": 3.9}]}]"#;

    /// Serves whatever rate payload is currently queued; `None` fails the request.
    struct ScriptedSource {
        rates: Mutex<Option<&'static str>>,
    }

    impl ScriptedSource {
        fn new(rates: Option<&'static str>) -> Self {
            Self {
                rates: Mutex::new(rates),
            }
        }
    }

    impl DataSource for ScriptedSource {
        fn fetch_rates(&self) -> Result<String> {
            let rates = *self.rates.lock().map_err(|e| ConverterError::Network(e.to_string()))?;
            rates
                .map(str::to_string)
                .ok_or_else(|| ConverterError::Network("HTTP 500".to_string()))
        }

        fn fetch_names(&self, _language: &str) -> Result<String> {
            Ok(r#"{"USD": "US Dollar"}"#.to_string())
        }
    }

    fn session(rates: Option<&'static str>, mode: Mode) -> std::result::Result<Session<ScriptedSource>, ErrorList> {
        Session::start(ScriptedSource::new(rates), Config::default(), mode)
    }

    fn queue(session: &Session<ScriptedSource>, rates: Option<&'static str>) {
        *session.source.rates.lock().unwrap() = rates;
    }

    #[test]
    fn failed_startup_fetch_yields_no_session() {
        let errors = match session(None, Mode::OneShot) {
            Err(errors) => errors,
            Ok(_) => panic!("startup fetch should have failed"),
        };
        assert!(errors.has_errors());
        assert!(errors.to_string().starts_with("Problems occurred: rates request error"));
    }

    #[test]
    fn exit_ends_the_loop_and_other_lines_continue() {
        let mut session = session(Some(RATES_A), Mode::Interactive).unwrap();
        assert_eq!(session.handle_line(""), Flow::Continue);
        assert_eq!(session.handle_line("1 usd to pln"), Flow::Continue);
        assert_eq!(session.handle_line("nonsense"), Flow::Continue);
        assert_eq!(session.handle_line("exit"), Flow::Exit);
    }

    #[test]
    fn successful_update_replaces_the_snapshot() {
        let mut session = session(Some(RATES_A), Mode::Interactive).unwrap();
        queue(&session, Some(RATES_B));
        assert_eq!(session.handle_line("update -s"), Flow::Continue);
        assert_eq!(session.snapshot().rates.rate("USD"), Some(3.9));
    }

    #[test]
    fn failed_update_keeps_the_old_snapshot() {
        let mut session = session(Some(RATES_A), Mode::Interactive).unwrap();
        let before = session.snapshot();
        queue(&session, None);
        assert!(!session.update(true));
        assert_eq!(*session.snapshot(), *before);
        assert_eq!(session.handle_line("1 usd to pln -r"), Flow::Continue);
    }

    #[test]
    fn held_snapshot_survives_an_update() {
        let mut session = session(Some(RATES_A), Mode::Interactive).unwrap();
        let held = session.snapshot();
        queue(&session, Some(RATES_B));
        assert!(session.update(true));
        assert_eq!(held.rates.rate("USD"), Some(4.0));
        assert_eq!(session.snapshot().rates.rate("USD"), Some(3.9));
    }
}
