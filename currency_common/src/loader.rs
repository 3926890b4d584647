//! One fetch cycle: concurrent retrieval, decoding and all-or-nothing merge.
//!
//! The rate payload and every configured name payload are requested on
//! their own threads. Responses are joined through a channel before anything
//! is decoded. A single failed request or payload fails the whole cycle and
//! no snapshot is produced.
use std::thread;

use crossbeam_channel::unbounded;
use log::{debug, info, warn};

use crate::config::Config;
use crate::error_list::ErrorList;
use crate::payload::{decode_names, decode_rates};
use crate::rates::{NameTable, Snapshot};
use crate::result::Result;

/// Retrieval of raw payloads. Implementations perform the transport only.
pub trait DataSource: Sync {
    /// Raw rate payload.
    fn fetch_rates(&self) -> Result<String>;
    /// Raw name payload for `language`.
    fn fetch_names(&self, language: &str) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Slot {
    Rates,
    Names(String),
}

impl Slot {
    fn label(&self) -> String {
        match self {
            Slot::Rates => "rates".to_string(),
            Slot::Names(lang) => format!("{} currency names", lang),
        }
    }
}

fn fetch_all<S: DataSource>(source: &S, config: &Config) -> Vec<(Slot, Result<String>)> {
    let (tx, rx) = unbounded::<(Slot, Result<String>)>();

    thread::scope(|scope| {
        let rates_tx = tx.clone();
        scope.spawn(move || {
            let _ = rates_tx.send((Slot::Rates, source.fetch_rates()));
        });
        for lang in config.name_sources.keys() {
            let names_tx = tx.clone();
            scope.spawn(move || {
                let _ = names_tx.send((Slot::Names(lang.clone()), source.fetch_names(lang)));
            });
        }
    });
    drop(tx);

    let mut responses: Vec<(Slot, Result<String>)> = rx.iter().collect();
    responses.sort_by(|a, b| a.0.cmp(&b.0));
    responses
}

/// Runs one fetch cycle and builds a fresh snapshot.
///
/// Request failures are reported first; payloads are decoded only when every
/// request succeeded.
pub fn load<S: DataSource>(source: &S, config: &Config) -> std::result::Result<Snapshot, ErrorList> {
    info!("Fetching rates and {} name source(s)", config.name_sources.len());
    let responses = fetch_all(source, config);

    let mut errors = ErrorList::new();
    let mut bodies = Vec::with_capacity(responses.len());
    for (slot, response) in responses {
        match response {
            Ok(body) => bodies.push((slot, body)),
            Err(e) => {
                warn!("Request for {} failed: {}", slot.label(), e);
                errors.push(format!("{} request error ({})", slot.label(), e));
            }
        }
    }
    if errors.has_errors() {
        return Err(errors);
    }

    let mut rates = None;
    let mut names = NameTable::new();
    for (slot, body) in bodies {
        debug!("Decoding {} ({} bytes)", slot.label(), body.len());
        match &slot {
            Slot::Rates => match decode_rates(&body, &config.pivot) {
                Ok(decoded) => {
                    names.set_language(&config.rates_names_language, decoded.names.clone());
                    rates = Some(decoded);
                }
                Err(e) => errors.push(format!("{} parse error ({})", slot.label(), e)),
            },
            Slot::Names(lang) => match decode_names(&body) {
                Ok(decoded) => names.set_language(lang, decoded),
                Err(e) => errors.push(format!("{} parse error ({})", slot.label(), e)),
            },
        }
    }

    match rates {
        Some(decoded) if !errors.has_errors() => {
            info!(
                "Loaded {} rates published {}",
                decoded.rates.len(),
                decoded.published
            );
            Ok(Snapshot::new(decoded.rates, names, Some(decoded.published)))
        }
        _ => {
            for e in errors.errors() {
                warn!("{}", e);
            }
            Err(errors)
        }
    }
}
