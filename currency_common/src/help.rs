//! Static registry of command usage and descriptions.
//!
//! Used to render the `HELP` listing and to attach usage templates to syntax
//! errors.

/// One documented option of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpOption {
    /// Option spelling, e.g. `-R, --RESULT-ONLY`.
    pub usage: &'static str,
    /// What the option does.
    pub description: &'static str,
}

/// Help entry of a single command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    /// Name under which `HELP <name>` finds the entry.
    pub name: &'static str,
    /// Syntax template.
    pub usage: &'static str,
    /// One-line summary.
    pub description: &'static str,
    /// Documented options, possibly none.
    pub options: &'static [HelpOption],
}

/// Every command, in listing order.
pub const CATALOG: &[HelpEntry] = &[
    HelpEntry {
        name: "TO",
        usage: "<[amount] code>... TO <code> [-R|--RESULT-ONLY]",
        description: "Converts the sum of the given amounts into the target currency. A code without an amount counts as 1",
        options: &[HelpOption {
            usage: "-R, --RESULT-ONLY",
            description: "print the converted amount only",
        }],
    },
    HelpEntry {
        name: "TABLE",
        usage: "TABLE <code> [TO <code>...] [-N|--NAME-CURRENCIES [lang]]",
        description: "Shows rates of the given currencies (all by default) against the base currency",
        options: &[HelpOption {
            usage: "-N, --NAME-CURRENCIES [lang]",
            description: "add a column with currency names in the given language",
        }],
    },
    HelpEntry {
        name: "UPDATE",
        usage: "UPDATE [-S|--SILENT-MODE]",
        description: "Fetches fresh exchange rates and currency names",
        options: &[HelpOption {
            usage: "-S, --SILENT-MODE",
            description: "do not report a successful update",
        }],
    },
    HelpEntry {
        name: "DATE",
        usage: "DATE",
        description: "Shows the publication date of the current rates",
        options: &[],
    },
    HelpEntry {
        name: "HELP",
        usage: "HELP [command...]",
        description: "Shows help for all or only the given commands",
        options: &[],
    },
    HelpEntry {
        name: "AUTHOR",
        usage: "AUTHOR",
        description: "Shows the author of the program",
        options: &[],
    },
    HelpEntry {
        name: "LOGO",
        usage: "LOGO",
        description: "Shows the program logo",
        options: &[],
    },
    HelpEntry {
        name: "EXIT",
        usage: "EXIT",
        description: "Leaves the interactive mode",
        options: &[],
    },
];

/// Entries only meaningful in the interactive loop.
const INTERACTIVE_ONLY: &[&str] = &["EXIT"];

/// Looks up the entry registered under `name`.
pub fn find(name: &str) -> Option<&'static HelpEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}

/// Usage template of `name`.
pub fn usage_of(name: &str) -> Option<&'static str> {
    find(name).map(|entry| entry.usage)
}

/// Prefix of the line listing names without a help entry.
pub const MISSING_LABEL: &str = "No help entries for: ";

/// Result of a `HELP` request: entries to show and names with no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpListing {
    /// Entries found, in request order.
    pub entries: Vec<&'static HelpEntry>,
    /// Requested names without an entry.
    pub missing: Vec<String>,
}

impl HelpListing {
    /// The batch line naming every requested command without an entry.
    pub fn missing_line(&self) -> Option<String> {
        if self.missing.is_empty() {
            None
        } else {
            Some(format!("{}{}", MISSING_LABEL, self.missing.join(", ")))
        }
    }
}

/// Resolves `HELP [names...]`.
///
/// With no names every entry is listed. `EXIT` is hidden outside the
/// interactive loop, both from the full listing and from lookups.
pub fn lookup(names: &[String], interactive: bool) -> HelpListing {
    let visible = |entry: &&HelpEntry| interactive || !INTERACTIVE_ONLY.contains(&entry.name);

    if names.is_empty() {
        return HelpListing {
            entries: CATALOG.iter().filter(visible).collect(),
            missing: Vec::new(),
        };
    }

    let mut entries = Vec::new();
    let mut missing = Vec::new();
    for name in names {
        match find(name).filter(visible) {
            Some(entry) => {
                if !entries.contains(&entry) {
                    entries.push(entry);
                }
            }
            None => {
                if !missing.contains(name) {
                    missing.push(name.clone());
                }
            }
        }
    }
    HelpListing { entries, missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_listing_hides_exit_outside_interactive_mode() {
        let listing = lookup(&[], false);
        assert!(listing.entries.iter().all(|e| e.name != "EXIT"));
        assert_eq!(listing.entries.len(), CATALOG.len() - 1);

        let listing = lookup(&[], true);
        assert_eq!(listing.entries.len(), CATALOG.len());
    }

    #[test]
    fn unknown_names_are_batched() {
        let listing = lookup(&["UNKNOWNCMD".to_string()], true);
        assert!(listing.entries.is_empty());
        assert_eq!(listing.missing, vec!["UNKNOWNCMD".to_string()]);
        assert_eq!(listing.missing_line().as_deref(), Some("No help entries for: UNKNOWNCMD"));
    }

    #[test]
    fn full_listing_has_no_missing_line() {
        assert_eq!(lookup(&[], true).missing_line(), None);
    }

    #[test]
    fn lookup_keeps_request_order() {
        let names = vec!["UPDATE".to_string(), "FOO".to_string(), "TABLE".to_string(), "BAR".to_string()];
        let listing = lookup(&names, true);
        let found: Vec<&str> = listing.entries.iter().map(|e| e.name).collect();
        assert_eq!(found, vec!["UPDATE", "TABLE"]);
        assert_eq!(listing.missing, vec!["FOO".to_string(), "BAR".to_string()]);
        assert_eq!(listing.missing_line().as_deref(), Some("No help entries for: FOO, BAR"));
    }

    #[test]
    fn exit_lookup_depends_on_mode() {
        let names = vec!["EXIT".to_string()];
        assert_eq!(lookup(&names, true).entries.len(), 1);
        assert_eq!(lookup(&names, false).missing, names);
    }
}
