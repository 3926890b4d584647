//! Command-line arguments of the converter.
//!
//! Everything after the options is joined with single spaces and run as one
//! command line. Without such words the converter starts interactively.
use std::path::PathBuf;

use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON file overriding the default data sources and languages.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Timeout of every HTTP request, in seconds.
    #[clap(long)]
    pub timeout: Option<u64>,

    /// Command to run once, e.g. `100 usd to pln -r`.
    #[clap(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Args {
    /// One-shot command line, or `None` for interactive mode.
    pub fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_words_means_interactive() {
        let args = Args::try_parse_from(["currency-converter"]).unwrap();
        assert_eq!(args.command_line(), None);
    }

    #[test]
    fn words_are_joined_including_flags() {
        let args = Args::try_parse_from(["currency-converter", "100", "usd", "to", "pln", "-r"]).unwrap();
        assert_eq!(args.command_line(), Some("100 usd to pln -r".to_string()));
    }

    #[test]
    fn options_precede_the_command() {
        let args = Args::try_parse_from([
            "currency-converter",
            "--timeout",
            "3",
            "table",
            "pln",
            "--name-currencies",
        ])
        .unwrap();
        assert_eq!(args.timeout, Some(3));
        assert_eq!(args.command_line(), Some("table pln --name-currencies".to_string()));
    }
}
