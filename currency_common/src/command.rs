//! Command keywords, flags and the command classifier.
//!
//! A token sequence is mapped onto exactly one [`ParsedCommand`] using a fixed
//! precedence: exact leading keywords first, then `TABLE`, then any `TO`
//! keyword (conversion), and finally unknown.
use log::debug;
use strum_macros::{Display, EnumString};

/// Words with a fixed meaning at the start of a command line.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Keyword {
    Help,
    Author,
    Date,
    Exit,
    Logo,
    Update,
    Table,
    To,
}

/// Option flags recognised by the individual commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Flag {
    /// Print only the converted amount.
    #[strum(serialize = "-R", serialize = "--RESULT-ONLY")]
    ResultOnly,
    /// Add a column with localized currency names.
    #[strum(serialize = "-N", serialize = "--NAME-CURRENCIES")]
    NameCurrencies,
    /// Suppress the success message of an update.
    #[strum(serialize = "-S", serialize = "--SILENT-MODE")]
    SilentMode,
}

impl Flag {
    /// True if `token` spells this flag in its short or long form.
    pub fn matches(self, token: &str) -> bool {
        token.parse::<Flag>().map(|flag| flag == self).unwrap_or(false)
    }
}

/// True if `token` is the `TO` keyword.
pub fn is_to(token: &str) -> bool {
    matches!(token.parse::<Keyword>(), Ok(Keyword::To))
}

/// One command line, classified. Argument tokens exclude the leading keyword,
/// except for `Convert`, which keeps the whole sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedCommand {
    /// `HELP [names...]`.
    Help(Vec<String>),
    /// `AUTHOR`.
    Author,
    /// `DATE`.
    Date,
    /// `EXIT`.
    Exit,
    /// `LOGO`.
    Logo,
    /// `TABLE base [TO code...] [-N [lang]]`.
    Table(Vec<String>),
    /// Conversion grammar, detected by a `TO` keyword anywhere.
    Convert(Vec<String>),
    /// `UPDATE [-S]`.
    Update(Vec<String>),
    /// No command matched.
    Unknown(Vec<String>),
}

impl ParsedCommand {
    /// Selects the command for a token sequence.
    pub fn classify(tokens: &[String]) -> ParsedCommand {
        let Some(first) = tokens.first() else {
            return ParsedCommand::Unknown(Vec::new());
        };
        let rest = || tokens[1..].to_vec();

        let command = match first.parse::<Keyword>() {
            Ok(Keyword::Help) => ParsedCommand::Help(rest()),
            Ok(Keyword::Author) => ParsedCommand::Author,
            Ok(Keyword::Date) => ParsedCommand::Date,
            Ok(Keyword::Exit) => ParsedCommand::Exit,
            Ok(Keyword::Logo) => ParsedCommand::Logo,
            Ok(Keyword::Update) => ParsedCommand::Update(rest()),
            Ok(Keyword::Table) => ParsedCommand::Table(rest()),
            _ if tokens.iter().any(|t| is_to(t)) => ParsedCommand::Convert(tokens.to_vec()),
            _ => ParsedCommand::Unknown(tokens.to_vec()),
        };
        debug!("Classified {:?} as {:?}", tokens, command);
        command
    }

    /// Tokenizes and classifies a raw line. Blank lines yield `None`.
    pub fn parse_line(line: &str) -> Option<ParsedCommand> {
        let tokens = crate::tokenizer::tokenize(line);
        if tokens.is_empty() {
            return None;
        }
        Some(Self::classify(&tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ParsedCommand {
        ParsedCommand::parse_line(line).unwrap()
    }

    #[test]
    fn leading_keywords_win() {
        assert_eq!(parse("help table to"), ParsedCommand::Help(vec!["TABLE".into(), "TO".into()]));
        assert_eq!(parse("author"), ParsedCommand::Author);
        assert_eq!(parse("DATE"), ParsedCommand::Date);
        assert_eq!(parse("exit"), ParsedCommand::Exit);
        assert_eq!(parse("logo"), ParsedCommand::Logo);
        assert_eq!(parse("update -s"), ParsedCommand::Update(vec!["-S".into()]));
    }

    #[test]
    fn table_wins_over_to() {
        assert_eq!(
            parse("table pln to usd"),
            ParsedCommand::Table(vec!["PLN".into(), "TO".into(), "USD".into()])
        );
    }

    #[test]
    fn to_anywhere_means_conversion() {
        assert_eq!(
            parse("10 usd to pln"),
            ParsedCommand::Convert(vec!["10".into(), "USD".into(), "TO".into(), "PLN".into()])
        );
        assert_eq!(parse("to"), ParsedCommand::Convert(vec!["TO".into()]));
    }

    #[test]
    fn anything_else_is_unknown() {
        assert_eq!(parse("hello world"), ParsedCommand::Unknown(vec!["HELLO".into(), "WORLD".into()]));
        assert!(ParsedCommand::parse_line("   ").is_none());
    }

    #[test]
    fn flags_accept_short_and_long_forms() {
        assert!(Flag::ResultOnly.matches("-R"));
        assert!(Flag::ResultOnly.matches("--RESULT-ONLY"));
        assert!(Flag::NameCurrencies.matches("--name-currencies"));
        assert!(Flag::SilentMode.matches("-S"));
        assert!(!Flag::SilentMode.matches("-R"));
        assert!(!Flag::ResultOnly.matches("USD"));
    }
}
