//! Colored terminal rendering of outcomes and errors.
use std::fmt::Display;

use colored::Colorize;
use currency_common::ErrorList;
use currency_common::Outcome;
use currency_common::help::HelpListing;
use currency_common::table::{LineKind, Table};

/// Prints a finished command.
pub fn outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Help(listing) => help(listing),
        Outcome::Author(author) => println!("{}", author.magenta()),
        Outcome::Date(Some(date)) => println!("Rates published on {}", date.to_string().cyan()),
        Outcome::Date(None) => println!("{}", "Publication date unknown".yellow()),
        Outcome::Logo(logo) => println!("{}", logo.cyan()),
        Outcome::Conversion(conversion) => println!("{}", conversion.to_string().green()),
        Outcome::Table(table) => self::table(table),
        Outcome::Update { .. } | Outcome::Exit => {}
    }
}

fn help(listing: &HelpListing) {
    for entry in &listing.entries {
        println!("{}", entry.usage.yellow());
        println!("    {}", entry.description);
        for option in entry.options {
            println!("    {}{}", format!("{:<32}", option.usage).cyan(), option.description);
        }
    }
    if let Some(line) = listing.missing_line() {
        println!("{}", line.red());
    }
}

fn table(table: &Table) {
    for line in table.render() {
        match line.kind {
            LineKind::Header => println!("{}", line.text.bold().yellow()),
            LineKind::Border => println!("{}", line.text.dimmed()),
            LineKind::Row => println!("{}", line.text),
        }
    }
}

/// Prints a command-time error.
pub fn error(error: &impl Display) {
    println!("{}", error.to_string().red());
}

/// Prints the fetch problem list.
pub fn problems(errors: &ErrorList) {
    println!("{}", errors.to_string().red());
}

pub fn update_succeeded() {
    println!("{}", "Data update successful!".green());
}

pub fn update_failed(errors: &ErrorList) {
    println!("{}", "Fetching data has failed!".red());
    problems(errors);
    println!("{}", "Please try again later...".red());
}

pub fn banner() {
    println!(
        "{}{}",
        "NBP currency converter".cyan(),
        format!(" v{}", env!("CARGO_PKG_VERSION")).magenta()
    );
    println!("Type {} to see the complete list of commands", "help".yellow());
}

pub fn bye() {
    println!("Bye!");
}
