//! Rate tables: the `TABLE` sub-clause grammar, row building and the
//! column-aligned layout engine.
//!
//! Grammar: `TABLE base [TO code...] [-N|--NAME-CURRENCIES [lang]]`. Both
//! sub-clauses are optional, may appear at most once each and must start
//! right after the base code or right after the other sub-clause. A target
//! list ends at the next keyword or flag.
use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::command::{Flag, is_to};
use crate::engine;
use crate::error::ConverterError;
use crate::rates::Snapshot;
use crate::result::Result;

const COMMAND: &str = "TABLE";

const CURRENCY_PADDING: usize = 1;
const NAME_PADDING: usize = 1;
const RATE_PADDING: usize = 2;

/// Parsed arguments of a `TABLE` command.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    /// Currency the rates are quoted in.
    pub base: String,
    /// Explicit targets; `None` means every known currency.
    pub targets: Option<Vec<String>>,
    /// Language of the name column, if one was requested.
    pub names_language: Option<String>,
}

fn is_flag(token: &str) -> bool {
    token.parse::<Flag>().is_ok()
}

impl TableSpec {
    /// Parses the tokens following `TABLE`. A naming flag without a language
    /// falls back to `default_language`.
    pub fn parse(args: &[String], default_language: &str) -> Result<TableSpec> {
        let syntax = || ConverterError::syntax(COMMAND);

        let (base, rest) = args.split_first().ok_or_else(syntax)?;
        if is_to(base) || is_flag(base) {
            return Err(syntax());
        }

        let mut targets: Option<Vec<String>> = None;
        let mut names_language: Option<String> = None;
        let mut i = 0;
        while i < rest.len() {
            let token = &rest[i];
            if is_to(token) {
                if targets.is_some() {
                    return Err(syntax());
                }
                let start = i + 1;
                let end = rest[start..]
                    .iter()
                    .position(|t| is_to(t) || is_flag(t))
                    .map(|offset| start + offset)
                    .unwrap_or(rest.len());
                if end == start {
                    return Err(syntax());
                }
                targets = Some(rest[start..end].to_vec());
                i = end;
            } else if Flag::NameCurrencies.matches(token) {
                if names_language.is_some() {
                    return Err(syntax());
                }
                match rest.get(i + 1) {
                    Some(lang) if !is_to(lang) && !is_flag(lang) => {
                        names_language = Some(lang.clone());
                        i += 2;
                    }
                    _ => {
                        names_language = Some(default_language.to_uppercase());
                        i += 1;
                    }
                }
            } else {
                return Err(syntax());
            }
        }

        Ok(TableSpec {
            base: base.clone(),
            targets,
            names_language,
        })
    }
}

/// Horizontal placement of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Pad on the right.
    Left,
    /// Split padding evenly, extra space on the right.
    Center,
}

/// Column title, alignment and the spaces kept on each side of every cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header text.
    pub title: String,
    /// Placement of cell content.
    pub align: Alignment,
    /// Spaces on each side of every cell.
    pub padding: usize,
}

impl Column {
    /// Creates a column.
    pub fn new(title: &str, align: Alignment, padding: usize) -> Self {
        Self {
            title: title.to_string(),
            align,
            padding,
        }
    }
}

/// Kind of a rendered line, so the front end can style headers differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Horizontal rule.
    Border,
    /// Column titles.
    Header,
    /// Data row.
    Row,
}

/// One rendered line of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// What the line shows.
    pub kind: LineKind,
    /// Rendered text, without a trailing newline.
    pub text: String,
}

/// A table of text cells with column metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table without rows.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row. Missing cells render empty, surplus cells are dropped.
    pub fn push_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.columns.len(), String::new());
        self.rows.push(cells);
    }

    /// Column metadata.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Cells, one vector per row.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                self.rows
                    .iter()
                    .map(|row| row[idx].width())
                    .chain(std::iter::once(column.title.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn border(&self, widths: &[usize]) -> Line {
        let mut text = String::from("+");
        for (column, width) in self.columns.iter().zip(widths) {
            text.push_str(&"-".repeat(width + 2 * column.padding));
            text.push('+');
        }
        Line {
            kind: LineKind::Border,
            text,
        }
    }

    fn line<S: AsRef<str>>(&self, kind: LineKind, cells: &[S], widths: &[usize]) -> Line {
        let mut text = String::from("|");
        for ((column, width), cell) in self.columns.iter().zip(widths).zip(cells) {
            let cell = cell.as_ref();
            let slack = width.saturating_sub(cell.width());
            let (left, right) = match column.align {
                Alignment::Left => (0, slack),
                Alignment::Center => (slack / 2, slack - slack / 2),
            };
            text.push_str(&" ".repeat(column.padding + left));
            text.push_str(cell);
            text.push_str(&" ".repeat(right + column.padding));
            text.push('|');
        }
        Line { kind, text }
    }

    /// Lays the table out: border, header, border, rows, border.
    pub fn render(&self) -> Vec<Line> {
        let widths = self.widths();
        let titles: Vec<&str> = self.columns.iter().map(|c| c.title.as_str()).collect();

        let mut lines = vec![
            self.border(&widths),
            self.line(LineKind::Header, &titles, &widths),
            self.border(&widths),
        ];
        for row in &self.rows {
            lines.push(self.line(LineKind::Row, row, &widths));
        }
        lines.push(self.border(&widths));
        lines
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.render().into_iter().map(|line| line.text).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Builds the rate table described by `spec`.
///
/// Every listed currency is quoted as the amount of `base` one unit of it is
/// worth. The base itself is skipped. A missing localized name leaves the
/// cell empty.
pub fn build_table(spec: &TableSpec, snapshot: &Snapshot) -> Result<Table> {
    let rates = &snapshot.rates;

    let targets: Vec<String> = match &spec.targets {
        Some(targets) => targets.clone(),
        None => rates.codes().map(str::to_string).collect(),
    };

    let mut unknown: Vec<String> = Vec::new();
    for code in std::iter::once(&spec.base).chain(targets.iter()) {
        if !rates.contains(code) && !unknown.contains(code) {
            unknown.push(code.clone());
        }
    }
    if !unknown.is_empty() {
        return Err(ConverterError::UnknownCurrencyCodes(unknown));
    }

    if let Some(lang) = &spec.names_language {
        if !snapshot.names.has_language(lang) {
            return Err(ConverterError::UnknownLanguageCodes(vec![lang.clone()]));
        }
    }

    let mut columns = vec![Column::new("Currency", Alignment::Center, CURRENCY_PADDING)];
    if spec.names_language.is_some() {
        columns.push(Column::new("Name", Alignment::Left, NAME_PADDING));
    }
    columns.push(Column::new("Rate", Alignment::Left, RATE_PADDING));
    let mut table = Table::new(columns);

    for code in targets.iter().filter(|code| **code != spec.base) {
        let rate = engine::convert(1.0, code, &spec.base, rates)?;
        let mut row = vec![code.clone()];
        if let Some(lang) = &spec.names_language {
            row.push(snapshot.names.name(lang, code).unwrap_or_default().to_string());
        }
        row.push(engine::format_amount(rate));
        table.push_row(row);
    }
    Ok(table)
}
