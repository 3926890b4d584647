//! Splits a command line into upper-cased, whitespace-separated tokens.

/// Splits `line` on runs of whitespace and upper-cases every token.
///
/// There is no quoting or escaping. An empty or blank line yields no tokens,
/// which callers treat as a no-op.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_uppercase).collect()
}
