//! Ordered list of fetch-time problems.
//!
//! The list is cleared at the start of every fetch and filled with one entry
//! per failed request or payload. While it is non-empty the command loop does
//! not accept commands.
use std::fmt;

/// Label printed in front of the joined problems.
pub const LABEL: &str = "Problems occurred: ";

/// Problems collected by one fetch cycle, in order of detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorList {
    errors: Vec<String>,
}

impl ErrorList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a problem.
    pub fn push(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    /// Forgets every problem.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// True if at least one problem was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Recorded problems, oldest first.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", LABEL, self.errors.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_errors_after_label() {
        let mut list = ErrorList::new();
        assert!(!list.has_errors());
        list.push("rates request failed");
        list.push("EN names request failed");
        assert!(list.has_errors());
        assert_eq!(
            list.to_string(),
            "Problems occurred: rates request failed, EN names request failed"
        );
        list.clear();
        assert!(!list.has_errors());
    }
}
