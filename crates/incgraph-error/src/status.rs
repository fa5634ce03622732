//! Error status classification.

use std::fmt;

/// The status of an error.
///
/// incgraph never retries anything: every failure is either fatal right away
/// or silently skipped at the call site. The status still distinguishes
/// errors that stem from the environment (`Temporary`, e.g. an interrupted
/// read) from those that need an external change (`Permanent`, e.g. a bad
/// configuration value), which callers embedding the crates may care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorStatus {
    /// Error is permanent - it won't resolve without external changes.
    ///
    /// Examples: ConfigInvalid, FileNotFound
    #[default]
    Permanent,

    /// Error is temporary - a later run might succeed.
    ///
    /// Examples: IoFailed
    Temporary,
}

impl ErrorStatus {
    /// Check if a later attempt could succeed without external changes
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorStatus::Temporary)
    }

    /// Get status as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorStatus::Permanent => "permanent",
            ErrorStatus::Temporary => "temporary",
        }
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_retryable() {
        assert!(!ErrorStatus::Permanent.is_retryable());
        assert!(ErrorStatus::Temporary.is_retryable());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorStatus::Permanent.to_string(), "permanent");
        assert_eq!(ErrorStatus::Temporary.to_string(), "temporary");
    }
}
