//! Error types for the worksurvey system.
//!
//! Uses `thiserror` for ergonomic error definition.
//!
//! Missing columns, malformed cells, and empty filter results are normal data
//! conditions and never surface here. Errors are reserved for callers that
//! break the query contract, such as naming a filter field that does not exist.

use thiserror::Error;

/// The main error type for worksurvey operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unknown filter field error.
    #[must_use]
    pub fn unknown_filter_field(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownFilterField(name.into()))
    }

    /// Creates a duplicate filter field error.
    #[must_use]
    pub fn duplicate_filter_field(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateFilterField(name.into()))
    }

    /// Creates an unknown view error.
    #[must_use]
    pub fn unknown_view(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownView(name.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A filter criterion named a field outside the fixed field set.
    #[error("unknown filter field: {0}")]
    UnknownFilterField(String),

    /// The same filter field appeared more than once in one criteria mapping.
    #[error("duplicate filter field: {0}")]
    DuplicateFilterField(String),

    /// A dashboard view name was not recognized.
    #[error("unknown view: {0}")]
    UnknownView(String),
}
