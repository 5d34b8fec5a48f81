//! Error types for the contact form.
//!
//! Field validation failures are not errors in this sense: they are values
//! (see [`crate::domain::ValidationError`]) shown to the user. The types here
//! cover misuse of the library's own APIs.

use thiserror::Error;

/// Errors that can occur while loading or checking a [`crate::FormConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A setting has an unusable value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to parse JSON configuration
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors returned by the `get_*` queries on a rendered view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Nothing in the view matched the query
    #[error("Unable to find an element {0}")]
    NotFound(String),

    /// The query expected one element but found several
    #[error("Found multiple elements {query} ({count} matches)")]
    MultipleFound { query: String, count: usize },
}

/// Errors raised by the form's event handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A change event named a field the form does not have
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with QueryError
pub type QueryResult<T> = Result<T, QueryError>;

/// Convenience type alias for Results with FormError
pub type FormResult<T> = Result<T, FormError>;
