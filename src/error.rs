//! Error types for generator construction and configuration.
//!
//! Composing generators never fails: a product of well-formed generators is
//! itself well-formed. Errors only arise at the edges, when a range or a
//! configuration is rejected up front, or when a dynamic registry lookup
//! finds nothing registered for a type.

/// Type alias for fallible generator operations
pub type GenResult<T> = Result<T, GenError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenError {
    /// No generator registered for the requested type
    #[error("No default generator registered for {type_name}")]
    NoDefault { type_name: &'static str },

    #[error("Invalid range: min_value {min} > max_value {max}")]
    InvalidRange { min: i128, max: i128 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
