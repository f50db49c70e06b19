//! Error types for address decomposition

use thiserror::Error;

/// Errors that can occur while splitting an address into parts
#[derive(Error, Debug)]
pub enum ParseError {
    /// The address contains no `@` separator
    #[error("address contains no '@' separator")]
    MissingSeparator,

    /// A segment between separators is empty
    #[error("address contains an empty segment")]
    EmptySegment,
}

/// Result type for address decomposition
pub type Result<T> = std::result::Result<T, ParseError>;
