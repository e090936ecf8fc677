//! Error types for tint_merge

use thiserror::Error;

/// Errors that can occur when loading a class group table
#[derive(Error, Debug)]
pub enum MergeConfigError {
    /// The TOML document could not be parsed
    #[error("invalid class group table: {0}")]
    Toml(#[from] toml::de::Error),

    /// A group declares neither standalone classes nor prefixes
    #[error("class group `{0}` declares no classes and no prefixes")]
    EmptyGroup(String),

    /// A group declares prefixes but no way to match the value after them
    #[error("class group `{0}` declares prefixes but no values or kinds")]
    NoValueMatcher(String),

    /// A value kind name is not one of the known validators
    #[error("class group `{group}` uses unknown value kind `{kind}`")]
    UnknownKind {
        /// The group that referenced the kind
        group: String,
        /// The unrecognized kind name
        kind: String,
    },

    /// A conflict list names a group that does not exist
    #[error("class group `{group}` conflicts with unknown group `{target}`")]
    UnknownConflict {
        /// The group declaring the conflict
        group: String,
        /// The missing target group
        target: String,
    },

    /// The modifier separator must be exactly one character
    #[error("modifier separator must be a single character, got {0:?}")]
    InvalidSeparator(String),
}

/// Result type for class group configuration
pub type Result<T> = std::result::Result<T, MergeConfigError>;
