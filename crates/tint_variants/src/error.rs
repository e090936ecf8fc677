//! Error types for tint_variants

use thiserror::Error;

/// Errors that can occur when building a variant table
#[derive(Error, Debug)]
pub enum VariantError {
    /// The TOML document could not be parsed
    #[error("invalid variant table: {0}")]
    Toml(#[from] toml::de::Error),

    /// An axis was declared twice
    #[error("axis `{0}` is declared more than once")]
    DuplicateAxis(String),

    /// A value was declared twice on one axis
    #[error("axis `{axis}` declares value `{value}` more than once")]
    DuplicateValue {
        /// The axis name
        axis: String,
        /// The repeated value
        value: String,
    },

    /// An axis has no default value
    #[error("axis `{0}` has no default value")]
    MissingDefault(String),

    /// An axis was given more than one default value
    #[error("axis `{axis}` has more than one default (`{first}` and `{second}`)")]
    DuplicateDefault {
        /// The axis name
        axis: String,
        /// The default set first
        first: String,
        /// The conflicting default
        second: String,
    },

    /// The default names a value the axis does not declare
    #[error("default `{value}` is not a declared value of axis `{axis}`")]
    UnknownDefault {
        /// The axis name
        axis: String,
        /// The undeclared default
        value: String,
    },

    /// A default was set for an axis that does not exist
    #[error("default given for undeclared axis `{0}`")]
    UnknownAxis(String),
}

/// Result type for variant table construction
pub type Result<T> = std::result::Result<T, VariantError>;
