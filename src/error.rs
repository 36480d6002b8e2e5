// src/error.rs
//! Error types for the larder registry and resolver

use thiserror::Error;

/// Errors that can occur while normalizing names, registering entries,
/// or resolving summaries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Normalization produced zero words
    #[error("name contains no usable words")]
    InvalidName,

    /// Registration payload carried an unrecognized entry type
    #[error("unrecognized entry type '{0}'")]
    InvalidEntryType(String),

    /// Ingredient cook time was negative
    #[error("invalid cook time {cook_time} for '{name}'")]
    InvalidCookTime { name: String, cook_time: i64 },

    /// Required item quantity was zero or negative
    #[error("invalid quantity {quantity} for required item '{name}'")]
    InvalidQuantity { name: String, quantity: i64 },

    /// An entry with this name exists in either namespace
    #[error("an entry named '{0}' is already registered")]
    DuplicateName(String),

    /// Query name matches no registered entry
    #[error("no entry named '{0}'")]
    EntryNotFound(String),

    /// A recipe references a name that was never registered
    #[error("required item '{0}' does not exist")]
    MissingRequiredItem(String),

    /// Recipe expansion re-entered a recipe already being expanded
    #[error("recipe '{0}' is part of a reference cycle")]
    CyclicReference(String),
}

impl Error {
    /// Stable machine-readable identifier for this error kind, used in
    /// wire-level error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidName => "invalid_name",
            Self::InvalidEntryType(_) => "invalid_entry_type",
            Self::InvalidCookTime { .. } => "invalid_cook_time",
            Self::InvalidQuantity { .. } => "invalid_quantity",
            Self::DuplicateName(_) => "duplicate_name",
            Self::EntryNotFound(_) => "entry_not_found",
            Self::MissingRequiredItem(_) => "missing_required_item",
            Self::CyclicReference(_) => "cyclic_reference",
        }
    }
}

/// Result type alias for larder operations
pub type Result<T> = std::result::Result<T, Error>;
