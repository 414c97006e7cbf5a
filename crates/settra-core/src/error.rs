//! # Settra Core Errors
//!
//! Defines the error types shared by the settings-access layer.
//!
//! This module includes [`SettingsError`], the primary enum encompassing
//! failures that can occur while reading and converting settings: missing
//! mandatory settings, values that do not parse as the requested type,
//! structural misuse of the record binder, and reload failures propagated
//! verbatim from the underlying store.
use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    /// A mandatory setting is absent and no default was supplied.
    #[error("setting '{name}' in section '{section}' is not set and no default was given")]
    UnsetSetting { section: String, name: String },

    /// A setting is present but its value does not parse as the requested type.
    #[error("setting '{name}' in section '{section}' has value '{raw}' which cannot be read as {target}")]
    InvalidValue {
        section: String,
        name: String,
        raw: String,
        target: &'static str,
    },

    #[error("section not found: {0}")]
    SectionNotFound(String),

    /// A record type declares no bindable fields; binding it is ill-formed.
    #[error("record type '{type_name}' declares no bindable fields")]
    EmptyRecord { type_name: &'static str },

    /// A field failed to convert during strict record binding.
    #[error("field '{field}' has value '{raw}' which cannot be bound as {target}")]
    FieldBinding {
        field: &'static str,
        raw: String,
        target: &'static str,
    },

    #[error("reload failed for store '{store}': {source}")]
    Reload {
        store: String,
        #[source]
        source: Box<dyn StdError + Send + Sync + 'static>,
    },

    #[error("store operation '{operation}' failed: {message}")]
    Store { operation: String, message: String },
}

// Helpers for the most common construction sites, keeping section/name
// handling in one place.
impl SettingsError {
    pub fn unset(section: impl Into<String>, name: impl Into<String>) -> Self {
        SettingsError::UnsetSetting {
            section: section.into(),
            name: name.into(),
        }
    }

    pub fn invalid(
        section: impl Into<String>,
        name: impl Into<String>,
        raw: impl Into<String>,
        target: &'static str,
    ) -> Self {
        SettingsError::InvalidValue {
            section: section.into(),
            name: name.into(),
            raw: raw.into(),
            target,
        }
    }

    pub fn reload(
        store: impl Into<String>,
        source: Box<dyn StdError + Send + Sync + 'static>,
    ) -> Self {
        SettingsError::Reload {
            store: store.into(),
            source,
        }
    }
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, SettingsError>;
