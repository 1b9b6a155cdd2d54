//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for PromptDeck
//!
//! Every fallible operation in the core crate returns `Result<T, AppError>`.
//! Variants carry enough context to be shown to the user as-is and to be
//! logged for diagnostics.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Unified error type for all prompt browser operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog {path:?}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Transport-level failure while fetching the catalog.
    #[error("HTTP request for {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("HTTP error! status: {status} ({url})")]
    HttpStatus { url: String, status: u16 },

    /// JSON document did not parse.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Document parsed but has no `promptData` field.
    #[error("Catalog document is missing the `promptData` field")]
    MissingPromptData,

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// TOML config serialization error.
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Navigation target names a category that is not in the catalog.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Navigation target names a sub-category absent from its category.
    #[error("Unknown sub-category '{sub_category}' in category '{category}'")]
    UnknownSubCategory {
        category: String,
        sub_category: String,
    },

    /// Prompt index outside its sub-category list.
    #[error("No prompt at index {index} in '{category}' > '{sub_category}'")]
    UnknownPrompt {
        category: String,
        sub_category: String,
        index: usize,
    },

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    /// Create a catalog read error
    pub fn catalog_io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::CatalogIo {
            path: path.into(),
            source,
        }
    }

    /// Create an HTTP transport error
    pub fn http<S: Into<String>>(url: S, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.into(),
            source,
        }
    }

    /// Create a non-success status error
    pub fn http_status<S: Into<String>>(url: S, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Create an unknown sub-category error
    pub fn unknown_sub_category<S1: Into<String>, S2: Into<String>>(
        category: S1,
        sub_category: S2,
    ) -> Self {
        Self::UnknownSubCategory {
            category: category.into(),
            sub_category: sub_category.into(),
        }
    }

    /// Whether this error is a navigation contract violation
    pub fn is_navigation_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownCategory(_) | Self::UnknownSubCategory { .. } | Self::UnknownPrompt { .. }
        )
    }
}
