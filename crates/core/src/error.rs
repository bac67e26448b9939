//! Error type shared by the fetch, generate and write stages.

use std::path::PathBuf;

use crate::infer::InferenceError;

/// All errors that can occur while turning an endpoint into a type file.
#[derive(thiserror::Error, Debug)]
pub enum ArtGenError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    HttpStatus {
        /// Requested URL.
        url: String,
        /// Status returned by the server.
        status: reqwest::StatusCode,
    },

    /// The request never produced a readable response.
    #[error("{source}")]
    Network {
        /// Requested URL.
        url: String,
        /// Transport failure.
        #[source]
        source: reqwest::Error,
    },

    /// The body was not JSON.
    #[error("Response is not valid JSON: {source}")]
    MalformedJson {
        /// Requested URL.
        url: String,
        /// Parser failure.
        #[source]
        source: serde_json::Error,
    },

    /// The body was JSON `null`.
    #[error("Response contained no data")]
    EmptyPayload {
        /// Requested URL.
        url: String,
    },

    /// Nothing usable was left after sanitizing the URL or path.
    #[error("Could not derive a type name from {origin}")]
    EmptyTypeName {
        /// URL or path the name was derived from.
        origin: String,
    },

    /// The inference engine rejected the input.
    #[error(transparent)]
    Inference(#[from] InferenceError),

    /// An operator-supplied path failed validation.
    #[error("{0}")]
    FilesystemValidation(String),

    /// The output directory could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A generated file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl ArtGenError {
    /// The URL a fetch-stage error refers to, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::HttpStatus { url, .. }
            | Self::Network { url, .. }
            | Self::MalformedJson { url, .. }
            | Self::EmptyPayload { url } => Some(url),
            _ => None,
        }
    }
}

/// Result alias used throughout `artgen-core`.
pub type Result<T, E = ArtGenError> = std::result::Result<T, E>;
