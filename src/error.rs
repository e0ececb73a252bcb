#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the label generator."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint, so the lint is disabled
//! for the module.
//!
//! Every variant is terminal: the generator stops at the first error and
//! reports it with the offending URL or path.

use std::path::{Path, PathBuf};

/// Unified error type returned by every stage of the generator.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors that occur while reading the generator configuration.
    #[error("failed to read configuration from {path:?}: {source}")]
    ConfigIo {
        /// Location of the configuration file.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors for an in-memory document.
    #[error("failed to parse configuration: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Wraps YAML decoding errors for the configuration file at `path`.
    #[error("failed to parse configuration {path:?}: {source}")]
    Config {
        /// Location of the configuration file.
        path:   PathBuf,
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Returned when the configuration violates invariants.
    #[error("invalid configuration: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {source}")]
    Client {
        /// Underlying reqwest error.
        source: reqwest::Error
    },
    /// Network failure or timeout while fetching a descriptor.
    #[error("error calling url ({url}): {source}")]
    Transport {
        /// Descriptor URL being fetched.
        url:    String,
        /// Underlying reqwest error.
        source: reqwest::Error
    },
    /// The descriptor endpoint answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// Descriptor URL being fetched.
        url:    String,
        /// HTTP status code returned by the server.
        status: u16
    },
    /// The descriptor body is not a JSON object.
    #[error("error decoding JSON response from {url}: {source}")]
    Decode {
        /// Descriptor URL being fetched.
        url:    String,
        /// Underlying serde_json error.
        source: serde_json::Error
    },
    /// The descriptor is JSON but does not carry a usable `tags` list.
    #[error("unexpected descriptor shape at {url}: {message}")]
    Shape {
        /// Descriptor URL being processed.
        url:     String,
        /// Description of the mismatch.
        message: String
    },
    /// None of the known product tokens occur in the descriptor URL.
    #[error("no known product found in url ({url})")]
    UnknownProduct {
        /// Descriptor URL being processed.
        url: String
    },
    /// A synthesized label cannot be rendered safely.
    #[error("failed to render labels: {message}")]
    Template {
        /// Description of the rendering problem.
        message: String
    },
    /// Wraps I/O errors that occur while appending to the output artifact.
    #[error("error writing to file ({path:?}): {source}")]
    Output {
        /// Location of the output artifact.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Constructs a template error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the rendering failure.
    pub fn template<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Template {
            message: message.into()
        }
    }

    /// Constructs a shape error for the descriptor fetched from `url`.
    pub fn shape<M>(url: &str, message: M) -> Self
    where
        M: Into<String>
    {
        Self::Shape {
            url:     url.to_owned(),
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation
    /// and is what the CLI prints before exiting.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

/// Creates an [`Error::ConfigIo`] variant capturing the failing path and
/// source.
///
/// # Parameters
///
/// * `path` - Location of the configuration file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn config_io_error(path: &Path, source: std::io::Error) -> Error {
    Error::ConfigIo {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::Output`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the output artifact that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn output_error(path: &Path, source: std::io::Error) -> Error {
    Error::Output {
        path: path.to_path_buf(),
        source
    }
}
