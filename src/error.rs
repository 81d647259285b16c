// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `LumoR` library.
//!
//! Failures split into three groups: value validation, transport, and JSON
//! parsing. Note that fire-and-forget dispatch never reports transport
//! errors to the caller; [`ProtocolError`] only surfaces from the awaitable
//! send path.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during transport communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while encoding or decoding a registry document.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A control event named a bulb the registry does not contain.
    #[error("no bulb named {0:?} in the registry")]
    BulbNotFound(String),
}

/// Errors related to value validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A color string could not be parsed as hex.
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),
}

/// Errors related to transport communication.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid endpoint address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to the registry JSON codec.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON encoding or decoding failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidHexColor("ZZZZZZ".to_string());
        assert_eq!(err.to_string(), "invalid hex color: ZZZZZZ");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidHexColor("nope".to_string());
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::InvalidHexColor(_))));
    }

    #[test]
    fn bulb_not_found_display() {
        let err = Error::BulbNotFound("porch".to_string());
        assert_eq!(err.to_string(), "no bulb named \"porch\" in the registry");
    }

    #[test]
    fn parse_error_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ParseError = json_err.into();
        assert!(err.to_string().starts_with("JSON parse error"));
    }
}
