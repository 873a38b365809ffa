// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `JellyFish` library.
//!
//! Failures fall into three families: value validation, communication with
//! the controller, and decoding of controller replies. None of them escape
//! the power and state operations of [`Device`](crate::Device); they are
//! returned by the lower layers and translated into safe defaults there.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the controller.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a controller reply.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns true if the connection to the controller could not be opened.
    #[must_use]
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            Self::Protocol(ProtocolError::ConnectionFailed(_) | ProtocolError::InvalidAddress(_))
        )
    }

    /// Returns true if the exchange failed after the connection was open.
    #[must_use]
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::Protocol(
                ProtocolError::Transport(_)
                    | ProtocolError::ConnectionClosed
                    | ProtocolError::Timeout(_)
            )
        )
    }

    /// Returns true if the controller replied with something undecodable.
    #[must_use]
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// A pattern path is empty.
    #[error("invalid pattern path: {0:?}")]
    InvalidPatternPath(String),
}

/// Errors related to communication with the controller.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The WebSocket connection or handshake failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Sending or receiving a frame failed after connecting.
    #[error("transport error: {0}")]
    Transport(String),

    /// The controller closed the connection before replying.
    #[error("connection closed before a reply was received")]
    ConnectionClosed,

    /// The exchange did not complete within the configured deadline.
    #[error("exchange timed out after {0} ms")]
    Timeout(u64),

    /// Invalid controller address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing controller replies.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the reply.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Unexpected reply format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("zones".to_string());
        assert_eq!(err.to_string(), "missing field in response: zones");
    }

    #[test]
    fn timeout_display() {
        let err = ProtocolError::Timeout(2500);
        assert_eq!(err.to_string(), "exchange timed out after 2500 ms");
    }

    #[test]
    fn error_classification() {
        let conn: Error = ProtocolError::ConnectionFailed("refused".to_string()).into();
        assert!(conn.is_connection_error());
        assert!(!conn.is_transport_error());

        let closed: Error = ProtocolError::ConnectionClosed.into();
        assert!(closed.is_transport_error());

        let parse: Error = ParseError::MissingField("ledPower".to_string()).into();
        assert!(parse.is_decode_error());
        assert!(!parse.is_connection_error());
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::InvalidPatternPath(String::new()).into();
        assert!(matches!(err, Error::Value(ValueError::InvalidPatternPath(_))));
    }
}
