// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport to the lighting controller.
//!
//! The controller listens for WebSocket connections on
//! `ws://<host>:9000/ws/`. Every exchange opens its own connection, sends
//! one text frame, waits for one reply frame, and closes again. No
//! connection is reused between exchanges.
//!
//! # Transports
//!
//! - [`WebSocketTransport`]: the real controller connection
//! - Any other [`Transport`] implementation, e.g. a scripted stand-in for
//!   tests

mod config;
mod websocket;

pub use config::ControllerConfig;
pub use websocket::WebSocketTransport;

use crate::command::Command;
use crate::error::ProtocolError;

/// Raw reply frame received from the controller.
#[derive(Debug, Clone)]
pub struct CommandResponse {
    body: String,
}

impl CommandResponse {
    /// Creates a new command response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw reply text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consumes the response and returns the raw reply text.
    #[must_use]
    pub fn into_body(self) -> String {
        self.body
    }

    /// Parses the reply as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, crate::error::ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// A one-shot message exchange with a controller.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Returns the controller address, used to label log events.
    fn address(&self) -> &str;

    /// Sends one message and waits for exactly one reply.
    ///
    /// Any connection opened for the exchange is released before this
    /// returns, whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::ConnectionFailed` if no connection could be
    /// opened, and a transport error if sending or receiving failed.
    async fn exchange(&self, message: &str) -> Result<String, ProtocolError>;

    /// Sends a command and returns the controller's reply.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the exchange fails.
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, ProtocolError> {
        self.exchange(&command.to_message())
            .await
            .map(CommandResponse::new)
    }
}
