// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! WebSocket transport implementation.

use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use crate::error::ProtocolError;
use crate::protocol::{ControllerConfig, Transport};

type ControllerStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// WebSocket connection factory for a lighting controller.
///
/// Holds no socket between calls: every [`exchange`](Transport::exchange)
/// connects, sends one text frame, reads one reply frame and closes.
///
/// # Examples
///
/// ```no_run
/// use jellyfish_lib::command::QueryCommand;
/// use jellyfish_lib::protocol::{ControllerConfig, Transport, WebSocketTransport};
///
/// # async fn example() -> jellyfish_lib::Result<()> {
/// let transport = WebSocketTransport::new(ControllerConfig::new("192.168.3.1"));
/// let reply = transport.send_command(&QueryCommand::LedPower).await?;
/// println!("{}", reply.body());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WebSocketTransport {
    config: ControllerConfig,
    url: String,
}

impl WebSocketTransport {
    /// Creates a transport for the given controller.
    #[must_use]
    pub fn new(config: ControllerConfig) -> Self {
        let url = config.ws_url();
        Self { config, url }
    }

    /// Returns the controller configuration.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Returns the WebSocket URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn exchange_once(&self, message: &str) -> Result<String, ProtocolError> {
        if self.config.host().is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "controller host is empty".to_string(),
            ));
        }

        let (mut stream, _) = connect_async(self.url.as_str())
            .await
            .map_err(|e| ProtocolError::ConnectionFailed(format!("{}: {e}", self.url)))?;

        let result = send_and_receive(&mut stream, message).await;

        // The peer may already be gone; the socket is released on drop either way.
        if let Err(e) = stream.close(None).await {
            tracing::trace!(url = %self.url, error = %e, "Closing controller connection failed");
        }

        result
    }
}

impl Transport for WebSocketTransport {
    fn address(&self) -> &str {
        self.config.host()
    }

    async fn exchange(&self, message: &str) -> Result<String, ProtocolError> {
        tracing::debug!(url = %self.url, message = %message, "Sending controller command");

        let reply = match self.config.timeout() {
            Some(timeout) => {
                // Safe: timeout in practical use will never exceed u64::MAX milliseconds
                #[allow(clippy::cast_possible_truncation)]
                let timeout_ms = timeout.as_millis() as u64;

                tokio::time::timeout(timeout, self.exchange_once(message))
                    .await
                    .map_err(|_| ProtocolError::Timeout(timeout_ms))?
            }
            None => self.exchange_once(message).await,
        }?;

        tracing::debug!(url = %self.url, reply = %reply, "Received controller reply");

        Ok(reply)
    }
}

/// Sends `message` and returns the first data frame sent back.
async fn send_and_receive(
    stream: &mut ControllerStream,
    message: &str,
) -> Result<String, ProtocolError> {
    stream
        .send(Message::Text(message.to_string()))
        .await
        .map_err(|e| ProtocolError::Transport(format!("send failed: {e}")))?;

    while let Some(frame) = stream.next().await {
        let frame = frame.map_err(|e| ProtocolError::Transport(format!("receive failed: {e}")))?;
        match frame {
            Message::Text(text) => return Ok(text),
            Message::Binary(bytes) => {
                return String::from_utf8(bytes).map_err(|e| {
                    ProtocolError::Transport(format!("reply is not valid UTF-8: {e}"))
                });
            }
            Message::Close(_) => return Err(ProtocolError::ConnectionClosed),
            Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => {}
        }
    }

    Err(ProtocolError::ConnectionClosed)
}
