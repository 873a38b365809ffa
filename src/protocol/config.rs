// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controller connection parameters.

use std::time::Duration;

/// Connection parameters for a lighting controller.
///
/// Each exchange is an independent connection, so this only holds what is
/// needed to open one: where to connect and how long to wait.
///
/// # Examples
///
/// ```
/// use jellyfish_lib::protocol::ControllerConfig;
/// use std::time::Duration;
///
/// let config = ControllerConfig::new("192.168.3.1");
/// assert_eq!(config.ws_url(), "ws://192.168.3.1:9000/ws/");
///
/// let config = ControllerConfig::new("192.168.3.1")
///     .with_port(9001)
///     .with_timeout(Duration::from_secs(3));
/// assert_eq!(config.timeout(), Some(Duration::from_secs(3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    host: String,
    port: u16,
    path: String,
    timeout: Option<Duration>,
}

impl ControllerConfig {
    /// Default controller WebSocket port.
    pub const DEFAULT_PORT: u16 = 9000;
    /// Default WebSocket path.
    pub const DEFAULT_PATH: &'static str = "/ws/";
    /// Default exchange deadline.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the controller at `host`.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            path: Self::DEFAULT_PATH.to_string(),
            timeout: Some(Self::DEFAULT_TIMEOUT),
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets a custom WebSocket path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the deadline for a whole exchange (connect, send, receive).
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Removes the exchange deadline.
    ///
    /// A controller that accepts the connection but never replies will
    /// then block the caller indefinitely.
    #[must_use]
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the WebSocket path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the exchange deadline, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Builds the WebSocket URL.
    #[must_use]
    pub fn ws_url(&self) -> String {
        let path = if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        };
        format!("ws://{}:{}{path}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = ControllerConfig::new("192.168.3.1");
        assert_eq!(config.host(), "192.168.3.1");
        assert_eq!(config.port(), 9000);
        assert_eq!(config.path(), "/ws/");
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn ws_url_custom_port_and_path() {
        let config = ControllerConfig::new("jellyfish.local")
            .with_port(8080)
            .with_path("socket");
        assert_eq!(config.ws_url(), "ws://jellyfish.local:8080/socket");
    }

    #[test]
    fn without_timeout() {
        let config = ControllerConfig::new("192.168.3.1").without_timeout();
        assert_eq!(config.timeout(), None);
    }
}
