// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device builder.

use std::time::Duration;

use crate::command::ZoneListFormat;
use crate::config::{DeviceConfig, StateSource};
use crate::device::Device;
use crate::protocol::{ControllerConfig, Transport, WebSocketTransport};
use crate::session::SessionState;
use crate::types::{PatternPath, ZoneSet};

/// Builder for [`Device`].
///
/// Created with [`Device::builder`] or from a host entry with
/// [`DeviceBuilder::from_config`].
///
/// # Examples
///
/// ```
/// use jellyfish_lib::Device;
/// use jellyfish_lib::config::StateSource;
/// use std::time::Duration;
///
/// let device = Device::builder("Garage Lights", "192.168.3.1")
///     .with_zones(["Front", "Back"])
///     .with_pattern("Holidays/Valentines Day")
///     .with_state_source(StateSource::LastCommanded)
///     .with_timeout(Duration::from_secs(5))
///     .build();
///
/// assert_eq!(device.name(), "Garage Lights");
/// ```
#[derive(Debug, Clone)]
pub struct DeviceBuilder {
    name: String,
    controller: ControllerConfig,
    zones: ZoneSet,
    pattern: String,
    state_source: StateSource,
    zone_format: ZoneListFormat,
}

impl DeviceBuilder {
    /// Creates a builder for a device driving the controller at `controller_ip`.
    pub(crate) fn new(name: impl Into<String>, controller_ip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller: ControllerConfig::new(controller_ip),
            zones: ZoneSet::new(),
            pattern: String::new(),
            state_source: StateSource::default(),
            zone_format: ZoneListFormat::default(),
        }
    }

    /// Creates a builder from a host configuration entry.
    #[must_use]
    pub fn from_config(config: &DeviceConfig) -> Self {
        Self {
            name: config.name.clone(),
            controller: config.controller_config(),
            zones: config.zones.iter().map(String::as_str).collect(),
            pattern: config.pattern.clone(),
            state_source: config.state_source,
            zone_format: config.zone_format,
        }
    }

    /// Sets the zones to switch. Leave empty to switch every zone.
    #[must_use]
    pub fn with_zones<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.zones = zones.into_iter().collect();
        self
    }

    /// Sets the pattern file as `folder/name`. Empty keeps the current pattern.
    ///
    /// The string is sent exactly as given, surrounding whitespace included.
    /// A pattern the controller does not list is dropped with a warning
    /// before the first power command.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Sets where the reported power state comes from.
    #[must_use]
    pub fn with_state_source(mut self, state_source: StateSource) -> Self {
        self.state_source = state_source;
        self
    }

    /// Sets how zone names are laid out in power commands.
    #[must_use]
    pub fn with_zone_format(mut self, zone_format: ZoneListFormat) -> Self {
        self.zone_format = zone_format;
        self
    }

    /// Sets the controller WebSocket port.
    #[must_use]
    pub fn with_controller_port(mut self, port: u16) -> Self {
        self.controller = self.controller.with_port(port);
        self
    }

    /// Sets the deadline for each controller exchange.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.controller = self.controller.with_timeout(timeout);
        self
    }

    /// Removes the deadline for controller exchanges.
    #[must_use]
    pub fn without_timeout(mut self) -> Self {
        self.controller = self.controller.without_timeout();
        self
    }

    /// Returns the controller connection parameters.
    #[must_use]
    pub fn controller(&self) -> &ControllerConfig {
        &self.controller
    }

    /// Builds a device talking to the controller over WebSocket.
    ///
    /// No connection is opened until the first operation.
    #[must_use]
    pub fn build(self) -> Device<WebSocketTransport> {
        let transport = WebSocketTransport::new(self.controller.clone());
        self.build_with_transport(transport)
    }

    /// Builds a device over a caller-supplied transport.
    #[must_use]
    pub fn build_with_transport<T: Transport>(self, transport: T) -> Device<T> {
        // Only the empty string fails to parse, and it means "current pattern".
        let pattern = self.pattern.parse::<PatternPath>().ok();

        tracing::debug!(
            device = %self.name,
            address = %transport.address(),
            zones = %self.zones.joined(),
            pattern = %self.pattern,
            "Device initialized"
        );

        Device::new(
            self.name,
            transport,
            SessionState::new(self.zones, pattern),
            self.state_source,
            self.zone_format,
        )
    }
}
