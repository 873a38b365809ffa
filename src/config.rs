// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device configuration as supplied by the host.

use std::time::Duration;

use serde::Deserialize;

use crate::command::ZoneListFormat;
use crate::error::ParseError;
use crate::protocol::ControllerConfig;

/// Where [`Device::query_state`](crate::Device::query_state) gets its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateSource {
    /// Ask the controller for `ledPower` on every query.
    ///
    /// Reflects changes made by other apps, at the cost of a round trip.
    #[default]
    Controller,
    /// Report the last state commanded through this device.
    ///
    /// No network traffic, but blind to changes made elsewhere. Reports
    /// unknown until a power command has succeeded.
    LastCommanded,
}

/// One emulated device entry from the host configuration.
///
/// Field names match the host's plugin configuration, so an entry can be
/// deserialized as-is:
///
/// ```
/// use jellyfish_lib::config::{DeviceConfig, StateSource};
///
/// let config = DeviceConfig::from_json(r#"{
///     "port": 12301,
///     "name": "Garage Lights",
///     "controller_ip": "192.168.3.1",
///     "pattern": "Holidays/Valentines Day",
///     "zones": ["Front", "Back"]
/// }"#).unwrap();
///
/// assert_eq!(config.name, "Garage Lights");
/// assert_eq!(config.zones, ["Front", "Back"]);
/// assert_eq!(config.state_source, StateSource::Controller);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceConfig {
    /// Port the host exposes the emulated device on. Not used by this crate.
    pub port: u16,
    /// Display name of the emulated device.
    pub name: String,
    /// Address of the lighting controller.
    #[serde(default = "default_controller_ip")]
    pub controller_ip: String,
    /// Pattern file as `folder/name`; empty keeps the current pattern.
    #[serde(default)]
    pub pattern: String,
    /// Zones to switch; empty means every zone on the controller.
    #[serde(default)]
    pub zones: Vec<String>,
    /// Source of the reported power state.
    #[serde(default)]
    pub state_source: StateSource,
    /// Layout of the `zoneName` array.
    #[serde(default)]
    pub zone_format: ZoneListFormat,
    /// Controller WebSocket port, if not the default.
    #[serde(default)]
    pub controller_port: Option<u16>,
    /// Exchange deadline in milliseconds; `0` disables it.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_controller_ip() -> String {
    DeviceConfig::DEFAULT_CONTROLLER_IP.to_string()
}

impl DeviceConfig {
    /// Factory address of the controller's access point.
    pub const DEFAULT_CONTROLLER_IP: &'static str = "192.168.3.1";

    /// Creates a configuration with defaults for everything but the name.
    #[must_use]
    pub fn new(port: u16, name: impl Into<String>) -> Self {
        Self {
            port,
            name: name.into(),
            controller_ip: default_controller_ip(),
            pattern: String::new(),
            zones: Vec::new(),
            state_source: StateSource::default(),
            zone_format: ZoneListFormat::default(),
            controller_port: None,
            timeout_ms: None,
        }
    }

    /// Parses one device entry from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the entry is malformed or lacks `port`
    /// or `name`.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Sets the controller address.
    #[must_use]
    pub fn with_controller_ip(mut self, controller_ip: impl Into<String>) -> Self {
        self.controller_ip = controller_ip.into();
        self
    }

    /// Sets the pattern file.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Sets the zones.
    #[must_use]
    pub fn with_zones<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.zones = zones.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the state source.
    #[must_use]
    pub fn with_state_source(mut self, state_source: StateSource) -> Self {
        self.state_source = state_source;
        self
    }

    /// Builds the controller connection parameters for this entry.
    #[must_use]
    pub fn controller_config(&self) -> ControllerConfig {
        let mut config = ControllerConfig::new(self.controller_ip.clone());
        if let Some(port) = self.controller_port {
            config = config.with_port(port);
        }
        match self.timeout_ms {
            Some(0) => config.without_timeout(),
            Some(ms) => config.with_timeout(Duration::from_millis(ms)),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_entry_uses_defaults() {
        let config = DeviceConfig::from_json(r#"{"port": 12300, "name": "JellyFish Lights"}"#)
            .unwrap();
        assert_eq!(config, DeviceConfig::new(12300, "JellyFish Lights"));
        assert_eq!(config.controller_ip, "192.168.3.1");
        assert!(config.pattern.is_empty());
        assert!(config.zones.is_empty());
        assert_eq!(
            config.controller_config(),
            ControllerConfig::new("192.168.3.1")
        );
    }

    #[test]
    fn optional_keys() {
        let config = DeviceConfig::from_json(
            r#"{
                "port": 12302,
                "name": "Eaves",
                "state_source": "last_commanded",
                "zone_format": "split",
                "controller_port": 9100,
                "timeout_ms": 2500
            }"#,
        )
        .unwrap();
        assert_eq!(config.state_source, StateSource::LastCommanded);
        assert_eq!(config.zone_format, ZoneListFormat::Split);
        let controller = config.controller_config();
        assert_eq!(controller.port(), 9100);
        assert_eq!(controller.timeout(), Some(Duration::from_millis(2500)));
    }

    #[test]
    fn zero_timeout_disables_deadline() {
        let config =
            DeviceConfig::from_json(r#"{"port": 1, "name": "x", "timeout_ms": 0}"#).unwrap();
        assert_eq!(config.controller_config().timeout(), None);
    }

    #[test]
    fn missing_name_is_rejected() {
        let err = DeviceConfig::from_json(r#"{"port": 12300}"#).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn unknown_state_source_is_rejected() {
        let err = DeviceConfig::from_json(r#"{"port": 1, "name": "x", "state_source": "cache"}"#)
            .unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn builder_methods() {
        let config = DeviceConfig::new(12301, "Garage Lights")
            .with_controller_ip("10.0.0.9")
            .with_pattern("Holidays/Valentines Day")
            .with_zones(["Front", "Back"])
            .with_state_source(StateSource::LastCommanded);
        assert_eq!(config.controller_ip, "10.0.0.9");
        assert_eq!(config.zones, ["Front", "Back"]);
    }
}
