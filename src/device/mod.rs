// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level device abstraction over controller zones.
//!
//! A [`Device`] maps one emulated on/off device to a set of controller
//! zones. Every power command runs the session pre-flight steps (zone
//! resolution, then pattern validation) before sending `runPattern`:
//!
//! ```no_run
//! use jellyfish_lib::Device;
//!
//! # async fn example() {
//! let device = Device::builder("JellyFish Lights", "192.168.3.1")
//!     .with_zones(["All Lights"])
//!     .build();
//!
//! if !device.power_on().await {
//!     eprintln!("controller did not take the command");
//! }
//! # }
//! ```

mod builder;
mod controllable;

pub use builder::DeviceBuilder;
pub use controllable::Controllable;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::Instrument;

use crate::command::{Command, QueryCommand, RunPatternCommand, ZoneListFormat};
use crate::config::{DeviceConfig, StateSource};
use crate::error::Error;
use crate::protocol::{CommandResponse, Transport, WebSocketTransport};
use crate::response::LedPowerResponse;
use crate::session::{SessionState, resolve_zones, validate_pattern};
use crate::types::{PowerState, ReportedState};

/// One emulated device driving a set of controller zones.
///
/// Distinct devices are independent and may be used from separate tasks.
/// Overlapping calls on the same device are serialized: each operation
/// holds the device for all of its round trips.
///
/// # Type Parameter
///
/// `T` is the [`Transport`] used to reach the controller, a
/// [`WebSocketTransport`] unless another one is injected with
/// [`DeviceBuilder::build_with_transport`].
#[derive(Debug)]
pub struct Device<T: Transport = WebSocketTransport> {
    name: String,
    transport: T,
    state_source: StateSource,
    zone_format: ZoneListFormat,
    state: RwLock<SessionState>,
    call_lock: Mutex<()>,
}

impl Device<WebSocketTransport> {
    /// Creates a builder for a device driving the controller at `controller_ip`.
    #[must_use]
    pub fn builder(name: impl Into<String>, controller_ip: impl Into<String>) -> DeviceBuilder {
        DeviceBuilder::new(name, controller_ip)
    }

    /// Creates a device from a host configuration entry.
    #[must_use]
    pub fn from_config(config: &DeviceConfig) -> Self {
        DeviceBuilder::from_config(config).build()
    }
}

impl<T: Transport> Device<T> {
    pub(crate) fn new(
        name: String,
        transport: T,
        state: SessionState,
        state_source: StateSource,
        zone_format: ZoneListFormat,
    ) -> Self {
        Self {
            name,
            transport,
            state_source,
            zone_format,
            state: RwLock::new(state),
            call_lock: Mutex::new(()),
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns where [`query_state`](Self::query_state) gets its answer.
    #[must_use]
    pub fn state_source(&self) -> StateSource {
        self.state_source
    }

    /// Returns a snapshot of the session state.
    ///
    /// Does not touch the network.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    // ========== Power Control ==========

    /// Switches the device's zones on.
    ///
    /// Returns true if the controller acknowledged the command. Failures
    /// are logged, never returned.
    pub async fn power_on(&self) -> bool {
        self.command_power(PowerState::On).await
    }

    /// Switches the device's zones off.
    ///
    /// Returns true if the controller acknowledged the command. Failures
    /// are logged, never returned.
    pub async fn power_off(&self) -> bool {
        self.command_power(PowerState::Off).await
    }

    async fn command_power(&self, state: PowerState) -> bool {
        match self.set_power(state).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(
                    device = %self.name,
                    address = %self.transport.address(),
                    state = %state,
                    error = %e,
                    "Power command failed"
                );
                false
            }
        }
    }

    /// Switches the device's zones to `state` and returns the raw reply.
    ///
    /// Zone resolution and pattern validation run first. Their failures
    /// only degrade the command (no zones, current pattern) and are logged;
    /// the returned error is that of the `runPattern` exchange itself.
    ///
    /// # Errors
    ///
    /// Returns error if the power command cannot be exchanged.
    pub async fn set_power(&self, state: PowerState) -> Result<CommandResponse, Error> {
        let span = tracing::info_span!("set_power", device = %self.name, state = %state);
        self.set_power_locked(state).instrument(span).await
    }

    async fn set_power_locked(&self, state: PowerState) -> Result<CommandResponse, Error> {
        let _guard = self.call_lock.lock().await;

        let mut session = self.state.read().clone();
        self.prepare(&mut session).await;
        *self.state.write() = session.clone();

        let command = RunPatternCommand::new(state, session.target_zones())
            .with_pattern(session.pattern().pattern().cloned())
            .with_zone_format(self.zone_format);

        tracing::info!(
            address = %self.transport.address(),
            zones = %command.zones().joined(),
            pattern = %command.pattern().map(ToString::to_string).unwrap_or_default(),
            "Sending power command"
        );

        let response = self.transport.send_command(&command).await?;
        self.state.write().record_commanded(state);
        Ok(response)
    }

    /// Runs the pre-flight steps, logging rather than propagating failures.
    async fn prepare(&self, session: &mut SessionState) {
        if let Err(e) = resolve_zones(&self.transport, session).await {
            tracing::warn!(
                address = %self.transport.address(),
                error = %e,
                "Zone resolution failed, command will address no zones"
            );
        }

        if let Err(e) = validate_pattern(&self.transport, session).await {
            tracing::warn!(
                address = %self.transport.address(),
                error = %e,
                "Pattern validation failed, using current pattern instead"
            );
        }
    }

    // ========== State Query ==========

    /// Returns whether the device is on, off, or unknown.
    ///
    /// With [`StateSource::Controller`] the controller is asked and any
    /// failure yields [`ReportedState::Unknown`]. With
    /// [`StateSource::LastCommanded`] the last successful power command
    /// is reported.
    pub async fn query_state(&self) -> ReportedState {
        match self.state_source {
            StateSource::LastCommanded => {
                let last = self.state.read().last_commanded();
                last.into()
            }
            StateSource::Controller => match self.query_power().await {
                Ok(state) => state.into(),
                Err(e) => {
                    tracing::warn!(
                        device = %self.name,
                        address = %self.transport.address(),
                        error = %e,
                        "Power state query failed"
                    );
                    ReportedState::Unknown
                }
            },
        }
    }

    /// Asks the controller whether any lights are on.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the reply has no `ledPower`.
    pub async fn query_power(&self) -> Result<PowerState, Error> {
        let _guard = self.call_lock.lock().await;
        let response = self.transport.send_command(&QueryCommand::LedPower).await?;
        Ok(LedPowerResponse::parse(response.body())?.power_state())
    }

    /// Sends an arbitrary command to the controller.
    ///
    /// Bypasses zone resolution and pattern validation.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails.
    pub async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, Error> {
        let _guard = self.call_lock.lock().await;
        self.transport
            .send_command(command)
            .await
            .map_err(Error::Protocol)
    }
}

impl<T: Transport> Controllable for Device<T> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn power_on(&self) -> bool {
        Self::power_on(self).await
    }

    async fn power_off(&self) -> bool {
        Self::power_off(self).await
    }

    async fn query_state(&self) -> ReportedState {
        Self::query_state(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;
    use crate::session::testing::ScriptedTransport;
    use crate::session::PatternSelection;

    const ACK: &str = r#"{"cmd":"fromCtlr","runPattern":{}}"#;

    fn device(transport: ScriptedTransport, zones: &[&str], pattern: &str) -> Device<ScriptedTransport> {
        Device::builder("Test Lights", "unused")
            .with_zones(zones.iter().copied())
            .with_pattern(pattern)
            .build_with_transport(transport)
    }

    #[tokio::test]
    async fn power_on_with_configured_zones_sends_one_command() {
        let device = device(ScriptedTransport::new().reply(ACK), &["Front", "Back"], "");

        assert!(device.power_on().await);
        assert_eq!(
            device.transport().sent(),
            [
                r#"{"cmd":"toCtlrSet","runPattern":{"file":"","data":"","id":"","state":1,"zoneName":["Front\",\"Back"]}}"#
            ]
        );
    }

    #[tokio::test]
    async fn power_off_resolves_then_validates_then_sends() {
        let transport = ScriptedTransport::new()
            .reply(r#"{"zones":{"All":{},"Porch":{}}}"#)
            .reply(r#"{"patternFileList":[{"folders":"Holidays","name":"Valentines Day"}]}"#)
            .reply(ACK);
        let device = device(transport, &[], "Holidays/Valentines Day");

        assert!(device.power_off().await);

        let sent = device.transport().sent();
        assert_eq!(sent.len(), 3);
        assert!(sent[0].contains(r#"[["zones"]]"#));
        assert!(sent[1].contains(r#"[["patternFileList"]]"#));
        assert_eq!(
            sent[2],
            r#"{"cmd":"toCtlrSet","runPattern":{"file":"Holidays/Valentines Day","data":"","id":"","state":0,"zoneName":["All\",\"Porch"]}}"#
        );
    }

    #[tokio::test]
    async fn unknown_pattern_is_not_sent() {
        let transport = ScriptedTransport::new()
            .reply(r#"{"patternFileList":[{"folders":"Holidays","name":"Valentines Day"}]}"#)
            .reply(ACK);
        let device = device(transport, &["Front"], "Holidays/Halloween");

        assert!(device.power_on().await);

        let sent = device.transport().sent();
        let command: serde_json::Value = serde_json::from_str(&sent[1]).unwrap();
        assert_eq!(command["runPattern"]["file"], "");
        assert_eq!(device.state().pattern(), &PatternSelection::Current);
    }

    #[tokio::test]
    async fn failed_command_returns_false_and_keeps_state() {
        let transport = ScriptedTransport::new()
            .fail(ProtocolError::ConnectionFailed("unreachable".to_string()));
        let device = device(transport, &["Front", "Back"], "");
        let before = device.state();

        assert!(!device.power_on().await);
        assert_eq!(device.state(), before);
    }

    #[tokio::test]
    async fn unresolved_zones_degrade_to_empty_zone_list() {
        let transport = ScriptedTransport::new()
            .fail(ProtocolError::ConnectionFailed("refused".to_string()))
            .reply(ACK);
        let device = device(transport, &[], "");

        assert!(device.power_on().await);

        let sent = device.transport().sent();
        assert!(sent[1].ends_with(r#""zoneName":[""]}}"#));
        assert!(device.state().zones().is_unresolved());
    }

    #[tokio::test]
    async fn resolved_zones_survive_a_failed_command() {
        let transport = ScriptedTransport::new()
            .reply(r#"{"zones":{"Roof":{}}}"#)
            .fail(ProtocolError::Transport("reset".to_string()))
            .reply(ACK);
        let device = device(transport, &[], "");

        assert!(!device.power_on().await);
        assert_eq!(device.state().target_zones().as_slice(), ["Roof"]);

        assert!(device.power_on().await);
        assert_eq!(device.transport().sent().len(), 3);
    }

    #[tokio::test]
    async fn query_state_from_controller() {
        let transport = ScriptedTransport::new()
            .reply(r#"{"ledPower":true}"#)
            .reply(r#"{"ledPower":false}"#)
            .reply(r#"{"cmd":"fromCtlr"}"#)
            .fail(ProtocolError::Timeout(10_000));
        let device = device(transport, &["All"], "");

        assert_eq!(device.query_state().await, ReportedState::On);
        assert_eq!(device.query_state().await, ReportedState::Off);
        assert_eq!(device.query_state().await, ReportedState::Unknown);
        assert_eq!(device.query_state().await, ReportedState::Unknown);
        assert_eq!(
            device.transport().sent()[0],
            r#"{"cmd":"toCtlrGet","get":[["ledPower"]]}"#
        );
    }

    #[tokio::test]
    async fn query_state_from_last_command() {
        let transport = ScriptedTransport::new()
            .reply(ACK)
            .fail(ProtocolError::ConnectionClosed);
        let device = Device::builder("Test Lights", "unused")
            .with_zones(["All"])
            .with_state_source(StateSource::LastCommanded)
            .build_with_transport(transport);

        assert_eq!(device.query_state().await, ReportedState::Unknown);
        assert!(device.power_on().await);
        assert_eq!(device.query_state().await, ReportedState::On);

        // A failed power-off leaves the last known state in place.
        assert!(!device.power_off().await);
        assert_eq!(device.query_state().await, ReportedState::On);
        assert_eq!(device.transport().sent().len(), 2);
    }

    #[tokio::test]
    async fn send_command_bypasses_preflight() {
        let transport = ScriptedTransport::new().reply(r#"{"zones":{"A":{}}}"#);
        let device = device(transport, &[], "Holidays/Halloween");

        let response = device.send_command(&QueryCommand::Zones).await.unwrap();

        assert!(response.body().contains("zones"));
        assert_eq!(device.transport().sent().len(), 1);
        assert!(device.state().zones().is_unresolved());
    }

    #[tokio::test]
    async fn controllable_delegates_to_device() {
        async fn cycle<D: Controllable>(device: &D) -> (bool, bool) {
            (device.power_on().await, device.power_off().await)
        }

        let transport = ScriptedTransport::new().reply(ACK).reply(ACK);
        let device = device(transport, &["All"], "");

        assert_eq!(cycle(&device).await, (true, true));
        assert_eq!(Controllable::name(&device), "Test Lights");
    }
}
