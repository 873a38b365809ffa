// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capability interface consumed by device-emulation hosts.

use crate::types::ReportedState;

/// An on/off device a host can expose to a voice assistant.
///
/// None of the operations fail: errors are logged and turned into a safe
/// answer, because the host has no better way to handle them than to tell
/// the assistant the command did not work.
///
/// # Examples
///
/// ```no_run
/// use jellyfish_lib::{Controllable, Device};
///
/// async fn handle<D: Controllable>(device: &D, on: bool) -> bool {
///     if on { device.power_on().await } else { device.power_off().await }
/// }
///
/// # async fn example() {
/// let device = Device::builder("Porch", "192.168.3.1").build();
/// handle(&device, true).await;
/// println!("{} is {}", device.name(), device.query_state().await);
/// # }
/// ```
#[allow(async_fn_in_trait)]
pub trait Controllable {
    /// Returns the display name.
    fn name(&self) -> &str;

    /// Switches the device on. Returns true if the command went through.
    async fn power_on(&self) -> bool;

    /// Switches the device off. Returns true if the command went through.
    async fn power_off(&self) -> bool;

    /// Returns the current power state.
    async fn query_state(&self) -> ReportedState;
}
