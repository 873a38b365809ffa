// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `JellyFish` Lib - A Rust library to drive JellyFish lighting controllers.
//!
//! This library exposes groups of controller zones as simple on/off devices,
//! ready to be plugged into a voice-assistant emulation host.
//!
//! # Supported Features
//!
//! - **Power control**: Switch zones on/off through `runPattern`
//! - **Zone resolution**: Address every controller zone when none are configured
//! - **Pattern validation**: Never send a pattern the controller does not know
//! - **State queries**: Report `on`, `off` or `unknown` from `ledPower`
//!
//! # Protocol
//!
//! The controller accepts JSON text frames on `ws://<controller>:9000/ws/`.
//! Every exchange uses a fresh connection: connect, send one frame, read one
//! frame, close.
//!
//! # Quick Start
//!
//! ```no_run
//! use jellyfish_lib::Device;
//!
//! #[tokio::main]
//! async fn main() {
//!     let device = Device::builder("Garage Lights", "192.168.3.1")
//!         .with_zones(["Front", "Back"])
//!         .with_pattern("Holidays/Valentines Day")
//!         .build();
//!
//!     // Power operations never fail; they report success as a bool.
//!     if device.power_on().await {
//!         println!("{} is {}", device.name(), device.query_state().await);
//!     }
//! }
//! ```
//!
//! ## From Host Configuration
//!
//! ```no_run
//! use jellyfish_lib::{Device, DeviceConfig};
//!
//! # fn example() -> jellyfish_lib::Result<()> {
//! let config = DeviceConfig::from_json(
//!     r#"{"port": 12300, "name": "JellyFish Lights", "controller_ip": "192.168.3.1"}"#,
//! )?;
//! let device = Device::from_config(&config);
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! Events are emitted through [`tracing`]. Nothing is printed unless the
//! host installs a subscriber.

pub mod command;
pub mod config;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod session;
pub mod types;

pub use command::{Command, QueryCommand, RunPatternCommand, ZoneListFormat};
pub use config::{DeviceConfig, StateSource};
pub use device::{Controllable, Device, DeviceBuilder};
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
pub use protocol::{CommandResponse, ControllerConfig, Transport, WebSocketTransport};
pub use response::{LedPowerResponse, PatternEntry, PatternListResponse, ZonesResponse};
pub use session::{PatternSelection, SessionState, ZoneSelection};
pub use types::{PatternPath, PowerState, ReportedState, ZoneSet};
