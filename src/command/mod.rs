// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controller command definitions.
//!
//! The controller speaks a small JSON protocol. Every outbound message is a
//! single text frame carrying an object with a `cmd` discriminator:
//!
//! | Command Type | `cmd` | Purpose |
//! |-------------|-------|---------|
//! | [`QueryCommand`] | `toCtlrGet` | Read `zones`, `patternFileList` or `ledPower` |
//! | [`RunPatternCommand`] | `toCtlrSet` | Switch zones on or off with a pattern |
//!
//! # Examples
//!
//! ```
//! use jellyfish_lib::command::{Command, QueryCommand, RunPatternCommand};
//! use jellyfish_lib::types::{PowerState, ZoneSet};
//!
//! assert_eq!(
//!     QueryCommand::Zones.to_message(),
//!     r#"{"cmd":"toCtlrGet","get":[["zones"]]}"#
//! );
//!
//! let zones: ZoneSet = ["Front", "Back"].into_iter().collect();
//! let cmd = RunPatternCommand::new(PowerState::On, zones);
//! assert_eq!(cmd.name(), "toCtlrSet");
//! ```

mod query;
mod run_pattern;

pub use query::QueryCommand;
pub use run_pattern::{RunPatternCommand, ZoneListFormat};

/// A command that can be sent to the controller.
pub trait Command {
    /// Returns the `cmd` discriminator, `toCtlrGet` or `toCtlrSet`.
    fn name(&self) -> &'static str;

    /// Returns the JSON object sent to the controller.
    fn payload(&self) -> serde_json::Value;

    /// Returns the text frame sent to the controller.
    ///
    /// Keys keep the order in which [`payload`](Self::payload) built them.
    fn to_message(&self) -> String {
        self.payload().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_compact_json() {
        let msg = QueryCommand::LedPower.to_message();
        assert!(!msg.contains(' '));
        assert!(!msg.contains('\n'));
    }

    #[test]
    fn names() {
        assert_eq!(QueryCommand::PatternFileList.name(), "toCtlrGet");
        let cmd = RunPatternCommand::new(crate::types::PowerState::Off, Default::default());
        assert_eq!(cmd.name(), "toCtlrSet");
    }
}
