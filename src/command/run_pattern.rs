// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power control through `runPattern`.

use serde::Deserialize;
use serde_json::json;

use crate::command::Command;
use crate::types::{PatternPath, PowerState, ZoneSet};

/// How zone names are laid out in the `zoneName` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneListFormat {
    /// All names joined with `","` into a single string entry.
    ///
    /// `["Front","Back"]` is sent as `["Front\",\"Back"]`.
    #[default]
    Joined,
    /// One string entry per zone: `["Front","Back"]`.
    Split,
}

/// Command switching zones on or off.
///
/// An absent pattern sends an empty `file`, which makes the controller keep
/// whatever pattern it is currently running.
///
/// # Examples
///
/// ```
/// use jellyfish_lib::command::{Command, RunPatternCommand};
/// use jellyfish_lib::types::{PowerState, ZoneSet};
///
/// let zones: ZoneSet = ["Front", "Back"].into_iter().collect();
/// let cmd = RunPatternCommand::new(PowerState::On, zones);
/// assert_eq!(
///     cmd.to_message(),
///     r#"{"cmd":"toCtlrSet","runPattern":{"file":"","data":"","id":"","state":1,"zoneName":["Front\",\"Back"]}}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPatternCommand {
    state: PowerState,
    zones: ZoneSet,
    pattern: Option<PatternPath>,
    zone_format: ZoneListFormat,
}

impl RunPatternCommand {
    /// Creates a command keeping the controller's current pattern.
    #[must_use]
    pub fn new(state: PowerState, zones: ZoneSet) -> Self {
        Self {
            state,
            zones,
            pattern: None,
            zone_format: ZoneListFormat::default(),
        }
    }

    /// Runs the given pattern file instead of the current one.
    #[must_use]
    pub fn with_pattern(mut self, pattern: Option<PatternPath>) -> Self {
        self.pattern = pattern;
        self
    }

    /// Sets how zone names are laid out.
    #[must_use]
    pub fn with_zone_format(mut self, zone_format: ZoneListFormat) -> Self {
        self.zone_format = zone_format;
        self
    }

    /// Returns the commanded state.
    #[must_use]
    pub fn state(&self) -> PowerState {
        self.state
    }

    /// Returns the addressed zones.
    #[must_use]
    pub fn zones(&self) -> &ZoneSet {
        &self.zones
    }

    /// Returns the pattern file, if any.
    #[must_use]
    pub fn pattern(&self) -> Option<&PatternPath> {
        self.pattern.as_ref()
    }

    fn file(&self) -> String {
        self.pattern
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    fn zone_names(&self) -> Vec<String> {
        match self.zone_format {
            ZoneListFormat::Joined => vec![self.zones.joined()],
            ZoneListFormat::Split => self.zones.as_slice().to_vec(),
        }
    }
}

impl Command for RunPatternCommand {
    fn name(&self) -> &'static str {
        "toCtlrSet"
    }

    fn payload(&self) -> serde_json::Value {
        json!({
            "cmd": self.name(),
            "runPattern": {
                "file": self.file(),
                "data": "",
                "id": "",
                "state": self.state.as_num(),
                "zoneName": self.zone_names(),
            },
        })
    }
}
