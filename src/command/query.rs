// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only controller queries.

use serde_json::json;

use crate::command::Command;

/// Command reading one controller property.
///
/// # Examples
///
/// ```
/// use jellyfish_lib::command::{Command, QueryCommand};
///
/// assert_eq!(
///     QueryCommand::PatternFileList.to_message(),
///     r#"{"cmd":"toCtlrGet","get":[["patternFileList"]]}"#
/// );
/// assert_eq!(
///     QueryCommand::LedPower.to_message(),
///     r#"{"cmd":"toCtlrGet","get":[["ledPower"]]}"#
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryCommand {
    /// All zones known to the controller.
    Zones,
    /// The pattern catalog.
    PatternFileList,
    /// Whether any lights are currently on.
    LedPower,
}

impl QueryCommand {
    /// Returns the property name, which is also the key of the reply.
    #[must_use]
    pub const fn property(&self) -> &'static str {
        match self {
            Self::Zones => "zones",
            Self::PatternFileList => "patternFileList",
            Self::LedPower => "ledPower",
        }
    }
}

impl Command for QueryCommand {
    fn name(&self) -> &'static str {
        "toCtlrGet"
    }

    fn payload(&self) -> serde_json::Value {
        json!({
            "cmd": self.name(),
            "get": [[self.property()]],
        })
    }
}
