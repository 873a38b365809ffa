// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-device session record and the pre-flight steps that update it.
//!
//! Before any power command the session goes through two reconciliation
//! steps against the controller:
//!
//! 1. [`resolve_zones`]: an empty zone selection is replaced by every zone
//!    the controller knows. Once resolved it is never queried again.
//! 2. [`validate_pattern`]: a configured pattern the controller does not
//!    list is dropped for good. Sending an unknown pattern file can hang
//!    the controller firmware until it is power cycled.
//!
//! Both steps mutate a [`SessionState`] taken by exclusive reference, so
//! every transition is visible to the caller and testable in isolation.

mod resolver;
mod validator;

pub use resolver::{ZoneResolution, resolve_zones};
pub use validator::{PatternValidation, validate_pattern};

use crate::types::{PatternPath, PowerState, ZoneSet};

/// Zones addressed by a device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ZoneSelection {
    /// No zones yet; resolve to all controller zones on first use.
    #[default]
    Unresolved,
    /// A non-empty set of zones, configured or resolved.
    Resolved(ZoneSet),
}

impl ZoneSelection {
    /// Returns the zones, if resolved.
    #[must_use]
    pub fn zones(&self) -> Option<&ZoneSet> {
        match self {
            Self::Unresolved => None,
            Self::Resolved(zones) => Some(zones),
        }
    }

    /// Returns true if zones still have to be fetched from the controller.
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved)
    }
}

impl From<ZoneSet> for ZoneSelection {
    /// An empty set is the same as no selection.
    fn from(zones: ZoneSet) -> Self {
        if zones.is_empty() {
            Self::Unresolved
        } else {
            Self::Resolved(zones)
        }
    }
}

/// Pattern run by a device's power commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PatternSelection {
    /// Keep whatever pattern the controller is currently running.
    #[default]
    Current,
    /// Run a specific pattern file.
    Named(PatternPath),
}

impl PatternSelection {
    /// Returns the named pattern, if any.
    #[must_use]
    pub fn pattern(&self) -> Option<&PatternPath> {
        match self {
            Self::Current => None,
            Self::Named(pattern) => Some(pattern),
        }
    }
}

impl From<Option<PatternPath>> for PatternSelection {
    fn from(pattern: Option<PatternPath>) -> Self {
        pattern.map_or(Self::Current, Self::Named)
    }
}

/// Mutable state of one device session.
///
/// Lives as long as the device and is never persisted: resolved zones and
/// dropped patterns are not written back to the host configuration.
///
/// # Examples
///
/// ```
/// use jellyfish_lib::session::SessionState;
/// use jellyfish_lib::types::ZoneSet;
///
/// let state = SessionState::new(ZoneSet::new(), None);
/// assert!(state.zones().is_unresolved());
/// assert!(state.pattern().pattern().is_none());
/// assert!(state.last_commanded().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    zones: ZoneSelection,
    pattern: PatternSelection,
    last_commanded: Option<PowerState>,
}

impl SessionState {
    /// Creates the initial record from configuration.
    #[must_use]
    pub fn new(zones: ZoneSet, pattern: Option<PatternPath>) -> Self {
        Self {
            zones: zones.into(),
            pattern: pattern.into(),
            last_commanded: None,
        }
    }

    /// Returns the zone selection.
    #[must_use]
    pub fn zones(&self) -> &ZoneSelection {
        &self.zones
    }

    /// Returns the pattern selection.
    #[must_use]
    pub fn pattern(&self) -> &PatternSelection {
        &self.pattern
    }

    /// Returns the last power state successfully commanded, if any.
    #[must_use]
    pub fn last_commanded(&self) -> Option<PowerState> {
        self.last_commanded
    }

    /// Returns the zones a power command should address right now.
    ///
    /// Empty while unresolved.
    #[must_use]
    pub fn target_zones(&self) -> ZoneSet {
        self.zones.zones().cloned().unwrap_or_default()
    }

    pub(crate) fn record_commanded(&mut self, state: PowerState) {
        self.last_commanded = Some(state);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted transport shared by the session and device tests.

    use std::collections::VecDeque;

    use parking_lot::Mutex;

    use crate::error::ProtocolError;
    use crate::protocol::Transport;

    /// Replays canned replies and records every message sent.
    #[derive(Debug, Default)]
    pub struct ScriptedTransport {
        replies: Mutex<VecDeque<Result<String, ProtocolError>>>,
        sent: Mutex<Vec<String>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(self, body: &str) -> Self {
            self.replies.lock().push_back(Ok(body.to_string()));
            self
        }

        pub fn fail(self, error: ProtocolError) -> Self {
            self.replies.lock().push_back(Err(error));
            self
        }

        pub fn sent(&self) -> Vec<String> {
            self.sent.lock().clone()
        }
    }

    impl Transport for ScriptedTransport {
        fn address(&self) -> &str {
            "scripted"
        }

        async fn exchange(&self, message: &str) -> Result<String, ProtocolError> {
            self.sent.lock().push(message.to_string());
            self.replies
                .lock()
                .pop_front()
                .unwrap_or_else(|| Err(ProtocolError::ConnectionClosed))
        }
    }
}
