// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pattern validation.

use crate::command::QueryCommand;
use crate::error::Error;
use crate::protocol::Transport;
use crate::response::PatternListResponse;
use crate::session::{PatternSelection, SessionState};

/// Outcome of [`validate_pattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternValidation {
    /// No pattern is configured; nothing was sent.
    Unset,
    /// The controller lists the configured pattern.
    Recognized,
    /// The controller does not list the pattern, so it was dropped.
    Cleared,
}

/// Ensures the session never sends a pattern the controller does not know.
///
/// Does nothing if no pattern is configured. Otherwise fetches the
/// controller's pattern catalog and drops the pattern if it is not listed.
/// A dropped pattern stays dropped for the life of the session.
///
/// A recognized pattern is checked again on every call, since patterns can
/// be deleted on the controller at any time.
///
/// # Errors
///
/// Returns an error if the catalog query or its decoding fails. The pattern
/// has already been dropped when the error is returned.
pub async fn validate_pattern<T: Transport>(
    transport: &T,
    state: &mut SessionState,
) -> Result<PatternValidation, Error> {
    let PatternSelection::Named(pattern) = &state.pattern else {
        return Ok(PatternValidation::Unset);
    };

    let catalog = match fetch_catalog(transport).await {
        Ok(catalog) => catalog,
        Err(e) => {
            state.pattern = PatternSelection::Current;
            return Err(e);
        }
    };

    if catalog.contains(pattern) {
        return Ok(PatternValidation::Recognized);
    }

    tracing::warn!(
        address = %transport.address(),
        pattern = %pattern,
        "Pattern unknown to controller, using current pattern instead"
    );
    state.pattern = PatternSelection::Current;
    Ok(PatternValidation::Cleared)
}

async fn fetch_catalog<T: Transport>(transport: &T) -> Result<PatternListResponse, Error> {
    let response = transport
        .send_command(&QueryCommand::PatternFileList)
        .await?;
    Ok(PatternListResponse::parse(response.body())?)
}
