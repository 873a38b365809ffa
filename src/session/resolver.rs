// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone resolution.

use crate::command::QueryCommand;
use crate::error::Error;
use crate::protocol::Transport;
use crate::response::ZonesResponse;
use crate::session::{SessionState, ZoneSelection};

/// Outcome of [`resolve_zones`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneResolution {
    /// Zones were already known; nothing was sent.
    AlreadyResolved,
    /// Zones were fetched from the controller.
    Resolved {
        /// Number of zones found.
        count: usize,
    },
    /// The controller reported no zones; the selection stays unresolved.
    NoZones,
}

/// Ensures the session addresses at least one zone.
///
/// Does nothing if zones are already selected. Otherwise queries every zone
/// the controller knows and selects all of them, in controller order.
///
/// # Errors
///
/// Returns an error if the query or its decoding fails. The selection is
/// left unresolved in that case, and the next call tries again.
pub async fn resolve_zones<T: Transport>(
    transport: &T,
    state: &mut SessionState,
) -> Result<ZoneResolution, Error> {
    if !state.zones.is_unresolved() {
        return Ok(ZoneResolution::AlreadyResolved);
    }

    let response = transport.send_command(&QueryCommand::Zones).await?;
    let zones = ZonesResponse::parse(response.body())?.zone_names();

    if zones.is_empty() {
        tracing::warn!(
            address = %transport.address(),
            "Controller reported no zones"
        );
        return Ok(ZoneResolution::NoZones);
    }

    tracing::info!(
        address = %transport.address(),
        zones = %zones.joined(),
        "Resolved zones from controller"
    );

    let count = zones.len();
    state.zones = ZoneSelection::Resolved(zones);
    Ok(ZoneResolution::Resolved { count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;
    use crate::session::testing::ScriptedTransport;
    use crate::types::ZoneSet;

    #[tokio::test]
    async fn configured_zones_skip_the_query() {
        let transport = ScriptedTransport::new();
        let zones: ZoneSet = ["Front", "Back"].into_iter().collect();
        let mut state = SessionState::new(zones.clone(), None);

        let outcome = resolve_zones(&transport, &mut state).await.unwrap();

        assert_eq!(outcome, ZoneResolution::AlreadyResolved);
        assert_eq!(state.zones().zones(), Some(&zones));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn empty_zones_resolve_in_controller_order() {
        let transport = ScriptedTransport::new().reply(r#"{"zones":{"All":{},"Porch":{}}}"#);
        let mut state = SessionState::new(ZoneSet::new(), None);

        let outcome = resolve_zones(&transport, &mut state).await.unwrap();

        assert_eq!(outcome, ZoneResolution::Resolved { count: 2 });
        assert_eq!(state.target_zones().as_slice(), ["All", "Porch"]);
        assert_eq!(
            transport.sent(),
            [r#"{"cmd":"toCtlrGet","get":[["zones"]]}"#]
        );
    }

    #[tokio::test]
    async fn resolved_zones_are_never_queried_again() {
        let transport = ScriptedTransport::new()
            .reply(r#"{"zones":{"Roof":{}}}"#)
            .reply(r#"{"zones":{"Other":{}}}"#);
        let mut state = SessionState::default();

        resolve_zones(&transport, &mut state).await.unwrap();
        let second = resolve_zones(&transport, &mut state).await.unwrap();

        assert_eq!(second, ZoneResolution::AlreadyResolved);
        assert_eq!(state.target_zones().as_slice(), ["Roof"]);
        assert_eq!(transport.sent().len(), 1);
    }

    #[tokio::test]
    async fn connection_failure_leaves_zones_unresolved() {
        let transport = ScriptedTransport::new()
            .fail(ProtocolError::ConnectionFailed("refused".to_string()));
        let mut state = SessionState::default();

        let err = resolve_zones(&transport, &mut state).await.unwrap_err();

        assert!(err.is_connection_error());
        assert!(state.zones().is_unresolved());
    }

    #[tokio::test]
    async fn decode_failure_leaves_zones_unresolved() {
        let transport = ScriptedTransport::new().reply(r#"{"ledPower":true}"#);
        let mut state = SessionState::default();

        let err = resolve_zones(&transport, &mut state).await.unwrap_err();

        assert!(err.is_decode_error());
        assert!(state.zones().is_unresolved());
    }

    #[tokio::test]
    async fn failed_resolution_is_retried_next_time() {
        let transport = ScriptedTransport::new()
            .reply("garbage")
            .reply(r#"{"zones":{"Eaves":{}}}"#);
        let mut state = SessionState::default();

        assert!(resolve_zones(&transport, &mut state).await.is_err());
        let outcome = resolve_zones(&transport, &mut state).await.unwrap();

        assert_eq!(outcome, ZoneResolution::Resolved { count: 1 });
        assert_eq!(state.target_zones().as_slice(), ["Eaves"]);
    }

    #[tokio::test]
    async fn empty_controller_zone_map() {
        let transport = ScriptedTransport::new().reply(r#"{"zones":{}}"#);
        let mut state = SessionState::default();

        let outcome = resolve_zones(&transport, &mut state).await.unwrap();

        assert_eq!(outcome, ZoneResolution::NoZones);
        assert!(state.zones().is_unresolved());
    }
}
