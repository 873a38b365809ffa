// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone map response parsing.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ParseError;
use crate::types::ZoneSet;

/// Reply to a `zones` query.
///
/// The controller maps each zone name to its metadata (pixel counts, port
/// mapping). Only the names are needed, in the order they were sent.
///
/// # Examples
///
/// ```
/// use jellyfish_lib::response::ZonesResponse;
///
/// let response = ZonesResponse::parse(r#"{"zones": {"Porch": {}, "All": {}}}"#).unwrap();
/// let names = response.zone_names();
/// assert_eq!(names.iter().collect::<Vec<_>>(), ["Porch", "All"]);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ZonesResponse {
    #[serde(default)]
    zones: Option<Map<String, Value>>,
}

impl ZonesResponse {
    /// Parses a raw reply.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the reply is not a JSON object, or if the
    /// `zones` field is absent or not an object.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let response: Self = serde_json::from_str(raw)?;
        if response.zones.is_none() {
            return Err(ParseError::MissingField("zones".to_string()));
        }
        Ok(response)
    }

    /// Returns the zone names in the order the controller listed them.
    #[must_use]
    pub fn zone_names(&self) -> ZoneSet {
        self.zones
            .iter()
            .flat_map(Map::keys)
            .map(String::as_str)
            .collect()
    }

    /// Returns the metadata reported for a zone.
    #[must_use]
    pub fn zone(&self, name: &str) -> Option<&Value> {
        self.zones.as_ref().and_then(|zones| zones.get(name))
    }
}
