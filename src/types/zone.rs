// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone name collections.

/// Ordered, duplicate-free set of zone names.
///
/// Insertion order is preserved because the controller reports zones in a
/// meaningful order and the `runPattern` command echoes it back.
///
/// # Examples
///
/// ```
/// use jellyfish_lib::types::ZoneSet;
///
/// let zones: ZoneSet = ["Front", "Back", "Front"].into_iter().collect();
/// assert_eq!(zones.len(), 2);
/// assert_eq!(zones.joined(), r#"Front","Back"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneSet {
    names: Vec<String>,
}

impl ZoneSet {
    /// Creates an empty zone set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a zone, returning false if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Returns true if the set contains the zone.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Returns the number of zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no zones are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over zone names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns the zone names as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Joins the names with `","`, the single-token form the controller
    /// expects inside `zoneName`.
    #[must_use]
    pub fn joined(&self) -> String {
        self.names.join("\",\"")
    }
}

impl<S: Into<String>> FromIterator<S> for ZoneSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ZoneSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
