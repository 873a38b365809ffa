// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pattern file references.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Reference to a pattern file stored on the controller.
///
/// The controller lists patterns as `folders` plus `name` and accepts them
/// back joined as `folders/name`. Folders may themselves contain slashes,
/// so the reference is kept as an opaque string and compared as a whole.
/// It is never trimmed or otherwise normalized.
///
/// # Examples
///
/// ```
/// use jellyfish_lib::types::PatternPath;
///
/// let path: PatternPath = "Holidays/Halloween".parse().unwrap();
/// assert_eq!(path.as_str(), "Holidays/Halloween");
/// assert_eq!(PatternPath::from_parts("Holidays", "Halloween"), path);
///
/// assert!("".parse::<PatternPath>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternPath(String);

impl PatternPath {
    /// Creates a pattern reference from its `folder/name` string.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidPatternPath` if the reference is empty.
    pub fn new(reference: impl Into<String>) -> Result<Self, ValueError> {
        let reference = reference.into();
        if reference.is_empty() {
            return Err(ValueError::InvalidPatternPath(reference));
        }
        Ok(Self(reference))
    }

    /// Joins a catalog folder and pattern name into a reference.
    #[must_use]
    pub fn from_parts(folder: &str, name: &str) -> Self {
        Self(format!("{folder}/{name}"))
    }

    /// Returns the reference as sent to the controller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatternPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PatternPath {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
