// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pattern catalog response parsing.

use serde::Deserialize;

use crate::error::ParseError;
use crate::types::PatternPath;

/// One entry of the controller's pattern catalog.
///
/// The catalog also lists bare folders; those entries carry an empty or
/// missing `name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatternEntry {
    #[serde(default)]
    folders: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "readOnly")]
    read_only: Option<bool>,
}

impl PatternEntry {
    /// Returns the folder the pattern is stored in.
    #[must_use]
    pub fn folder(&self) -> &str {
        self.folders.as_deref().unwrap_or_default()
    }

    /// Returns the pattern name, if this entry is a pattern.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Returns true if the pattern ships with the controller.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only.unwrap_or(false)
    }

    /// Returns the `folder/name` reference for this entry.
    #[must_use]
    pub fn path(&self) -> Option<PatternPath> {
        self.name().map(|name| PatternPath::from_parts(self.folder(), name))
    }
}

/// Reply to a `patternFileList` query.
///
/// # Examples
///
/// ```
/// use jellyfish_lib::response::PatternListResponse;
/// use jellyfish_lib::types::PatternPath;
///
/// let json = r#"{"patternFileList": [
///     {"folders": "Holidays", "name": ""},
///     {"folders": "Holidays", "name": "Halloween", "readOnly": false}
/// ]}"#;
/// let response = PatternListResponse::parse(json).unwrap();
/// assert_eq!(response.patterns().count(), 1);
///
/// let halloween: PatternPath = "Holidays/Halloween".parse().unwrap();
/// assert!(response.contains(&halloween));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PatternListResponse {
    #[serde(default, rename = "patternFileList")]
    pattern_file_list: Option<Vec<PatternEntry>>,
}

impl PatternListResponse {
    /// Parses a raw reply.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the reply is not a JSON object, or if the
    /// `patternFileList` field is absent or not a list of entries.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let response: Self = serde_json::from_str(raw)?;
        if response.pattern_file_list.is_none() {
            return Err(ParseError::MissingField("patternFileList".to_string()));
        }
        Ok(response)
    }

    /// Iterates over entries that name a pattern, skipping bare folders.
    pub fn patterns(&self) -> impl Iterator<Item = &PatternEntry> {
        self.pattern_file_list
            .iter()
            .flatten()
            .filter(|entry| entry.name().is_some())
    }

    /// Returns every `folder/name` reference the controller accepts.
    #[must_use]
    pub fn pattern_paths(&self) -> Vec<PatternPath> {
        self.patterns().filter_map(PatternEntry::path).collect()
    }

    /// Returns true if the catalog lists the given pattern.
    ///
    /// The whole reference is compared, so only an exact `folders/name`
    /// match counts.
    #[must_use]
    pub fn contains(&self, pattern: &PatternPath) -> bool {
        self.pattern_paths().contains(pattern)
    }
}
