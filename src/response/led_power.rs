// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LED power response parsing.

use serde_json::Value;

use crate::error::ParseError;
use crate::types::PowerState;

/// Reply to a `ledPower` query.
///
/// Firmware versions disagree on the flag's type (`true`, `1`, `"1"`), so
/// the value is read by truthiness: `null`, `false`, zero, and empty
/// strings, lists or objects mean off, anything else means on.
///
/// # Examples
///
/// ```
/// use jellyfish_lib::response::LedPowerResponse;
/// use jellyfish_lib::types::PowerState;
///
/// let response = LedPowerResponse::parse(r#"{"ledPower": true}"#).unwrap();
/// assert_eq!(response.power_state(), PowerState::On);
///
/// let response = LedPowerResponse::parse(r#"{"ledPower": 0}"#).unwrap();
/// assert!(!response.is_on());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LedPowerResponse {
    led_power: Value,
}

impl LedPowerResponse {
    /// Parses a raw reply.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the reply is not a JSON object or has no
    /// `ledPower` field.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Object(mut object) = value else {
            return Err(ParseError::UnexpectedFormat(
                "expected a JSON object".to_string(),
            ));
        };
        let led_power = object
            .remove("ledPower")
            .ok_or_else(|| ParseError::MissingField("ledPower".to_string()))?;
        Ok(Self { led_power })
    }

    /// Returns the raw flag as sent by the controller.
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.led_power
    }

    /// Returns true if any lights are on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        is_truthy(&self.led_power)
    }

    /// Returns the flag as a power state.
    #[must_use]
    pub fn power_state(&self) -> PowerState {
        PowerState::from(self.is_on())
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(json: &str) -> PowerState {
        LedPowerResponse::parse(json).unwrap().power_state()
    }

    #[test]
    fn truthy_values_are_on() {
        assert_eq!(state(r#"{"ledPower":true}"#), PowerState::On);
        assert_eq!(state(r#"{"ledPower":1}"#), PowerState::On);
        assert_eq!(state(r#"{"ledPower":"0"}"#), PowerState::On);
        assert_eq!(state(r#"{"ledPower":[0]}"#), PowerState::On);
    }

    #[test]
    fn falsy_values_are_off() {
        assert_eq!(state(r#"{"ledPower":false}"#), PowerState::Off);
        assert_eq!(state(r#"{"ledPower":0}"#), PowerState::Off);
        assert_eq!(state(r#"{"ledPower":0.0}"#), PowerState::Off);
        assert_eq!(state(r#"{"ledPower":""}"#), PowerState::Off);
        assert_eq!(state(r#"{"ledPower":null}"#), PowerState::Off);
        assert_eq!(state(r#"{"ledPower":{}}"#), PowerState::Off);
    }

    #[test]
    fn missing_field() {
        let err = LedPowerResponse::parse(r#"{"cmd":"fromCtlr"}"#).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(f) if f == "ledPower"));
    }

    #[test]
    fn not_an_object() {
        let err = LedPowerResponse::parse("[true]").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedFormat(_)));
    }

    #[test]
    fn malformed_json() {
        let err = LedPowerResponse::parse("{ledPower").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }
}
