// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for controller JSON replies.
//!
//! Each query has a dedicated reply type. Replies to `runPattern` are not
//! parsed: any frame the controller sends back counts as an acknowledgement.

mod led_power;
mod patterns;
mod zones;

pub use led_power::LedPowerResponse;
pub use patterns::{PatternEntry, PatternListResponse};
pub use zones::ZonesResponse;
