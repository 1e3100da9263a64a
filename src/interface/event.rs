/*
 * Copyright (c) A11yWatch, LLC. and its affiliates.
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 **/

use serde::{Deserialize, Serialize};

/// device info sent by the load snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadDevice {
	#[serde(rename = "userAgent")]
	pub user_agent: String,
}

/// payload of the snippet that waits for the page load event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadEvent {
	pub url: String,
	pub referrer: String,
	pub device: LoadDevice,
}

/// device info sent by the inline snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
	pub user_agent: String,
}

/// payload of the snippet that sends as soon as the script runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineEvent {
	pub domain: Option<String>,
	pub url: String,
	pub referrer: String,
	pub device: Device,
}

/// a beacon body, one shape per snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EventPayload {
	Load(LoadEvent),
	Inline(InlineEvent),
}

// device sent to the collector by either snippet
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackedDevice {
	#[serde(alias = "userAgent")]
	pub user_agent: String,
}

/// event body accepted by the collector.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackedEvent {
	#[serde(default)]
	pub domain: Option<String>,
	pub url: String,
	pub referrer: String,
	pub device: TrackedDevice,
}
