// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use wasm_bindgen::JsValue;

/// Errors that can occur while loading the backend settings from the hosting server
pub enum ConfigLoadError {
	NoBrowserContext,
	Location(JsValue),
	Request(gloo_net::Error),
	Status(u16, String),
}

impl From<JsValue> for ConfigLoadError {
	fn from(error: JsValue) -> Self {
		Self::Location(error)
	}
}

impl From<gloo_net::Error> for ConfigLoadError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Request(error)
	}
}

impl fmt::Display for ConfigLoadError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoBrowserContext => write!(f, "The browser window isn't available"),
			Self::Location(error) => write!(f, "Failed to resolve the settings address: {:?}", error),
			Self::Request(error) => write!(f, "Failed to retrieve settings: {}", error),
			Self::Status(code, text) => write!(f, "The server answered {} {}", code, text),
		}
	}
}
