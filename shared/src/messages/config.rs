// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Path (relative to the page) from which the client loads its backend settings
pub const CLIENT_CONFIG_PATH: &str = "config.json";

pub const DEFAULT_PROFILE_TABLE: &str = "estudiantes";

/// Backend connection settings handed from the hosting server to the client
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ClientConfig {
	pub supabase_url: String,
	/// Public key sent with every request; it only grants what the project's row policies allow
	pub supabase_anon_key: String,
	pub profile_table: String,
}

impl ClientConfig {
	fn base_url(&self) -> &str {
		self.supabase_url.trim_end_matches('/')
	}

	pub fn signup_endpoint(&self) -> String {
		format!("{}/auth/v1/signup", self.base_url())
	}

	pub fn profile_endpoint(&self) -> String {
		format!("{}/rest/v1/{}", self.base_url(), self.profile_table)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config(url: &str) -> ClientConfig {
		ClientConfig {
			supabase_url: String::from(url),
			supabase_anon_key: String::from("anon"),
			profile_table: String::from(DEFAULT_PROFILE_TABLE),
		}
	}

	#[test]
	fn endpoints_ignore_trailing_slash() {
		let plain = config("https://project.supabase.co");
		let slashed = config("https://project.supabase.co/");
		assert_eq!(plain.signup_endpoint(), "https://project.supabase.co/auth/v1/signup");
		assert_eq!(slashed.signup_endpoint(), plain.signup_endpoint());
		assert_eq!(slashed.profile_endpoint(), "https://project.supabase.co/rest/v1/estudiantes");
	}
}
