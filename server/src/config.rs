// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use knuffel::Decode;
use miette::{bail, IntoDiagnostic, Result};
use std::fs;
use student_registry_shared::messages::config::{ClientConfig, DEFAULT_PROFILE_TABLE};

#[derive(Debug, Decode)]
pub struct ConfigDocument {
	#[knuffel(child, unwrap(argument), default = String::from("127.0.0.1:8080"))]
	pub listen: String,
	#[knuffel(child, unwrap(argument), default = String::from("static"))]
	pub static_dir: String,
	#[knuffel(child)]
	pub supabase: SupabaseConfig,
}

#[derive(Debug, Decode)]
pub struct SupabaseConfig {
	#[knuffel(child, unwrap(argument))]
	pub url: String,
	#[knuffel(child, unwrap(argument))]
	pub anon_key: String,
	#[knuffel(child, unwrap(argument), default = String::from(DEFAULT_PROFILE_TABLE))]
	pub profile_table: String,
}

impl ConfigDocument {
	/// Gets the settings the browser needs to reach the backend
	pub fn client_config(&self) -> ClientConfig {
		ClientConfig {
			supabase_url: self.supabase.url.clone(),
			supabase_anon_key: self.supabase.anon_key.clone(),
			profile_table: self.supabase.profile_table.clone(),
		}
	}

	fn validate(&self) -> Result<()> {
		if self.supabase.url.is_empty() {
			bail!("supabase url must not be empty");
		}
		if self.supabase.anon_key.is_empty() {
			bail!("supabase anon-key must not be empty");
		}
		if self.supabase.profile_table.is_empty() {
			bail!("supabase profile-table must not be empty");
		}
		Ok(())
	}
}

pub fn parse_config_str(file_name: &str, contents: &str) -> Result<ConfigDocument> {
	let config: ConfigDocument = knuffel::parse(file_name, contents).into_diagnostic()?;
	config.validate()?;
	Ok(config)
}

pub fn parse_config(path: &str) -> Result<ConfigDocument> {
	let config_file_contents = fs::read_to_string(path).into_diagnostic()?;
	parse_config_str(path, &config_file_contents)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn full_config_is_read() {
		let config = parse_config_str(
			"config.kdl",
			r#"
			listen "0.0.0.0:9000"
			static-dir "/srv/registry"
			supabase {
				url "https://project.supabase.co"
				anon-key "public-anon-key"
				profile-table "alumnos"
			}
			"#,
		)
		.unwrap();
		assert_eq!(config.listen, "0.0.0.0:9000");
		assert_eq!(config.static_dir, "/srv/registry");
		assert_eq!(
			config.client_config(),
			ClientConfig {
				supabase_url: String::from("https://project.supabase.co"),
				supabase_anon_key: String::from("public-anon-key"),
				profile_table: String::from("alumnos"),
			}
		);
	}

	#[test]
	fn optional_settings_use_defaults() {
		let config = parse_config_str(
			"config.kdl",
			r#"
			supabase {
				url "https://project.supabase.co"
				anon-key "public-anon-key"
			}
			"#,
		)
		.unwrap();
		assert_eq!(config.listen, "127.0.0.1:8080");
		assert_eq!(config.static_dir, "static");
		assert_eq!(config.supabase.profile_table, "estudiantes");
	}

	#[test]
	fn missing_supabase_section_is_an_error() {
		assert!(parse_config_str("config.kdl", r#"listen "127.0.0.1:8080""#).is_err());
	}

	#[test]
	fn empty_anon_key_is_an_error() {
		let result = parse_config_str(
			"config.kdl",
			r#"
			supabase {
				url "https://project.supabase.co"
				anon-key ""
			}
			"#,
		);
		assert!(result.is_err());
	}
}
