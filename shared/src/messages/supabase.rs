// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request and response bodies for the Supabase auth and table endpoints.

use super::config::ClientConfig;
use super::user_register::ProfileRecord;
use serde::{Deserialize, Serialize};

/// A `POST` request to one of the Supabase endpoints, ready to hand to an HTTP client
#[derive(Debug, Eq, PartialEq)]
pub struct ApiRequest {
	pub url: String,
	pub headers: Vec<(&'static str, String)>,
	pub body: String,
}

impl ApiRequest {
	fn post(config: &ClientConfig, url: String, body: String) -> Self {
		let key = &config.supabase_anon_key;
		let headers = vec![
			("apikey", key.clone()),
			("Authorization", format!("Bearer {}", key)),
			("Content-Type", String::from("application/json")),
		];
		Self { url, headers, body }
	}

	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(header_name, _)| header_name.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}

/// Builds the request asking the identity provider to create an account
pub fn sign_up_request(config: &ClientConfig, email: &str, password: &str) -> serde_json::Result<ApiRequest> {
	let body = serde_json::to_string(&SignUpRequest { email, password })?;
	Ok(ApiRequest::post(config, config.signup_endpoint(), body))
}

/// Builds the request appending one profile row to the profile table
pub fn profile_insert_request(config: &ClientConfig, profile: &ProfileRecord) -> serde_json::Result<ApiRequest> {
	let body = serde_json::to_string(&[profile])?;
	let mut request = ApiRequest::post(config, config.profile_endpoint(), body);
	request.headers.push(("Prefer", String::from("return=minimal")));
	Ok(request)
}

#[derive(Debug, Serialize)]
pub struct SignUpRequest<'a> {
	pub email: &'a str,
	pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct AuthUser {
	#[serde(default)]
	pub id: Option<String>,
}

/// Body of a successful sign-up response.
///
/// Projects that require email confirmation answer with the bare user (`id` at the top level); projects that confirm
/// automatically answer with a session holding the user.
#[derive(Debug, Deserialize)]
pub struct SignUpResponse {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default)]
	pub user: Option<AuthUser>,
}

impl SignUpResponse {
	/// Gets the new account's identifier, if the provider returned a usable one
	pub fn account_id(self) -> Option<String> {
		let session_user_id = self.user.and_then(|user| user.id);
		session_user_id.or(self.id).filter(|id| !id.is_empty())
	}
}

/// Error body returned by either service. Auth and table endpoints name the message field differently.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
	#[serde(default)]
	pub msg: Option<String>,
	#[serde(default)]
	pub message: Option<String>,
	#[serde(default)]
	pub error_description: Option<String>,
	#[serde(default)]
	pub error: Option<String>,
}

impl ApiErrorBody {
	pub fn into_message(self) -> Option<String> {
		[self.msg, self.message, self.error_description, self.error]
			.into_iter()
			.flatten()
			.find(|message| !message.is_empty())
	}
}

/// Picks the text to show for a failed request, falling back to the HTTP status when the body has no message
pub fn error_message(body: &str, status: u16, status_text: &str) -> String {
	let body: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
	match body.into_message() {
		Some(message) => message,
		None if !status_text.is_empty() => String::from(status_text),
		None => format!("HTTP {}", status),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::messages::config::DEFAULT_PROFILE_TABLE;

	fn test_config() -> ClientConfig {
		ClientConfig {
			supabase_url: String::from("https://project.supabase.co/"),
			supabase_anon_key: String::from("anon"),
			profile_table: String::from(DEFAULT_PROFILE_TABLE),
		}
	}

	#[test]
	fn sign_up_request_carries_credentials_and_key() {
		let request = sign_up_request(&test_config(), "a@b.com", "secret1").unwrap();
		assert_eq!(request.url, "https://project.supabase.co/auth/v1/signup");
		assert_eq!(request.header("apikey"), Some("anon"));
		assert_eq!(request.header("authorization"), Some("Bearer anon"));
		assert_eq!(request.header("Prefer"), None);
		let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
		assert_eq!(body, serde_json::json!({ "email": "a@b.com", "password": "secret1" }));
	}

	#[test]
	fn profile_insert_sends_one_row_without_echo() {
		let profile = ProfileRecord {
			id: String::from("u1"),
			name: String::from("Ana"),
			email: String::from("a@b.com"),
			phone: String::new(),
		};
		let request = profile_insert_request(&test_config(), &profile).unwrap();
		assert_eq!(request.url, "https://project.supabase.co/rest/v1/estudiantes");
		assert_eq!(request.header("Prefer"), Some("return=minimal"));
		assert_eq!(request.header("Content-Type"), Some("application/json"));
		assert_eq!(request.header("apikey"), Some("anon"));
		let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
		assert_eq!(
			body,
			serde_json::json!([{ "id": "u1", "nombre": "Ana", "correo": "a@b.com", "telefono": "" }])
		);
	}

	#[test]
	fn confirmation_response_has_bare_user() {
		let response: SignUpResponse =
			serde_json::from_str(r#"{"id":"u1","email":"a@b.com","confirmation_sent_at":"2024-01-01T00:00:00Z"}"#)
				.unwrap();
		assert_eq!(response.account_id().as_deref(), Some("u1"));
	}

	#[test]
	fn session_response_nests_user() {
		let response: SignUpResponse =
			serde_json::from_str(r#"{"access_token":"t","token_type":"bearer","user":{"id":"u2"}}"#).unwrap();
		assert_eq!(response.account_id().as_deref(), Some("u2"));
	}

	#[test]
	fn missing_or_empty_id_is_none() {
		let response: SignUpResponse = serde_json::from_str(r#"{"user":null}"#).unwrap();
		assert_eq!(response.account_id(), None);
		let response: SignUpResponse = serde_json::from_str(r#"{"id":""}"#).unwrap();
		assert_eq!(response.account_id(), None);
	}

	#[test]
	fn error_message_prefers_body_fields() {
		let auth_body = r#"{"code":422,"error_code":"user_already_exists","msg":"User already registered"}"#;
		assert_eq!(error_message(auth_body, 422, "Unprocessable Entity"), "User already registered");

		let table_body = r#"{"code":"42501","details":null,"hint":null,"message":"permission denied for table estudiantes"}"#;
		assert_eq!(
			error_message(table_body, 401, "Unauthorized"),
			"permission denied for table estudiantes"
		);

		let oauth_body = r#"{"error":"invalid_request","error_description":"Signups not allowed"}"#;
		assert_eq!(error_message(oauth_body, 400, ""), "Signups not allowed");
	}

	#[test]
	fn error_message_falls_back_to_status() {
		assert_eq!(error_message("<html>bad gateway</html>", 502, "Bad Gateway"), "Bad Gateway");
		assert_eq!(error_message("", 500, ""), "HTTP 500");
	}
}
