// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use student_registry_shared::messages::config::ClientConfig;
use student_registry_shared::messages::supabase::{
	error_message, profile_insert_request, sign_up_request, ApiRequest, SignUpResponse,
};
use student_registry_shared::messages::user_register::ProfileRecord;
use student_registry_shared::messages::{BackendError, BackendResult};
use student_registry_shared::registration::AccountBackend;
use std::fmt::Display;

/// Talks to the Supabase auth and table endpoints with the project's public key
pub struct SupabaseBackend {
	config: ClientConfig,
}

impl SupabaseBackend {
	pub fn new(config: ClientConfig) -> Self {
		Self { config }
	}
}

fn unexpected(error: impl Display) -> BackendError {
	BackendError::Unexpected(error.to_string())
}

/// Sends a prepared request.
///
/// A request that never gets an answer (offline, DNS, CORS) is reported as the service failing the call, the same
/// way the service's own error responses are.
async fn send(api_request: ApiRequest) -> BackendResult<Response> {
	let mut builder = Request::post(&api_request.url);
	for (name, value) in api_request.headers.iter() {
		builder = builder.header(name, value);
	}
	let request = builder.body(api_request.body).map_err(unexpected)?;
	let response = request
		.send()
		.await
		.map_err(|error| BackendError::Rejected(error.to_string()))?;
	if !response.ok() {
		return Err(rejection(response).await);
	}
	Ok(response)
}

/// Converts a response with a failure status into the error the service reported
async fn rejection(response: Response) -> BackendError {
	let status = response.status();
	let status_text = response.status_text();
	let body = match response.text().await {
		Ok(body) => body,
		Err(error) => {
			log::debug!("Failed to read error response body: {}", error);
			String::new()
		}
	};
	BackendError::Rejected(error_message(&body, status, &status_text))
}

#[async_trait(?Send)]
impl AccountBackend for SupabaseBackend {
	async fn create_account(&self, email: &str, password: &str) -> BackendResult<Option<String>> {
		let request = sign_up_request(&self.config, email, password).map_err(unexpected)?;
		let response = send(request).await?;
		let body: SignUpResponse = response.json().await.map_err(unexpected)?;
		Ok(body.account_id())
	}

	async fn insert_profile(&self, profile: &ProfileRecord) -> BackendResult<()> {
		let request = profile_insert_request(&self.config, profile).map_err(unexpected)?;
		send(request).await?;
		Ok(())
	}
}
