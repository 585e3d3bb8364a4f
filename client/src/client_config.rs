// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::ConfigLoadError;
use gloo_net::http::Request;
use student_registry_shared::messages::config::{ClientConfig, CLIENT_CONFIG_PATH};
use web_sys::Url;

/// Gets the URL of the settings endpoint relative to the current page, so the application can be hosted at any path.
fn client_config_endpoint() -> Result<String, ConfigLoadError> {
	let window = web_sys::window().ok_or(ConfigLoadError::NoBrowserContext)?;
	let page_address = window.location().href()?;
	let url = Url::new_with_base(CLIENT_CONFIG_PATH, &page_address)?;
	url.set_search(""); // Query string is unnecessary and should be cleared
	Ok(url.href())
}

/// Retrieves the backend connection settings from the hosting server.
///
/// # Errors
///
/// Errors occur when the page address can't be resolved, when the request fails, when the server doesn't answer
/// with a success status, and when the body isn't a valid settings document.
pub async fn load_client_config() -> Result<ClientConfig, ConfigLoadError> {
	let endpoint = client_config_endpoint()?;
	let response = Request::get(&endpoint).send().await?;
	if !response.ok() {
		return Err(ConfigLoadError::Status(response.status(), response.status_text()));
	}
	Ok(response.json().await?)
}
