// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::ConfigDocument;
use async_std::sync::Arc;
use miette::{IntoDiagnostic, Result};
use std::path::Path;
use student_registry_shared::messages::config::{ClientConfig, CLIENT_CONFIG_PATH};
use tide::{Body, Request, Response, Server, StatusCode};

/// Hands the browser the backend connection settings
async fn client_config(_request: Request<()>, config: Arc<ClientConfig>) -> tide::Result {
	let mut response = Response::new(StatusCode::Ok);
	response.set_body(Body::from_json(&*config)?);
	response.insert_header("Cache-Control", "no-store");
	Ok(response)
}

pub fn add_config_route(app: &mut Server<()>, config: ClientConfig) {
	let config = Arc::new(config);
	app.at(&format!("/{}", CLIENT_CONFIG_PATH)).get({
		let config = Arc::clone(&config);
		move |request| client_config(request, Arc::clone(&config))
	});
}

/// Serves the built client from the root, where the page's root-relative asset links point, and the page itself at
/// each address it can be opened at
pub fn add_static_routes(app: &mut Server<()>, static_dir: &Path) -> Result<()> {
	let index_file = static_dir.join("index.html");
	app.at("/").serve_dir(static_dir).into_diagnostic()?;
	app.at("/").serve_file(&index_file).into_diagnostic()?;
	app.at("/register").serve_file(&index_file).into_diagnostic()?;
	Ok(())
}

pub fn build_app(config: &ConfigDocument) -> Result<Server<()>> {
	let mut app = tide::new();
	add_config_route(&mut app, config.client_config());
	add_static_routes(&mut app, Path::new(&config.static_dir))?;
	Ok(app)
}
