// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::Parser;
use miette::{IntoDiagnostic, Result};

mod args;
use args::CliArgs;

mod config;
use config::parse_config;

mod web;
use web::build_app;

#[async_std::main]
async fn main() -> Result<()> {
	let args = CliArgs::parse();
	let config = parse_config(&args.config)?;

	if args.check_config {
		println!("Configuration in {} is valid", args.config);
		return Ok(());
	}

	tide::log::start();
	let app = build_app(&config)?;
	tide::log::info!("Serving the registration page on {}", config.listen);
	app.listen(config.listen.clone()).await.into_diagnostic()?;
	Ok(())
}
