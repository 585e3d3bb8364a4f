// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::futures::spawn_local;
use sycamore::prelude::*;

mod backend;
mod client_config;
mod error;
mod pages;
use backend::SupabaseBackend;
use client_config::load_client_config;
use pages::error::{PageFailure, PageFailureView};
use pages::register::RegistrationView;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	spawn_local(async {
		let config = match load_client_config().await {
			Ok(config) => config,
			Err(error) => {
				log::error!("Failed to load client settings: {}", error);
				let failure = PageFailure::new(
					"No se pudo cargar la página de registro. Recarga la página; si el problema persiste, contacta a un administrador.",
					error,
				);
				sycamore::render(|ctx| {
					provide_context(ctx, failure);
					view! { ctx, PageFailureView {} }
				});
				return;
			}
		};

		log::debug!("Using profile table {}", config.profile_table);
		sycamore::render(|ctx| {
			provide_context(ctx, SupabaseBackend::new(config));
			view! { ctx, RegistrationView {} }
		});
	});
}
