// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Display;
use sycamore::prelude::*;

/// A failure that keeps the page from loading, shown in place of the form
#[derive(Clone)]
pub struct PageFailure {
	message: &'static str,
	details: String,
}

impl PageFailure {
	pub fn new(message: &'static str, error: impl Display) -> Self {
		Self {
			message,
			details: error.to_string(),
		}
	}
}

#[component]
pub fn PageFailureView<G: Html>(ctx: Scope) -> View<G> {
	let failure: &PageFailure = use_context(ctx);
	let message = failure.message;
	let details = failure.details.clone();

	view! {
		ctx,
		div(id="app_error") {
			p(class="app_error_message") { (message) }
			p(class="app_error_details") { (details) }
		}
	}
}
