// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::backend::SupabaseBackend;
use student_registry_shared::messages::user_register::{RegistrationStatus, StudentRegistration};
use student_registry_shared::registration::{submit_registration, RegistrationForm};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

const PAGE_TITLE: &str = "Registro de estudiante";

fn set_document_title(title: &str) {
	if let Some(document) = web_sys::window().and_then(|window| window.document()) {
		document.set_title(title);
	}
}

/// Signals backing the registration form
#[derive(Clone, Copy)]
struct FormSignals<'a> {
	name: &'a Signal<String>,
	email: &'a Signal<String>,
	phone: &'a Signal<String>,
	password: &'a Signal<String>,
	status: &'a Signal<Option<RegistrationStatus>>,
	in_flight: &'a Signal<bool>,
}

impl FormSignals<'_> {
	fn snapshot(&self) -> StudentRegistration {
		StudentRegistration {
			name: (*self.name.get()).clone(),
			email: (*self.email.get()).clone(),
			phone: (*self.phone.get()).clone(),
			password: (*self.password.get()).clone(),
		}
	}
}

impl RegistrationForm for FormSignals<'_> {
	fn in_flight(&self) -> bool {
		*self.in_flight.get()
	}

	fn set_in_flight(&self, in_flight: bool) {
		self.in_flight.set(in_flight);
	}

	fn set_status(&self, status: Option<RegistrationStatus>) {
		self.status.set(status);
	}

	fn clear_fields(&self) {
		self.name.set(String::new());
		self.email.set(String::new());
		self.phone.set(String::new());
		self.password.set(String::new());
	}
}

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	set_document_title(PAGE_TITLE);

	let name_signal = create_signal(ctx, String::new());
	let email_signal = create_signal(ctx, String::new());
	let phone_signal = create_signal(ctx, String::new());
	let password_signal = create_signal(ctx, String::new());
	let status_signal: &Signal<Option<RegistrationStatus>> = create_signal(ctx, None);
	let in_flight_signal = create_signal(ctx, false);

	let form = FormSignals {
		name: name_signal,
		email: email_signal,
		phone: phone_signal,
		password: password_signal,
		status: status_signal,
		in_flight: in_flight_signal,
	};

	let submit_label_signal = create_memo(ctx, || {
		if *in_flight_signal.get() {
			"Registrando..."
		} else {
			"Registrarse"
		}
	});

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		// The button is disabled while a submission runs, but a submit can still come in through the keyboard.
		if form.in_flight() {
			return;
		}
		let registration = form.snapshot();

		spawn_local_scoped(ctx, async move {
			let backend: &SupabaseBackend = use_context(ctx);
			submit_registration(backend, &form, registration).await;
		});
	};

	view! {
		ctx,
		div(id="register_student") {
			h1 { (PAGE_TITLE) }
			form(id="register_form", on:submit=form_submission_handler) {
				input(
					id="register_name",
					type="text",
					placeholder="Nombre completo",
					required=true,
					bind:value=name_signal
				)
				input(
					id="register_email",
					type="email",
					placeholder="Correo electrónico",
					required=true,
					bind:value=email_signal
				)
				input(
					id="register_phone",
					type="tel",
					placeholder="Teléfono",
					bind:value=phone_signal
				)
				input(
					id="register_password",
					type="password",
					placeholder="Contraseña",
					required=true,
					bind:value=password_signal
				)
				button(id="register_submit", type="submit", disabled=*in_flight_signal.get()) {
					(*submit_label_signal.get())
				}
			}
			(
				if let Some(status) = (*status_signal.get()).clone() {
					let status_class = format!("register_status {}", status.kind().css_class());
					let status_text = status.to_string();
					view! {
						ctx,
						p(id="register_status", class=status_class) { (status_text) }
					}
				} else {
					view! { ctx, }
				}
			)
		}
	}
}
