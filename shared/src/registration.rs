// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The two-step registration sequence: create the account, then save the student's profile row.
//!
//! The steps aren't transactional. If the profile row can't be saved, the account stays in place and the student is
//! told so; nothing is rolled back or retried.

use crate::messages::user_register::{ProfileRecord, RegistrationStatus, StudentRegistration};
use crate::messages::{BackendError, BackendResult};
use async_trait::async_trait;

/// The external services used during registration
#[async_trait(?Send)]
pub trait AccountBackend {
	/// Asks the identity provider to create an account. Succeeds with `None` when the provider reports success
	/// without giving back an account identifier.
	async fn create_account(&self, email: &str, password: &str) -> BackendResult<Option<String>>;

	/// Appends the profile row to the record store
	async fn insert_profile(&self, profile: &ProfileRecord) -> BackendResult<()>;
}

/// The state of the form that a submission updates
pub trait RegistrationForm {
	fn in_flight(&self) -> bool;
	fn set_in_flight(&self, in_flight: bool);
	fn set_status(&self, status: Option<RegistrationStatus>);
	/// Empties all four input fields
	fn clear_fields(&self);
}

/// Keeps the form marked in flight until dropped, however the submission ends
struct InFlightGuard<'a, F: RegistrationForm> {
	form: &'a F,
}

impl<'a, F: RegistrationForm> InFlightGuard<'a, F> {
	fn start(form: &'a F) -> Self {
		form.set_in_flight(true);
		Self { form }
	}
}

impl<F: RegistrationForm> Drop for InFlightGuard<'_, F> {
	fn drop(&mut self) {
		self.form.set_in_flight(false);
	}
}

/// Runs one registration attempt and reports its outcome through the form.
///
/// Returns the status that was shown, or `None` if another submission was still in flight and this one was ignored.
pub async fn submit_registration<B, F>(
	backend: &B,
	form: &F,
	registration: StudentRegistration,
) -> Option<RegistrationStatus>
where
	B: AccountBackend + ?Sized,
	F: RegistrationForm,
{
	if form.in_flight() {
		log::debug!("Ignoring a registration submission while another is in flight");
		return None;
	}

	let _in_flight = InFlightGuard::start(form);
	form.set_status(None);

	let status = register(backend, &registration).await;
	form.set_status(Some(status.clone()));
	if status.is_success() {
		form.clear_fields();
	}
	Some(status)
}

async fn register<B: AccountBackend + ?Sized>(backend: &B, registration: &StudentRegistration) -> RegistrationStatus {
	let account_id = match backend
		.create_account(&registration.email, &registration.password)
		.await
	{
		Ok(Some(id)) => id,
		Ok(None) => {
			log::warn!("Sign-up succeeded without returning an account ID");
			return RegistrationStatus::MissingAccountId;
		}
		Err(BackendError::Rejected(error)) => {
			log::info!("Sign-up was rejected: {}", error);
			return RegistrationStatus::SignUpFailed(error);
		}
		Err(BackendError::Unexpected(error)) => {
			log::error!("Sign-up failed unexpectedly: {}", error);
			return RegistrationStatus::Unexpected(error);
		}
	};

	let profile = ProfileRecord::new(account_id, registration);
	match backend.insert_profile(&profile).await {
		Ok(()) => {
			log::info!("Registered student account {}", profile.id);
			RegistrationStatus::Registered
		}
		Err(error) => {
			// The account is left without a profile row and has to be reconciled by hand.
			log::warn!("Account {} was created but its profile wasn't saved: {}", profile.id, error);
			RegistrationStatus::ProfileNotSaved(error.to_string())
		}
	}
}
