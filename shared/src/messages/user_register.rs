// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Serialize;
use std::fmt;

/// Data entered by a student in the registration form
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StudentRegistration {
	pub name: String,
	pub email: String,
	/// May be empty; the phone field isn't required
	pub phone: String,
	pub password: String,
}

/// Row stored in the student profile table after the account is created
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ProfileRecord {
	/// Identifier of the account issued by the identity provider
	pub id: String,
	#[serde(rename = "nombre")]
	pub name: String,
	#[serde(rename = "correo")]
	pub email: String,
	#[serde(rename = "telefono")]
	pub phone: String,
}

impl ProfileRecord {
	pub fn new(account_id: String, registration: &StudentRegistration) -> Self {
		Self {
			id: account_id,
			name: registration.name.clone(),
			email: registration.email.clone(),
			phone: registration.phone.clone(),
		}
	}
}

/// Outcome of the most recent registration attempt, as shown under the form
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistrationStatus {
	/// The account was created and the profile row was saved
	Registered,
	/// The identity provider refused to create the account
	SignUpFailed(String),
	/// The identity provider reported success but gave no account identifier
	MissingAccountId,
	/// The account exists, but the profile row couldn't be saved
	ProfileNotSaved(String),
	/// Something outside the expected responses went wrong during either step
	Unexpected(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusKind {
	Success,
	Warning,
	Error,
}

impl StatusKind {
	pub fn css_class(&self) -> &'static str {
		match self {
			Self::Success => "status_success",
			Self::Warning => "status_warning",
			Self::Error => "status_error",
		}
	}
}

impl RegistrationStatus {
	pub fn kind(&self) -> StatusKind {
		match self {
			Self::Registered => StatusKind::Success,
			Self::MissingAccountId | Self::ProfileNotSaved(_) => StatusKind::Warning,
			Self::SignUpFailed(_) | Self::Unexpected(_) => StatusKind::Error,
		}
	}

	pub fn is_success(&self) -> bool {
		matches!(self, Self::Registered)
	}
}

impl fmt::Display for RegistrationStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Registered => write!(
				f,
				"✅ Usuario registrado y guardado correctamente. Revisa tu correo para confirmar."
			),
			Self::SignUpFailed(error) => write!(f, "❌ Error en registro: {}", error),
			Self::MissingAccountId => write!(f, "⚠️ No se pudo obtener el ID del usuario."),
			Self::ProfileNotSaved(error) => write!(f, "⚠️ Usuario autenticado pero no guardado en la tabla: {}", error),
			Self::Unexpected(error) => write!(f, "❌ Ocurrió un error inesperado: {}", error),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn profile_record_uses_table_column_names() {
		let registration = StudentRegistration {
			name: String::from("Ana"),
			email: String::from("a@b.com"),
			phone: String::new(),
			password: String::from("secret1"),
		};
		let record = ProfileRecord::new(String::from("u1"), &registration);
		let json = serde_json::to_value(&record).unwrap();
		assert_eq!(
			json,
			serde_json::json!({ "id": "u1", "nombre": "Ana", "correo": "a@b.com", "telefono": "" })
		);
	}

	#[test]
	fn sign_up_failure_includes_provider_text() {
		let status = RegistrationStatus::SignUpFailed(String::from("User already registered"));
		assert_eq!(status.to_string(), "❌ Error en registro: User already registered");
		assert_eq!(status.kind(), StatusKind::Error);
	}

	#[test]
	fn partial_failures_are_warnings() {
		assert_eq!(RegistrationStatus::MissingAccountId.kind(), StatusKind::Warning);
		let status = RegistrationStatus::ProfileNotSaved(String::from("permission denied"));
		assert_eq!(status.kind(), StatusKind::Warning);
		assert!(status.to_string().ends_with("permission denied"));
		assert!(!status.is_success());
	}
}
