// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

pub mod config;
pub mod supabase;
pub mod user_register;

/// Errors reported by the identity provider or the record store
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BackendError {
	/// The service answered and refused the request
	Rejected(String),
	/// The request didn't produce a usable answer (network failure, unreadable response, etc.)
	Unexpected(String),
}

impl fmt::Display for BackendError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Rejected(message) | Self::Unexpected(message) => write!(f, "{}", message),
		}
	}
}

pub type BackendResult<T> = Result<T, BackendError>;
