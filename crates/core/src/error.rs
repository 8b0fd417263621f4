// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use checkin_domain::{CheckinId, ValidationErrors};

/// Errors that can occur while applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Domain validation rejected one or more submitted fields.
    Validation(ValidationErrors),
    /// No registered user matched the submitted CPF and password.
    AuthenticationFailed,
    /// The command requires an active session and none exists.
    NoActiveSession,
    /// No check-in with the given id exists.
    CheckinNotFound(CheckinId),
    /// A check-in with the given id already exists.
    DuplicateCheckinId(CheckinId),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "Validation failed: {errors}"),
            Self::AuthenticationFailed => write!(f, "Invalid CPF or password"),
            Self::NoActiveSession => write!(f, "No user is logged in"),
            Self::CheckinNotFound(id) => write!(f, "Check-in '{id}' not found"),
            Self::DuplicateCheckinId(id) => {
                write!(f, "Check-in id '{id}' already exists")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
