// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use checkin::CoreError;
use checkin_domain::ValidationErrors;

/// A single field error, keyed by the form field's wire name.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldError {
    /// The wire name of the offending field.
    pub field: String,
    /// A human-readable description of the error.
    pub message: String,
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// One or more submitted fields were rejected.
    ValidationFailed {
        /// The per-field errors, in the order they were found.
        errors: Vec<FieldError>,
    },
    /// Login credentials matched no registered user.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The operation requires an active session and none exists.
    SessionRequired,
    /// A requested resource was not found.
    ResourceNotFound {
        /// The id that was looked up.
        id: String,
    },
    /// The request conflicts with existing data.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
}

impl ApiError {
    /// Returns the errors concerning a given field, if this is a
    /// validation failure.
    #[must_use]
    pub fn field_errors(&self, field: &str) -> Vec<&FieldError> {
        match self {
            Self::ValidationFailed { errors } => {
                errors.iter().filter(|error| error.field == field).collect()
            }
            _ => Vec::new(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationFailed { errors } => {
                write!(f, "Validation failed:")?;
                for error in errors {
                    write!(f, " [{}] {}", error.field, error.message)?;
                }
                Ok(())
            }
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::SessionRequired => write!(f, "A logged-in user is required"),
            Self::ResourceNotFound { id } => write!(f, "Resource '{id}' not found"),
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates validation errors into per-field API errors.
fn translate_validation_errors(errors: &ValidationErrors) -> ApiError {
    let errors: Vec<FieldError> = errors
        .errors()
        .iter()
        .map(|error| FieldError {
            field: error.field().to_string(),
            message: error.to_string(),
        })
        .collect();
    ApiError::ValidationFailed { errors }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(error: &CoreError) -> ApiError {
    match error {
        CoreError::Validation(errors) => translate_validation_errors(errors),
        CoreError::AuthenticationFailed => ApiError::AuthenticationFailed {
            reason: String::from("Invalid CPF or password"),
        },
        CoreError::NoActiveSession => ApiError::SessionRequired,
        CoreError::CheckinNotFound(id) => ApiError::ResourceNotFound {
            id: id.value().to_string(),
        },
        CoreError::DuplicateCheckinId(id) => ApiError::Conflict {
            message: format!("Check-in id '{id}' already exists"),
        },
    }
}
