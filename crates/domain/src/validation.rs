// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admission validation for registration, login, and check-ins.
//!
//! Every validator here is pure and deterministic: a function of its
//! inputs and the in-memory snapshot of the existing collections, with no
//! side effects and no I/O. Field errors are collected, not
//! short-circuited, so the caller can display them all at once.

use crate::calendar::CheckinDate;
use crate::cpf::Cpf;
use crate::error::{DomainError, ValidationErrors};
use crate::password::PasswordPolicy;
use crate::slot::{SlotPolicy, SlotTime, has_capacity};
use crate::types::{Checkin, CheckinId, User};

/// The raw registration form fields, exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationInput {
    /// The full name.
    pub name: String,
    /// The e-mail address.
    pub email: String,
    /// The CPF, with or without formatting characters.
    pub cpf: String,
    /// The password.
    pub password: String,
}

/// The raw check-in form fields, exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckinDraft {
    /// The chosen location.
    pub location: String,
    /// The visit description.
    pub description: String,
    /// The chosen date, in `DD/MM/YYYY` form.
    pub date: String,
    /// The chosen time label.
    pub time: String,
}

/// The admitted fields of a new check-in, normalized and ready to commit.
///
/// The id and owner name are assigned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCheckin {
    /// The location.
    pub location: String,
    /// The description.
    pub description: String,
    /// The normalized date.
    pub date: CheckinDate,
    /// The normalized time slot.
    pub time: SlotTime,
}

/// Validates a registration submission against the user directory.
///
/// Rules:
/// - name: required, trimmed length of at least 3 characters
/// - e-mail: required, must contain both `@` and `.` (deliberately weak,
///   not RFC validation)
/// - CPF: must pass checksum validation and must not already belong to a
///   registered user
/// - password: required, must satisfy the password policy
///
/// # Errors
///
/// Returns every failed field's error together in `ValidationErrors`.
pub fn validate_registration(
    input: &RegistrationInput,
    existing_users: &[User],
    policy: &PasswordPolicy,
) -> Result<User, ValidationErrors> {
    let mut errors: ValidationErrors = ValidationErrors::new();

    let trimmed_name: &str = input.name.trim();
    if trimmed_name.is_empty() {
        errors.push(DomainError::MissingField { field: "nome" });
    } else if trimmed_name.chars().count() < 3 {
        errors.push(DomainError::InvalidName(String::from(
            "Name must have at least 3 characters",
        )));
    }

    let trimmed_email: &str = input.email.trim();
    if trimmed_email.is_empty() {
        errors.push(DomainError::MissingField { field: "email" });
    } else if !(trimmed_email.contains('@') && trimmed_email.contains('.')) {
        errors.push(DomainError::InvalidEmail(String::from(
            "E-mail must contain '@' and '.'",
        )));
    }

    let cpf: Option<Cpf> = if input.cpf.trim().is_empty() {
        errors.push(DomainError::MissingField { field: "cpf" });
        None
    } else {
        match Cpf::parse(&input.cpf) {
            Ok(cpf) => {
                // Uniqueness is checked only for a well-formed CPF.
                if existing_users.iter().any(|user| user.cpf == cpf) {
                    errors.push(DomainError::DuplicateCpf { cpf });
                    None
                } else {
                    Some(cpf)
                }
            }
            Err(error) => {
                errors.push(error);
                None
            }
        }
    };

    if input.password.is_empty() {
        errors.push(DomainError::MissingField { field: "senha" });
    } else if let Err(policy_error) = policy.validate(&input.password) {
        errors.push(DomainError::WeakPassword(policy_error.to_string()));
    }

    match cpf {
        Some(cpf) if errors.is_empty() => Ok(User::new(
            input.name.clone(),
            input.email.clone(),
            cpf,
            input.password.clone(),
        )),
        _ => Err(errors),
    }
}

/// Validates a new check-in submission against the current collection.
///
/// Rules:
/// - location, description, date, and time are each required and reported
///   per field
/// - the date must parse as `DD/MM/YYYY` and fall on a business day; when
///   it does not, any provided time selection is cleared and no label or
///   capacity check runs for it
/// - the time must be one of the allowed slot labels
/// - the `(date, time)` slot must be below the capacity ceiling
///
/// # Errors
///
/// Returns every failed field's error together in `ValidationErrors`.
pub fn validate_new_checkin(
    draft: &CheckinDraft,
    existing: &[Checkin],
    policy: &SlotPolicy,
) -> Result<ValidatedCheckin, ValidationErrors> {
    let mut errors: ValidationErrors = ValidationErrors::new();

    if draft.location.trim().is_empty() {
        errors.push(DomainError::MissingField { field: "local" });
    }
    if draft.description.trim().is_empty() {
        errors.push(DomainError::MissingField { field: "descricao" });
    }

    let date: Option<CheckinDate> = validate_date_field(&draft.date, &mut errors);
    let time: Option<SlotTime> = validate_time_field(&draft.time, date, policy, &mut errors);

    if let (Some(date), Some(time)) = (date, time)
        && !has_capacity(existing, date, time, None, policy.ceiling())
    {
        errors.push(DomainError::CapacityExceeded {
            date,
            time,
            ceiling: policy.ceiling(),
        });
    }

    match (date, time) {
        (Some(date), Some(time)) if errors.is_empty() => Ok(ValidatedCheckin {
            location: draft.location.clone(),
            description: draft.description.clone(),
            date,
            time,
        }),
        _ => Err(errors),
    }
}

/// Validates the new `(date, time)` of an in-place check-in edit.
///
/// Same rules as creation, except the capacity count excludes the
/// check-in being edited, so moving a check-in to its own current slot
/// always succeeds regardless of ceiling.
///
/// # Errors
///
/// Returns every failed field's error together in `ValidationErrors`.
pub fn validate_edited_checkin(
    id: &CheckinId,
    new_date: &str,
    new_time: &str,
    existing: &[Checkin],
    policy: &SlotPolicy,
) -> Result<(CheckinDate, SlotTime), ValidationErrors> {
    let mut errors: ValidationErrors = ValidationErrors::new();

    let date: Option<CheckinDate> = validate_date_field(new_date, &mut errors);
    let time: Option<SlotTime> = validate_time_field(new_time, date, policy, &mut errors);

    if let (Some(date), Some(time)) = (date, time)
        && !has_capacity(existing, date, time, Some(id), policy.ceiling())
    {
        errors.push(DomainError::CapacityExceeded {
            date,
            time,
            ceiling: policy.ceiling(),
        });
    }

    match (date, time) {
        (Some(date), Some(time)) if errors.is_empty() => Ok((date, time)),
        _ => Err(errors),
    }
}

/// Looks up a user by exact CPF and password match.
///
/// Plaintext comparison by design of the source system; see the note on
/// [`User::password`].
#[must_use]
pub fn authenticate<'a>(cpf: &str, password: &str, users: &'a [User]) -> Option<&'a User> {
    let cpf: Cpf = Cpf::parse(cpf).ok()?;
    users
        .iter()
        .find(|user| user.cpf == cpf && user.password == password)
}

/// Validates the date field, pushing any error and returning the parsed
/// date when it is usable.
fn validate_date_field(raw: &str, errors: &mut ValidationErrors) -> Option<CheckinDate> {
    if raw.trim().is_empty() {
        errors.push(DomainError::MissingField { field: "data" });
        return None;
    }

    match CheckinDate::parse(raw) {
        Ok(date) => {
            if date.is_business_day() {
                Some(date)
            } else {
                errors.push(DomainError::NotBusinessDay { date });
                None
            }
        }
        Err(error) => {
            errors.push(error);
            None
        }
    }
}

/// Validates the time field, pushing any error and returning the parsed
/// slot when it is usable.
///
/// An invalid date clears the time selection: the provided label gets a
/// "selection cleared" error instead of being checked against the allowed
/// set or the capacity ledger.
fn validate_time_field(
    raw: &str,
    date: Option<CheckinDate>,
    policy: &SlotPolicy,
    errors: &mut ValidationErrors,
) -> Option<SlotTime> {
    if raw.trim().is_empty() {
        errors.push(DomainError::MissingField { field: "horario" });
        return None;
    }

    if date.is_none() {
        errors.push(DomainError::TimeSelectionCleared);
        return None;
    }

    match SlotTime::parse(raw) {
        Ok(time) => {
            if policy.is_allowed(time) {
                Some(time)
            } else {
                errors.push(DomainError::InvalidTime(raw.trim().to_string()));
                None
            }
        }
        Err(error) => {
            errors.push(error);
            None
        }
    }
}
