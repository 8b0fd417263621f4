// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::CheckinDate;
use crate::cpf::Cpf;
use crate::slot::SlotTime;

/// Errors that can occur during domain validation.
///
/// Every variant maps to the form field it concerns (see
/// [`DomainError::field`]), so a caller can render errors inline next to
/// the offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was empty or absent.
    MissingField {
        /// The wire name of the missing field.
        field: &'static str,
    },
    /// The CPF failed structural or checksum validation.
    InvalidCpf(String),
    /// The CPF already belongs to a registered user.
    DuplicateCpf {
        /// The duplicate CPF.
        cpf: Cpf,
    },
    /// The name is too short.
    InvalidName(String),
    /// The e-mail does not have the expected shape.
    InvalidEmail(String),
    /// The password does not satisfy the password policy.
    WeakPassword(String),
    /// The date string could not be parsed.
    InvalidDate {
        /// The raw input.
        raw: String,
        /// Why parsing failed.
        reason: String,
    },
    /// The date falls on a weekend.
    NotBusinessDay {
        /// The rejected date.
        date: CheckinDate,
    },
    /// The time selection was cleared because the chosen date was invalid
    /// and must be made again.
    TimeSelectionCleared,
    /// The time label is not one of the allowed slots.
    InvalidTime(String),
    /// The slot is already at its capacity ceiling.
    CapacityExceeded {
        /// The slot date.
        date: CheckinDate,
        /// The slot time.
        time: SlotTime,
        /// The configured ceiling.
        ceiling: usize,
    },
}

impl DomainError {
    /// Returns the wire name of the form field this error concerns.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } => *field,
            Self::InvalidCpf(_) | Self::DuplicateCpf { .. } => "cpf",
            Self::InvalidName(_) => "nome",
            Self::InvalidEmail(_) => "email",
            Self::WeakPassword(_) => "senha",
            Self::InvalidDate { .. } | Self::NotBusinessDay { .. } => "data",
            Self::TimeSelectionCleared | Self::InvalidTime(_) | Self::CapacityExceeded { .. } => {
                "horario"
            }
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "Required field '{field}' is missing"),
            Self::InvalidCpf(msg) => write!(f, "Invalid CPF: {msg}"),
            Self::DuplicateCpf { cpf } => {
                write!(f, "CPF '{cpf}' is already registered")
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid e-mail: {msg}"),
            Self::WeakPassword(msg) => write!(f, "Weak password: {msg}"),
            Self::InvalidDate { raw, reason } => {
                write!(f, "Invalid date '{raw}': {reason}")
            }
            Self::NotBusinessDay { date } => {
                write!(f, "Date {date} is not a business day (Monday to Friday)")
            }
            Self::TimeSelectionCleared => {
                write!(f, "Time selection was cleared; choose a time again")
            }
            Self::InvalidTime(raw) => write!(f, "'{raw}' is not an available time slot"),
            Self::CapacityExceeded {
                date,
                time,
                ceiling,
            } => {
                write!(
                    f,
                    "Slot {date} {time} is full ({ceiling} check-ins maximum)"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// A collection of domain errors gathered from one validation pass.
///
/// Validators collect every field error instead of stopping at the first,
/// so a UI can display multi-field errors simultaneously.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: Vec<DomainError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends an error.
    pub fn push(&mut self, error: DomainError) {
        self.errors.push(error);
    }

    /// Returns whether no errors were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of collected errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the collected errors in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[DomainError] {
        &self.errors
    }

    /// Returns whether any collected error concerns the given field.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field() == field)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first: bool = true;
        for error in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = DomainError;
    type IntoIter = std::vec::IntoIter<DomainError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
