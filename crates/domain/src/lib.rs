// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod cpf;
mod error;
mod password;
mod policy;
mod slot;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use calendar::{CheckinDate, is_business_day};
pub use cpf::Cpf;
pub use error::{DomainError, ValidationErrors};
pub use password::{PasswordPolicy, PasswordPolicyError};
pub use policy::CheckinPolicy;
pub use slot::{SlotPolicy, SlotTime, has_capacity, slot_count};
pub use types::{Checkin, CheckinId, User};
pub use validation::{
    CheckinDraft, RegistrationInput, ValidatedCheckin, authenticate, validate_edited_checkin,
    validate_new_checkin, validate_registration,
};
