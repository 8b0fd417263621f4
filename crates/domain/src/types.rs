// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::CheckinDate;
use crate::cpf::Cpf;
use crate::slot::SlotTime;
use serde::{Deserialize, Serialize};

/// The opaque identifier of a check-in.
///
/// Assigned once at creation time and stable across edits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckinId {
    value: String,
}

impl CheckinId {
    /// Creates a new `CheckinId` from an opaque token.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the token value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for CheckinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A registered user.
///
/// Users are created at registration, never edited, and never deleted.
/// The CPF uniquely identifies at most one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user's full name.
    #[serde(rename = "nome")]
    pub name: String,
    /// The user's e-mail address.
    pub email: String,
    /// The user's CPF (unique key).
    pub cpf: Cpf,
    /// The user's password. Stored and compared in plaintext; a
    /// deployment exposed beyond a single local device must replace this
    /// with a salted-hash scheme.
    #[serde(rename = "senha")]
    pub password: String,
}

impl User {
    /// Creates a new `User`.
    #[must_use]
    pub const fn new(name: String, email: String, cpf: Cpf, password: String) -> Self {
        Self {
            name,
            email,
            cpf,
            password,
        }
    }
}

/// A scheduled check-in.
///
/// The owner is recorded by denormalized name, copied from the registering
/// user at creation time. Only `date` and `time` change on edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkin {
    /// The opaque identifier.
    pub id: CheckinId,
    /// The name of the user who created this check-in.
    #[serde(rename = "usuario")]
    pub owner_name: String,
    /// The visited location.
    #[serde(rename = "local")]
    pub location: String,
    /// The visit description.
    #[serde(rename = "descricao")]
    pub description: String,
    /// The scheduled date.
    #[serde(rename = "data")]
    pub date: CheckinDate,
    /// The scheduled time slot.
    #[serde(rename = "horario")]
    pub time: SlotTime,
}

impl Checkin {
    /// Creates a new `Checkin`.
    #[must_use]
    pub const fn new(
        id: CheckinId,
        owner_name: String,
        location: String,
        description: String,
        date: CheckinDate,
        time: SlotTime,
    ) -> Self {
        Self {
            id,
            owner_name,
            location,
            description,
            date,
            time,
        }
    }
}
