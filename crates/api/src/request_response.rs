// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry the raw form fields under their wire names; responses
//! are distinct from domain types and represent the API contract.

use checkin_domain::Checkin;

/// API request to register a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    /// The full name.
    pub nome: String,
    /// The e-mail address.
    pub email: String,
    /// The CPF, with or without formatting characters.
    pub cpf: String,
    /// The password.
    pub senha: String,
}

/// API response for a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterResponse {
    /// The registered user's name.
    pub nome: String,
    /// A success message.
    pub message: String,
}

/// API request to open a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    /// The CPF, with or without formatting characters.
    pub cpf: String,
    /// The password.
    pub senha: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    /// The authenticated user's name.
    pub nome: String,
    /// A success message.
    pub message: String,
}

/// API response for a logout.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LogoutResponse {
    /// A success message.
    pub message: String,
}

/// API request to create a new check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCheckinRequest {
    /// The chosen location.
    pub local: String,
    /// The visit description.
    pub descricao: String,
    /// The chosen date, in `DD/MM/YYYY` form.
    pub data: String,
    /// The chosen time label.
    pub horario: String,
}

/// API response for a successful check-in creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateCheckinResponse {
    /// The created check-in.
    pub checkin: CheckinInfo,
    /// A success message.
    pub message: String,
}

/// API request to reschedule an existing check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCheckinRequest {
    /// The id of the check-in to edit.
    pub id: String,
    /// The new date, in `DD/MM/YYYY` form.
    pub data: String,
    /// The new time label.
    pub horario: String,
}

/// API response for a successful check-in edit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EditCheckinResponse {
    /// The check-in after the edit.
    pub checkin: CheckinInfo,
    /// A success message.
    pub message: String,
}

/// API request to remove an existing check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCheckinRequest {
    /// The id of the check-in to remove.
    pub id: String,
}

/// API response for a successful check-in deletion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteCheckinResponse {
    /// The removed check-in's id.
    pub id: String,
    /// A success message.
    pub message: String,
}

/// A check-in as presented at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckinInfo {
    /// The opaque identifier.
    pub id: String,
    /// The owning user's name.
    pub usuario: String,
    /// The location.
    pub local: String,
    /// The description.
    pub descricao: String,
    /// The date, in `DD/MM/YYYY` form.
    pub data: String,
    /// The time label, in `HH:MM` form.
    pub horario: String,
}

impl From<&Checkin> for CheckinInfo {
    fn from(checkin: &Checkin) -> Self {
        Self {
            id: checkin.id.value().to_string(),
            usuario: checkin.owner_name.clone(),
            local: checkin.location.clone(),
            descricao: checkin.description.clone(),
            data: checkin.date.to_string(),
            horario: checkin.time.to_string(),
        }
    }
}

/// API response listing the active user's check-ins, newest first.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListCheckinsResponse {
    /// The active user's check-ins.
    pub checkins: Vec<CheckinInfo>,
}

/// Occupancy of one slot on a given date.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlotAvailability {
    /// The slot's time label.
    pub horario: String,
    /// How many check-ins occupy the slot.
    pub occupied: usize,
    /// How many more check-ins the slot admits.
    pub remaining: usize,
}

/// API response describing slot occupancy for one date.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlotAvailabilityResponse {
    /// The date, in `DD/MM/YYYY` form.
    pub data: String,
    /// Occupancy per allowed slot, in policy order.
    pub slots: Vec<SlotAvailability>,
}
