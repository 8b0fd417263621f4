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
    clippy::all
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, FieldError, translate_core_error};
pub use handlers::{
    ApiResult, create_checkin, delete_checkin, edit_checkin, list_checkins, login, logout,
    register, slot_availability,
};
pub use request_response::{
    CheckinInfo, CreateCheckinRequest, CreateCheckinResponse, DeleteCheckinRequest,
    DeleteCheckinResponse, EditCheckinRequest, EditCheckinResponse, ListCheckinsResponse,
    LoginRequest, LoginResponse, LogoutResponse, RegisterRequest, RegisterResponse,
    SlotAvailability, SlotAvailabilityResponse,
};
