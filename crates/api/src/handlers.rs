// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use std::time::{SystemTime, UNIX_EPOCH};

use checkin::{Command, State, TransitionResult, apply};
use checkin_domain::{
    CheckinDate, CheckinDraft, CheckinId, CheckinPolicy, RegistrationInput, SlotTime, slot_count,
};

use crate::error::{ApiError, FieldError, translate_core_error};
use crate::request_response::{
    CheckinInfo, CreateCheckinRequest, CreateCheckinResponse, DeleteCheckinRequest,
    DeleteCheckinResponse, EditCheckinRequest, EditCheckinResponse, ListCheckinsResponse,
    LoginRequest, LoginResponse, LogoutResponse, RegisterRequest, RegisterResponse,
    SlotAvailability, SlotAvailabilityResponse,
};

/// The result of an API operation that changes state.
///
/// The caller owns the state; a successful operation hands back the new
/// state to adopt and persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The new state after the operation.
    pub new_state: State,
}

/// Generates a fresh check-in id from the current time and a random
/// suffix.
fn generate_checkin_id() -> CheckinId {
    let millis: u128 = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis());
    CheckinId::new(&format!("{millis}-{:06x}", rand::random::<u32>()))
}

/// Registers a new user via the API boundary.
///
/// # Arguments
///
/// * `state` - The current system state
/// * `request` - The API request to register a user
/// * `policy` - The slot and password configuration
///
/// # Errors
///
/// Returns `ApiError::ValidationFailed` with one entry per rejected
/// field.
pub fn register(
    state: &State,
    request: RegisterRequest,
    policy: &CheckinPolicy,
) -> Result<ApiResult<RegisterResponse>, ApiError> {
    let command: Command = Command::Register {
        input: RegistrationInput {
            name: request.nome,
            email: request.email,
            cpf: request.cpf,
            password: request.senha,
        },
    };

    let result: TransitionResult = apply(state, command, policy).map_err(|error| {
        tracing::warn!("registration rejected: {error}");
        translate_core_error(&error)
    })?;

    let nome: String = result
        .new_state
        .users
        .last()
        .map_or_else(String::new, |user| user.name.clone());
    tracing::info!("registered user '{nome}'");

    Ok(ApiResult {
        response: RegisterResponse {
            nome,
            message: String::from("Cadastro realizado com sucesso"),
        },
        new_state: result.new_state,
    })
}

/// Opens a session for a registered user.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` if no registered user
/// matches the submitted CPF and password.
pub fn login(
    state: &State,
    request: LoginRequest,
    policy: &CheckinPolicy,
) -> Result<ApiResult<LoginResponse>, ApiError> {
    let command: Command = Command::Login {
        cpf: request.cpf,
        password: request.senha,
    };

    let result: TransitionResult = apply(state, command, policy).map_err(|error| {
        tracing::warn!("login rejected: {error}");
        translate_core_error(&error)
    })?;

    let nome: String = result
        .new_state
        .active_user
        .as_ref()
        .map_or_else(String::new, |user| user.name.clone());
    tracing::info!("session opened for '{nome}'");

    Ok(ApiResult {
        response: LoginResponse {
            nome,
            message: String::from("Login realizado com sucesso"),
        },
        new_state: result.new_state,
    })
}

/// Clears the active session.
///
/// Idempotent: logging out without a session succeeds.
///
/// # Errors
///
/// This operation does not fail; the `Result` keeps the handler
/// signatures uniform.
pub fn logout(
    state: &State,
    policy: &CheckinPolicy,
) -> Result<ApiResult<LogoutResponse>, ApiError> {
    let result: TransitionResult =
        apply(state, Command::Logout, policy).map_err(|error| translate_core_error(&error))?;
    tracing::info!("session cleared");

    Ok(ApiResult {
        response: LogoutResponse {
            message: String::from("Logout realizado com sucesso"),
        },
        new_state: result.new_state,
    })
}

/// Creates a new check-in owned by the active user.
///
/// The id is assigned here, from the current time and a random suffix.
///
/// # Errors
///
/// Returns `ApiError::SessionRequired` without an active session, or
/// `ApiError::ValidationFailed` with one entry per rejected field.
pub fn create_checkin(
    state: &State,
    request: CreateCheckinRequest,
    policy: &CheckinPolicy,
) -> Result<ApiResult<CreateCheckinResponse>, ApiError> {
    let id: CheckinId = generate_checkin_id();
    let command: Command = Command::CreateCheckin {
        id: id.clone(),
        draft: CheckinDraft {
            location: request.local,
            description: request.descricao,
            date: request.data,
            time: request.horario,
        },
    };

    let result: TransitionResult = apply(state, command, policy).map_err(|error| {
        tracing::warn!("check-in rejected: {error}");
        translate_core_error(&error)
    })?;

    let checkin: CheckinInfo = result
        .new_state
        .find_checkin(&id)
        .map(CheckinInfo::from)
        .ok_or_else(|| ApiError::ResourceNotFound {
            id: id.value().to_string(),
        })?;
    tracing::info!("created check-in {id}");

    Ok(ApiResult {
        response: CreateCheckinResponse {
            checkin,
            message: String::from("Check-in agendado com sucesso"),
        },
        new_state: result.new_state,
    })
}

/// Reschedules an existing check-in.
///
/// # Errors
///
/// Returns `ApiError::SessionRequired` without an active session,
/// `ApiError::ResourceNotFound` for an unknown id, or
/// `ApiError::ValidationFailed` with one entry per rejected field.
pub fn edit_checkin(
    state: &State,
    request: EditCheckinRequest,
    policy: &CheckinPolicy,
) -> Result<ApiResult<EditCheckinResponse>, ApiError> {
    let id: CheckinId = CheckinId::new(&request.id);
    let command: Command = Command::EditCheckin {
        id: id.clone(),
        date: request.data,
        time: request.horario,
    };

    let result: TransitionResult = apply(state, command, policy).map_err(|error| {
        tracing::warn!("edit of check-in {id} rejected: {error}");
        translate_core_error(&error)
    })?;

    let checkin: CheckinInfo = result
        .new_state
        .find_checkin(&id)
        .map(CheckinInfo::from)
        .ok_or_else(|| ApiError::ResourceNotFound {
            id: id.value().to_string(),
        })?;
    tracing::info!("edited check-in {id}");

    Ok(ApiResult {
        response: EditCheckinResponse {
            checkin,
            message: String::from("Check-in atualizado com sucesso"),
        },
        new_state: result.new_state,
    })
}

/// Removes an existing check-in.
///
/// # Errors
///
/// Returns `ApiError::SessionRequired` without an active session or
/// `ApiError::ResourceNotFound` for an unknown id.
pub fn delete_checkin(
    state: &State,
    request: DeleteCheckinRequest,
    policy: &CheckinPolicy,
) -> Result<ApiResult<DeleteCheckinResponse>, ApiError> {
    let id: CheckinId = CheckinId::new(&request.id);
    let command: Command = Command::DeleteCheckin { id: id.clone() };

    let result: TransitionResult = apply(state, command, policy).map_err(|error| {
        tracing::warn!("delete of check-in {id} rejected: {error}");
        translate_core_error(&error)
    })?;
    tracing::info!("deleted check-in {id}");

    Ok(ApiResult {
        response: DeleteCheckinResponse {
            id: id.value().to_string(),
            message: String::from("Check-in removido com sucesso"),
        },
        new_state: result.new_state,
    })
}

/// Lists the active user's check-ins, newest first.
///
/// Read-only: does not produce a new state.
///
/// # Errors
///
/// Returns `ApiError::SessionRequired` without an active session.
pub fn list_checkins(state: &State) -> Result<ListCheckinsResponse, ApiError> {
    if state.active_user.is_none() {
        return Err(ApiError::SessionRequired);
    }

    let checkins: Vec<CheckinInfo> = state
        .active_user_checkins()
        .into_iter()
        .map(CheckinInfo::from)
        .collect();

    Ok(ListCheckinsResponse { checkins })
}

/// Reports the occupancy of every allowed slot on a given date.
///
/// Read-only: does not produce a new state.
///
/// # Errors
///
/// Returns `ApiError::ValidationFailed` if the date does not parse.
pub fn slot_availability(
    state: &State,
    data: &str,
    policy: &CheckinPolicy,
) -> Result<SlotAvailabilityResponse, ApiError> {
    let date: CheckinDate = CheckinDate::parse(data).map_err(|error| {
        ApiError::ValidationFailed {
            errors: vec![FieldError {
                field: error.field().to_string(),
                message: error.to_string(),
            }],
        }
    })?;

    let ceiling: usize = policy.slots.ceiling();
    let slots: Vec<SlotAvailability> = policy
        .slots
        .allowed_times()
        .iter()
        .map(|time: &SlotTime| {
            let occupied: usize = slot_count(&state.checkins, date, *time, None);
            SlotAvailability {
                horario: time.to_string(),
                occupied,
                remaining: ceiling.saturating_sub(occupied),
            }
        })
        .collect();

    Ok(SlotAvailabilityResponse {
        data: date.to_string(),
        slots,
    })
}
