// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Outcome, State, TransitionResult};
use checkin_domain::{
    Checkin, CheckinPolicy, User, ValidatedCheckin, authenticate, validate_edited_checkin,
    validate_new_checkin, validate_registration,
};

/// Applies a command to the state, producing the new state and the outcome.
///
/// This is the single state transition function. It is pure: given the
/// same state, command, and policy it always produces the same result,
/// and a failed command leaves no trace.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `policy` - The slot and password configuration
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and the outcome
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - Domain validation rejects any submitted field
/// - Login credentials match no registered user
/// - A check-in command runs without an active session
/// - The referenced check-in id does not exist, or a new id collides
pub fn apply(
    state: &State,
    command: Command,
    policy: &CheckinPolicy,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::Register { input } => {
            let user: User = validate_registration(&input, &state.users, &policy.passwords)?;
            let name: String = user.name.clone();

            let mut new_state: State = state.clone();
            new_state.users.push(user);

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::UserRegistered { name },
            })
        }
        Command::Login { cpf, password } => {
            let user: User = authenticate(&cpf, &password, &state.users)
                .cloned()
                .ok_or(CoreError::AuthenticationFailed)?;
            let name: String = user.name.clone();

            let mut new_state: State = state.clone();
            new_state.active_user = Some(user);

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::LoggedIn { name },
            })
        }
        Command::Logout => {
            let mut new_state: State = state.clone();
            new_state.active_user = None;

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::LoggedOut,
            })
        }
        Command::CreateCheckin { id, draft } => {
            let owner: &User = state
                .active_user
                .as_ref()
                .ok_or(CoreError::NoActiveSession)?;

            if state.find_checkin(&id).is_some() {
                return Err(CoreError::DuplicateCheckinId(id));
            }

            let validated: ValidatedCheckin =
                validate_new_checkin(&draft, &state.checkins, &policy.slots)?;

            let checkin: Checkin = Checkin::new(
                id.clone(),
                owner.name.clone(),
                validated.location,
                validated.description,
                validated.date,
                validated.time,
            );

            let mut new_state: State = state.clone();
            // Newest first.
            new_state.checkins.insert(0, checkin);

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::CheckinCreated { id },
            })
        }
        Command::EditCheckin { id, date, time } => {
            if state.active_user.is_none() {
                return Err(CoreError::NoActiveSession);
            }
            if state.find_checkin(&id).is_none() {
                return Err(CoreError::CheckinNotFound(id));
            }

            let (new_date, new_time) =
                validate_edited_checkin(&id, &date, &time, &state.checkins, &policy.slots)?;

            let mut new_state: State = state.clone();
            for checkin in &mut new_state.checkins {
                if checkin.id == id {
                    checkin.date = new_date;
                    checkin.time = new_time;
                }
            }

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::CheckinEdited { id },
            })
        }
        Command::DeleteCheckin { id } => {
            if state.active_user.is_none() {
                return Err(CoreError::NoActiveSession);
            }
            if state.find_checkin(&id).is_none() {
                return Err(CoreError::CheckinNotFound(id));
            }

            let mut new_state: State = state.clone();
            new_state.checkins.retain(|checkin| checkin.id != id);

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::CheckinDeleted { id },
            })
        }
    }
}
