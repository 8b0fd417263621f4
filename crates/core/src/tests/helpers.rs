// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply;
use crate::command::Command;
use crate::state::State;
use checkin_domain::{CheckinDraft, CheckinId, CheckinPolicy, RegistrationInput};

/// A CPF with valid check digits.
pub const CPF: &str = "52998224725";
/// A second CPF with valid check digits.
pub const OTHER_CPF: &str = "11144477735";

// 10/06/2024 is a Monday.
pub const MONDAY: &str = "10/06/2024";

pub fn registration(name: &str, cpf: &str) -> RegistrationInput {
    RegistrationInput {
        name: name.to_string(),
        email: String::from("user@example.com"),
        cpf: cpf.to_string(),
        password: String::from("Senha123"),
    }
}

pub fn draft(date: &str, time: &str) -> CheckinDraft {
    CheckinDraft {
        location: String::from("Unidade Centro"),
        description: String::from("Consulta de rotina"),
        date: date.to_string(),
        time: time.to_string(),
    }
}

/// Builds a state with one registered, logged-in user.
pub fn logged_in_state() -> State {
    let policy: CheckinPolicy = CheckinPolicy::default();
    let state: State = State::new();

    let state: State = apply(
        &state,
        Command::Register {
            input: registration("Maria Silva", CPF),
        },
        &policy,
    )
    .unwrap()
    .new_state;

    apply(
        &state,
        Command::Login {
            cpf: CPF.to_string(),
            password: String::from("Senha123"),
        },
        &policy,
    )
    .unwrap()
    .new_state
}

/// Creates a check-in with the given id in an already-logged-in state.
pub fn with_checkin(state: &State, id: &str, date: &str, time: &str) -> State {
    apply(
        state,
        Command::CreateCheckin {
            id: CheckinId::new(id),
            draft: draft(date, time),
        },
        &CheckinPolicy::default(),
    )
    .unwrap()
    .new_state
}
