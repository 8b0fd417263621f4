// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use checkin::State;
use checkin_domain::CheckinPolicy;

use crate::handlers::{login, register};
use crate::request_response::{CreateCheckinRequest, LoginRequest, RegisterRequest};

/// A CPF with valid check digits.
pub const CPF: &str = "52998224725";

// 10/06/2024 is a Monday.
pub const MONDAY: &str = "10/06/2024";

pub fn register_request() -> RegisterRequest {
    RegisterRequest {
        nome: String::from("Maria Silva"),
        email: String::from("maria@example.com"),
        cpf: CPF.to_string(),
        senha: String::from("Senha123"),
    }
}

pub fn checkin_request(data: &str, horario: &str) -> CreateCheckinRequest {
    CreateCheckinRequest {
        local: String::from("Unidade Centro"),
        descricao: String::from("Consulta de rotina"),
        data: data.to_string(),
        horario: horario.to_string(),
    }
}

/// Builds a state with one registered, logged-in user.
pub fn logged_in_state() -> State {
    let policy: CheckinPolicy = CheckinPolicy::default();

    let state: State = register(&State::new(), register_request(), &policy)
        .unwrap()
        .new_state;

    login(
        &state,
        LoginRequest {
            cpf: CPF.to_string(),
            senha: String::from("Senha123"),
        },
        &policy,
    )
    .unwrap()
    .new_state
}
