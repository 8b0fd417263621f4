// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::CheckinDate;
use crate::cpf::Cpf;
use crate::slot::SlotTime;
use crate::types::{Checkin, CheckinId, User};
use crate::validation::{CheckinDraft, RegistrationInput};

/// A CPF with valid check digits, usable anywhere a real one is needed.
pub const VALID_CPF: &str = "52998224725";

pub fn test_user() -> User {
    User::new(
        String::from("Maria Silva"),
        String::from("maria@example.com"),
        Cpf::parse(VALID_CPF).unwrap(),
        String::from("Senha123"),
    )
}

pub fn test_registration() -> RegistrationInput {
    RegistrationInput {
        name: String::from("Maria Silva"),
        email: String::from("maria@example.com"),
        cpf: String::from(VALID_CPF),
        password: String::from("Senha123"),
    }
}

pub fn test_draft(date: &str, time: &str) -> CheckinDraft {
    CheckinDraft {
        location: String::from("Unidade Centro"),
        description: String::from("Consulta de rotina"),
        date: date.to_string(),
        time: time.to_string(),
    }
}

pub fn test_checkin(id: &str, date: &str, time: &str) -> Checkin {
    Checkin::new(
        CheckinId::new(id),
        String::from("Maria Silva"),
        String::from("Unidade Centro"),
        String::from("Consulta de rotina"),
        CheckinDate::parse(date).unwrap(),
        SlotTime::parse(time).unwrap(),
    )
}

/// Fills a `(date, time)` slot with `count` distinct check-ins.
pub fn filled_slot(date: &str, time: &str, count: usize) -> Vec<Checkin> {
    (0..count)
        .map(|n| test_checkin(&format!("checkin-{n}"), date, time))
        .collect()
}
