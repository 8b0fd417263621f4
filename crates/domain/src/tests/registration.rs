// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{VALID_CPF, test_registration, test_user};
use crate::error::DomainError;
use crate::password::PasswordPolicy;
use crate::types::User;
use crate::validation::{RegistrationInput, authenticate, validate_registration};

#[test]
fn test_valid_registration_produces_a_user() {
    let input: RegistrationInput = test_registration();
    let user: User =
        validate_registration(&input, &[], &PasswordPolicy::default()).unwrap();

    assert_eq!(user.name, "Maria Silva");
    assert_eq!(user.email, "maria@example.com");
    assert_eq!(user.cpf.value(), VALID_CPF);
    assert_eq!(user.password, "Senha123");
}

#[test]
fn test_formatted_cpf_is_accepted() {
    let mut input: RegistrationInput = test_registration();
    input.cpf = String::from("529.982.247-25");

    let user: User =
        validate_registration(&input, &[], &PasswordPolicy::default()).unwrap();
    assert_eq!(user.cpf.value(), VALID_CPF);
}

#[test]
fn test_duplicate_cpf_is_rejected() {
    let input: RegistrationInput = test_registration();
    let existing: Vec<User> = vec![test_user()];

    let errors = validate_registration(&input, &existing, &PasswordPolicy::default())
        .unwrap_err();

    assert!(errors.has_field("cpf"));
    assert!(
        errors
            .errors()
            .iter()
            .any(|error| matches!(error, DomainError::DuplicateCpf { .. }))
    );
}

#[test]
fn test_bad_check_digits_are_rejected() {
    let mut input: RegistrationInput = test_registration();
    input.cpf = String::from("52998224724");

    let errors =
        validate_registration(&input, &[], &PasswordPolicy::default()).unwrap_err();
    assert!(errors.has_field("cpf"));
}

#[test]
fn test_short_name_is_rejected() {
    let mut input: RegistrationInput = test_registration();
    input.name = String::from("Jo");

    let errors =
        validate_registration(&input, &[], &PasswordPolicy::default()).unwrap_err();
    assert!(errors.has_field("nome"));
}

#[test]
fn test_name_shorter_than_three_after_trimming_is_rejected() {
    let mut input: RegistrationInput = test_registration();
    input.name = String::from("  Jo  ");

    let errors =
        validate_registration(&input, &[], &PasswordPolicy::default()).unwrap_err();
    assert!(errors.has_field("nome"));
}

#[test]
fn test_email_without_at_or_dot_is_rejected() {
    for bad_email in ["maria.example.com", "maria@example"] {
        let mut input: RegistrationInput = test_registration();
        input.email = bad_email.to_string();

        let errors =
            validate_registration(&input, &[], &PasswordPolicy::default()).unwrap_err();
        assert!(errors.has_field("email"), "{bad_email}");
    }
}

#[test]
fn test_weak_password_is_rejected() {
    let mut input: RegistrationInput = test_registration();
    input.password = String::from("senha123");

    let errors =
        validate_registration(&input, &[], &PasswordPolicy::default()).unwrap_err();
    assert!(errors.has_field("senha"));
}

#[test]
fn test_all_field_errors_are_collected_together() {
    let input: RegistrationInput = RegistrationInput {
        name: String::new(),
        email: String::new(),
        cpf: String::new(),
        password: String::new(),
    };

    let errors =
        validate_registration(&input, &[], &PasswordPolicy::default()).unwrap_err();

    assert_eq!(errors.len(), 4);
    assert!(errors.has_field("nome"));
    assert!(errors.has_field("email"));
    assert!(errors.has_field("cpf"));
    assert!(errors.has_field("senha"));
}

#[test]
fn test_authenticate_matches_cpf_and_password() {
    let users: Vec<User> = vec![test_user()];

    assert!(authenticate(VALID_CPF, "Senha123", &users).is_some());
    assert!(authenticate("529.982.247-25", "Senha123", &users).is_some());
    assert!(authenticate(VALID_CPF, "wrong", &users).is_none());
    assert!(authenticate("11144477735", "Senha123", &users).is_none());
    assert!(authenticate("not-a-cpf", "Senha123", &users).is_none());
}
