// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CPF (Brazilian individual taxpayer identifier) parsing and checksum
//! validation.
//!
//! A CPF is an 11-digit number whose last two digits are check digits
//! computed from the first nine. Formatting characters (dots, dashes,
//! spaces) are accepted on input and stripped before validation.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A validated CPF, stored as its 11 normalized digits.
///
/// A `Cpf` can only be constructed through [`Cpf::parse`], so holding one
/// is proof the checksum passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf {
    digits: String,
}

impl Cpf {
    /// Parses and validates a CPF from raw user input.
    ///
    /// All non-digit characters are stripped first, so both `"529.982.247-25"`
    /// and `"52998224725"` are accepted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCpf` if:
    /// - the cleaned input does not contain exactly 11 digits
    /// - all 11 digits are identical (e.g. `"00000000000"`)
    /// - either check digit does not match
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

        if digits.len() != 11 {
            return Err(DomainError::InvalidCpf(String::from(
                "CPF must contain exactly 11 digits",
            )));
        }

        // Repeated-digit sequences pass the checksum but are not valid CPFs.
        let first: u8 = digits.as_bytes()[0];
        if digits.bytes().all(|b| b == first) {
            return Err(DomainError::InvalidCpf(String::from(
                "CPF digits must not all be identical",
            )));
        }

        let values: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();

        let first_check: u8 = check_digit(&values[..9], 10);
        if first_check != values[9] {
            return Err(DomainError::InvalidCpf(String::from(
                "CPF first check digit does not match",
            )));
        }

        let second_check: u8 = check_digit(&values[..10], 11);
        if second_check != values[10] {
            return Err(DomainError::InvalidCpf(String::from(
                "CPF second check digit does not match",
            )));
        }

        Ok(Self { digits })
    }

    /// Returns whether the raw input is a valid CPF.
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    /// Returns the normalized 11-digit value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.digits
    }
}

/// Computes one CPF check digit over a digit prefix.
///
/// Digits are weighted descending from `highest_weight` down to 2, then the
/// weighted sum is multiplied by 10 and reduced modulo 11; a result above 9
/// maps to 0.
fn check_digit(values: &[u8], highest_weight: u32) -> u8 {
    let sum: u32 = values
        .iter()
        .zip((2..=highest_weight).rev())
        .map(|(&value, weight)| u32::from(value) * weight)
        .sum();
    let remainder: u32 = (sum * 10) % 11;
    if remainder > 9 {
        0
    } else {
        u8::try_from(remainder).unwrap_or(0)
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digits)
    }
}

impl TryFrom<String> for Cpf {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.digits
    }
}
