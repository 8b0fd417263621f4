// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password policy validation.
//!
//! Registration passwords must meet a minimum length and contain an
//! uppercase letter, a lowercase letter, and a digit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Password policy errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordPolicyError {
    /// Password is too short.
    #[error("Password must be at least {min_length} characters long")]
    TooShort { min_length: usize },

    /// Password has no uppercase letter.
    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    /// Password has no lowercase letter.
    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    /// Password has no digit.
    #[error("Password must contain at least one digit")]
    MissingDigit,
}

/// Password policy configuration.
///
/// The character-class requirements are fixed; only the minimum length is
/// configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Minimum password length.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 4 }
    }
}

impl PasswordPolicy {
    /// Validates a password against the policy.
    ///
    /// # Errors
    ///
    /// Returns a `PasswordPolicyError` describing the first unmet
    /// requirement.
    pub fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
        if password.chars().count() < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min_length: self.min_length,
            });
        }

        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(PasswordPolicyError::MissingUppercase);
        }

        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(PasswordPolicyError::MissingLowercase);
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }

        Ok(())
    }
}
