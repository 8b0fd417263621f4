// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use checkin_domain::{CheckinDraft, CheckinId, RegistrationInput};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request state changes. Field values are
/// carried raw, exactly as submitted; validation happens inside
/// [`crate::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new user.
    Register {
        /// The raw registration form fields.
        input: RegistrationInput,
    },
    /// Open a session for a registered user.
    Login {
        /// The CPF, with or without formatting characters.
        cpf: String,
        /// The password.
        password: String,
    },
    /// Clear the active session.
    Logout,
    /// Create a new check-in owned by the active user.
    CreateCheckin {
        /// The caller-assigned id for the new check-in.
        id: CheckinId,
        /// The raw check-in form fields.
        draft: CheckinDraft,
    },
    /// Reschedule an existing check-in.
    EditCheckin {
        /// The id of the check-in to edit.
        id: CheckinId,
        /// The new date, in `DD/MM/YYYY` form.
        date: String,
        /// The new time label.
        time: String,
    },
    /// Remove an existing check-in.
    DeleteCheckin {
        /// The id of the check-in to remove.
        id: CheckinId,
    },
}
