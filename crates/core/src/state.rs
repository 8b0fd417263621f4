// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use checkin_domain::{Checkin, CheckinId, User};

/// The complete system state: the user directory, the check-in
/// collection, and the active session.
///
/// State is an immutable value. Transitions never mutate it in place;
/// [`crate::apply`] produces a new `State` from the old one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct State {
    /// All registered users.
    pub users: Vec<User>,
    /// All scheduled check-ins, newest first.
    pub checkins: Vec<Checkin>,
    /// The user holding the single active session, if any.
    pub active_user: Option<User>,
}

impl State {
    /// Creates a new empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            users: Vec::new(),
            checkins: Vec::new(),
            active_user: None,
        }
    }

    /// Finds a check-in by id.
    #[must_use]
    pub fn find_checkin(&self, id: &CheckinId) -> Option<&Checkin> {
        self.checkins.iter().find(|checkin| checkin.id == *id)
    }

    /// Returns the check-ins owned by the active user, in stored order
    /// (newest first).
    #[must_use]
    pub fn active_user_checkins(&self) -> Vec<&Checkin> {
        self.active_user.as_ref().map_or_else(Vec::new, |user| {
            self.checkins
                .iter()
                .filter(|checkin| checkin.owner_name == user.name)
                .collect()
        })
    }
}

/// What a successful transition did, as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A user was added to the directory.
    UserRegistered {
        /// The registered user's name.
        name: String,
    },
    /// A session was opened.
    LoggedIn {
        /// The authenticated user's name.
        name: String,
    },
    /// The session was cleared.
    LoggedOut,
    /// A check-in was added to the collection.
    CheckinCreated {
        /// The new check-in's id.
        id: CheckinId,
    },
    /// A check-in was rescheduled.
    CheckinEdited {
        /// The edited check-in's id.
        id: CheckinId,
    },
    /// A check-in was removed.
    CheckinDeleted {
        /// The removed check-in's id.
        id: CheckinId,
    },
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserRegistered { name } => write!(f, "registered user '{name}'"),
            Self::LoggedIn { name } => write!(f, "logged in '{name}'"),
            Self::LoggedOut => write!(f, "logged out"),
            Self::CheckinCreated { id } => write!(f, "created check-in {id}"),
            Self::CheckinEdited { id } => write!(f, "edited check-in {id}"),
            Self::CheckinDeleted { id } => write!(f, "deleted check-in {id}"),
        }
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// What the transition did.
    pub outcome: Outcome,
}
