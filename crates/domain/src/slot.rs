// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time slots and per-slot capacity accounting.
//!
//! A slot is a `(date, time)` pair that check-ins compete for. The set of
//! allowed time labels and the capacity ceiling are carried by
//! [`SlotPolicy`]; counting is a pure function over an in-memory snapshot
//! of the check-in collection.

use crate::calendar::CheckinDate;
use crate::error::DomainError;
use crate::types::{Checkin, CheckinId};
use serde::{Deserialize, Serialize};

/// Default per-slot capacity ceiling.
pub const DEFAULT_CEILING: usize = 10;

/// An `HH:MM` time-of-day label identifying a slot within a date.
///
/// Serialized as a zero-padded `HH:MM` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotTime {
    hour: u8,
    minute: u8,
}

impl SlotTime {
    /// Creates a slot time from hour and minute components.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTime` if the hour is not below 24 or
    /// the minute not below 60.
    pub fn new(hour: u8, minute: u8) -> Result<Self, DomainError> {
        if hour >= 24 || minute >= 60 {
            return Err(DomainError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    /// Parses a slot time from an `H:MM` or `HH:MM` label.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTime` if the label is not two
    /// `:`-separated numbers naming a valid time of day.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidTime(raw.to_string());

        let (hour_part, minute_part) = raw.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u8 = hour_part.parse().map_err(|_| invalid())?;
        let minute: u8 = minute_part.parse().map_err(|_| invalid())?;

        Self::new(hour, minute).map_err(|_| invalid())
    }

    /// Returns the hour component.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute component.
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }
}

impl std::fmt::Display for SlotTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl std::str::FromStr for SlotTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SlotTime {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SlotTime> for String {
    fn from(time: SlotTime) -> Self {
        time.to_string()
    }
}

/// The scheduling policy for slots: which time labels may be booked and
/// how many check-ins one slot admits.
///
/// The same allowed set governs both the create and edit paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPolicy {
    allowed_times: Vec<SlotTime>,
    ceiling: usize,
}

impl SlotPolicy {
    /// Creates a policy from an explicit allowed set and ceiling.
    #[must_use]
    pub const fn new(allowed_times: Vec<SlotTime>, ceiling: usize) -> Self {
        Self {
            allowed_times,
            ceiling,
        }
    }

    /// Returns the allowed time labels.
    #[must_use]
    pub fn allowed_times(&self) -> &[SlotTime] {
        &self.allowed_times
    }

    /// Returns the per-slot capacity ceiling.
    #[must_use]
    pub const fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Returns whether a time is one of the allowed slot labels.
    #[must_use]
    pub fn is_allowed(&self, time: SlotTime) -> bool {
        self.allowed_times.contains(&time)
    }
}

impl Default for SlotPolicy {
    /// The canonical policy: morning and afternoon slots, ten check-ins each.
    fn default() -> Self {
        Self {
            allowed_times: vec![
                SlotTime { hour: 9, minute: 0 },
                SlotTime {
                    hour: 15,
                    minute: 0,
                },
            ],
            ceiling: DEFAULT_CEILING,
        }
    }
}

/// Counts the check-ins occupying a `(date, time)` slot.
///
/// A check-in whose id equals `exclude_id` is not counted; an in-place
/// edit passes its own id so the prior booking does not count against
/// itself.
#[must_use]
pub fn slot_count(
    checkins: &[Checkin],
    date: CheckinDate,
    time: SlotTime,
    exclude_id: Option<&CheckinId>,
) -> usize {
    checkins
        .iter()
        .filter(|checkin| checkin.date == date && checkin.time == time)
        .filter(|checkin| exclude_id.is_none_or(|id| checkin.id != *id))
        .count()
}

/// Returns whether a `(date, time)` slot can admit one more check-in.
///
/// No side effects. The caller is responsible for treating the capacity
/// check and the subsequent commit as a single logical step per
/// submission.
#[must_use]
pub fn has_capacity(
    checkins: &[Checkin],
    date: CheckinDate,
    time: SlotTime,
    exclude_id: Option<&CheckinId>,
    ceiling: usize,
) -> bool {
    slot_count(checkins, date, time, exclude_id) < ceiling
}
