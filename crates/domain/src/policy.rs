// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::password::PasswordPolicy;
use crate::slot::SlotPolicy;
use serde::{Deserialize, Serialize};

/// The full configuration bundle for the check-in system.
///
/// `Default` yields the canonical values: slots at 09:00 and 15:00 with a
/// ceiling of 10, and a 4-character minimum password. A host may
/// deserialize an alternative policy from JSON instead.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckinPolicy {
    /// Allowed slot labels and the per-slot capacity ceiling.
    #[serde(default)]
    pub slots: SlotPolicy,
    /// Password requirements for registration.
    #[serde(default)]
    pub passwords: PasswordPolicy,
}
