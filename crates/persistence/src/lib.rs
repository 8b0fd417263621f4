// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the check-in scheduling system.
//!
//! State is kept in three JSON documents under a root directory:
//!
//! - `users.json` — the user directory, an array of user records
//! - `checkins.json` — the check-in collection, newest first
//! - `usuario_logado.json` — the active session's user record; the file
//!   is absent when no session is active
//!
//! Documents are written atomically: content goes to a temporary file in
//! the same directory which is then renamed over the target, so a crash
//! mid-write never leaves a truncated document behind. A missing file
//! reads as the empty collection (or no session), which makes first
//! launch on an empty directory work without setup.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use store::JsonStore;
