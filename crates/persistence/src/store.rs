// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fs;
use std::path::{Path, PathBuf};

use checkin::State;
use checkin_domain::{Checkin, User};
use tracing::{debug, info};

use crate::error::PersistenceError;

const USERS_FILE: &str = "users.json";
const CHECKINS_FILE: &str = "checkins.json";
const SESSION_FILE: &str = "usuario_logado.json";

/// A JSON file store rooted at a directory.
///
/// Each record kind lives in its own document; see the crate docs for
/// the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Io` if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let root: PathBuf = root.into();
        fs::create_dir_all(&root)?;
        info!("opened store at {}", root.display());
        Ok(Self { root })
    }

    /// Returns the store's root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads the user directory. A missing file reads as no users.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load_users(&self) -> Result<Vec<User>, PersistenceError> {
        self.load_collection(USERS_FILE)
    }

    /// Writes the user directory.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_users(&self, users: &[User]) -> Result<(), PersistenceError> {
        self.write_document(USERS_FILE, users)
    }

    /// Loads the check-in collection. A missing file reads as no
    /// check-ins.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load_checkins(&self) -> Result<Vec<Checkin>, PersistenceError> {
        self.load_collection(CHECKINS_FILE)
    }

    /// Writes the check-in collection, preserving its order.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_checkins(&self, checkins: &[Checkin]) -> Result<(), PersistenceError> {
        self.write_document(CHECKINS_FILE, checkins)
    }

    /// Loads the active session, if one was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load_session(&self) -> Result<Option<User>, PersistenceError> {
        let path: PathBuf = self.root.join(SESSION_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let content: String = fs::read_to_string(&path)?;
        let user: User = serde_json::from_str(&content)?;
        Ok(Some(user))
    }

    /// Writes the active session; `None` removes the session file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_session(&self, session: Option<&User>) -> Result<(), PersistenceError> {
        match session {
            Some(user) => self.write_document(SESSION_FILE, user),
            None => {
                let path: PathBuf = self.root.join(SESSION_FILE);
                if path.exists() {
                    fs::remove_file(&path)?;
                    debug!("removed {SESSION_FILE}");
                }
                Ok(())
            }
        }
    }

    /// Loads the complete state from the three documents.
    ///
    /// # Errors
    ///
    /// Returns an error if any document cannot be read or does not parse.
    pub fn load_state(&self) -> Result<State, PersistenceError> {
        Ok(State {
            users: self.load_users()?,
            checkins: self.load_checkins()?,
            active_user: self.load_session()?,
        })
    }

    /// Writes the complete state to the three documents.
    ///
    /// Not transactional across documents; each document individually is
    /// written atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any write fails.
    pub fn save_state(&self, state: &State) -> Result<(), PersistenceError> {
        self.save_users(&state.users)?;
        self.save_checkins(&state.checkins)?;
        self.save_session(state.active_user.as_ref())?;
        Ok(())
    }

    fn load_collection<T: serde::de::DeserializeOwned>(
        &self,
        file: &str,
    ) -> Result<Vec<T>, PersistenceError> {
        let path: PathBuf = self.root.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content: String = fs::read_to_string(&path)?;
        let collection: Vec<T> = serde_json::from_str(&content)?;
        Ok(collection)
    }

    /// Serializes a document and renames it into place.
    fn write_document<T: serde::Serialize + ?Sized>(
        &self,
        file: &str,
        value: &T,
    ) -> Result<(), PersistenceError> {
        let content: String = serde_json::to_string_pretty(value)?;
        let path: PathBuf = self.root.join(file);
        let temp: PathBuf = self.root.join(format!("{file}.tmp"));

        fs::write(&temp, content)?;
        fs::rename(&temp, &path)?;
        debug!("wrote {file}");
        Ok(())
    }
}
