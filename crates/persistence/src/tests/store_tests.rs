// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use checkin::State;
use checkin_domain::{Checkin, CheckinDate, CheckinId, Cpf, SlotTime, User};

use crate::error::PersistenceError;
use crate::store::JsonStore;

static DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A fresh directory under the system temp dir, unique per call.
fn temp_root(label: &str) -> PathBuf {
    let n: u64 = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!("checkin-store-{label}-{}-{n}", std::process::id()))
}

fn test_user() -> User {
    User::new(
        String::from("Maria Silva"),
        String::from("maria@example.com"),
        Cpf::parse("52998224725").unwrap(),
        String::from("Senha123"),
    )
}

fn test_checkin(id: &str) -> Checkin {
    Checkin::new(
        CheckinId::new(id),
        String::from("Maria Silva"),
        String::from("Unidade Centro"),
        String::from("Consulta de rotina"),
        CheckinDate::parse("10/06/2024").unwrap(),
        SlotTime::parse("09:00").unwrap(),
    )
}

#[test]
fn test_open_creates_the_root_directory() {
    let root: PathBuf = temp_root("open");
    assert!(!root.exists());

    let store: JsonStore = JsonStore::open(&root).unwrap();

    assert!(store.root().is_dir());
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_empty_directory_loads_as_empty_state() {
    let root: PathBuf = temp_root("empty");
    let store: JsonStore = JsonStore::open(&root).unwrap();

    let state: State = store.load_state().unwrap();

    assert!(state.users.is_empty());
    assert!(state.checkins.is_empty());
    assert!(state.active_user.is_none());
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_state_round_trips() {
    let root: PathBuf = temp_root("roundtrip");
    let store: JsonStore = JsonStore::open(&root).unwrap();

    let state: State = State {
        users: vec![test_user()],
        checkins: vec![test_checkin("2"), test_checkin("1")],
        active_user: Some(test_user()),
    };
    store.save_state(&state).unwrap();

    let loaded: State = store.load_state().unwrap();
    assert_eq!(loaded, state);
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_checkin_order_is_preserved() {
    let root: PathBuf = temp_root("order");
    let store: JsonStore = JsonStore::open(&root).unwrap();

    let checkins: Vec<Checkin> = vec![test_checkin("newest"), test_checkin("older")];
    store.save_checkins(&checkins).unwrap();

    let loaded: Vec<Checkin> = store.load_checkins().unwrap();
    let ids: Vec<&str> = loaded.iter().map(|checkin| checkin.id.value()).collect();
    assert_eq!(ids, vec!["newest", "older"]);
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_clearing_the_session_removes_the_file() {
    let root: PathBuf = temp_root("session");
    let store: JsonStore = JsonStore::open(&root).unwrap();

    store.save_session(Some(&test_user())).unwrap();
    assert!(root.join("usuario_logado.json").exists());
    assert_eq!(store.load_session().unwrap(), Some(test_user()));

    store.save_session(None).unwrap();
    assert!(!root.join("usuario_logado.json").exists());
    assert_eq!(store.load_session().unwrap(), None);

    // Clearing twice is fine.
    store.save_session(None).unwrap();
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_documents_use_the_wire_keys() {
    let root: PathBuf = temp_root("wire");
    let store: JsonStore = JsonStore::open(&root).unwrap();

    store.save_users(&[test_user()]).unwrap();
    let raw: String = fs::read_to_string(root.join("users.json")).unwrap();
    assert!(raw.contains("\"nome\""));
    assert!(raw.contains("\"senha\""));

    store.save_checkins(&[test_checkin("1")]).unwrap();
    let raw: String = fs::read_to_string(root.join("checkins.json")).unwrap();
    assert!(raw.contains("\"usuario\""));
    assert!(raw.contains("\"horario\""));
    assert!(raw.contains("10/06/2024"));
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_corrupt_document_is_a_serialization_error() {
    let root: PathBuf = temp_root("corrupt");
    let store: JsonStore = JsonStore::open(&root).unwrap();

    fs::write(root.join("users.json"), "not json").unwrap();

    let error: PersistenceError = store.load_users().unwrap_err();
    assert!(matches!(error, PersistenceError::SerializationError(_)));
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_no_temp_file_remains_after_a_write() {
    let root: PathBuf = temp_root("atomic");
    let store: JsonStore = JsonStore::open(&root).unwrap();

    store.save_users(&[test_user()]).unwrap();

    assert!(root.join("users.json").exists());
    assert!(!root.join("users.json.tmp").exists());
    fs::remove_dir_all(&root).unwrap();
}
