use super::*;

// =============================================================
// Session over MemoryTokenStore
// =============================================================

#[test]
fn fresh_session_has_no_token() {
    let session = Session::in_memory();
    assert_eq!(session.token().unwrap(), None);
}

#[test]
fn persist_token_is_readable() {
    let session = Session::in_memory();
    session.persist_token("t-1").unwrap();
    assert_eq!(session.token().unwrap().as_deref(), Some("t-1"));
}

#[test]
fn last_writer_wins() {
    let session = Session::in_memory();
    session.persist_token("first").unwrap();
    session.persist_token("second").unwrap();
    assert_eq!(session.token().unwrap().as_deref(), Some("second"));
}

#[test]
fn clones_share_the_store() {
    let session = Session::in_memory();
    let other = session.clone();
    other.persist_token("shared").unwrap();
    assert_eq!(session.token().unwrap().as_deref(), Some("shared"));
}

#[test]
fn token_lives_under_token_key() {
    let store = MemoryTokenStore::default();
    store.set(TOKEN_KEY, "abc").unwrap();
    let session = Session::new(store);
    assert_eq!(session.token().unwrap().as_deref(), Some("abc"));
}

// =============================================================
// FileTokenStore
// =============================================================

#[test]
fn file_store_missing_file_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("absent.json"));
    assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
}

#[test]
fn file_store_round_trips_and_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");
    let store = FileTokenStore::new(&path);
    store.set(TOKEN_KEY, "t-file").unwrap();

    let reopened = FileTokenStore::new(&path);
    assert_eq!(reopened.get(TOKEN_KEY).unwrap().as_deref(), Some("t-file"));

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw, serde_json::json!({ "token": "t-file" }));
}

#[test]
fn file_store_preserves_other_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

    let store = FileTokenStore::new(&path);
    store.set(TOKEN_KEY, "t-2").unwrap();
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("t-2"));
}

#[test]
fn file_store_rejects_corrupt_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json").unwrap();

    let store = FileTokenStore::new(&path);
    assert!(matches!(store.get(TOKEN_KEY), Err(SessionError::Json(_))));
}

#[test]
fn file_store_write_replaces_corrupt_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json").unwrap();

    let session = Session::new(FileTokenStore::new(&path));
    session.persist_token("t-fresh").unwrap();
    assert_eq!(session.token().unwrap().as_deref(), Some("t-fresh"));
}
