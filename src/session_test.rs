use super::*;

// =============================================================================
// MemorySessionStore
// =============================================================================

#[test]
fn memory_store_starts_unauthenticated() {
    let store = MemorySessionStore::new();
    assert_eq!(store.get_token(), None);
    assert!(!store.is_authenticated());
}

#[test]
fn memory_store_set_overwrites_prior_token() {
    let store = MemorySessionStore::with_token("T1");
    store.set_token("T2");
    assert_eq!(store.get_token().as_deref(), Some("T2"));
}

#[test]
fn memory_store_remove_is_idempotent() {
    let store = MemorySessionStore::with_token("T1");
    store.remove_token();
    store.remove_token();
    assert!(!store.is_authenticated());
}

#[test]
fn memory_store_treats_empty_token_as_absent() {
    let store = MemorySessionStore::with_token("");
    assert!(!store.is_authenticated());
}

#[test]
fn shared_session_is_visible_through_every_handle() {
    let shared: SharedSession = Arc::new(MemorySessionStore::new());
    let other = Arc::clone(&shared);
    shared.set_token("abc");
    assert_eq!(other.get_token().as_deref(), Some("abc"));
    other.remove_token();
    assert!(!shared.is_authenticated());
}

// =============================================================================
// FileSessionStore
// =============================================================================

fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("portal-session-test-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir.join("nested").join(crate::config::TOKEN_STORAGE_KEY)
}

#[test]
fn file_store_missing_file_is_unauthenticated() {
    let store = FileSessionStore::open(temp_path("missing"));
    assert!(!store.is_authenticated());
}

#[test]
fn file_store_token_survives_reopen() {
    let path = temp_path("reopen");
    FileSessionStore::open(&path).set_token("persisted-token");

    let reopened = FileSessionStore::open(&path);
    assert_eq!(reopened.get_token().as_deref(), Some("persisted-token"));
}

#[test]
fn file_store_remove_deletes_file() {
    let path = temp_path("remove");
    let store = FileSessionStore::open(&path);
    store.set_token("T1");
    assert!(path.exists());

    store.remove_token();
    assert!(!path.exists());
    assert!(!FileSessionStore::open(&path).is_authenticated());

    // Second removal with no file present is a no-op.
    store.remove_token();
}
