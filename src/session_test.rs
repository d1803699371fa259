use super::*;
use crate::mirror::MemoryMirror;

/// Mirror whose every operation fails.
struct BrokenMirror;

impl DurableMirror for BrokenMirror {
    fn read(&self, _key: &str) -> Result<Option<String>, MirrorError> {
        Err(MirrorError::Unavailable("storage disabled".into()))
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), MirrorError> {
        Err(MirrorError::Unavailable("storage disabled".into()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), MirrorError> {
        Err(MirrorError::Unavailable("storage disabled".into()))
    }
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_with_sentinel_is_logged_in() {
    let flag = SessionFlag::initialize(MemoryMirror::with_entry(DEFAULT_SESSION_KEY, "1"), DEFAULT_SESSION_KEY);
    assert!(flag.logged_in());
}

#[test]
fn initialize_with_absent_key_is_logged_out() {
    let flag = SessionFlag::initialize(MemoryMirror::new(), DEFAULT_SESSION_KEY);
    assert!(!flag.logged_in());
}

#[test]
fn initialize_with_any_other_value_is_logged_out() {
    for stored in ["", "0", "true", "1 ", " 1", "11", "yes"] {
        let flag = SessionFlag::initialize(MemoryMirror::with_entry(DEFAULT_SESSION_KEY, stored), DEFAULT_SESSION_KEY);
        assert!(!flag.logged_in(), "stored {stored:?}");
    }
}

#[test]
fn initialize_reads_only_the_configured_key() {
    let flag = SessionFlag::initialize(MemoryMirror::with_entry("other", "1"), DEFAULT_SESSION_KEY);
    assert!(!flag.logged_in());
}

#[test]
fn initialize_with_unreadable_mirror_defaults_to_logged_out() {
    let flag = SessionFlag::initialize(BrokenMirror, DEFAULT_SESSION_KEY);
    assert!(!flag.logged_in());
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_sets_flag_and_writes_sentinel() {
    let mut flag = SessionFlag::initialize(MemoryMirror::new(), DEFAULT_SESSION_KEY);
    flag.login("a@b.com", "longenough").unwrap();
    assert!(flag.logged_in());
    assert_eq!(flag.mirror().get(DEFAULT_SESSION_KEY), Some(LOGGED_IN_SENTINEL));
}

#[test]
fn login_accepts_any_credentials() {
    let mut flag = SessionFlag::initialize(MemoryMirror::new(), DEFAULT_SESSION_KEY);
    flag.login("", "").unwrap();
    assert!(flag.logged_in());
}

#[test]
fn logout_clears_flag_and_removes_key_repeatedly() {
    let mut flag = SessionFlag::initialize(MemoryMirror::with_entry(DEFAULT_SESSION_KEY, "1"), DEFAULT_SESSION_KEY);
    for _ in 0..3 {
        flag.logout().unwrap();
        assert!(!flag.logged_in());
        assert_eq!(flag.mirror().get(DEFAULT_SESSION_KEY), None);
    }
}

#[test]
fn failed_write_leaves_flag_unchanged() {
    let mut flag = SessionFlag::initialize(BrokenMirror, DEFAULT_SESSION_KEY);
    assert!(matches!(flag.login("a@b.com", "longenough"), Err(SessionError::Mirror(_))));
    assert!(!flag.logged_in());
}

#[test]
fn custom_key_is_used_for_persistence() {
    let mut flag = SessionFlag::initialize(MemoryMirror::new(), "session");
    flag.login("a@b.com", "longenough").unwrap();
    assert_eq!(flag.key(), "session");
    assert_eq!(flag.mirror().get("session"), Some("1"));
    assert_eq!(flag.mirror().get(DEFAULT_SESSION_KEY), None);
}

// =============================================================
// SessionHandle
// =============================================================

#[test]
fn handle_clones_share_one_flag() {
    let header = SessionHandle::initialize(MemoryMirror::new(), DEFAULT_SESSION_KEY);
    let form = header.clone();
    assert!(header.same_session(&form));

    form.login("a@b.com", "longenough").unwrap();
    assert!(header.logged_in());

    header.logout().unwrap();
    assert!(!form.logged_in());
    assert_eq!(form.with(|f| f.mirror().get(DEFAULT_SESSION_KEY).map(str::to_owned)), None);
}

#[test]
fn separately_initialized_handles_are_distinct() {
    let a = SessionHandle::initialize(MemoryMirror::new(), DEFAULT_SESSION_KEY);
    let b = SessionHandle::initialize(MemoryMirror::new(), DEFAULT_SESSION_KEY);
    assert!(!a.same_session(&b));
}

#[test]
fn file_backed_flag_survives_reload() {
    let dir = std::env::temp_dir().join(format!("logingate-session-{}", uuid::Uuid::new_v4()));

    let session = SessionHandle::initialize(crate::mirror::FileMirror::new(&dir), DEFAULT_SESSION_KEY);
    session.login("a@b.com", "longenough").unwrap();

    let reloaded = SessionHandle::initialize(crate::mirror::FileMirror::new(&dir), DEFAULT_SESSION_KEY);
    assert!(reloaded.logged_in());

    reloaded.logout().unwrap();
    let reloaded_again = SessionHandle::initialize(crate::mirror::FileMirror::new(&dir), DEFAULT_SESSION_KEY);
    assert!(!reloaded_again.logged_in());

    std::fs::remove_dir_all(&dir).unwrap();
}
