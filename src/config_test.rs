use std::sync::{Mutex, MutexGuard};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`env_guard`] so no other test touches the env.
unsafe fn clear_login_env() {
    unsafe {
        std::env::remove_var("LOGIN_QUIET_PERIOD_MS");
        std::env::remove_var("LOGIN_SESSION_KEY");
        std::env::remove_var("LOGIN_STATE_DIR");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = env_guard();
    unsafe { clear_login_env() };

    let cfg = LoginConfig::from_env();
    assert_eq!(cfg, LoginConfig::default());
    assert_eq!(cfg.quiet_period, Duration::from_millis(500));
    assert_eq!(cfg.session_key, "isLoggedIn");
    assert!(cfg.file_mirror().is_none());
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_login_env();
        std::env::set_var("LOGIN_QUIET_PERIOD_MS", "250");
        std::env::set_var("LOGIN_SESSION_KEY", " session ");
        std::env::set_var("LOGIN_STATE_DIR", "/tmp/logingate-state");
    }

    let cfg = LoginConfig::from_env();
    assert_eq!(cfg.quiet_period, Duration::from_millis(250));
    assert_eq!(cfg.session_key, "session");
    assert_eq!(cfg.file_mirror().unwrap().dir(), std::path::Path::new("/tmp/logingate-state"));

    unsafe { clear_login_env() };
}

#[test]
fn from_env_ignores_unparseable_and_blank_values() {
    let _guard = env_guard();
    unsafe {
        clear_login_env();
        std::env::set_var("LOGIN_QUIET_PERIOD_MS", "soon");
        std::env::set_var("LOGIN_SESSION_KEY", "   ");
        std::env::set_var("LOGIN_STATE_DIR", "");
    }

    let cfg = LoginConfig::from_env();
    assert_eq!(cfg, LoginConfig::default());

    unsafe { clear_login_env() };
}
