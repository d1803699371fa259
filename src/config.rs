//! Login configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;

use crate::gate::DEFAULT_QUIET_PERIOD;
use crate::mirror::FileMirror;
use crate::session::DEFAULT_SESSION_KEY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginConfig {
    /// Delay after the last validity change before the gate recomputes.
    pub quiet_period: Duration,
    /// Durable mirror key holding the logged-in sentinel.
    pub session_key: String,
    /// Directory for the file-backed mirror, when persisting natively.
    pub state_dir: Option<PathBuf>,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self { quiet_period: DEFAULT_QUIET_PERIOD, session_key: DEFAULT_SESSION_KEY.to_owned(), state_dir: None }
    }
}

impl LoginConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `LOGIN_QUIET_PERIOD_MS`: default 500
    /// - `LOGIN_SESSION_KEY`: default `isLoggedIn`
    /// - `LOGIN_STATE_DIR`: no file mirror when absent
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let quiet_ms = env_parse("LOGIN_QUIET_PERIOD_MS", duration_ms(defaults.quiet_period));
        let session_key = std::env::var("LOGIN_SESSION_KEY")
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.session_key);
        let state_dir = std::env::var_os("LOGIN_STATE_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self { quiet_period: Duration::from_millis(quiet_ms), session_key, state_dir }
    }

    /// File-backed mirror rooted at `state_dir`, if configured.
    #[must_use]
    pub fn file_mirror(&self) -> Option<FileMirror> {
        self.state_dir.as_ref().map(FileMirror::new)
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
