//! Session-stable countdown deadline storage.
//!
//! The offer banner needs a deadline that survives restarting ClubDeck in
//! the same terminal session but resets in a fresh session. The deadline
//! lives in a small file keyed by the parent shell's pid: relaunching from
//! the same shell finds the file, a new terminal gets a new key.

use std::path::{Path, PathBuf};

use chrono::Utc;

/// Stores a single deadline as epoch milliseconds with
/// read-if-present-else-create semantics.
pub trait DeadlineStore {
    /// Return the stored deadline, creating `now + duration_ms` if absent.
    /// The deadline is immutable once created.
    fn get_or_create(&mut self, duration_ms: i64) -> i64;
}

/// File-backed store scoped to the current terminal session.
///
/// Any IO failure degrades to an ephemeral deadline held in memory; the
/// banner is not correctness-critical, so nothing is surfaced to the user.
#[derive(Debug)]
pub struct SessionDeadlineStore {
    path: PathBuf,
    fallback: Option<i64>,
}

impl SessionDeadlineStore {
    /// Store keyed by the parent shell pid under the platform cache dir.
    pub fn for_current_session() -> Self {
        let base = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
        let path = base
            .join("clubdeck")
            .join(format!("offer-{}.deadline", session_key()));
        Self::at_path(path)
    }

    /// Store at an explicit path (tests, config override).
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fallback: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Option<i64> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        raw.trim().parse::<i64>().ok()
    }

    fn write(&self, deadline: i64) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, deadline.to_string())
    }
}

impl DeadlineStore for SessionDeadlineStore {
    fn get_or_create(&mut self, duration_ms: i64) -> i64 {
        if let Some(stored) = self.read() {
            return stored;
        }
        if let Some(fallback) = self.fallback {
            return fallback;
        }
        let deadline = Utc::now().timestamp_millis() + duration_ms;
        if let Err(e) = self.write(deadline) {
            tracing::warn!(
                "deadline file {} not writable ({e}); using ephemeral deadline",
                self.path.display()
            );
            self.fallback = Some(deadline);
        }
        deadline
    }
}

/// Purely in-memory store, for tests and storage-less environments.
#[derive(Debug, Default)]
pub struct EphemeralDeadlineStore {
    deadline: Option<i64>,
}

impl EphemeralDeadlineStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeadlineStore for EphemeralDeadlineStore {
    fn get_or_create(&mut self, duration_ms: i64) -> i64 {
        *self
            .deadline
            .get_or_insert_with(|| Utc::now().timestamp_millis() + duration_ms)
    }
}

#[cfg(unix)]
fn session_key() -> u32 {
    std::os::unix::process::parent_id()
}

#[cfg(not(unix))]
fn session_key() -> u32 {
    std::process::id()
}
