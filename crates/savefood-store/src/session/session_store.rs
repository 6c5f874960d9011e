//! Persisted current-session record.
//!
//! Exactly one identity snapshot is stored under a fixed key, read at
//! startup and rewritten on login/profile-update, removed on logout. The
//! record is an opaque blob to the core - only the identity layer reads it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use savefood_core::entities::{Partner, Role, User};

/// Fixed key the session record is stored under
pub const SESSION_KEY: &str = "savefood_user";

/// The persisted identity snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum StoredSession {
    #[serde(rename = "USER")]
    User(User),
    #[serde(rename = "PARTNER")]
    Partner(Partner),
}

impl StoredSession {
    /// The stored identity's role tag
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::User(_) => Role::User,
            Self::Partner(_) => Role::Partner,
        }
    }

    /// The stored identity's display name
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::User(user) => &user.name,
            Self::Partner(partner) => &partner.name,
        }
    }
}

/// Session store errors
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for session store operations
pub type SessionResult<T> = Result<T, SessionError>;

/// File-backed store for the single persisted session record
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at `dir`; the record lives in one JSON file
    /// named after the fixed session key.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{SESSION_KEY}.json")),
        }
    }

    /// Read the persisted session, if any
    pub fn load(&self) -> SessionResult<Option<StoredSession>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Write (or overwrite) the persisted session
    pub fn save(&self, session: &StoredSession) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec(session)?)?;
        debug!(path = %self.path.display(), "Stored session record");
        Ok(())
    }

    /// Remove the persisted session; absent is not an error
    pub fn clear(&self) -> SessionResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Cleared session record");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
