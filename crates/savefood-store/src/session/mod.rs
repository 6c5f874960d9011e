//! Persisted-session storage

mod session_store;

pub use session_store::{
    SessionError, SessionResult, SessionStore, StoredSession, SESSION_KEY,
};
