//! Session token storage
//!
//! The rest of the crate sees the session credential only through the
//! [`TokenAccess`] accessor: get, set and clear. Two stores are provided:
//!
//! - [`SledTokenStore`]: persists the token in a small sled database so a
//!   session survives across runs. The persisted value is read once on open.
//! - [`MemoryTokenStore`]: process-local, used by tests and one-shot runs.

use sled::{Db, Tree};
use std::fmt;
use std::path::Path;
use std::sync::RwLock;

pub mod error;

pub use error::SessionError;

/// Key under which the token is persisted
const TOKEN_KEY: &str = "auth-storage";

/// Opaque bearer credential issued by the server on login
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

/// Accessor for the current session credential
pub trait TokenAccess: Send + Sync {
    /// Current token, if signed in
    fn get_token(&self) -> Option<Token>;

    /// Replace the current token
    ///
    /// # Errors
    /// Returns `SessionError` if the token cannot be persisted.
    fn set_token(&self, token: Token) -> Result<(), SessionError>;

    /// Forget the current token
    ///
    /// # Errors
    /// Returns `SessionError` if the persisted token cannot be removed.
    fn clear_token(&self) -> Result<(), SessionError>;
}

/// Return the current token or `SessionError::NotSignedIn`
///
/// # Errors
/// Returns `SessionError::NotSignedIn` when no token is present.
pub fn require_token(tokens: &dyn TokenAccess) -> Result<Token, SessionError> {
    tokens.get_token().ok_or(SessionError::NotSignedIn)
}

fn read_slot(slot: &RwLock<Option<Token>>) -> Option<Token> {
    match slot.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

fn write_slot(slot: &RwLock<Option<Token>>, value: Option<Token>) {
    match slot.write() {
        Ok(mut guard) => *guard = value,
        Err(poisoned) => *poisoned.into_inner() = value,
    }
}

/// Token store persisted in a sled database
pub struct SledTokenStore {
    db: Db,
    session: Tree,
    current: RwLock<Option<Token>>,
}

impl SledTokenStore {
    /// Opens or creates the store at `path` and loads any persisted token
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the database cannot be opened or the
    /// persisted value is not a JSON string.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SessionError> {
        let db = sled::open(path)?;
        let session = db.open_tree("session")?;

        let current = match session.get(TOKEN_KEY)? {
            Some(bytes) => Some(Token(serde_json::from_slice::<String>(&bytes)?)),
            None => None,
        };
        tracing::debug!(signed_in = current.is_some(), "opened token store");

        Ok(Self {
            db,
            session,
            current: RwLock::new(current),
        })
    }

    /// Flush pending writes to disk
    ///
    /// # Errors
    /// Returns `SessionError` if sled fails to flush.
    pub fn flush(&self) -> Result<(), SessionError> {
        self.db.flush()?;
        Ok(())
    }
}

impl TokenAccess for SledTokenStore {
    fn get_token(&self) -> Option<Token> {
        read_slot(&self.current)
    }

    fn set_token(&self, token: Token) -> Result<(), SessionError> {
        let value = serde_json::to_vec(token.as_str())?;
        self.session.insert(TOKEN_KEY, value)?;
        self.flush()?;
        write_slot(&self.current, Some(token));
        Ok(())
    }

    fn clear_token(&self) -> Result<(), SessionError> {
        self.session.remove(TOKEN_KEY)?;
        self.flush()?;
        write_slot(&self.current, None);
        Ok(())
    }
}

/// Process-local token store
#[derive(Default)]
pub struct MemoryTokenStore {
    current: RwLock<Option<Token>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: Token) -> Self {
        Self { current: RwLock::new(Some(token)) }
    }
}

impl TokenAccess for MemoryTokenStore {
    fn get_token(&self) -> Option<Token> {
        read_slot(&self.current)
    }

    fn set_token(&self, token: Token) -> Result<(), SessionError> {
        write_slot(&self.current, Some(token));
        Ok(())
    }

    fn clear_token(&self) -> Result<(), SessionError> {
        write_slot(&self.current, None);
        Ok(())
    }
}
