use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Tokens the backend grants when it auto-logs the user in as a side effect
/// of email verification. The funnel never rotates or expires them; it only
/// writes them for whatever runs next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    /// Short-lived token sent along with authenticated calls.
    pub access: String,

    /// Longer-lived token used to mint a new access token.
    pub refresh: String,
}

/// Things that can go wrong reading or writing the session.
#[derive(Debug, Error)]
pub enum Error {
    /// We had a problem with the file itself, for example permissions.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The stored session was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Somewhere session tokens can live between runs. A trait so tests (and any
/// future client) can swap the file for an in-memory store.
pub trait SessionStore {
    /// Persist tokens, replacing whatever was there.
    fn set(&self, tokens: &SessionTokens) -> Result<(), Error>;

    /// Read the stored tokens back, if any.
    fn get(&self) -> Result<Option<SessionTokens>, Error>;

    /// Forget the stored tokens. Not an error if there were none.
    fn clear(&self) -> Result<(), Error>;
}

/// The production store: a JSON file in the data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Where the tokens live, e.g. `…/multibpo/session.json`.
    path: PathBuf,
}

impl FileStore {
    /// Build a store around the given file. Nothing is touched until the
    /// first `set`.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStore for FileStore {
    fn set(&self, tokens: &SessionTokens) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_vec(tokens)?;
        fs::write(&self.path, data)?;

        Ok(())
    }

    fn get(&self) -> Result<Option<SessionTokens>, Error> {
        if !self.path.exists() {
            return Ok(None);
        }

        let data = fs::read(&self.path)?;

        Ok(Some(serde_json::from_slice(&data)?))
    }

    fn clear(&self) -> Result<(), Error> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempdir::TempDir;

    /// Tokens with recognizable contents.
    fn tokens() -> SessionTokens {
        SessionTokens {
            access: "access-abc".to_owned(),
            refresh: "refresh-def".to_owned(),
        }
    }

    #[test]
    fn get_on_a_fresh_store_is_none() {
        let dir = TempDir::new("session").unwrap();
        let store = FileStore::new(dir.path().join("session.json"));

        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = TempDir::new("session").unwrap();
        let store = FileStore::new(dir.path().join("session.json"));

        store.set(&tokens()).unwrap();

        assert_eq!(store.get().unwrap(), Some(tokens()));
    }

    #[test]
    fn set_creates_missing_directories() {
        let dir = TempDir::new("session").unwrap();
        let store = FileStore::new(dir.path().join("deep/down/session.json"));

        store.set(&tokens()).unwrap();

        assert_eq!(store.get().unwrap(), Some(tokens()));
    }

    #[test]
    fn clear_removes_the_session_and_is_idempotent() {
        let dir = TempDir::new("session").unwrap();
        let store = FileStore::new(dir.path().join("session.json"));

        store.set(&tokens()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();

        assert_eq!(store.get().unwrap(), None);
    }
}
