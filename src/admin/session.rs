//! Session credential storage
//!
//! The admin password is held in memory after a successful login and
//! persisted under a fixed key in a JSON session file, so a later run
//! starts already authenticated. The file is plain text with no expiry;
//! the credential is never invalidated by this component.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// On-disk session format, a single fixed key
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionFile {
    admin_password: String,
}

/// Holds the admin credential for the lifetime of the process
///
/// The slot is written by login only; every gated request reads it. Last
/// writer wins when logins race.
pub struct SessionStore {
    credential: RwLock<Option<String>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Create a session backed by `path`, loading any persisted credential
    ///
    /// A missing or unreadable session file yields an empty session, never
    /// an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let credential = fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str::<SessionFile>(&content).ok())
            .map(|file| file.admin_password);

        Self {
            credential: RwLock::new(credential),
            path: Some(path.to_path_buf()),
        }
    }

    /// In-memory session with no backing file
    #[cfg(test)]
    pub fn ephemeral() -> Self {
        Self {
            credential: RwLock::new(None),
            path: None,
        }
    }

    /// Current credential, if a login succeeded in this or an earlier run
    pub fn credential(&self) -> Option<String> {
        self.credential.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.read().is_some()
    }

    /// Replace the stored credential
    ///
    /// Persistence is best-effort: a failed write keeps the in-memory
    /// credential and logs a warning, so a read-only disk does not block
    /// the session.
    pub fn set_credential(&self, credential: impl Into<String>) {
        let credential = credential.into();
        *self.credential.write() = Some(credential.clone());
        self.persist(&credential);
    }

    fn persist(&self, credential: &str) {
        let path = match &self.path {
            Some(p) => p,
            None => return,
        };

        let file = SessionFile {
            admin_password: credential.to_string(),
        };
        match serde_json::to_string_pretty(&file) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    tracing::warn!("Failed to save session file: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize session: {}", e),
        }
    }
}
