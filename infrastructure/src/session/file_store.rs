//! Two-file session store
//!
//! The session metadata (`{username, logged_in}`) and the opaque client
//! settings blob live in separate JSON documents. Both are written through
//! a temporary file in the same directory and renamed into place, so a
//! crash mid-save never leaves a half-written document behind.

use postpilot_application::ports::session_store::{SessionStore, SessionStoreError};
use postpilot_domain::{Session, SessionRecord, SettingsBlob};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Session store backed by two JSON files
pub struct FileSessionStore {
    session_file: PathBuf,
    settings_file: PathBuf,
}

impl FileSessionStore {
    pub fn new(session_file: impl Into<PathBuf>, settings_file: impl Into<PathBuf>) -> Self {
        Self {
            session_file: session_file.into(),
            settings_file: settings_file.into(),
        }
    }

    pub fn session_file(&self) -> &Path {
        &self.session_file
    }

    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }
}

fn io_error(path: &Path, source: io::Error) -> SessionStoreError {
    SessionStoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), SessionStoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;

    let json = serde_json::to_vec_pretty(value).map_err(|e| SessionStoreError::Malformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| io_error(dir, e))?;
    tmp.write_all(&json).map_err(|e| io_error(path, e))?;
    tmp.as_file().sync_all().map_err(|e| io_error(path, e))?;
    tmp.persist(path).map_err(|e| io_error(path, e.error))?;
    Ok(())
}

/// `Ok(None)` when the file does not exist.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, SessionStoreError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(io_error(path, e)),
    };

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| SessionStoreError::Malformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

fn remove_if_exists(path: &Path) -> Result<(), SessionStoreError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(io_error(path, e)),
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        // Metadata goes last. An interrupted save must not pair the previous
        // username with the new settings.
        remove_if_exists(&self.session_file)?;
        write_json_atomic(&self.settings_file, session.settings())?;
        write_json_atomic(&self.session_file, &session.record())?;
        debug!(
            "Session written to {} and {}",
            self.session_file.display(),
            self.settings_file.display()
        );
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        if !self.session_file.exists() || !self.settings_file.exists() {
            return Ok(None);
        }
        let Some(record) = read_json::<SessionRecord>(&self.session_file)? else {
            return Ok(None);
        };
        let Some(settings) = read_json::<SettingsBlob>(&self.settings_file)? else {
            return Ok(None);
        };
        Ok(Some(Session::from_parts(record, settings)))
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        remove_if_exists(&self.session_file)?;
        remove_if_exists(&self.settings_file)?;
        Ok(())
    }
}
