//! Session persistence.
//!
//! The store holds an ordered list of sessions; the last one is "current" and
//! is overwritten in full on every change. Engines treat any load failure as
//! "no prior sessions".

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{error::StorageError, session::stats::Session};

/// Storage collaborator for the session list.
pub trait SessionStore {
    fn load(&self) -> Result<Vec<Session>, StorageError>;

    fn save(&mut self, sessions: &[Session]) -> Result<(), StorageError>;

    /// Erase every stored session.
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// JSON array of sessions in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Session>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn save(&mut self, sessions: &[Session]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(sessions)?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// Volatile store for tests and embedding without a filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sessions: Vec<Session>,
    saves: usize,
}

impl MemoryStore {
    pub fn with_sessions(sessions: Vec<Session>) -> Self {
        MemoryStore { sessions, saves: 0 }
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Number of successful `save` calls.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Vec<Session>, StorageError> {
        Ok(self.sessions.clone())
    }

    fn save(&mut self, sessions: &[Session]) -> Result<(), StorageError> {
        self.sessions = sessions.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.sessions.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_clock;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("number_sense_tutor_{}_{}", std::process::id(), name))
            .join("sessions.json")
    }

    #[test]
    fn missing_file_loads_empty() {
        let store = JsonFileStore::new(scratch("missing"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn file_round_trips_sessions() {
        let path = scratch("roundtrip");
        let mut store = JsonFileStore::new(&path);
        let sessions = vec![Session::new(fixed_clock().now())];
        store.save(&sessions).unwrap();
        assert_eq!(store.load().unwrap(), sessions);
        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_file_is_reported() {
        let path = scratch("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not an array").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StorageError::Corrupt(_))));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn memory_store_counts_saves() {
        let mut store = MemoryStore::default();
        store.save(&[Session::new(fixed_clock().now())]).unwrap();
        assert_eq!(store.saves(), 1);
        assert_eq!(store.sessions().len(), 1);
    }
}
