//! Save file persistence.
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use thiserror::Error;

use crate::state::{GameState, MalformedSave};

/// Failures while saving or loading a game.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no save file found at {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("could not access save file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not encode save for {}: {}", .path.display(), .source)]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("save file {} is malformed: {}", .path.display(), .source)]
    Malformed {
        path: PathBuf,
        #[source]
        source: MalformedSave,
    },
}

/// Where a session keeps its single save slot.
pub trait GameStorage {
    /// Persist the state, replacing any previous save.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be written.
    fn save_game(&self, game_state: &GameState) -> Result<(), StorageError>;

    /// Load the saved state.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] when nothing has been saved and
    /// [`StorageError::Malformed`] when the save does not hold a complete record.
    fn load_game(&self) -> Result<GameState, StorageError>;

    /// Human-readable location for messages.
    fn describe(&self) -> String;
}

/// JSON file at a fixed path, written with 2-space indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn encode_error(&self, source: serde_json::Error) -> StorageError {
        StorageError::Encode {
            path: self.path.clone(),
            source,
        }
    }

    fn malformed(&self, source: impl Into<MalformedSave>) -> StorageError {
        StorageError::Malformed {
            path: self.path.clone(),
            source: source.into(),
        }
    }
}

impl GameStorage for JsonFileStorage {
    fn save_game(&self, game_state: &GameState) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(game_state).map_err(|err| self.encode_error(err))?;
        fs::write(&self.path, json).map_err(|err| self.io_error(err))?;
        log::info!("Saved game to {}", self.path.display());
        Ok(())
    }

    fn load_game(&self) -> Result<GameState, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound {
                    path: self.path.clone(),
                });
            }
            Err(err) => return Err(self.io_error(err)),
        };
        let record: serde_json::Value =
            serde_json::from_str(&raw).map_err(|err| self.malformed(err))?;
        let state = GameState::from_record(record).map_err(|err| self.malformed(err))?;
        log::info!(
            "Loaded game from {} at turn {}",
            self.path.display(),
            state.turn
        );
        Ok(state)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-process save slot. Clones share the slot, so a test can keep a handle
/// while a session owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<GameState>>>,
}

impl MemoryStorage {
    /// Currently saved state, if any.
    #[must_use]
    pub fn saved(&self) -> Option<GameState> {
        self.slot.borrow().clone()
    }
}

impl GameStorage for MemoryStorage {
    fn save_game(&self, game_state: &GameState) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(game_state.clone());
        Ok(())
    }

    fn load_game(&self) -> Result<GameState, StorageError> {
        self.slot.borrow().clone().ok_or(StorageError::NotFound {
            path: PathBuf::from("memory"),
        })
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "accelerando-storage-{label}-{}-{}.json",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    #[test]
    fn file_roundtrip_preserves_every_field() {
        let path = temp_path("roundtrip");
        let storage = JsonFileStorage::new(&path);
        let state = GameState {
            reputation: 99,
            turn: 42,
            entities_helped: 3,
            ..GameState::default()
        };
        storage.save_game(&state).unwrap();
        let loaded = storage.load_game().unwrap();
        assert_eq!(loaded, state);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn file_uses_two_space_indentation() {
        let path = temp_path("indent");
        let storage = JsonFileStorage::new(&path);
        storage.save_game(&GameState::default()).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("{\n  \"reputation\": 50,"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_not_found() {
        let storage = JsonFileStorage::new(temp_path("missing"));
        assert!(matches!(
            storage.load_game(),
            Err(StorageError::NotFound { .. })
        ));
    }

    #[test]
    fn partial_record_is_malformed() {
        let path = temp_path("partial");
        fs::write(&path, r#"{"reputation": 5}"#).unwrap();
        let err = JsonFileStorage::new(&path).load_game().unwrap_err();
        assert!(matches!(err, StorageError::Malformed { .. }));
        assert!(err.to_string().contains("malformed"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn garbage_is_malformed() {
        let path = temp_path("garbage");
        fs::write(&path, "not json at all").unwrap();
        assert!(matches!(
            JsonFileStorage::new(&path).load_game(),
            Err(StorageError::Malformed { .. })
        ));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn write_failures_are_not_reported_as_malformed() {
        let dir = std::env::temp_dir();
        let err = JsonFileStorage::new(&dir)
            .save_game(&GameState::default())
            .unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }), "{err:?}");

        let source = serde_json::from_str::<i32>("x").unwrap_err();
        let encode = StorageError::Encode {
            path: PathBuf::from("slot.json"),
            source,
        };
        assert!(encode.to_string().starts_with("could not encode save for slot.json"));
        assert!(!encode.to_string().contains("malformed"));
    }

    #[test]
    fn memory_storage_shares_slot_between_clones() {
        let storage = MemoryStorage::default();
        let handle = storage.clone();
        assert!(storage.load_game().is_err());
        let state = GameState {
            turn: 3,
            ..GameState::default()
        };
        storage.save_game(&state).unwrap();
        assert_eq!(handle.saved(), Some(state.clone()));
        assert_eq!(handle.load_game().unwrap(), state);
    }
}
