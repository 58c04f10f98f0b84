//! Persistence of the single session blob.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::model::game_state::GameState;

const APP_DIR: &str = "rta_samvada";
const STATE_FILE: &str = "session_state.json";

/// Owns the one persisted copy of the session state: whole-blob overwrite
/// on every save, no versioning, no partial updates.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn at_default_path() -> Self {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        fs::create_dir_all(&path).ok();
        path.push(STATE_FILE);
        Self::at_path(path)
    }

    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// `None` covers both "never saved" and "blob does not deserialize".
    /// Either way the caller creates a fresh state; loading is never fatal.
    pub fn load(&self) -> Option<GameState> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
    }

    pub fn save(&self, state: &GameState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing session state to {}", self.path.display()))
    }

    pub fn clear(&self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::Alphanumeric;
    use rand::Rng;

    fn temp_store() -> SessionStore {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(8)
            .map(char::from)
            .collect();
        let mut path = std::env::temp_dir();
        path.push(format!("rta_samvada_test_{suffix}.json"));
        SessionStore::at_path(path)
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = temp_store();
        let mut state = GameState::new();
        state.current_level = 5;
        state.rta_integrity_score = 12;
        state.record_contradiction("denied the flood");

        store.save(&state).unwrap();
        assert_eq!(store.load(), Some(state));
        store.clear();
    }

    #[test]
    fn load_missing_file_is_none() {
        let store = temp_store();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn corrupt_blob_loads_as_none() {
        let store = temp_store();
        fs::write(&store.path, "{ not json").unwrap();
        assert_eq!(store.load(), None);
        store.clear();
    }

    #[test]
    fn save_overwrites_previous_blob() {
        let store = temp_store();
        let first = GameState::new();
        store.save(&first).unwrap();

        let mut second = GameState::new();
        second.current_level = 6;
        store.save(&second).unwrap();

        assert_eq!(store.load(), Some(second));
        store.clear();
    }

    #[test]
    fn clear_removes_the_blob() {
        let store = temp_store();
        store.save(&GameState::new()).unwrap();
        store.clear();
        assert_eq!(store.load(), None);
    }
}
