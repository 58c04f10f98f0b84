use std::collections::HashMap;

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::message::Message;

/// The single persisted session record.
///
/// This is the authoritative state of one soul before the Sabhā. The
/// engine is the only writer; the UI renders from cloned snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Generated once at creation, immutable afterwards.
    pub player_id: String,

    /// Sabhā level, conceptually 1..=6. Not clamped by the merge step.
    pub current_level: i32,

    /// Intended range 0..=100. Replace-only, so transient out-of-range
    /// values exist until the failure check runs.
    pub rta_integrity_score: i32,

    pub established_facts: Vec<String>,
    pub narrative_timeline: Vec<String>,

    /// Union-accumulated, duplicates suppressed, insertion order kept.
    pub contradictions: Vec<String>,

    pub corrections: Vec<String>,

    /// Open extension points named by the wire protocol (emotional read,
    /// ethical alignment). Nothing in the update path writes them yet.
    pub emotional_profile: HashMap<String, Value>,
    pub moral_profile: HashMap<String, Value>,
    pub deva_opinions: HashMap<String, String>,

    pub session_history: Vec<Message>,
}

impl GameState {
    /// A fresh soul: level 1, full integrity, empty history.
    pub fn new() -> Self {
        Self {
            player_id: new_player_id(),
            current_level: 1,
            rta_integrity_score: 100,
            established_facts: Vec::new(),
            narrative_timeline: Vec::new(),
            contradictions: Vec::new(),
            corrections: Vec::new(),
            emotional_profile: HashMap::new(),
            moral_profile: HashMap::new(),
            deva_opinions: HashMap::new(),
            session_history: Vec::new(),
        }
    }

    /// Set-union insert: an already recorded contradiction is dropped.
    pub fn record_contradiction(&mut self, entry: &str) {
        if !self.contradictions.iter().any(|c| c == entry) {
            self.contradictions.push(entry.to_string());
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn new_player_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect::<String>()
        .to_lowercase();
    format!("soul_{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_defaults() {
        let state = GameState::new();
        assert!(state.player_id.starts_with("soul_"));
        assert_eq!(state.player_id.len(), "soul_".len() + 9);
        assert_eq!(state.current_level, 1);
        assert_eq!(state.rta_integrity_score, 100);
        assert!(state.contradictions.is_empty());
        assert!(state.session_history.is_empty());
    }

    #[test]
    fn player_ids_are_distinct() {
        assert_ne!(GameState::new().player_id, GameState::new().player_id);
    }

    #[test]
    fn contradictions_deduplicate() {
        let mut state = GameState::new();
        state.record_contradiction("lied about age");
        state.record_contradiction("lied about age");
        state.record_contradiction("denied prior claim");
        assert_eq!(
            state.contradictions,
            vec!["lied about age", "denied prior claim"]
        );
    }

    #[test]
    fn state_round_trips_through_json() {
        let mut state = GameState::new();
        state.current_level = 4;
        state.rta_integrity_score = 37;
        state.established_facts.push("born in Kāśī".into());
        state.record_contradiction("claimed two birthplaces");
        state
            .session_history
            .push(Message::user("I never said that.".into()));

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
