//! Builds the prompt sent to the narrative LLM.
//!
//! Intentionally dumb: it only formats text. No parsing, no networking,
//! no engine logic.

use crate::model::game_state::GameState;
use crate::model::message::Message;

/// Most recent history entries rendered into the context block.
const HISTORY_WINDOW: usize = 10;

/// The narrative-cognition instruction. The RESPONSE FORMAT section is the
/// grammar the response parser and field extractor depend on.
pub const SYSTEM_INSTRUCTION: &str = "\
You are the Core Narrative Cognition Engine for the game: ṚTA-SAMVĀDA (ऋत-संवाद).
This is a dialogue-driven, deception-aware, memory-persistent psychological game.
The player exists in the Sabhā, a metaphysical court beyond time.

CORE GAME LOOP:
1. Interpret meaning, intent, emotion, and implications.
2. Compare against stored memory.
3. Update global state and Deva-specific assessments.
4. Generate an in-world response from ONE Deva.
5. Display full debug panel.

DEVAS:
1. SMṚTI (Memory): Stores facts, detects contradictions.
2. BUDDHI (Logic): Evaluates causality, reasoning.
3. MANAS (Emotion): Tracks emotional tone, stress, mismatch.
4. MĀYĀ (Deception): Probes manipulation attempts, introduces subtle false assumptions.
5. KARMA (Ethics): Tracks moral alignment, evaluates value-action consistency.

SCORING:
+10 Honest self-correction, +5 Calm consistency, +5 Alignment between emotion and claim.
-5 Minor inconsistency, -7 Emotional mismatch, -10 Manipulation attempt, -15 Major contradiction, -20 Narrative collapse.

LEVELS (1-6): Memory, Emotion, Logic, Deception, Ethical, Integrated.

RESPONSE FORMAT (STRICT):
[Name of Deva speaking]

<In-world dialogue only>

--- DEBUG PANEL ---
Active Level:
Speaking Deva:
Smṛti Memory Notes:
Buddhi Logic Analysis:
Manas Emotional Read:
Māyā Deception Index (0-100):
Karma Alignment Score (0-100):
Ṛta Integrity Score: XX / 100
Active Contradictions:
Persisted to Browser DB: YES
-------------------

You must act as a skeptical reality. Do not be an assistant. Be a metaphysical examiner.
";

/// System + user halves of one chat completion request.
#[derive(Debug, Clone)]
pub struct SessionPrompt {
    pub system: String,
    pub user: String,
}

pub struct PromptBuilder;

impl PromptBuilder {
    /// Renders the state snapshot and the player's input into the context
    /// block the collaborator expects.
    pub fn build(state: &GameState, player_input: &str) -> SessionPrompt {
        let mut user = String::new();

        push_state_section(&mut user, state);
        push_history_excerpt(&mut user, &state.session_history);

        user.push_str("\nPLAYER INPUT: ");
        user.push_str(player_input);

        SessionPrompt {
            system: SYSTEM_INSTRUCTION.to_string(),
            user,
        }
    }
}

fn push_state_section(prompt: &mut String, state: &GameState) {
    prompt.push_str("CURRENT STATE:\n");
    prompt.push_str(&format!("Level: {}\n", state.current_level));
    prompt.push_str(&format!("Integrity: {}\n", state.rta_integrity_score));
    prompt.push_str(&format!(
        "Established Facts: {}\n",
        json_list(&state.established_facts)
    ));
    prompt.push_str(&format!(
        "Contradictions: {}\n",
        json_list(&state.contradictions)
    ));
    prompt.push_str(&format!(
        "Timeline: {}\n",
        json_list(&state.narrative_timeline)
    ));
}

fn push_history_excerpt(prompt: &mut String, history: &[Message]) {
    prompt.push_str("History Summary:\n");
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    for msg in &history[start..] {
        prompt.push_str(&format!("[{}] {}\n", msg.role.as_str(), msg.text));
    }
}

fn json_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_block_carries_state_lines() {
        let mut state = GameState::new();
        state.current_level = 3;
        state.rta_integrity_score = 55;
        state.established_facts.push("born in Kāśī".into());
        state.record_contradiction("two birthplaces");

        let prompt = PromptBuilder::build(&state, "I never lied.");

        assert!(prompt.user.contains("CURRENT STATE:"));
        assert!(prompt.user.contains("Level: 3"));
        assert!(prompt.user.contains("Integrity: 55"));
        assert!(prompt.user.contains("Established Facts: [\"born in Kāśī\"]"));
        assert!(prompt.user.contains("Contradictions: [\"two birthplaces\"]"));
        assert!(prompt.user.ends_with("PLAYER INPUT: I never lied."));
        assert_eq!(prompt.system, SYSTEM_INSTRUCTION);
    }

    #[test]
    fn history_excerpt_is_bounded_to_last_ten() {
        let mut state = GameState::new();
        for i in 0..15 {
            state
                .session_history
                .push(Message::user(format!("claim {i}")));
        }

        let prompt = PromptBuilder::build(&state, "next");

        assert!(!prompt.user.contains("[user] claim 4"));
        assert!(prompt.user.contains("[user] claim 5"));
        assert!(prompt.user.contains("[user] claim 14"));
    }

    #[test]
    fn history_lines_carry_role_tags() {
        let mut state = GameState::new();
        state.session_history.push(Message::user("hello".into()));
        state
            .session_history
            .push(Message::model("who speaks?".into(), Some("MĀYĀ".into()), None));

        let prompt = PromptBuilder::build(&state, "me");

        assert!(prompt.user.contains("[user] hello"));
        assert!(prompt.user.contains("[model] who speaks?"));
    }
}
