//! Merges one turn's extracted fields into the session state.

use crate::model::apply_outcome::ApplyOutcome;
use crate::model::field_set::FieldSet;
use crate::model::game_state::GameState;

/// Per-field merge: score and level replace outright (last write wins,
/// unclamped), contradictions union into the accumulated set. Unset fields
/// leave the state untouched.
///
/// After merging, the failure predicate runs: integrity at or below zero
/// is the terminal transition. The caller must then discard this state,
/// substitute a fresh one and persist the replacement instead.
pub fn apply_fields(state: &mut GameState, fields: &FieldSet) -> ApplyOutcome {
    if let Some(score) = fields.integrity_score {
        state.rta_integrity_score = score;
    }

    if let Some(level) = fields.level {
        state.current_level = level;
    }

    if let Some(list) = &fields.contradictions {
        for entry in list {
            state.record_contradiction(entry);
        }
    }

    if state.rta_integrity_score <= 0 {
        ApplyOutcome::Dissolved
    } else {
        ApplyOutcome::Continued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(
        integrity_score: Option<i32>,
        level: Option<i32>,
        contradictions: Option<Vec<&str>>,
    ) -> FieldSet {
        FieldSet {
            integrity_score,
            level,
            contradictions: contradictions
                .map(|list| list.into_iter().map(str::to_string).collect()),
        }
    }

    #[test]
    fn present_fields_replace_prior_values() {
        let mut state = GameState::new();
        let outcome = apply_fields(&mut state, &fields(Some(72), Some(3), None));
        assert_eq!(outcome, ApplyOutcome::Continued);
        assert_eq!(state.rta_integrity_score, 72);
        assert_eq!(state.current_level, 3);
    }

    #[test]
    fn empty_field_set_is_a_no_op() {
        let mut state = GameState::new();
        state.record_contradiction("claimed two names");
        let before = serde_json::to_string(&state).unwrap();

        let outcome = apply_fields(&mut state, &FieldSet::default());

        assert_eq!(outcome, ApplyOutcome::Continued);
        assert_eq!(serde_json::to_string(&state).unwrap(), before);
    }

    #[test]
    fn contradictions_union_idempotently() {
        let mut state = GameState::new();
        let update = fields(None, None, Some(vec!["x"]));
        apply_fields(&mut state, &update);
        apply_fields(&mut state, &update);
        assert_eq!(state.contradictions, vec!["x"]);
    }

    #[test]
    fn explicit_empty_list_changes_nothing() {
        let mut state = GameState::new();
        state.record_contradiction("existing");
        apply_fields(&mut state, &fields(None, None, Some(vec![])));
        assert_eq!(state.contradictions, vec!["existing"]);
    }

    #[test]
    fn integrity_at_zero_dissolves() {
        let mut state = GameState::new();
        assert_eq!(
            apply_fields(&mut state, &fields(Some(0), None, None)),
            ApplyOutcome::Dissolved
        );
    }

    #[test]
    fn negative_integrity_dissolves() {
        let mut state = GameState::new();
        assert_eq!(
            apply_fields(&mut state, &fields(Some(-15), None, None)),
            ApplyOutcome::Dissolved
        );
    }

    #[test]
    fn values_are_not_clamped() {
        let mut state = GameState::new();
        apply_fields(&mut state, &fields(Some(130), Some(9), None));
        assert_eq!(state.rta_integrity_score, 130);
        assert_eq!(state.current_level, 9);
    }
}
