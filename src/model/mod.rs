pub mod apply_outcome;
pub mod field_set;
pub mod game_state;
pub mod message;
