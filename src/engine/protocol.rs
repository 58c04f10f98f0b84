use crate::model::game_state::GameState;

pub enum EngineCommand {
    SubmitPlayerInput(String),
    ResetSession,
    TestLlmConnection,
}

pub enum EngineResponse {
    /// Any accepted mutation, including the echo of the user's own message
    /// and the snapshot loaded at startup.
    StateChanged(GameState),

    /// A model turn finished, whether the call succeeded or failed. The
    /// UI releases its in-flight gate on this.
    TurnResolved(GameState),

    /// Integrity collapsed. The payload is the fresh replacement state;
    /// the dissolved intermediate is never observable.
    Dissolved(GameState),

    ConnectionStatus(String),
}
