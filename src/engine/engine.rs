use std::sync::mpsc::{Receiver, Sender};

use log::warn;

use crate::engine::apply_fields::apply_fields;
use crate::engine::field_extractor::extract_fields;
use crate::engine::llm_client::{self, LmStudioClient, TextService};
use crate::engine::prompt_builder::PromptBuilder;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::response_parser::parse_response;
use crate::engine::session_store::SessionStore;
use crate::model::apply_outcome::ApplyOutcome;
use crate::model::game_state::GameState;
use crate::model::message::Message;

const TRANSPORT_FAILURE_TEXT: &str = "The threads of reality are tangled. Please try again.";

pub const DISSOLUTION_NOTICE: &str =
    "NARRATIVE DISSOLUTION INITIATED. YOUR IDENTITY HAS COLLAPSED.";

/// Runs on its own thread. Commands arrive one at a time and each is
/// processed to completion, so the parse, merge and persist steps of one
/// turn never interleave with another.
pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    store: SessionStore,
    service: Box<dyn TextService>,
    state: GameState,
}

impl Engine {
    pub fn new(rx: Receiver<EngineCommand>, tx: Sender<EngineResponse>) -> Self {
        Self::with_parts(
            rx,
            tx,
            SessionStore::at_default_path(),
            Box::new(LmStudioClient::new()),
        )
    }

    pub fn with_parts(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        store: SessionStore,
        service: Box<dyn TextService>,
    ) -> Self {
        let state = store.load().unwrap_or_else(GameState::new);
        Self {
            rx,
            tx,
            store,
            service,
            state,
        }
    }

    pub fn run(&mut self) {
        // Let the UI render whatever was loaded from disk.
        let _ = self
            .tx
            .send(EngineResponse::StateChanged(self.state.clone()));

        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::SubmitPlayerInput(text) => self.handle_player_input(text),
                EngineCommand::ResetSession => self.handle_reset(),
                EngineCommand::TestLlmConnection => {
                    let status = match llm_client::test_connection() {
                        Ok(status) => status,
                        Err(e) => format!("Connection failed: {e}"),
                    };
                    let _ = self.tx.send(EngineResponse::ConnectionStatus(status));
                }
            }
        }
    }

    fn handle_player_input(&mut self, text: String) {
        // The context block reflects the state before this turn; the raw
        // input travels separately as PLAYER INPUT.
        let prompt = PromptBuilder::build(&self.state, &text);

        self.state.session_history.push(Message::user(text));
        let _ = self
            .tx
            .send(EngineResponse::StateChanged(self.state.clone()));

        let raw = match self.service.generate(&prompt) {
            Ok(raw) => raw,
            Err(e) => {
                // History records the failed turn; score, level and
                // contradictions stay untouched.
                warn!("text service call failed: {e:#}");
                self.state
                    .session_history
                    .push(Message::system_notice(TRANSPORT_FAILURE_TEXT));
                self.persist();
                let _ = self
                    .tx
                    .send(EngineResponse::TurnResolved(self.state.clone()));
                return;
            }
        };

        let parsed = parse_response(&raw);
        let debug = (!parsed.debug.is_empty()).then(|| parsed.debug.clone());
        self.state
            .session_history
            .push(Message::model(parsed.dialogue, parsed.speaker, debug));

        let fields = extract_fields(&parsed.debug);
        if fields.is_empty() {
            log::debug!("no recognized fields in model response");
        }

        match apply_fields(&mut self.state, &fields) {
            ApplyOutcome::Continued => {
                self.persist();
                let _ = self
                    .tx
                    .send(EngineResponse::TurnResolved(self.state.clone()));
            }
            ApplyOutcome::Dissolved => {
                // The dissolved state is never persisted; a fresh soul
                // takes its place.
                self.state = GameState::new();
                self.persist();
                let _ = self.tx.send(EngineResponse::Dissolved(self.state.clone()));
            }
        }
    }

    fn handle_reset(&mut self) {
        self.store.clear();
        self.state = GameState::new();
        self.persist();
        let _ = self
            .tx
            .send(EngineResponse::StateChanged(self.state.clone()));
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.state) {
            warn!("failed to persist session state: {e:#}");
        }
    }
}
