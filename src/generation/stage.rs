use crate::{Error, Result};
use tracing::{debug, info, warn};

// Generation states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    Received,
    Validated,
    Predicted,
    Decoded,
    Uploaded,
    Responded,
    Failed,
}

// Generation events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationEvent {
    PromptAccepted,
    PredictionReturned,
    ImageDecoded,
    ObjectStored,
    ResponseBuilt,
    ErrorOccurred,
}

/// Linear per-request stage tracker. Every stage may short-circuit to `Failed`.
#[derive(Debug)]
pub struct GenerationStateMachine {
    state: GenerationState,
    last_error: Option<String>,
}

impl GenerationStateMachine {
    pub fn new() -> Self {
        Self {
            state: GenerationState::Received,
            last_error: None,
        }
    }

    pub fn current_state(&self) -> GenerationState {
        self.state
    }

    pub fn transition(&mut self, event: GenerationEvent) -> Result<()> {
        let old_state = self.state;
        debug!(
            "🔄 Generation processing event {:?} in state {:?}",
            event, old_state
        );

        let new_state = match (old_state, event) {
            (GenerationState::Received, GenerationEvent::PromptAccepted) => {
                GenerationState::Validated
            }
            (GenerationState::Validated, GenerationEvent::PredictionReturned) => {
                GenerationState::Predicted
            }
            (GenerationState::Predicted, GenerationEvent::ImageDecoded) => GenerationState::Decoded,
            (GenerationState::Decoded, GenerationEvent::ObjectStored) => GenerationState::Uploaded,
            (GenerationState::Uploaded, GenerationEvent::ResponseBuilt) => {
                GenerationState::Responded
            }
            (state, GenerationEvent::ErrorOccurred) if !Self::terminal(state) => {
                GenerationState::Failed
            }
            _ => {
                warn!(
                    "❌ Invalid generation transition from {:?} with event {:?}",
                    old_state, event
                );
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", old_state),
                    requested: format!("{:?}", event),
                });
            }
        };

        info!(
            "🎯 Generation stage: {:?} -> {:?} (event: {:?})",
            old_state, new_state, event
        );

        self.state = new_state;
        Ok(())
    }

    /// Records the error and moves to `Failed`; no-op once terminal.
    pub fn fail(&mut self, error: &Error) {
        if self.is_terminal() {
            return;
        }
        warn!("Generation failed in state {:?}: {}", self.state, error);
        self.last_error = Some(error.to_string());
        self.state = GenerationState::Failed;
    }

    pub fn is_terminal(&self) -> bool {
        Self::terminal(self.state)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn terminal(state: GenerationState) -> bool {
        matches!(state, GenerationState::Responded | GenerationState::Failed)
    }
}

impl Default for GenerationStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
