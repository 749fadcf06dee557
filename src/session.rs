// Transcription session state management
//
// The transcription engine itself is an external capability; this module
// models the session lifecycle around it and the interface the capture
// loop consumes. A session delivers exactly one terminal outcome - a
// final text result, a reported failure or a timeout - never both,
// never neither.

use async_trait::async_trait;
use serde::Serialize;

/// Session state enum representing the current state of a capture session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    /// Not listening, ready to start
    Idle,
    /// Waiting for the transcription engine to finalize an utterance
    Listening,
    /// Session ended with a final text result
    GotResult,
    /// Session ended with a reported failure
    Errored,
    /// Session ended without a result before the deadline
    TimedOut,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Errors that can occur during state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStateError {
    /// Invalid state transition attempted
    InvalidTransition {
        from: SessionState,
        to: SessionState,
    },
}

impl std::fmt::Display for SessionStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStateError::InvalidTransition { from, to } => {
                write!(f, "Invalid state transition from {:?} to {:?}", from, to)
            }
        }
    }
}

impl std::error::Error for SessionStateError {}

/// Failure reported by an utterance source.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    /// The underlying engine reported an error
    #[error("Utterance source failed: {0}")]
    Failed(String),
    /// The session ended without a result before the deadline
    #[error("Utterance source timed out")]
    TimedOut,
}

/// Capability interface to the external transcription engine.
///
/// An implementation blocks until the session ends and reports exactly one
/// outcome per call: a finalized utterance, exhaustion, or a failure.
#[async_trait]
pub trait UtteranceSource: Send {
    /// Ok(Some(text)) on a final result, Ok(None) when the source is
    /// exhausted and no further sessions are possible.
    async fn next_utterance(&mut self) -> Result<Option<String>, SourceError>;
}

/// Tracks one capture session at a time.
///
/// Designed for a single logical thread of control; delivering a second
/// terminal outcome for the same session is an invalid transition.
#[derive(Debug, Default)]
pub struct SessionManager {
    state: SessionState,
}

impl SessionManager {
    /// Create a new SessionManager in Idle state
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    /// Get the current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Start listening for an utterance
    ///
    /// # Errors
    /// Returns error if not in Idle state
    #[must_use = "this returns a Result that should be handled"]
    pub fn begin_listening(&mut self) -> Result<(), SessionStateError> {
        self.transition_to(SessionState::Listening)
    }

    /// Record that the session ended with a final text result
    #[must_use = "this returns a Result that should be handled"]
    pub fn deliver_result(&mut self) -> Result<(), SessionStateError> {
        self.transition_to(SessionState::GotResult)
    }

    /// Record that the session ended with a reported failure
    #[must_use = "this returns a Result that should be handled"]
    pub fn deliver_error(&mut self) -> Result<(), SessionStateError> {
        self.transition_to(SessionState::Errored)
    }

    /// Record that the session timed out without a result
    #[must_use = "this returns a Result that should be handled"]
    pub fn deliver_timeout(&mut self) -> Result<(), SessionStateError> {
        self.transition_to(SessionState::TimedOut)
    }

    /// Transition to a new state with validation
    ///
    /// Valid transitions:
    /// - Idle -> Listening (session starts)
    /// - Listening -> GotResult | Errored | TimedOut (exactly one terminal)
    fn transition_to(&mut self, new_state: SessionState) -> Result<(), SessionStateError> {
        let valid = matches!(
            (self.state, new_state),
            (SessionState::Idle, SessionState::Listening)
                | (SessionState::Listening, SessionState::GotResult)
                | (SessionState::Listening, SessionState::Errored)
                | (SessionState::Listening, SessionState::TimedOut)
        );

        if !valid {
            return Err(SessionStateError::InvalidTransition {
                from: self.state,
                to: new_state,
            });
        }

        self.state = new_state;
        Ok(())
    }

    /// Force reset to Idle state
    ///
    /// Use after a terminal state to start the next session, or for error
    /// recovery when normal transitions aren't possible.
    pub fn reset_to_idle(&mut self) {
        self.state = SessionState::Idle;
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
