//! Session state machine types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use augur_core::models::{CandidateId, Question, SessionAggregates, SessionHistory, WeightMap};

/// Terminal session result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failure,
}

/// Where the session currently stands.
///
/// `AwaitingQuestion → AwaitingAnswer → (loop)`, with `AwaitingReveal`
/// entered whenever the engine commits to a guess, and `Terminated` as the
/// absorbing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    AwaitingQuestion,
    AwaitingAnswer,
    AwaitingReveal,
    Terminated(Outcome),
}

/// What the engine wants next from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NextAction {
    Ask(Question),
    /// Commit to this candidate; the caller must come back with a verdict.
    Reveal(CandidateId),
    Finished(Outcome),
}

/// Result of processing an answer or a reveal verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TurnOutcome {
    Continue,
    Reveal(CandidateId),
    Finished(Outcome),
}

/// The user's (or, in evaluation mode, the harness's) response to a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealVerdict {
    Confirmed,
    Denied,
}

impl RevealVerdict {
    /// Evaluation-mode verdict from a known ground truth.
    pub fn from_truth(revealed: &str, truth: &str) -> Self {
        if revealed == truth {
            Self::Confirmed
        } else {
            Self::Denied
        }
    }
}

/// All mutable per-session state. Created once from catalog priors,
/// mutated every turn, discarded at session end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub session_id: String,
    pub weights: WeightMap,
    pub history: SessionHistory,
    pub aggregates: SessionAggregates,
    /// Candidates offered and rejected at reveal; never re-offered.
    pub rejected_reveals: BTreeSet<CandidateId>,
    pub phase: TurnPhase,
    pub questions_asked: u32,
    pub pending_reveal: Option<CandidateId>,
    /// The pending reveal is the forced terminal one (budget or pool
    /// exhaustion): a denial ends the session instead of looping.
    pub terminal_reveal: bool,
    /// The previous turn ended in a reveal miss; bias the next selection
    /// toward a hard confirm.
    pub after_miss: bool,
}

impl SessionState {
    pub fn new(weights: WeightMap) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            weights,
            history: SessionHistory::new(),
            aggregates: SessionAggregates::default(),
            rejected_reveals: BTreeSet::new(),
            phase: TurnPhase::AwaitingQuestion,
            questions_asked: 0,
            pending_reveal: None,
            terminal_reveal: false,
            after_miss: false,
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.phase, TurnPhase::Terminated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // State is persisted between turns by callers (e.g. through a session
    // store); the JSON shape has to survive a round trip.
    #[test]
    fn session_state_roundtrips_through_json() {
        let mut weights = WeightMap::new();
        weights.set("cat", 2.0);
        weights.set("dog", 1.0);
        let mut state = SessionState::new(weights);
        state.questions_asked = 4;
        state.pending_reveal = Some("cat".into());
        state.phase = TurnPhase::AwaitingReveal;

        let json = serde_json::to_string(&state).unwrap();
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.session_id, state.session_id);
        assert_eq!(back.questions_asked, 4);
        assert_eq!(back.pending_reveal.as_deref(), Some("cat"));
        assert_eq!(back.phase, TurnPhase::AwaitingReveal);
    }

    #[test]
    fn verdict_from_truth() {
        assert_eq!(RevealVerdict::from_truth("cat", "cat"), RevealVerdict::Confirmed);
        assert_eq!(RevealVerdict::from_truth("cat", "dog"), RevealVerdict::Denied);
    }
}
