//! SessionEngine: the per-turn orchestration.
//!
//! Exposes the engine's whole surface: `select_next_question`,
//! `process_answer`, and `resolve_reveal`. Every failure mode resolves to
//! a terminal outcome; nothing here is fatal to the hosting process.

use tracing::{debug, info};

use augur_core::config::EngineConfig;
use augur_core::errors::{AugurResult, EngineError};
use augur_core::models::{Answer, Candidate, Distribution, Question, QuestionKind};
use augur_core::traits::{IAttributeMatrix, ICatalogProvider, ITaxonomyProvider};
use augur_scoring::{
    confidence, effective_candidate_count, effective_confirm_threshold, initial_weights, normalize,
};
use augur_selection::strategies::{hard_confirm, soft_confirm};
use augur_selection::{run_fallback_chain, SelectionContext};

use crate::state::{NextAction, Outcome, RevealVerdict, SessionState, TurnOutcome, TurnPhase};

pub struct SessionEngine<'a> {
    catalog: Vec<Candidate>,
    taxonomy: &'a dyn ITaxonomyProvider,
    matrix: &'a dyn IAttributeMatrix,
    config: EngineConfig,
}

impl<'a> SessionEngine<'a> {
    /// Build an engine over a pre-filtered catalog. Validates the config
    /// once; an empty catalog is rejected up front.
    pub fn new(
        catalog: &dyn ICatalogProvider,
        taxonomy: &'a dyn ITaxonomyProvider,
        matrix: &'a dyn IAttributeMatrix,
        config: EngineConfig,
    ) -> AugurResult<Self> {
        config.validate()?;
        let catalog = catalog.candidates()?;
        if catalog.is_empty() {
            return Err(EngineError::EmptyDistribution);
        }
        Ok(Self {
            catalog,
            taxonomy,
            matrix,
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &[Candidate] {
        &self.catalog
    }

    /// Fresh session state seeded from catalog priors.
    pub fn start_session(&self) -> SessionState {
        let weights = initial_weights(&self.catalog, self.config.prior_alpha);
        SessionState::new(weights)
    }

    /// Decide the engine's next move: ask a question, commit to a reveal,
    /// or report the terminal outcome.
    pub fn select_next_question(&self, state: &mut SessionState) -> AugurResult<NextAction> {
        if let TurnPhase::Terminated(outcome) = state.phase {
            return Ok(NextAction::Finished(outcome));
        }
        if let Some(pending) = &state.pending_reveal {
            return Ok(NextAction::Reveal(pending.clone()));
        }

        let probabilities = match normalize(&state.weights) {
            Ok(p) => p,
            Err(EngineError::EmptyDistribution) => {
                return Ok(NextAction::Finished(self.terminate(state, Outcome::Failure)));
            }
            Err(e) => return Err(e),
        };
        self.refresh_aggregates(state, &probabilities);

        // Reveal before asking anything further once confidence clears the
        // threshold.
        if state.aggregates.confidence >= self.config.reveal.threshold {
            return Ok(self.begin_reveal(state, &probabilities, false));
        }
        // Budget exhausted: exactly one forced terminal reveal.
        if state.questions_asked >= self.config.question_budget {
            return Ok(self.begin_reveal(state, &probabilities, true));
        }

        let ctx = SelectionContext {
            weights: &state.weights,
            probabilities: &probabilities,
            turn_index: state.questions_asked,
            history: &state.history,
            config: &self.config,
            catalog: &self.catalog,
            taxonomy: self.taxonomy,
            matrix: self.matrix,
        };

        let last_kind = state.history.last_kind();
        let hard_allowed = last_kind != Some(QuestionKind::HardConfirm);
        let mut question: Option<Question> = None;

        // Recover quickly after a rejected reveal: probe the new leader
        // instead of re-exploring.
        if state.after_miss && hard_allowed {
            question = hard_confirm::select(&ctx)?;
        }

        if question.is_none() && self.should_confirm(state) {
            if state.aggregates.confidence >= self.config.confirm.hard_min_confidence
                && hard_allowed
            {
                question = hard_confirm::select(&ctx)?;
            }
            if question.is_none() {
                question = soft_confirm::select(&ctx)?;
            }
            // A confirm turn with no qualifying confirm data falls back to
            // the explore chain below.
        }

        if question.is_none() {
            question = run_fallback_chain(&ctx)?;
        }

        match question {
            Some(q) => {
                debug!(
                    session = %state.session_id,
                    turn = state.questions_asked,
                    kind = ?q.kind(),
                    "question selected"
                );
                state.phase = TurnPhase::AwaitingAnswer;
                Ok(NextAction::Ask(q))
            }
            // Selector exhausted before the budget: never leave the loop
            // without an action — force the terminal reveal now.
            None => Ok(self.begin_reveal(state, &probabilities, true)),
        }
    }

    /// Apply an answer to the session and report what comes next.
    pub fn process_answer(
        &self,
        state: &mut SessionState,
        question: &Question,
        answer: Answer,
    ) -> AugurResult<TurnOutcome> {
        if let TurnPhase::Terminated(outcome) = state.phase {
            return Ok(TurnOutcome::Finished(outcome));
        }
        if let Some(pending) = &state.pending_reveal {
            return Ok(TurnOutcome::Reveal(pending.clone()));
        }

        state.weights = augur_belief::apply_answer(
            &state.weights,
            question,
            answer,
            &self.catalog,
            self.matrix,
            &self.config,
        )?;
        state.history.record(question.clone(), answer);
        state.questions_asked += 1;
        state.after_miss = false;
        state.phase = TurnPhase::AwaitingQuestion;

        let probabilities = match normalize(&state.weights) {
            Ok(p) => p,
            Err(EngineError::EmptyDistribution) => {
                return Ok(TurnOutcome::Finished(self.terminate(state, Outcome::Failure)));
            }
            Err(e) => return Err(e),
        };
        self.refresh_aggregates(state, &probabilities);

        if state.aggregates.confidence >= self.config.reveal.threshold {
            return Ok(self.begin_reveal(state, &probabilities, false).into());
        }
        if state.questions_asked >= self.config.question_budget {
            return Ok(self.begin_reveal(state, &probabilities, true).into());
        }
        Ok(TurnOutcome::Continue)
    }

    /// Resolve a pending reveal with the user's (or harness's) verdict.
    pub fn resolve_reveal(
        &self,
        state: &mut SessionState,
        verdict: RevealVerdict,
    ) -> AugurResult<TurnOutcome> {
        if let TurnPhase::Terminated(outcome) = state.phase {
            return Ok(TurnOutcome::Finished(outcome));
        }
        let Some(candidate) = state.pending_reveal.clone() else {
            return Ok(TurnOutcome::Continue);
        };

        match verdict {
            RevealVerdict::Confirmed => {
                info!(session = %state.session_id, %candidate, "reveal confirmed");
                state.pending_reveal = None;
                Ok(TurnOutcome::Finished(self.terminate(state, Outcome::Success)))
            }
            RevealVerdict::Denied => {
                info!(session = %state.session_id, %candidate, "reveal denied");
                state.pending_reveal = None;
                if state.terminal_reveal {
                    return Ok(TurnOutcome::Finished(self.terminate(state, Outcome::Failure)));
                }

                state.rejected_reveals.insert(candidate.clone());
                state.weights.scale(&candidate, self.config.reveal.miss_penalty);
                state.aggregates.reveal_misses += 1;
                state.after_miss = true;

                if state.aggregates.reveal_misses > self.config.reveal.miss_cap {
                    return Ok(TurnOutcome::Finished(self.terminate(state, Outcome::Failure)));
                }
                state.phase = TurnPhase::AwaitingQuestion;
                Ok(TurnOutcome::Continue)
            }
        }
    }

    /// Confirm-insertion rule: forced turn index, confidence in the
    /// configured band, or the belief already narrow enough relative to the
    /// catalog-scaled threshold.
    fn should_confirm(&self, state: &SessionState) -> bool {
        let confirm = &self.config.confirm;
        if self
            .config
            .forced_confirm_turns
            .contains(&state.questions_asked)
        {
            return true;
        }
        let c = state.aggregates.confidence;
        if c >= confirm.band_min && c <= confirm.band_max {
            return true;
        }
        let threshold = effective_confirm_threshold(
            state.weights.len(),
            confirm.threshold_min,
            confirm.threshold_max,
            confirm.threshold_divisor,
        );
        state.aggregates.effective_candidates <= threshold
    }

    fn refresh_aggregates(&self, state: &mut SessionState, probabilities: &Distribution) {
        state.aggregates.confidence = confidence(probabilities);
        state.aggregates.effective_candidates = effective_candidate_count(probabilities);
        state.aggregates.negative_streak = state.history.negative_streak();
    }

    /// Commit to the top candidate not yet rejected at reveal. With every
    /// candidate already rejected there is nothing left to offer: failure.
    fn begin_reveal(
        &self,
        state: &mut SessionState,
        probabilities: &Distribution,
        terminal: bool,
    ) -> NextAction {
        let pick = probabilities
            .ranked()
            .into_iter()
            .find(|(id, _)| !state.rejected_reveals.contains(*id))
            .map(|(id, _)| id.clone());

        match pick {
            Some(candidate) => {
                info!(
                    session = %state.session_id,
                    %candidate,
                    confidence = state.aggregates.confidence,
                    terminal,
                    "revealing"
                );
                state.pending_reveal = Some(candidate.clone());
                state.terminal_reveal = state.terminal_reveal || terminal;
                state.phase = TurnPhase::AwaitingReveal;
                NextAction::Reveal(candidate)
            }
            None => NextAction::Finished(self.terminate(state, Outcome::Failure)),
        }
    }

    fn terminate(&self, state: &mut SessionState, outcome: Outcome) -> Outcome {
        info!(session = %state.session_id, ?outcome, turns = state.questions_asked, "session terminated");
        state.phase = TurnPhase::Terminated(outcome);
        outcome
    }
}

impl From<NextAction> for TurnOutcome {
    fn from(action: NextAction) -> Self {
        match action {
            NextAction::Ask(_) => TurnOutcome::Continue,
            NextAction::Reveal(id) => TurnOutcome::Reveal(id),
            NextAction::Finished(outcome) => TurnOutcome::Finished(outcome),
        }
    }
}
