//! Answer application: the `processAnswer` half of the engine surface.

use std::collections::BTreeSet;

use tracing::debug;

use augur_core::config::{EngineConfig, UpdatePolicy};
use augur_core::errors::AugurResult;
use augur_core::models::{
    Answer, Candidate, CandidateId, ExploreTarget, HardFactKind, Question, WeightMap,
};
use augur_core::traits::{holds, IAttributeMatrix};

use crate::{bayesian, multiplicative, strength};

/// Apply an answer to the weight set and return the updated weights.
///
/// The question carries its own payload (attribute kinds, bundle members,
/// hard fact), so replay needs only the catalog for hard-fact labels and
/// the matrix for holdings.
pub fn apply_answer(
    weights: &WeightMap,
    question: &Question,
    answer: Answer,
    catalog: &[Candidate],
    matrix: &dyn IAttributeMatrix,
    config: &EngineConfig,
) -> AugurResult<WeightMap> {
    let mut updated = weights.clone();
    let s = strength::question_strength(question, answer, &config.update);
    if s == 0.0 {
        return Ok(updated);
    }

    let holders = holder_set(weights, question, catalog, matrix, config)?;
    debug!(
        kind = ?question.kind(),
        strength = s,
        holders = holders.len(),
        candidates = weights.len(),
        "applying answer"
    );

    match config.update.policy {
        UpdatePolicy::Multiplicative => {
            multiplicative::update(&mut updated, &holders, s, config.update.beta)
        }
        UpdatePolicy::Bayesian => {
            bayesian::update(&mut updated, &holders, s, config.update.epsilon)
        }
    }
    Ok(updated)
}

/// Candidates (among the current weight set) for which the asked fact is
/// true.
fn holder_set(
    weights: &WeightMap,
    question: &Question,
    catalog: &[Candidate],
    matrix: &dyn IAttributeMatrix,
    config: &EngineConfig,
) -> AugurResult<BTreeSet<CandidateId>> {
    let mut holders = BTreeSet::new();

    match question {
        Question::Explore {
            target: ExploreTarget::Attribute { attribute },
        }
        | Question::SoftConfirm { attribute, .. } => {
            for id in weights.ids() {
                let conf = matrix.link_confidence(id, &attribute.id)?;
                if holds(conf, attribute.kind, config.inferred_threshold) {
                    holders.insert(id.clone());
                }
            }
        }
        Question::Explore {
            target: ExploreTarget::Bundle { members, .. },
        } => {
            // Has-any semantics: one member suffices.
            for id in weights.ids() {
                for member in members {
                    let conf = matrix.link_confidence(id, &member.id)?;
                    if holds(conf, member.kind, config.inferred_threshold) {
                        holders.insert(id.clone());
                        break;
                    }
                }
            }
        }
        Question::HardConfirm { fact, .. } => match fact.kind {
            HardFactKind::IdentifierPrefix => {
                for candidate in catalog {
                    if weights.get(&candidate.id) > 0.0
                        && candidate.identifier_prefix().as_deref() == Some(fact.value.as_str())
                    {
                        holders.insert(candidate.id.clone());
                    }
                }
            }
            HardFactKind::AttributedTo => {
                // The fact value is the id of a structural attribute.
                for id in weights.ids() {
                    if matrix.link_confidence(id, &fact.value)?.is_some() {
                        holders.insert(id.clone());
                    }
                }
            }
        },
    }

    Ok(holders)
}
