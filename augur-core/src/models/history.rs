use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Answer, AttributeId, ExploreTarget, HardFactKind, Question, QuestionKind};

/// One turn's record: what was asked, how it resolved, what was answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub turn: u32,
    pub question: Question,
    pub answer: Answer,
    pub asked_at: DateTime<Utc>,
}

/// Per-session question history.
///
/// Tracks three things the selector needs every turn: which attributes (and
/// synonym groups) are retired, which hard facts were already probed, and
/// the trailing negative-answer streak.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
    /// Retired attribute ids.
    excluded_attributes: BTreeSet<AttributeId>,
    /// Retired synonym groups.
    excluded_groups: BTreeSet<String>,
    /// Bundles already asked (a bundle is never asked twice).
    asked_bundles: BTreeSet<String>,
    /// Hard facts already probed, keyed by (kind, value).
    asked_facts: BTreeSet<(HardFactKind, String)>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answered turn and update the exclusion sets.
    ///
    /// Exclusion rules:
    /// - a plain attribute (Explore or SoftConfirm) retires itself and its
    ///   synonym group;
    /// - a bundle retires itself always, but retires its members only on a
    ///   negative answer — an affirmative bundle answer leaves the members
    ///   individually askable (observed asymmetry, kept deliberately);
    /// - a hard-confirm retires its (kind, value) fact.
    pub fn record(&mut self, question: Question, answer: Answer) {
        match &question {
            Question::Explore { target } => match target {
                ExploreTarget::Attribute { attribute } => {
                    self.excluded_attributes.insert(attribute.id.clone());
                    if let Some(group) = &attribute.synonym_group {
                        self.excluded_groups.insert(group.clone());
                    }
                }
                ExploreTarget::Bundle { bundle, members } => {
                    self.asked_bundles.insert(bundle.id.clone());
                    if answer.is_negative() {
                        for member in members {
                            self.excluded_attributes.insert(member.id.clone());
                            if let Some(group) = &member.synonym_group {
                                self.excluded_groups.insert(group.clone());
                            }
                        }
                    }
                }
            },
            Question::SoftConfirm { attribute, .. } => {
                self.excluded_attributes.insert(attribute.id.clone());
                if let Some(group) = &attribute.synonym_group {
                    self.excluded_groups.insert(group.clone());
                }
            }
            Question::HardConfirm { fact, .. } => {
                self.asked_facts
                    .insert((fact.kind, fact.value.clone()));
            }
        }

        let turn = self.entries.len() as u32;
        self.entries.push(HistoryEntry {
            turn,
            question,
            answer,
            asked_at: Utc::now(),
        });
    }

    /// Whether an attribute (by id + synonym group) is retired for this
    /// session.
    pub fn is_excluded(&self, attribute_id: &str, synonym_group: Option<&str>) -> bool {
        if self.excluded_attributes.contains(attribute_id) {
            return true;
        }
        synonym_group
            .map(|g| self.excluded_groups.contains(g))
            .unwrap_or(false)
    }

    pub fn bundle_asked(&self, bundle_id: &str) -> bool {
        self.asked_bundles.contains(bundle_id)
    }

    pub fn fact_asked(&self, kind: HardFactKind, value: &str) -> bool {
        self.asked_facts.contains(&(kind, value.to_string()))
    }

    /// Kind of the most recent question, if any.
    pub fn last_kind(&self) -> Option<QuestionKind> {
        self.entries.last().map(|e| e.question.kind())
    }

    /// Length of the trailing run of negative answers.
    pub fn negative_streak(&self) -> usize {
        self.entries
            .iter()
            .rev()
            .take_while(|e| e.answer.is_negative())
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attribute, AttributeKind, Bundle, HardFact};

    fn attr(id: &str, group: Option<&str>) -> Attribute {
        let mut a = Attribute::new(id, id, AttributeKind::Asserted);
        a.synonym_group = group.map(str::to_string);
        a
    }

    #[test]
    fn synonym_group_is_retired_with_the_attribute() {
        let mut history = SessionHistory::new();
        history.record(
            Question::Explore {
                target: ExploreTarget::Attribute {
                    attribute: attr("wings", Some("flight")),
                },
            },
            Answer::Yes,
        );
        assert!(history.is_excluded("wings", Some("flight")));
        // A different attribute in the same group is also retired.
        assert!(history.is_excluded("can-fly", Some("flight")));
        assert!(!history.is_excluded("can-fly", None));
    }

    #[test]
    fn bundle_members_retire_only_on_negative_answer() {
        let members = vec![attr("soccer", None), attr("tennis", None)];
        let bundle = Bundle::new("sports", "sports", vec!["soccer".into(), "tennis".into()]);

        let mut yes_history = SessionHistory::new();
        yes_history.record(
            Question::Explore {
                target: ExploreTarget::Bundle {
                    bundle: bundle.clone(),
                    members: members.clone(),
                },
            },
            Answer::Yes,
        );
        assert!(yes_history.bundle_asked("sports"));
        assert!(!yes_history.is_excluded("soccer", None));

        let mut no_history = SessionHistory::new();
        no_history.record(
            Question::Explore {
                target: ExploreTarget::Bundle { bundle, members },
            },
            Answer::No,
        );
        assert!(no_history.is_excluded("soccer", None));
        assert!(no_history.is_excluded("tennis", None));
    }

    #[test]
    fn negative_streak_counts_trailing_run() {
        let mut history = SessionHistory::new();
        for (id, answer) in [("a", Answer::Yes), ("b", Answer::No), ("c", Answer::StrongNo)] {
            history.record(
                Question::Explore {
                    target: ExploreTarget::Attribute {
                        attribute: attr(id, None),
                    },
                },
                answer,
            );
        }
        assert_eq!(history.negative_streak(), 2);
    }

    #[test]
    fn hard_facts_are_tracked_by_kind_and_value() {
        let mut history = SessionHistory::new();
        history.record(
            Question::HardConfirm {
                candidate: "w1".into(),
                fact: HardFact::new(HardFactKind::IdentifierPrefix, "S"),
            },
            Answer::Yes,
        );
        assert!(history.fact_asked(HardFactKind::IdentifierPrefix, "S"));
        assert!(!history.fact_asked(HardFactKind::AttributedTo, "S"));
    }
}
