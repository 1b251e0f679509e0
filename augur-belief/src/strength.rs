//! Answer → signed evidence strength.

use augur_core::config::{StrengthTable, UpdateConfig};
use augur_core::models::{Answer, Question};

/// Map an answer token to a signed strength in [-1, 1]. `Unknown` is zero
/// evidence — including any token the parser did not recognize.
pub fn answer_strength(answer: Answer, table: &StrengthTable) -> f64 {
    let raw = match answer {
        Answer::StrongYes => table.strong_yes,
        Answer::Yes => table.yes,
        Answer::Unknown => 0.0,
        Answer::No => table.no,
        Answer::StrongNo => table.strong_no,
    };
    raw.clamp(-1.0, 1.0)
}

/// Strength adjusted for the question shape: aggregate (bundle) questions
/// assert a weaker, broader claim, so their evidence is scaled down.
pub fn question_strength(question: &Question, answer: Answer, config: &UpdateConfig) -> f64 {
    let base = answer_strength(answer, &config.strengths);
    if question.is_aggregate() {
        base * config.bundle_strength_scale.clamp(0.0, 1.0)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use augur_core::models::{Attribute, AttributeKind, Bundle, ExploreTarget};

    #[test]
    fn unknown_is_zero_strength() {
        assert_eq!(answer_strength(Answer::Unknown, &StrengthTable::default()), 0.0);
    }

    #[test]
    fn table_is_clamped() {
        let table = StrengthTable {
            strong_yes: 7.0,
            yes: 0.6,
            no: -0.6,
            strong_no: -7.0,
        };
        assert_eq!(answer_strength(Answer::StrongYes, &table), 1.0);
        assert_eq!(answer_strength(Answer::StrongNo, &table), -1.0);
    }

    #[test]
    fn bundle_questions_carry_reduced_strength() {
        let config = UpdateConfig::default();
        let attribute_q = Question::Explore {
            target: ExploreTarget::Attribute {
                attribute: Attribute::new("x", "x", AttributeKind::Asserted),
            },
        };
        let bundle_q = Question::Explore {
            target: ExploreTarget::Bundle {
                bundle: Bundle::new("b", "b", vec!["x".into()]),
                members: vec![Attribute::new("x", "x", AttributeKind::Asserted)],
            },
        };
        let full = question_strength(&attribute_q, Answer::StrongYes, &config);
        let reduced = question_strength(&bundle_q, Answer::StrongYes, &config);
        assert!(reduced < full);
        assert!(reduced > 0.0);
    }
}
