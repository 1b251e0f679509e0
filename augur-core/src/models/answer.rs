use serde::{Deserialize, Serialize};

/// The five recognized answer tokens.
///
/// Anything outside this enumeration is treated as `Unknown` (zero evidence)
/// rather than an error — a confused user should never break a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    StrongYes,
    Yes,
    Unknown,
    No,
    StrongNo,
}

impl Answer {
    /// Lenient parse from a user-facing token. Unrecognized input maps to
    /// `Unknown`.
    pub fn parse(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "strong_yes" | "definitely" | "yes!" => Self::StrongYes,
            "yes" | "y" | "probably" => Self::Yes,
            "no" | "n" | "probably_not" => Self::No,
            "strong_no" | "definitely_not" | "no!" => Self::StrongNo,
            _ => Self::Unknown,
        }
    }

    /// Affirmative answers (weak or strong).
    pub fn is_affirmative(self) -> bool {
        matches!(self, Self::StrongYes | Self::Yes)
    }

    /// Negative answers (weak or strong).
    pub fn is_negative(self) -> bool {
        matches!(self, Self::StrongNo | Self::No)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_tokens_are_unknown() {
        assert_eq!(Answer::parse("maybe?"), Answer::Unknown);
        assert_eq!(Answer::parse(""), Answer::Unknown);
        assert_eq!(Answer::parse("  Y "), Answer::Yes);
        assert_eq!(Answer::parse("definitely_not"), Answer::StrongNo);
    }
}
