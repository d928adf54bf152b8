//! Error kinds for the strict comparison variant.

use thiserror::Error;

use crate::matcher::MatchKind;

/// The two ways a strict comparison can fail. Both carry the tokens at the
/// point of divergence, rendered to strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchSequenceError {
    /// The actual sequence is a strict prefix of the expected one.
    #[error("sequence partially matches, unmatched: {}", .unmatched.join(", "))]
    PartialMatch { unmatched: Vec<String> },

    /// The actual sequence deviates from the expected one.
    #[error("sequence contains mismatches: {}", .mismatched.join(", "))]
    Mismatch { mismatched: Vec<String> },
}

impl MatchSequenceError {
    /// The result kind this error corresponds to.
    pub fn kind(&self) -> MatchKind {
        match self {
            MatchSequenceError::PartialMatch { .. } => MatchKind::PartialMatch,
            MatchSequenceError::Mismatch { .. } => MatchKind::Mismatch,
        }
    }
}
