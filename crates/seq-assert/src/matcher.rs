//! Position-by-position sequence comparison.
//!
//! Scans the actual and expected sequences in lockstep and classifies the
//! outcome at the first point of divergence.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MatchSequenceError;

/// How a comparison ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchKind {
    #[serde(rename = "match")]
    Match,
    #[serde(rename = "partial match")]
    PartialMatch,
    #[serde(rename = "mismatch")]
    Mismatch,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Match => write!(f, "match"),
            MatchKind::PartialMatch => write!(f, "partial match"),
            MatchKind::Mismatch => write!(f, "mismatch"),
        }
    }
}

/// Outcome of comparing an actual sequence against an expected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult<T> {
    pub kind: MatchKind,
    /// Items in `expected` beyond where `actual` ended. Non-empty only for
    /// `PartialMatch`.
    pub unmatched: Vec<T>,
    /// The single item in `actual` at the point of divergence. Non-empty only
    /// for `Mismatch`.
    pub mismatched: Vec<T>,
}

impl<T> MatchResult<T> {
    /// True if the sequences matched in full.
    pub fn is_match(&self) -> bool {
        self.kind == MatchKind::Match
    }
}

/// Compare an actual sequence against an expected script.
///
/// The scan runs to the length of the longer sequence and stops at the first
/// divergence. Exhausting `actual` first is checked before value equality, so
/// an `actual` that is a strict prefix of `expected` is always a
/// `PartialMatch`, never a `Mismatch`. An `actual` entry past the end of
/// `expected` counts as a mismatch at that position.
pub fn match_sequence<T>(actual: &[T], expected: &[T]) -> MatchResult<T>
where
    T: PartialEq + Clone,
{
    let len = actual.len().max(expected.len());

    for i in 0..len {
        let Some(a) = actual.get(i) else {
            // actual ran out first: the rest of expected is unmatched
            return MatchResult {
                kind: MatchKind::PartialMatch,
                unmatched: expected[i..].to_vec(),
                mismatched: Vec::new(),
            };
        };

        if expected.get(i) != Some(a) {
            return MatchResult {
                kind: MatchKind::Mismatch,
                unmatched: Vec::new(),
                mismatched: vec![a.clone()],
            };
        }
    }

    MatchResult {
        kind: MatchKind::Match,
        unmatched: Vec::new(),
        mismatched: Vec::new(),
    }
}

/// Compare two sequences, failing on any outcome other than a full match.
///
/// Returns `Ok(())` when [`match_sequence`] would report `Match`; otherwise
/// the error variant corresponding to the result kind, carrying the unmatched
/// or mismatched tokens rendered via `Display`.
pub fn match_sequence_strict<T>(actual: &[T], expected: &[T]) -> Result<(), MatchSequenceError>
where
    T: PartialEq + Clone + fmt::Display,
{
    let result = match_sequence(actual, expected);
    match result.kind {
        MatchKind::Match => Ok(()),
        MatchKind::PartialMatch => Err(MatchSequenceError::PartialMatch {
            unmatched: result.unmatched.iter().map(T::to_string).collect(),
        }),
        MatchKind::Mismatch => Err(MatchSequenceError::Mismatch {
            mismatched: result.mismatched.iter().map(T::to_string).collect(),
        }),
    }
}
