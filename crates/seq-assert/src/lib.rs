//! Ordered sequence matching for scripted-action assertions.
//!
//! Compares an actual recorded sequence of tokens (e.g. action names captured
//! during a test run) against an expected script, classifying the outcome:
//!
//! 1. **Match**: both sequences are element-wise equal.
//! 2. **Partial match**: the recording is a strict prefix of the script —
//!    nothing wrong happened, more was simply expected.
//! 3. **Mismatch**: the recording deviates from the script at some position.
//!
//! Only the first point of divergence is reported.

pub mod error;
pub mod matcher;

// Re-export the public surface
pub use error::MatchSequenceError;
pub use matcher::{match_sequence, match_sequence_strict, MatchKind, MatchResult};
