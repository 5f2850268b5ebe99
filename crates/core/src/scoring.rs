//! Maps a sequence of confirmed answers to a recommended stream.
//!
//! Scoring only looks at option positions. Which question an answer belongs to, and
//! the stream that question was authored under, have no influence on the outcome.

use crate::model::{OptionIndex, Stream, StreamTally};

/// Counts each answer towards the stream its option position maps to.
#[must_use]
pub fn tally(answers: &[OptionIndex]) -> StreamTally {
    answers.iter().copied().map(Stream::for_option).collect()
}

/// Recommended stream for `answers`, or `None` if there are no answers.
///
/// The stream with the most answers wins; ties go to the stream declared first
/// in `Stream::ALL`.
#[must_use]
pub fn recommend(answers: &[OptionIndex]) -> Option<Stream> {
    tally(answers).leader()
}
