use serde::Serialize;

use quiz_core::model::{Stream, StreamProfile, StreamTally};

/// Presentation-agnostic result of a completed quiz.
///
/// Carries no pre-formatted strings beyond the static profile text; the UI decides
/// how to lay it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOutcome {
    pub stream: Stream,
    pub profile: &'static StreamProfile,
    pub tally: StreamTally,
    pub answered: usize,
}

impl QuizOutcome {
    #[must_use]
    pub fn new(stream: Stream, tally: StreamTally) -> Self {
        Self {
            stream,
            profile: stream.profile(),
            answered: tally.total() as usize,
            tally,
        }
    }

    /// Share of answers that went to the recommended stream, in `[0, 1]`.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        if self.answered == 0 {
            return 0.0;
        }
        f64::from(self.tally.count(self.stream)) / self.answered as f64
    }
}
