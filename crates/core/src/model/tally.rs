use serde::{Deserialize, Serialize};

use crate::model::stream::Stream;

/// Per-stream count of contributing answers.
///
/// Counts are indexed by `Stream::ordinal`, so iteration always follows
/// the canonical `Stream::ALL` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamTally {
    counts: [u32; 4],
}

impl StreamTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one answer to `stream`.
    pub fn record(&mut self, stream: Stream) {
        let slot = &mut self.counts[stream.ordinal()];
        *slot = slot.saturating_add(1);
    }

    #[must_use]
    pub fn count(&self, stream: Stream) -> u32 {
        self.counts[stream.ordinal()]
    }

    /// Total number of answers recorded.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// `(stream, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Stream, u32)> + '_ {
        Stream::ALL.into_iter().map(|stream| (stream, self.count(stream)))
    }

    /// The stream with the highest count.
    ///
    /// Ties resolve to whichever stream comes first in `Stream::ALL`.
    /// Returns `None` when nothing has been recorded.
    #[must_use]
    pub fn leader(&self) -> Option<Stream> {
        if self.is_empty() {
            return None;
        }
        let mut best = Stream::ALL[0];
        for stream in Stream::ALL.into_iter().skip(1) {
            // strict: an equal count never displaces an earlier stream
            if self.count(stream) > self.count(best) {
                best = stream;
            }
        }
        Some(best)
    }
}

impl FromIterator<Stream> for StreamTally {
    fn from_iter<I: IntoIterator<Item = Stream>>(iter: I) -> Self {
        let mut tally = Self::new();
        for stream in iter {
            tally.record(stream);
        }
        tally
    }
}
