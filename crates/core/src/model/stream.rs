use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::question::OptionIndex;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StreamError {
    #[error("unknown stream key: {0}")]
    UnknownKey(String),
}

//
// ─── STREAM ────────────────────────────────────────────────────────────────────
//

/// Academic stream a completed quiz resolves to.
///
/// Variants are declared in canonical order. That order is load-bearing: it is the
/// tie-break order used by [`crate::model::StreamTally::leader`], and `Stream::ALL`
/// pins it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    Science,
    Arts,
    Commerce,
    Vocational,
}

impl Stream {
    /// All streams in canonical declaration order.
    pub const ALL: [Stream; 4] = [
        Stream::Science,
        Stream::Arts,
        Stream::Commerce,
        Stream::Vocational,
    ];

    /// Maps an answer's option position to the stream it counts towards.
    ///
    /// The mapping is positional and identical for every question:
    /// first option → Science, second → Arts, third → Commerce, fourth → Vocational.
    #[must_use]
    pub const fn for_option(index: OptionIndex) -> Self {
        Self::ALL[index.value()]
    }

    /// Position of this stream in `Stream::ALL`.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Stream::Science => 0,
            Stream::Arts => 1,
            Stream::Commerce => 2,
            Stream::Vocational => 3,
        }
    }

    /// Stable lowercase key, matching the serialized form.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Stream::Science => "science",
            Stream::Arts => "arts",
            Stream::Commerce => "commerce",
            Stream::Vocational => "vocational",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Stream {
    type Err = StreamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Stream::ALL
            .into_iter()
            .find(|stream| stream.key() == key)
            .ok_or(StreamError::UnknownKey(s.to_string()))
    }
}
