use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::stream::Stream;

/// Every question offers exactly this many choices.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OptionIndexError {
    #[error("option index {index} is out of range (expected 0..{OPTION_COUNT})")]
    OutOfRange { index: usize },
}

//
// ─── OPTION INDEX ──────────────────────────────────────────────────────────────
//

/// Zero-based position of a choice within a question's options.
///
/// Always in `0..OPTION_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct OptionIndex(usize);

impl OptionIndex {
    /// Validates a raw option position.
    ///
    /// # Errors
    ///
    /// Returns `OptionIndexError::OutOfRange` if `index >= OPTION_COUNT`.
    pub const fn new(index: usize) -> Result<Self, OptionIndexError> {
        if index < OPTION_COUNT {
            Ok(Self(index))
        } else {
            Err(OptionIndexError::OutOfRange { index })
        }
    }

    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Iterates every valid option position in order.
    pub fn all() -> impl Iterator<Item = OptionIndex> {
        (0..OPTION_COUNT).map(OptionIndex)
    }
}

impl TryFrom<usize> for OptionIndex {
    type Error = OptionIndexError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OptionIndex> for usize {
    fn from(value: OptionIndex) -> Self {
        value.0
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// `stream` is the category the question was authored under. It is descriptive only:
/// scoring looks at which option position was picked, never at this field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: &'static str,
    options: [&'static str; OPTION_COUNT],
    stream: Stream,
}

impl Question {
    #[must_use]
    pub const fn new(
        id: QuestionId,
        prompt: &'static str,
        options: [&'static str; OPTION_COUNT],
        stream: Stream,
    ) -> Self {
        Self {
            id,
            prompt,
            options,
            stream,
        }
    }

    #[must_use]
    pub const fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub const fn prompt(&self) -> &'static str {
        self.prompt
    }

    #[must_use]
    pub const fn options(&self) -> &[&'static str; OPTION_COUNT] {
        &self.options
    }

    /// Text of the option at `index`.
    #[must_use]
    pub const fn option(&self, index: OptionIndex) -> &'static str {
        self.options[index.value()]
    }

    #[must_use]
    pub const fn stream(&self) -> Stream {
        self.stream
    }
}
