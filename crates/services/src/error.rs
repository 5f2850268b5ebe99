//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::BankError;
use quiz_core::model::{OPTION_COUNT, OptionIndexError};

use crate::quiz::QuizPhase;

/// Why a quiz operation was refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidSelection {
    #[error("no option has been selected")]
    NothingSelected,
    #[error("operation not allowed while {phase}")]
    WrongPhase { phase: QuizPhase },
    #[error("transition was cancelled by a reset")]
    StaleTransition,
}

/// Errors emitted by `QuizSession`.
///
/// Both variants are recoverable: the session is left exactly as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("index {index} is out of range (expected 0..{len})")]
    OutOfRange { index: usize, len: usize },
    #[error(transparent)]
    InvalidSelection(#[from] InvalidSelection),
}

impl From<BankError> for QuizError {
    fn from(err: BankError) -> Self {
        match err {
            BankError::OutOfRange { index, len } => QuizError::OutOfRange { index, len },
        }
    }
}

impl From<OptionIndexError> for QuizError {
    fn from(err: OptionIndexError) -> Self {
        match err {
            OptionIndexError::OutOfRange { index } => QuizError::OutOfRange {
                index,
                len: OPTION_COUNT,
            },
        }
    }
}
