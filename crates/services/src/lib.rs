#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use quiz_core::Clock;

pub use error::{InvalidSelection, QuizError};
pub use quiz::{
    QuizAnswerResult, QuizLoopService, QuizOutcome, QuizPhase, QuizProgress, QuizSession,
    THINKING_DELAY_MS, TransitionPolicy, TransitionTicket, TransitionTimer,
};
