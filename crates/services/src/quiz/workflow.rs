use tracing::debug;

use quiz_core::QuestionBank;
use quiz_core::model::Stream;

use super::session::{QuizPhase, QuizSession};
use super::transition::{TransitionPolicy, TransitionTimer};
use crate::Clock;
use crate::error::QuizError;

/// Result of answering a single question through the loop service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizAnswerResult {
    pub phase: QuizPhase,
    pub is_complete: bool,
    pub result: Option<Stream>,
}

/// Orchestrates session start and timed answering for callers that own the session
/// for the whole transition (scripts, tests, headless drivers).
#[derive(Debug, Clone, Copy)]
pub struct QuizLoopService {
    clock: Clock,
    policy: TransitionPolicy,
    bank: QuestionBank,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, policy: TransitionPolicy) -> Self {
        Self {
            clock,
            policy,
            bank: QuestionBank::standard(),
        }
    }

    #[must_use]
    pub fn with_bank(mut self, bank: QuestionBank) -> Self {
        self.bank = bank;
        self
    }

    #[must_use]
    pub fn bank(&self) -> QuestionBank {
        self.bank
    }

    #[must_use]
    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn timer(&self) -> TransitionTimer {
        TransitionTimer::new(self.clock)
    }

    /// Start a new session configured with this service's clock and policy.
    #[must_use]
    pub fn start_session(&self) -> QuizSession {
        QuizSession::new(self.bank)
            .with_policy(self.policy)
            .with_clock(self.clock)
    }

    /// Select `option`, confirm it, wait out the transition, then settle.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the option is out of range or the session is not
    /// awaiting an answer. The session is unchanged in that case.
    pub async fn answer_current(
        &self,
        session: &mut QuizSession,
        option: usize,
    ) -> Result<QuizAnswerResult, QuizError> {
        session.select_option(option)?;
        let ticket = session.confirm()?;
        self.timer().wait(ticket).await;
        let phase = session.settle_ticket(ticket)?;
        debug!(?phase, "loop answer settled");

        Ok(QuizAnswerResult {
            phase,
            is_complete: session.is_complete(),
            result: session.result(),
        })
    }

    /// Answer every remaining question with `picks`, in order.
    ///
    /// Stops early once the session completes.
    ///
    /// # Errors
    ///
    /// Propagates the first `QuizError` from `answer_current`.
    pub async fn answer_all(
        &self,
        session: &mut QuizSession,
        picks: &[usize],
    ) -> Result<Option<Stream>, QuizError> {
        for &pick in picks {
            if session.is_complete() {
                break;
            }
            self.answer_current(session, pick).await?;
        }
        Ok(session.result())
    }
}

impl Default for QuizLoopService {
    fn default() -> Self {
        Self::new(Clock::default(), TransitionPolicy::default())
    }
}
