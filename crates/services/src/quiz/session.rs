use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{debug, info};

use quiz_core::QuestionBank;
use quiz_core::model::{OptionIndex, Question, Stream, StreamTally};
use quiz_core::scoring;

use super::outcome::QuizOutcome;
use super::progress::QuizProgress;
use super::transition::{TransitionPolicy, TransitionTicket};
use crate::Clock;
use crate::error::{InvalidSelection, QuizError};

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Discrete state of a quiz session.
///
/// `AwaitingAnswer` → `Transitioning` on confirm, then back to `AwaitingAnswer` for the
/// next question or on to `Completed` after the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizPhase {
    AwaitingAnswer,
    Transitioning,
    Completed,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuizPhase::AwaitingAnswer => "awaiting an answer",
            QuizPhase::Transitioning => "transitioning",
            QuizPhase::Completed => "completed",
        };
        f.write_str(label)
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz run over a fixed question bank.
///
/// Owned by whichever presentation layer drives it. Every operation either applies
/// fully or returns a `QuizError` and leaves the session untouched.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: QuestionBank,
    policy: TransitionPolicy,
    clock: Clock,
    current: usize,
    selected: Option<OptionIndex>,
    answers: Vec<OptionIndex>,
    tally: StreamTally,
    phase: QuizPhase,
    result: Option<Stream>,
    // bumped by reset(); tickets from an older epoch are dead
    epoch: u64,
    next_seq: u64,
    pending: Option<TransitionTicket>,
}

impl QuizSession {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            policy: TransitionPolicy::default(),
            clock: Clock::default(),
            current: 0,
            selected: None,
            answers: Vec::with_capacity(bank.len()),
            tally: StreamTally::new(),
            phase: QuizPhase::AwaitingAnswer,
            result: None,
            epoch: 0,
            next_seq: 0,
            pending: None,
        }
    }

    /// Session over the standard bank with the thinking delay.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(QuestionBank::standard())
    }

    #[must_use]
    pub fn with_policy(mut self, policy: TransitionPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    //
    // ─── OPERATIONS ────────────────────────────────────────────────────────────
    //

    /// Records a tentative choice for the current question, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelection::WrongPhase` outside `AwaitingAnswer` and
    /// `QuizError::OutOfRange` for an index outside the question's options.
    pub fn select_option(&mut self, index: usize) -> Result<(), QuizError> {
        self.require_phase(QuizPhase::AwaitingAnswer)?;
        let option = OptionIndex::new(index)?;
        debug!(
            question = self.question_number(),
            option = index,
            "option selected"
        );
        self.selected = Some(option);
        Ok(())
    }

    /// Locks in the tentative choice and starts the transition.
    ///
    /// The returned ticket is what a timer should hand back to `settle_ticket`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelection::WrongPhase` outside `AwaitingAnswer` and
    /// `InvalidSelection::NothingSelected` when no option is selected.
    pub fn confirm(&mut self) -> Result<TransitionTicket, QuizError> {
        self.require_phase(QuizPhase::AwaitingAnswer)?;
        let Some(option) = self.selected.take() else {
            debug!(question = self.question_number(), "confirm without selection");
            return Err(InvalidSelection::NothingSelected.into());
        };

        self.answers.push(option);
        self.tally.record(Stream::for_option(option));
        self.phase = QuizPhase::Transitioning;

        let ticket = TransitionTicket::new(
            self.epoch,
            self.next_seq,
            self.clock.deadline_after(self.policy.delay()),
        );
        self.next_seq += 1;
        self.pending = Some(ticket);

        debug!(
            question = self.question_number(),
            option = option.value(),
            answered = self.answers.len(),
            "answer confirmed"
        );
        Ok(ticket)
    }

    /// Resolves the transition: next question, or the result after the last one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelection::WrongPhase` unless the session is `Transitioning`.
    pub fn settle(&mut self) -> Result<QuizPhase, QuizError> {
        self.require_phase(QuizPhase::Transitioning)?;
        self.pending = None;

        if self.answers.len() >= self.bank.len() {
            let stream = scoring::recommend(&self.answers);
            self.result = stream;
            self.phase = QuizPhase::Completed;
            info!(
                stream = stream.map(Stream::key),
                answered = self.answers.len(),
                "quiz completed"
            );
        } else {
            self.current += 1;
            self.phase = QuizPhase::AwaitingAnswer;
            debug!(question = self.question_number(), "advanced to next question");
        }
        Ok(self.phase)
    }

    /// `settle()` for the transition `ticket` was issued for, and only that one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelection::StaleTransition` if the ticket predates a reset or
    /// its transition already settled.
    pub fn settle_ticket(&mut self, ticket: TransitionTicket) -> Result<QuizPhase, QuizError> {
        if self.pending != Some(ticket) {
            debug!(
                ticket_epoch = ticket.epoch(),
                epoch = self.epoch,
                "ignoring stale transition"
            );
            return Err(InvalidSelection::StaleTransition.into());
        }
        self.settle()
    }

    /// Settles the pending transition if it is due at `now`.
    ///
    /// Returns `true` if the session moved on.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        match self.pending {
            Some(ticket) if ticket.is_due(now) => self.settle_ticket(ticket).is_ok(),
            _ => false,
        }
    }

    /// Settles the pending transition if it is due on the session's own clock.
    pub fn poll_clock(&mut self) -> bool {
        let now = self.clock.now();
        self.poll(now)
    }

    /// Advances the session's fixed clock. No effect on a system clock.
    pub fn advance_clock(&mut self, delta: chrono::Duration) {
        self.clock.advance(delta);
    }

    /// Back to the first question with nothing answered.
    ///
    /// Valid in every phase. Any outstanding ticket is cancelled.
    pub fn reset(&mut self) {
        if self.pending.is_some() {
            debug!(epoch = self.epoch, "reset cancelled a pending transition");
        }
        self.current = 0;
        self.selected = None;
        self.answers.clear();
        self.tally = StreamTally::new();
        self.phase = QuizPhase::AwaitingAnswer;
        self.result = None;
        self.pending = None;
        self.epoch += 1;
    }

    fn require_phase(&self, expected: QuizPhase) -> Result<(), QuizError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(InvalidSelection::WrongPhase { phase: self.phase }.into())
        }
    }

    //
    // ─── OBSERVERS ─────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
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
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::Completed
    }

    /// The recommended stream; set once, on completion.
    #[must_use]
    pub fn result(&self) -> Option<Stream> {
        self.result
    }

    /// Question being answered, or `None` once the quiz is complete.
    #[must_use]
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.is_complete() {
            return None;
        }
        self.bank.get(self.current).ok()
    }

    /// Zero-based position of the current question.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// 1-based position of the current question.
    #[must_use]
    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.bank.is_last(self.current)
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<OptionIndex> {
        self.selected
    }

    #[must_use]
    pub fn answers(&self) -> &[OptionIndex] {
        &self.answers
    }

    /// Running per-stream count of confirmed answers.
    #[must_use]
    pub fn tally(&self) -> StreamTally {
        self.tally
    }

    #[must_use]
    pub fn pending_transition(&self) -> Option<TransitionTicket> {
        self.pending
    }

    /// `(current_index + 1) / question_count` while in progress, `1.0` once complete.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self) -> f64 {
        if self.is_complete() {
            return 1.0;
        }
        let total = self.bank.len();
        if total == 0 {
            return 0.0;
        }
        (self.current + 1) as f64 / total as f64
    }

    /// `progress_fraction` as a rounded percentage.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent_complete(&self) -> u8 {
        (self.progress_fraction() * 100.0).round().clamp(0.0, 100.0) as u8
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            question_number: self.question_number(),
            total: self.question_count(),
            answered: self.answers.len(),
            fraction: self.progress_fraction(),
            percent: self.percent_complete(),
            is_complete: self.is_complete(),
        }
    }

    /// The terminal result, once the quiz is complete.
    #[must_use]
    pub fn outcome(&self) -> Option<QuizOutcome> {
        let stream = self.result?;
        Some(QuizOutcome::new(stream, self.tally))
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::standard()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
