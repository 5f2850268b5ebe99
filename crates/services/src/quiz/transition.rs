use chrono::{DateTime, Duration, Utc};

use crate::Clock;

/// How long the "thinking" state lasts between questions by default.
pub const THINKING_DELAY_MS: i64 = 2_500;

//
// ─── POLICY ────────────────────────────────────────────────────────────────────
//

/// How long a confirmed answer stays in `Transitioning` before it settles.
///
/// A zero delay gives the plain, non-animated quiz; the default gives the
/// animated one. Scoring is identical either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionPolicy {
    delay: Duration,
}

impl TransitionPolicy {
    /// Policy with the standard thinking delay.
    #[must_use]
    pub fn thinking() -> Self {
        Self::from_millis(THINKING_DELAY_MS)
    }

    /// Policy that settles as soon as the caller asks.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            delay: Duration::zero(),
        }
    }

    /// Negative values are clamped to zero.
    #[must_use]
    pub fn from_millis(ms: i64) -> Self {
        Self {
            delay: Duration::milliseconds(ms.max(0)),
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn is_immediate(&self) -> bool {
        self.delay.is_zero()
    }
}

impl Default for TransitionPolicy {
    fn default() -> Self {
        Self::thinking()
    }
}

//
// ─── TICKET ────────────────────────────────────────────────────────────────────
//

/// Handle for one scheduled settle.
///
/// Carries the session epoch it was issued in; a `reset()` bumps the epoch, so any
/// ticket issued before it can no longer settle the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTicket {
    epoch: u64,
    seq: u64,
    due_at: DateTime<Utc>,
}

impl TransitionTicket {
    pub(crate) fn new(epoch: u64, seq: u64, due_at: DateTime<Utc>) -> Self {
        Self { epoch, seq, due_at }
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Position of this transition among all the session has started.
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    #[must_use]
    pub fn due_at(&self) -> DateTime<Utc> {
        self.due_at
    }

    #[must_use]
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        now >= self.due_at
    }

    /// Time left until the ticket is due, never negative.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        let left = self.due_at - now;
        if left < Duration::zero() {
            Duration::zero()
        } else {
            left
        }
    }
}

//
// ─── TIMER ─────────────────────────────────────────────────────────────────────
//

/// Waits out a ticket's remaining delay in real time.
///
/// Waiting does not settle anything; callers follow up with
/// `QuizSession::settle_ticket`, which refuses tickets a reset has cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionTimer {
    clock: Clock,
}

impl TransitionTimer {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Sleeps until `ticket` is due according to this timer's clock.
    pub async fn wait(&self, ticket: TransitionTicket) {
        let remaining = ticket.remaining(self.clock.now());
        if remaining.is_zero() {
            return;
        }
        // chrono -> std only fails for negative durations, excluded above
        let Ok(remaining) = remaining.to_std() else {
            return;
        };
        tokio::time::sleep(remaining).await;
    }
}
