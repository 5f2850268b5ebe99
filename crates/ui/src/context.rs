use std::sync::Arc;

use services::{Clock, QuizLoopService, QuizSession, TransitionPolicy, TransitionTimer};

pub trait UiApp: Send + Sync {
    fn app_name(&self) -> &str;
    fn transition_policy(&self) -> TransitionPolicy;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    app_name: Arc<str>,
    quiz_loop: QuizLoopService,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: Arc::from(app.app_name()),
            quiz_loop: QuizLoopService::new(app.clock(), app.transition_policy()),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn transition_policy(&self) -> TransitionPolicy {
        self.quiz_loop.policy()
    }

    /// Number of questions each new session will ask.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.quiz_loop.bank().len()
    }

    /// A fresh session using the configured clock and transition policy.
    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        self.quiz_loop.start_session()
    }

    #[must_use]
    pub fn timer(&self) -> TransitionTimer {
        self.quiz_loop.timer()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
