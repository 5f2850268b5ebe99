mod outcome;
mod progress;
mod session;
mod transition;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::{InvalidSelection, QuizError};
pub use outcome::QuizOutcome;
pub use progress::QuizProgress;
pub use session::{QuizPhase, QuizSession};
pub use transition::{THINKING_DELAY_MS, TransitionPolicy, TransitionTicket, TransitionTimer};
pub use workflow::{QuizAnswerResult, QuizLoopService};
