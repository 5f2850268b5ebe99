use services::{QuizPhase, QuizSession};

use super::result_vm::{ResultVm, map_result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    Confirm,
    Retake,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizHeaderVm {
    pub question_label: String,
    pub percent_label: String,
    /// CSS width for the progress bar, e.g. `"30%"`.
    pub progress_width: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub index: usize,
    pub text: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub header: QuizHeaderVm,
    pub prompt: &'static str,
    pub options: Vec<QuizOptionVm>,
    pub can_confirm: bool,
    pub confirm_label: &'static str,
}

/// What the quiz page should show right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    Question(QuizQuestionVm),
    Thinking(QuizHeaderVm),
    Result(ResultVm),
}

fn map_header(session: &QuizSession) -> QuizHeaderVm {
    let percent = session.percent_complete();
    QuizHeaderVm {
        question_label: format!(
            "Question {} of {}",
            session.question_number(),
            session.question_count()
        ),
        percent_label: format!("{percent}% Complete"),
        progress_width: format!("{percent}%"),
    }
}

#[must_use]
pub fn map_quiz_screen(session: &QuizSession) -> QuizScreenVm {
    match session.phase() {
        QuizPhase::Transitioning => QuizScreenVm::Thinking(map_header(session)),
        QuizPhase::Completed => match session.outcome() {
            Some(outcome) => QuizScreenVm::Result(map_result(&outcome)),
            // completed always carries a result; fall back to the question view
            None => QuizScreenVm::Thinking(map_header(session)),
        },
        QuizPhase::AwaitingAnswer => {
            let Some(question) = session.current_question() else {
                return QuizScreenVm::Thinking(map_header(session));
            };
            let selected = session.selected_option().map(|option| option.value());
            let options = question
                .options()
                .iter()
                .copied()
                .enumerate()
                .map(|(index, text)| QuizOptionVm {
                    index,
                    text,
                    selected: selected == Some(index),
                })
                .collect();
            let confirm_label = if session.is_last_question() {
                "Complete Quiz"
            } else {
                "Next Question"
            };

            QuizScreenVm::Question(QuizQuestionVm {
                header: map_header(session),
                prompt: question.prompt(),
                options,
                can_confirm: selected.is_some(),
                confirm_label,
            })
        }
    }
}
