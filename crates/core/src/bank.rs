//! The fixed question bank.

use thiserror::Error;

use crate::model::{Question, QuestionId, Stream};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BankError {
    #[error("question index {index} is out of range (bank has {len} questions)")]
    OutOfRange { index: usize, len: usize },
}

static STANDARD_QUESTIONS: [Question; 10] = [
    Question::new(
        QuestionId::new(1),
        "Which subject interests you the most?",
        ["Mathematics", "History", "Biology", "Computer Programming"],
        Stream::Science,
    ),
    Question::new(
        QuestionId::new(2),
        "What type of activities do you enjoy?",
        [
            "Solving puzzles",
            "Writing stories",
            "Managing finances",
            "Building things",
        ],
        Stream::Science,
    ),
    Question::new(
        QuestionId::new(3),
        "Which career appeals to you most?",
        ["Teacher", "Doctor", "Business Owner", "Artist"],
        Stream::Science,
    ),
    Question::new(
        QuestionId::new(4),
        "How do you prefer to work?",
        [
            "With data and numbers",
            "With people and ideas",
            "With money and investments",
            "With hands-on projects",
        ],
        Stream::Science,
    ),
    Question::new(
        QuestionId::new(5),
        "What motivates you most?",
        [
            "Discovering new things",
            "Expressing creativity",
            "Making profit",
            "Creating useful products",
        ],
        Stream::Science,
    ),
    Question::new(
        QuestionId::new(6),
        "Which environment suits you best?",
        ["Laboratory", "Studio", "Office", "Workshop"],
        Stream::Science,
    ),
    Question::new(
        QuestionId::new(7),
        "What's your preferred way of learning?",
        ["Experiments", "Reading", "Case studies", "Practice"],
        Stream::Science,
    ),
    Question::new(
        QuestionId::new(8),
        "Which skill comes naturally to you?",
        ["Analysis", "Communication", "Leadership", "Problem-solving"],
        Stream::Science,
    ),
    Question::new(
        QuestionId::new(9),
        "What type of projects excite you?",
        [
            "Research projects",
            "Creative projects",
            "Business plans",
            "Technical projects",
        ],
        Stream::Science,
    ),
    Question::new(
        QuestionId::new(10),
        "Which future do you envision?",
        [
            "Scientist/Engineer",
            "Writer/Designer",
            "Entrepreneur",
            "Technician/Craftsperson",
        ],
        Stream::Science,
    ),
];

/// Read-only, ordered sequence of questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionBank {
    questions: &'static [Question],
}

impl QuestionBank {
    /// The ten-question aptitude bank.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            questions: &STANDARD_QUESTIONS,
        }
    }

    /// Returns the question at zero-based `index`.
    ///
    /// # Errors
    ///
    /// Returns `BankError::OutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&'static Question, BankError> {
        self.questions.get(index).ok_or(BankError::OutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// True when `index` addresses the final question.
    #[must_use]
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.questions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Question> {
        self.questions.iter()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_bank_has_ten_sequential_questions() {
        let bank = QuestionBank::standard();
        assert_eq!(bank.len(), 10);
        assert!(!bank.is_empty());
        for (i, question) in bank.iter().enumerate() {
            let expected = u32::try_from(i + 1).unwrap();
            assert_eq!(question.id().value(), expected);
            assert_eq!(question.options().len(), 4);
        }
    }

    #[test]
    fn get_reports_out_of_range() {
        let bank = QuestionBank::standard();
        assert_eq!(
            bank.get(0).unwrap().prompt(),
            "Which subject interests you the most?"
        );
        assert_eq!(
            bank.get(10).unwrap_err(),
            BankError::OutOfRange { index: 10, len: 10 }
        );
    }

    #[test]
    fn last_index_is_detected() {
        let bank = QuestionBank::standard();
        assert!(bank.is_last(9));
        assert!(!bank.is_last(0));
        assert!(!bank.is_last(10));
    }
}
