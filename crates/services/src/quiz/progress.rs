/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizProgress {
    /// 1-based number of the question on screen.
    pub question_number: usize,
    pub total: usize,
    pub answered: usize,
    pub fraction: f64,
    pub percent: u8,
    pub is_complete: bool,
}
