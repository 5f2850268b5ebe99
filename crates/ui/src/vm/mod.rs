mod quiz_vm;
mod result_vm;

pub use quiz_vm::{
    QuizHeaderVm, QuizIntent, QuizOptionVm, QuizQuestionVm, QuizScreenVm, map_quiz_screen,
};
pub use result_vm::{ResultVm, RoadmapRowVm, TallyRowVm, map_result};
