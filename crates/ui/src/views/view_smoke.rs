use services::{QuizPhase, TransitionPolicy};

use super::test_harness::{ViewHarness, ViewKind, setup_view_harness};
use crate::vm::QuizIntent;

fn answer(harness: &mut ViewHarness, option: usize) {
    harness.dispatch(QuizIntent::Select(option));
    harness.dispatch(QuizIntent::Confirm);
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_intro_and_start_link() {
    let mut harness = setup_view_harness(ViewKind::Home, TransitionPolicy::immediate());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Find your stream"), "missing title in {html}");
    assert!(html.contains("Answer 10 quick questions"), "missing count in {html}");
    assert!(html.contains("Start Quiz"), "missing start link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz, TransitionPolicy::immediate());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 10"), "missing header in {html}");
    assert!(html.contains("10% Complete"), "missing percent in {html}");
    assert!(html.contains("Mathematics"), "missing option in {html}");
    assert!(html.contains("Next Question"), "missing confirm in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_highlights_selection() {
    let mut harness = setup_view_harness(ViewKind::Quiz, TransitionPolicy::immediate());
    harness.rebuild();
    harness.dispatch(QuizIntent::Select(3));
    let html = harness.render();
    assert!(html.contains("quiz-option--selected"), "missing selection in {html}");
    let selected = harness.with_session(|s| s.selected_option().map(|o| o.value()));
    assert_eq!(selected, Some(3));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_ignores_confirm_without_selection() {
    let mut harness = setup_view_harness(ViewKind::Quiz, TransitionPolicy::immediate());
    harness.rebuild();
    harness.dispatch(QuizIntent::Confirm);
    assert_eq!(harness.with_session(|s| s.answers().len()), 0);
    assert!(harness.render().contains("Question 1 of 10"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_runs_to_result_and_retakes() {
    let mut harness = setup_view_harness(ViewKind::Quiz, TransitionPolicy::immediate());
    harness.rebuild();
    for _ in 0..10 {
        answer(&mut harness, 2);
    }
    let html = harness.render();
    assert!(html.contains("Quiz Complete!"), "missing completion title in {html}");
    assert!(html.contains("Commerce Stream"), "missing result title in {html}");
    assert!(html.contains("Potential Career Paths:"), "missing careers heading in {html}");
    assert!(html.contains("data-stream=\"commerce\""), "missing stream key in {html}");
    assert!(html.contains("result-tally__count"), "missing answer breakdown in {html}");
    assert!(html.contains("badge--green"), "missing badge in {html}");
    assert!(html.contains("Accountant"), "missing career in {html}");
    assert!(html.contains("Retake Quiz"), "missing retake in {html}");

    harness.dispatch(QuizIntent::Retake);
    let html = harness.render();
    assert!(html.contains("Question 1 of 10"), "missing restart in {html}");
    assert!(harness.with_session(|s| s.answers().is_empty()));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_thinking_then_advances() {
    let mut harness = setup_view_harness(ViewKind::Quiz, TransitionPolicy::from_millis(10));
    harness.rebuild();
    answer(&mut harness, 0);
    let html = harness.render();
    assert!(html.contains("Analyzing your answer"), "missing thinking in {html}");

    for _ in 0..10 {
        harness.drive_async().await;
        if harness.render().contains("Question 2 of 10") {
            break;
        }
    }
    let html = harness.render();
    assert!(html.contains("Question 2 of 10"), "missing next question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn retake_during_thinking_cancels_pending_settle() {
    let mut harness = setup_view_harness(ViewKind::Quiz, TransitionPolicy::from_millis(20));
    harness.rebuild();
    answer(&mut harness, 1);
    assert_eq!(harness.with_session(|s| s.phase()), QuizPhase::Transitioning);

    harness.dispatch(QuizIntent::Retake);
    for _ in 0..3 {
        harness.drive_async().await;
    }

    let (phase, number, answered) =
        harness.with_session(|s| (s.phase(), s.question_number(), s.answers().len()));
    assert_eq!(phase, QuizPhase::AwaitingAnswer);
    assert_eq!(number, 1);
    assert_eq!(answered, 0);
    let html = harness.render();
    assert!(html.contains("Question 1 of 10"), "missing restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unmount_during_thinking_drops_pending_settle() {
    let mut harness = setup_view_harness(ViewKind::Quiz, TransitionPolicy::from_millis(20));
    harness.rebuild();
    answer(&mut harness, 1);
    assert_eq!(harness.with_session(|s| s.phase()), QuizPhase::Transitioning);

    harness.set_mounted(false);
    assert!(harness.render().contains("View closed"));
    // outlive the delay; a settle task that survived teardown would write a dropped signal
    for _ in 0..3 {
        harness.drive_async().await;
    }

    harness.set_mounted(true);
    let (phase, number, answered, pending) = harness.with_session(|s| {
        (
            s.phase(),
            s.question_number(),
            s.answers().len(),
            s.pending_transition(),
        )
    });
    assert_eq!(phase, QuizPhase::AwaitingAnswer);
    assert_eq!(number, 1);
    assert_eq!(answered, 0);
    assert!(pending.is_none());
    assert!(harness.render().contains("Question 1 of 10"));

    drop(harness);
    tokio::time::sleep(std::time::Duration::from_millis(40)).await;
}
