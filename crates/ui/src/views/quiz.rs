use dioxus::core::Task;
use dioxus::prelude::*;
use tracing::debug;

use crate::context::AppContext;
use crate::views::ResultCard;
use crate::vm::{QuizHeaderVm, QuizIntent, QuizQuestionVm, QuizScreenVm, map_quiz_screen};

#[cfg(test)]
use services::QuizSession;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

fn option_class(selected: bool) -> &'static str {
    if selected {
        "quiz-option quiz-option--selected"
    } else {
        "quiz-option"
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = {
        let ctx = ctx.clone();
        use_signal(move || ctx.new_session())
    };
    // Settle task for the current transition; dropped with the component.
    let pending = use_signal(|| None::<Task>);

    let dispatch_intent = {
        let ctx = ctx.clone();
        use_callback(move |intent: QuizIntent| {
            let mut session = session;
            let mut pending = pending;

            match intent {
                QuizIntent::Select(index) => {
                    if let Err(err) = session.write().select_option(index) {
                        debug!(%err, index, "selection ignored");
                    }
                }
                QuizIntent::Confirm => {
                    let ticket = match session.write().confirm() {
                        Ok(ticket) => ticket,
                        Err(err) => {
                            debug!(%err, "confirm ignored");
                            return;
                        }
                    };
                    if ctx.transition_policy().is_immediate() {
                        if let Err(err) = session.write().settle_ticket(ticket) {
                            debug!(%err, "settle ignored");
                        }
                        return;
                    }
                    let timer = ctx.timer();
                    let task = spawn(async move {
                        timer.wait(ticket).await;
                        if let Err(err) = session.write().settle_ticket(ticket) {
                            debug!(%err, "settle ignored");
                        }
                        pending.set(None);
                    });
                    pending.set(Some(task));
                }
                QuizIntent::Retake => {
                    if let Some(task) = pending.write().take() {
                        task.cancel();
                    }
                    session.write().reset();
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, session);
            }
        }
    }

    let on_retake = use_callback(move |()| dispatch_intent.call(QuizIntent::Retake));
    let screen = map_quiz_screen(&session.read());

    rsx! {
        div { class: "page quiz-page",
            match screen {
                QuizScreenVm::Question(vm) => rsx! {
                    QuestionCard { vm, on_intent: dispatch_intent }
                },
                QuizScreenVm::Thinking(header) => rsx! {
                    div { class: "quiz-card",
                        QuizHeader { header }
                        div { class: "quiz-thinking", role: "status",
                            "Analyzing your answer..."
                        }
                    }
                },
                QuizScreenVm::Result(vm) => rsx! {
                    ResultCard { vm, on_retake }
                },
            }
        }
    }
}

#[component]
fn QuizHeader(header: QuizHeaderVm) -> Element {
    rsx! {
        div { class: "quiz-header",
            span { "{header.question_label}" }
            span { "{header.percent_label}" }
        }
        div { class: "quiz-progress",
            div { class: "quiz-progress__bar", style: "width: {header.progress_width}" }
        }
    }
}

#[component]
fn QuestionCard(vm: QuizQuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let header = vm.header.clone();

    rsx! {
        div { class: "quiz-card",
            QuizHeader { header }
            h2 { class: "quiz-prompt", "{vm.prompt}" }
            div { class: "quiz-options",
                for option in vm.options.iter().cloned() {
                    button {
                        key: "{option.index}",
                        class: option_class(option.selected),
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Select(option.index)),
                        "{option.text}"
                    }
                }
            }
            button {
                class: "quiz-confirm",
                id: "quiz-confirm",
                r#type: "button",
                disabled: !vm.can_confirm,
                onclick: move |_| on_intent.call(QuizIntent::Confirm),
                "{vm.confirm_label}"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    session: Rc<RefCell<Option<Signal<QuizSession>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, session: Signal<QuizSession>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<QuizSession> {
        (*self.session.borrow()).expect("quiz session registered")
    }
}
