use dioxus::prelude::*;

use crate::vm::ResultVm;

#[component]
pub fn ResultCard(vm: ResultVm, on_retake: EventHandler<()>) -> Element {
    rsx! {
        div { class: "quiz-card result-card", "data-stream": "{vm.stream_key}",
            header { class: "result-header",
                h2 { class: "result-title", "Quiz Complete!" }
                p { class: "result-subtitle", "Here's your recommended stream" }
            }
            span { class: "{vm.badge_class}", "{vm.title}" }
            p { class: "result-description", "{vm.description}" }
            p { class: "result-match", "Matched {vm.match_label}" }

            h3 { "Potential Career Paths:" }
            ul { class: "result-careers",
                for career in vm.careers.iter() {
                    li { key: "{career}", "{career}" }
                }
            }

            h3 { "Your Answers" }
            ul { class: "result-tally",
                for row in vm.tally.iter() {
                    li { key: "{row.label}", class: "result-tally__row",
                        span { "{row.label}" }
                        span { class: "result-tally__count", "{row.count}" }
                    }
                }
            }

            h3 { "Your roadmap" }
            ul { class: "roadmap",
                for (idx, row) in vm.roadmap.iter().enumerate() {
                    li { key: "{idx}", class: "{row.class}",
                        strong { "{row.label}" }
                        span { class: "roadmap__desc", "{row.description}" }
                    }
                }
            }

            div { class: "result-actions",
                button {
                    class: "quiz-confirm",
                    id: "quiz-retake",
                    r#type: "button",
                    onclick: move |_| on_retake.call(()),
                    "Retake Quiz"
                }
            }
        }
    }
}
