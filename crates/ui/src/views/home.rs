use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let count = ctx.question_count();

    rsx! {
        div { class: "page home-page",
            h2 { "Find your stream" }
            p {
                "Answer {count} quick questions about what you enjoy and we will suggest "
                "the stream that fits you best: Science, Arts, Commerce or Vocational."
            }
            Link { class: "quiz-confirm", to: Route::Quiz {}, "Start Quiz" }
        }
    }
}
