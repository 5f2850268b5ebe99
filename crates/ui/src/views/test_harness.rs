use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::time::fixed_clock;
use services::{Clock, QuizSession, TransitionPolicy};

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{HomeView, QuizView};
use crate::vm::QuizIntent;

struct TestApp {
    policy: TransitionPolicy,
    clock: Clock,
}

impl UiApp for TestApp {
    fn app_name(&self) -> &str {
        "Stream Quiz"
    }

    fn transition_policy(&self) -> TransitionPolicy {
        self.policy
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz,
}

/// Root-owned flag that mounts or unmounts the view under test.
#[derive(Clone, Default)]
struct MountHandle(Rc<RefCell<Option<Signal<bool>>>>);

#[derive(Clone, Copy)]
struct Mounted(Signal<bool>);

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: Option<QuizTestHandles>,
    mount: MountHandle,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.quiz_handles.clone() {
        use_context_provider(|| handles);
    }
    let mounted = use_signal(|| true);
    use_context_provider(|| Mounted(mounted));
    if props.mount.0.borrow().is_none() {
        *props.mount.0.borrow_mut() = Some(mounted);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let Mounted(mounted) = use_context::<Mounted>();
    if !mounted() {
        return rsx! { p { "View closed" } };
    }
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz_handles: Option<QuizTestHandles>,
    mount: MountHandle,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Mounts or unmounts the view under test, keeping the rest of the tree alive.
    pub fn set_mounted(&mut self, mounted: bool) {
        let Some(mut flag) = *self.mount.0.borrow() else {
            panic!("harness not rebuilt");
        };
        self.dom.in_runtime(|| flag.set(mounted));
        self.drive();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    fn quiz(&self) -> &QuizTestHandles {
        self.quiz_handles.as_ref().expect("quiz handles")
    }

    /// Sends `intent` through the quiz view's dispatcher, then renders.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.quiz().dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        self.drive();
    }

    pub fn with_session<R>(&self, f: impl FnOnce(&QuizSession) -> R) -> R {
        let session = self.quiz().session();
        self.dom.in_runtime(|| f(&session.read()))
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, policy: TransitionPolicy) -> ViewHarness {
    let quiz_handles = match view {
        ViewKind::Quiz => Some(QuizTestHandles::default()),
        ViewKind::Home => None,
    };
    let mount = MountHandle::default();
    let app = Arc::new(TestApp {
        policy,
        clock: fixed_clock(),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
            mount: mount.clone(),
        },
    );

    ViewHarness {
        dom,
        quiz_handles,
        mount,
    }
}
