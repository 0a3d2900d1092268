use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use ielts_core::model::{ResultId, TestId, TestSkill};
use ielts_core::time::fixed_clock;
use services::AppServices;
use storage::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{
    ContentManagerView, ExamView, HistoryView, HomeView, LoginView, RegisterView, ResultsView,
    TestListView,
};

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Login,
    Register,
    TestList(TestSkill),
    Exam(TestSkill, &'static str),
    Results(TestSkill, &'static str),
    History,
    ContentManager,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(app));
    use_context_provider(|| props.view.clone());
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
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Register => rsx! { RegisterView {} },
        ViewKind::TestList(skill) => rsx! { TestListView { skill } },
        ViewKind::Exam(skill, id) => rsx! { ExamView { skill, test_id: TestId::new(id) } },
        ViewKind::Results(skill, id) => rsx! {
            ResultsView { skill, result_id: ResultId::new(id) }
        },
        ViewKind::History => rsx! { HistoryView {} },
        ViewKind::ContentManager => rsx! { ContentManagerView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: Arc<AppServices>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
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

    /// Rebuilds, then lets resources settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_storage(view, &Storage::seeded())
}

pub fn setup_view_harness_with_storage(view: ViewKind, storage: &Storage) -> ViewHarness {
    let services = Arc::new(AppServices::new(storage, fixed_clock()));
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::clone(&services),
            view,
        },
    );
    ViewHarness { dom, services }
}
