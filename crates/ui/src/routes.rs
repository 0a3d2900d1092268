use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};
use ielts_core::model::{ResultId, TestId, TestSkill};
use tracing::warn;

use crate::context::AppContext;

use crate::views::{
    ContentManagerView, ExamView, HistoryView, HomeView, LoginView, NotFoundView, RegisterView,
    ResultsView, TestListView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/auth/login", LoginView)] Login {},
        #[route("/auth/register", RegisterView)] Register {},
        #[route("/tests/:skill", TestListView)] TestList { skill: TestSkill },
        #[route("/tests/:skill/:test_id", ExamView)] Exam { skill: TestSkill, test_id: TestId },
        #[route("/tests/results/:skill/:result_id", ResultsView)] Results { skill: TestSkill, result_id: ResultId },
        #[route("/user/tests/results", HistoryView)] History {},
        #[route("/content-manager", ContentManagerView)] ContentManager {},
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

impl Route {
    /// Parses an absolute path such as a submission receipt route.
    #[must_use]
    pub fn parse_path(path: &str) -> Option<Self> {
        path.parse::<Self>().ok()
    }
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    use_effect(move || {
        if let Some(path) = ctx.take_start_route() {
            match Route::parse_path(&path) {
                Some(route) => {
                    let _ = navigator.replace(route);
                }
                None => warn!(path, "ignoring unknown start route"),
            }
        }
    });

    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        nav { class: "topbar",
            Link { class: "brand", to: Route::Home {}, "IELTS Practice" }
            ul {
                for skill in TestSkill::ALL {
                    li { Link { to: Route::TestList { skill }, "{skill.label()}" } }
                }
                li { Link { to: Route::History {}, "My results" } }
                li { Link { to: Route::ContentManager {}, "Content Manager" } }
                li { Link { to: Route::Login {}, "Sign in" } }
            }
        }
    }
}
