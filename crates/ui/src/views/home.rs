use dioxus::prelude::*;
use dioxus_router::Link;
use ielts_core::model::{TestSkill, User};
use services::SessionProvider;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct HomeData {
    user: Option<User>,
    counts: Vec<(TestSkill, usize)>,
}

fn skill_blurb(skill: TestSkill) -> &'static str {
    match skill {
        TestSkill::Listening => "Four recorded sections with a 40 minute countdown.",
        TestSkill::Reading => "Long passages you can highlight while you answer.",
        TestSkill::Writing => "Two tasks with live word counts and auto-save.",
    }
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = ctx.auth();
    let catalog = ctx.catalog();

    let resource = use_resource(move || {
        let auth = auth.clone();
        let catalog = catalog.clone();
        async move {
            let user = auth.current_user().await;
            let tests = catalog.all_tests().await.map_err(|_| ViewError::Unknown)?;
            let counts = TestSkill::ALL
                .iter()
                .map(|skill| (*skill, tests.iter().filter(|t| t.skill() == *skill).count()))
                .collect();
            Ok::<_, ViewError>(HomeData { user, counts })
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "{ctx.app().app_name()}" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    if let Some(user) = data.user {
                        p { class: "signed-in", "Signed in as {user.email}" }
                    } else {
                        p { class: "signed-in",
                            Link { to: Route::Login {}, "Sign in" }
                            " to manage content."
                        }
                    }
                    ul { class: "skill-cards",
                        for (skill, count) in data.counts {
                            li { class: "skill-card",
                                h3 { "{skill.label()}" }
                                p { "{skill_blurb(skill)}" }
                                Link { to: Route::TestList { skill }, "Browse {count} tests" }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}
