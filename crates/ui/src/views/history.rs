use dioxus::prelude::*;
use dioxus_router::Link;
use ielts_core::model::TestSkill;
use services::SessionProvider;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{HistoryFilter, ResultCardVm};

fn tab_class(active: bool) -> &'static str {
    if active { "tab active" } else { "tab" }
}

#[component]
pub fn HistoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = ctx.auth();
    let results = ctx.results();
    let mut filter = use_signal(HistoryFilter::default);

    // `None` when nobody is signed in.
    let resource = use_resource(move || {
        let auth = auth.clone();
        let results = results.clone();
        async move {
            let Some(user) = auth.current_user().await else {
                return Ok::<_, ViewError>(None);
            };
            let list = results
                .results_for_user(user.email.as_str())
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok(Some(list))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page history",
            h2 { "Your Test Results" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(None) => rsx! {
                    div { class: "panel",
                        p { "Sign in to see the tests you have completed." }
                        Link { to: Route::Login {}, "Sign in" }
                    }
                },
                ViewState::Ready(Some(list)) => {
                    let cards = filter.read().apply(&list);
                    let empty_message = filter.read().empty_message();
                    let active_skill = filter.read().skill;
                    rsx! {
                        div { class: "filters",
                            input {
                                id: "history-search",
                                r#type: "search",
                                placeholder: "Search results...",
                                value: "{filter.read().search}",
                                oninput: move |evt| filter.write().search = evt.value(),
                            }
                        }
                        div { class: "tabs skill-tabs",
                            button {
                                class: tab_class(active_skill.is_none()),
                                onclick: move |_| filter.write().skill = None,
                                "All"
                            }
                            for skill in [TestSkill::Reading, TestSkill::Listening, TestSkill::Writing] {
                                button {
                                    class: tab_class(active_skill == Some(skill)),
                                    onclick: move |_| filter.write().skill = Some(skill),
                                    "{skill.label()}"
                                }
                            }
                        }
                        if cards.is_empty() {
                            div { class: "panel empty",
                                h3 { "No results found" }
                                p { "{empty_message}" }
                                if filter.read().is_active() {
                                    button {
                                        id: "clear-filters",
                                        onclick: move |_| filter.set(HistoryFilter::default()),
                                        "Clear filters"
                                    }
                                }
                            }
                        } else {
                            ul { class: "result-cards",
                                for card in cards {
                                    ResultCard { key: "{card.id}", card }
                                }
                            }
                        }
                    }
                }
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn ResultCard(card: ResultCardVm) -> Element {
    rsx! {
        li { class: "result-card",
            p { class: "test-meta",
                span { class: "badge", "{card.skill_label}" }
                span { class: "score {card.score_class}", "{card.score_label}" }
            }
            h3 { "{card.title}" }
            p { class: "test-created", "{card.completed_label}" }
            if !card.time_spent.is_empty() {
                p { "Time spent: {card.time_spent}" }
            }
            Link {
                class: "view-details",
                to: Route::Results { skill: card.skill, result_id: card.id.clone() },
                "View Details"
            }
        }
    }
}
