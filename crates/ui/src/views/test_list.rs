use dioxus::prelude::*;
use dioxus_router::Link;
use ielts_core::model::{TestDifficulty, TestSkill};
use services::{TestFilters, TestSort};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{TestCardVm, map_test_cards, skill_heading};

const DIFFICULTIES: [TestDifficulty; 4] = [
    TestDifficulty::Easy,
    TestDifficulty::Medium,
    TestDifficulty::Hard,
    TestDifficulty::VeryHard,
];

const SORTS: [(TestSort, &str); 4] = [
    (TestSort::Catalog, "Default"),
    (TestSort::Newest, "Newest"),
    (TestSort::Oldest, "Oldest"),
    (TestSort::Alphabetical, "A-Z"),
];

#[component]
pub fn TestListView(skill: TestSkill) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let mut search = use_signal(String::new);
    let mut sort = use_signal(TestSort::default);
    let mut difficulty = use_signal(|| None::<TestDifficulty>);

    let resource = use_resource(use_reactive!(|(skill,)| {
        let catalog = catalog.clone();
        async move {
            let filters = TestFilters::for_skill(skill)
                .with_search(search())
                .with_difficulty(difficulty())
                .with_sort(sort());
            let tests = catalog
                .filter_tests(&filters)
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_test_cards(&tests))
        }
    }));
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page test-list",
            h2 { "{skill_heading(skill)}" }
            div { class: "filters",
                input {
                    id: "test-search",
                    r#type: "search",
                    placeholder: "Search tests",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
                select {
                    id: "test-difficulty",
                    onchange: move |evt| difficulty.set(evt.value().parse::<TestDifficulty>().ok()),
                    option { value: "all", selected: difficulty().is_none(), "All difficulties" }
                    for value in DIFFICULTIES {
                        option {
                            value: value.as_str(),
                            selected: difficulty() == Some(value),
                            "{value.label()}"
                        }
                    }
                }
                select {
                    id: "test-sort",
                    onchange: move |evt| {
                        if let Some(parsed) = TestSort::parse(&evt.value()) {
                            sort.set(parsed);
                        }
                    },
                    for (value, label) in SORTS {
                        option { value: value.as_str(), selected: sort() == value, "{label}" }
                    }
                }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { "No tests match your search." }
                    } else {
                        ul { class: "test-cards",
                            for card in cards {
                                TestCard { key: "{card.id}", card }
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

#[component]
fn TestCard(card: TestCardVm) -> Element {
    rsx! {
        li { class: "test-card",
            h3 { "{card.title}" }
            p { class: "test-meta",
                span { class: "badge", "{card.difficulty_label}" }
                span { "{card.duration_label}" }
                span { "{card.questions_label}" }
            }
            if !card.description.is_empty() {
                p { "{card.description}" }
            }
            p { class: "test-created", "Added {card.created_label}" }
            Link {
                class: "start-test",
                to: Route::Exam { skill: card.skill, test_id: card.id.clone() },
                "Start test"
            }
        }
    }
}
