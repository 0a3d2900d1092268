use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::{Link, Navigator, use_navigator};
use ielts_core::model::{TestId, TestSkill};
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ExamOutcome, ExamVm, start_exam};

use super::questions::QuestionPanel;
use super::reading::PassagePanel;
use super::submit::SubmitModal;
use super::writing::WritingPanel;

const TICK_INTERVAL: Duration = Duration::from_millis(250);

pub(super) fn go_to_result(navigator: Navigator, route: &str) {
    match Route::parse_path(route) {
        Some(target) => {
            let _ = navigator.replace(target);
        }
        None => warn!(route, "submission route did not parse"),
    }
}

#[component]
pub fn ExamView(skill: TestSkill, test_id: TestId) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let exams = ctx.exams();
    let clock = ctx.clock();
    let vm = use_signal(|| None::<ExamVm>);
    let mut current = use_signal(|| (skill, test_id.clone()));
    use_effect(use_reactive!(|(skill, test_id)| {
        current.set((skill, test_id));
    }));

    let resource = use_resource(use_reactive!(|(skill, test_id)| {
        let exams = exams.clone();
        let mut vm = vm;
        async move {
            vm.set(None);
            let started = start_exam(&exams, skill, &test_id).await?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    }));

    use_future(move || {
        let mut vm = vm;
        async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            loop {
                interval.tick().await;
                let (skill, test_id) = current.peek().clone();
                let live = vm
                    .peek()
                    .as_ref()
                    .is_some_and(|exam| !exam.is_finished() && exam.belongs_to(skill, &test_id));
                if !live {
                    continue;
                }
                let outcome = vm.write().as_mut().map(|exam| exam.tick(clock.now()));
                if let Some(ExamOutcome::Submitted { route }) = outcome {
                    go_to_result(navigator, &route);
                }
            }
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page exam",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(()) => rsx! {
                    ExamBody { vm }
                },
                ViewState::Error(ViewError::NotFound) => rsx! {
                    div { class: "panel not-found",
                        h2 { "Test not found" }
                        p { "The {skill.label()} test \"{test_id}\" does not exist." }
                        Link { to: Route::TestList { skill }, "Back to {skill.label()} tests" }
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
fn ExamBody(vm: Signal<Option<ExamVm>>) -> Element {
    let guard = vm.read();
    let Some(exam) = guard.as_ref() else {
        return rsx! {
            p { "Loading..." }
        };
    };
    let skill = exam.session().skill();
    let header = exam.header();
    let tabs = exam.section_tabs();
    let description = exam.section_description();
    let audio_url = exam.audio_url();
    let is_first = exam.is_first_section();
    let is_last = exam.is_last_section();
    let finished = exam.is_finished();
    drop(guard);

    let mut vm = vm;

    rsx! {
        header { class: "exam-header",
            div {
                h2 { "{header.title}" }
                span { class: "badge", "{header.skill_label}" }
            }
            div { id: "exam-timer", class: "timer {header.timer_class}", "{header.timer_label}" }
            div { class: "exam-progress",
                div { class: "progress-track",
                    div {
                        class: "progress-fill {header.progress_class}",
                        style: "width: {header.progress_pct}%",
                    }
                }
                span { class: "progress-label", "{header.progress_label}" }
            }
        }
        if skill == TestSkill::Writing {
            WritingPanel { vm }
        } else {
            if let Some(url) = audio_url {
                audio { class: "exam-audio", controls: true, src: "{url}" }
            }
            nav { class: "section-tabs",
                for tab in tabs {
                    button {
                        key: "{tab.index}",
                        class: if tab.active { "tab active" } else { "tab" },
                        onclick: move |_| {
                            if let Some(exam) = vm.write().as_mut() {
                                exam.go_to_section(tab.index);
                            }
                        },
                        "{tab.title}"
                        if tab.complete {
                            span { class: "tab-done", " ✓" }
                        }
                    }
                }
            }
            div { class: "exam-columns",
                if skill == TestSkill::Reading {
                    PassagePanel { vm }
                }
                div { class: "question-column",
                    if let Some(text) = description {
                        p { class: "section-description", "{text}" }
                    }
                    QuestionPanel { vm }
                }
            }
            div { class: "section-nav",
                button {
                    id: "prev-section",
                    disabled: is_first || finished,
                    onclick: move |_| {
                        if let Some(exam) = vm.write().as_mut() {
                            exam.prev_section();
                        }
                    },
                    "Previous"
                }
                button {
                    id: "next-section",
                    disabled: is_last || finished,
                    onclick: move |_| {
                        if let Some(exam) = vm.write().as_mut() {
                            exam.next_section();
                        }
                    },
                    "Next"
                }
            }
        }
        footer { class: "exam-footer",
            button {
                id: "open-submit",
                class: "primary",
                disabled: finished,
                onclick: move |_| {
                    if let Some(exam) = vm.write().as_mut() {
                        exam.open_submit_dialog();
                    }
                },
                "Submit test"
            }
        }
        SubmitModal { vm }
    }
}
