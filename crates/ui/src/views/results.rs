use dioxus::prelude::*;
use dioxus_router::Link;
use ielts_core::model::{ResultId, TestSkill};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ResultNavVm, ResultVm, ReviewGroupVm, WritingTaskReviewVm};

#[component]
pub fn ResultsView(skill: TestSkill, result_id: ResultId) -> Element {
    let ctx = use_context::<AppContext>();
    let results = ctx.results();
    let catalog = ctx.catalog();

    let resource = use_resource(use_reactive!(|(skill, result_id)| {
        let results = results.clone();
        let catalog = catalog.clone();
        async move {
            let result = results
                .get_result_for_skill(skill, &result_id)
                .await
                .map_err(|_| ViewError::Unknown)?
                .ok_or(ViewError::NotFound)?;
            let test_id = &result.summary().test_id;
            let previous = catalog
                .previous_test(test_id)
                .await
                .map_err(|_| ViewError::Unknown)?;
            let next = catalog
                .next_test(test_id)
                .await
                .map_err(|_| ViewError::Unknown)?;
            let nav = ResultNavVm::new(&result, previous.as_ref(), next.as_ref());
            Ok::<_, ViewError>((ResultVm::from(&result), nav))
        }
    }));
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page results",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready((vm, nav)) => rsx! {
                    ResultBody { vm, skill }
                    ResultNav { nav, skill }
                },
                ViewState::Error(ViewError::NotFound) => rsx! {
                    div { class: "panel not-found",
                        h2 { "Result not found" }
                        p { "No {skill.label()} result is stored under \"{result_id}\"." }
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
fn ResultBody(vm: ResultVm, skill: TestSkill) -> Element {
    let header = vm.header;

    rsx! {
        header { class: "result-header",
            h2 { "{header.title}" }
            p { class: "result-meta",
                span { class: "badge", "{header.skill_label}" }
                span { "Completed {header.completed_label}" }
                span { "Time spent: {header.time_spent}" }
            }
            div { class: "band-score",
                span { class: "band-label", "Overall band" }
                span { id: "band-score", class: "band-value", "{header.score_label}" }
            }
            if let Some(correct) = header.correct_label {
                p { class: "correct-count", "{correct}" }
            }
        }
        if !vm.section_scores.is_empty() {
            section { class: "section-scores",
                h3 { "Section scores" }
                for score in vm.section_scores {
                    div { key: "{score.title}", class: "score-row",
                        span { "{score.title}" }
                        span { "{score.score_label}" }
                        div { class: "progress-track",
                            div { class: "progress-fill", style: "width: {score.percent}%" }
                        }
                    }
                }
            }
        }
        for task in vm.writing_tasks {
            WritingTaskReview { key: "{task.label}", task }
        }
        if !vm.feedback.is_empty() {
            section { class: "feedback",
                h3 { "Feedback" }
                for item in vm.feedback {
                    article { key: "{item.title}", class: "feedback-item",
                        h4 {
                            "{item.title}"
                            if let Some(score) = item.score_label {
                                span { class: "badge", " {score}" }
                            }
                        }
                        p { "{item.description}" }
                        ul {
                            for suggestion in item.suggestions {
                                li { "{suggestion}" }
                            }
                        }
                    }
                }
            }
        }
        if !vm.tips.is_empty() {
            section { class: "tips",
                h3 { "How to improve" }
                ul {
                    for tip in vm.tips {
                        li { "{tip}" }
                    }
                }
            }
        }
        if let Some(sample) = vm.sample_improvement {
            section { class: "sample",
                h3 { "Sample improvement" }
                p { "{sample}" }
            }
        }
        for group in vm.review {
            ReviewGroup { key: "{group.title}", group }
        }
        Link { class: "back-link", to: Route::TestList { skill }, "Try another test" }
    }
}

#[component]
fn ResultNav(nav: ResultNavVm, skill: TestSkill) -> Element {
    rsx! {
        nav { class: "result-nav",
            Link { to: Route::Exam { skill, test_id: nav.retake_id }, "Retake this test" }
            if let Some(previous) = nav.previous {
                Link {
                    class: "previous-test",
                    to: Route::Exam { skill: previous.skill, test_id: previous.id },
                    "Previous test: {previous.title}"
                }
            }
            if let Some(next) = nav.next {
                Link {
                    class: "next-test",
                    to: Route::Exam { skill: next.skill, test_id: next.id },
                    "Next test: {next.title}"
                }
            }
        }
    }
}

#[component]
fn WritingTaskReview(task: WritingTaskReviewVm) -> Element {
    rsx! {
        section { class: "writing-review",
            h3 { "{task.label}" span { class: "badge", " Band {task.score_label}" } }
            p { class: "task-question", "{task.question}" }
            blockquote { "{task.answer}" }
            p { class: "word-count", "{task.word_count_label}" }
            table { class: "criteria",
                for criterion in task.criteria {
                    tr { key: "{criterion.name}",
                        td { "{criterion.name}" }
                        td { "{criterion.score_label}" }
                        td { "{criterion.feedback}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ReviewGroup(group: ReviewGroupVm) -> Element {
    rsx! {
        details { class: "review-group",
            summary { "{group.title} ({group.summary})" }
            ol {
                for question in group.questions {
                    li {
                        key: "{question.number}",
                        class: if question.is_correct { "review correct" } else { "review wrong" },
                        p { "{question.number}. {question.text}" }
                        p { "Your answer: {question.user_answer}" }
                        if !question.is_correct {
                            p { "Correct answer: {question.correct_answer}" }
                        }
                        if let Some(explanation) = question.explanation {
                            p { class: "explanation", "{explanation}" }
                        }
                    }
                }
            }
        }
    }
}
