use dioxus::prelude::*;
use tracing::debug;

use crate::context::AppContext;
use crate::vm::ExamVm;

#[component]
pub(super) fn WritingPanel(vm: Signal<Option<ExamVm>>) -> Element {
    let clock = use_context::<AppContext>().clock();
    let guard = vm.read();
    let Some(exam) = guard.as_ref() else {
        return rsx! {};
    };
    let tasks = exam.writing_tasks();
    let autosave = exam.autosave_label();
    let finished = exam.is_finished();
    drop(guard);

    let mut vm = vm;
    let active = tasks.iter().find(|task| task.active).cloned();

    rsx! {
        nav { class: "section-tabs",
            for task in tasks {
                button {
                    key: "{task.label}",
                    class: if task.active { "tab active" } else { "tab" },
                    onclick: move |_| {
                        if let Some(exam) = vm.write().as_mut() {
                            exam.go_to_task(task.kind);
                        }
                    },
                    "{task.label}"
                }
            }
        }
        if let Some(task) = active {
            section { class: "writing-task",
                p { class: "task-question", "{task.question}" }
                if let Some(url) = task.image_url.clone() {
                    img { class: "task-image", src: "{url}", alt: "{task.label} chart" }
                }
                textarea {
                    id: "writing-response",
                    rows: 16,
                    disabled: finished,
                    placeholder: "Write your response here...",
                    value: "{task.response}",
                    oninput: move |evt: FormEvent| {
                        if let Some(exam) = vm.write().as_mut()
                            && let Err(err) = exam.write_task(task.kind, &evt.value(), clock.now())
                        {
                            debug!(?err, "draft rejected");
                        }
                    },
                }
                div { class: "word-count",
                    span { id: "word-count", "{task.word_count_label}" }
                    if !task.status_label.is_empty() {
                        span { class: "word-status", " {task.status_label}" }
                    }
                    div { class: "progress-track",
                        div {
                            class: "progress-fill",
                            style: "width: {task.target_pct.min(100)}%",
                        }
                    }
                }
                if let Some(label) = autosave {
                    span { id: "autosave-status", class: "autosave", "{label}" }
                }
            }
        }
    }
}
