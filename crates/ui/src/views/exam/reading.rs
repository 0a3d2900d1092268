use dioxus::prelude::*;
use ielts_core::highlight::HighlightColor;

use crate::vm::{ExamVm, sanitize_passage_html};

use super::scripts::{PASSAGE_ELEMENT_ID, take_selection_text};

#[component]
pub(super) fn PassagePanel(vm: Signal<Option<ExamVm>>) -> Element {
    let guard = vm.read();
    let Some(exam) = guard.as_ref() else {
        return rsx! {};
    };
    let html = exam
        .passage_html()
        .map(|raw| sanitize_passage_html(&raw))
        .unwrap_or_default();
    let armed = exam.armed_color();
    let count = exam.highlight_count();
    drop(guard);

    let mut vm = vm;

    rsx! {
        section { class: "passage-column",
            div { class: "highlight-toolbar",
                span { "Highlight:" }
                for color in HighlightColor::ALL {
                    button {
                        key: "{color.label()}",
                        class: if armed == Some(color) { "swatch armed" } else { "swatch" },
                        title: "{color.label()}",
                        style: "background-color: {color.css()};",
                        onclick: move |_| {
                            if let Some(exam) = vm.write().as_mut() {
                                exam.toggle_color(color);
                            }
                        },
                        "{color.label()}"
                    }
                }
                button {
                    id: "clear-highlights",
                    disabled: count == 0,
                    onclick: move |_| {
                        if let Some(exam) = vm.write().as_mut() {
                            exam.clear_highlights();
                        }
                    },
                    "Clear highlights"
                }
            }
            if let Some(color) = armed {
                p { class: "highlight-hint",
                    "Select text in the passage to highlight it in {color.label()}."
                }
            }
            div {
                id: PASSAGE_ELEMENT_ID,
                class: "passage",
                dangerous_inner_html: "{html}",
                onmouseup: move |_| {
                    if armed.is_none() {
                        return;
                    }
                    spawn(async move {
                        if let Some(text) = take_selection_text(PASSAGE_ELEMENT_ID).await
                            && let Some(exam) = vm.write().as_mut()
                        {
                            exam.highlight_selection(&text);
                        }
                    });
                },
            }
        }
    }
}
