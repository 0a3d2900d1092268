use dioxus::prelude::*;
use ielts_core::model::QuestionId;
use tracing::debug;

use crate::vm::{AnswerInput, ExamVm, QuestionVm};

#[component]
pub(super) fn QuestionPanel(vm: Signal<Option<ExamVm>>) -> Element {
    let questions = vm
        .read()
        .as_ref()
        .map(ExamVm::current_questions)
        .unwrap_or_default();

    rsx! {
        ol { class: "questions",
            for question in questions {
                QuestionItem { key: "{question.id}", vm, question }
            }
        }
    }
}

fn set_text(mut vm: Signal<Option<ExamVm>>, id: &QuestionId, value: String) {
    if let Some(exam) = vm.write().as_mut()
        && let Err(err) = exam.set_text_answer(id, value)
    {
        debug!(question = %id, ?err, "answer rejected");
    }
}

fn set_slot(mut vm: Signal<Option<ExamVm>>, id: &QuestionId, slot: usize, value: String) {
    if let Some(exam) = vm.write().as_mut()
        && let Err(err) = exam.set_slot_answer(id, slot, value)
    {
        debug!(question = %id, ?err, "answer rejected");
    }
}

#[component]
fn QuestionItem(vm: Signal<Option<ExamVm>>, question: QuestionVm) -> Element {
    let id = question.id.clone();
    let reference_options = question.reference_options.clone();

    rsx! {
        li { class: "question", value: "{question.number}",
            p { class: "question-text",
                strong { "{question.number}. " }
                "{question.text}"
                if let Some(marks) = question.marks_label {
                    span { class: "marks", " ({marks})" }
                }
            }
            match question.input {
                AnswerInput::Single { choices, selected } => rsx! {
                    div { class: "choices",
                        for choice in choices {
                            label { key: "{choice}",
                                input {
                                    r#type: "radio",
                                    name: "{id}",
                                    value: "{choice}",
                                    checked: selected.as_deref() == Some(choice.as_str()),
                                    onchange: {
                                        let id = id.clone();
                                        let choice = choice.clone();
                                        move |_| set_text(vm, &id, choice.clone())
                                    },
                                }
                                " {choice}"
                            }
                        }
                    }
                },
                AnswerInput::Slots { labels, values } => rsx! {
                    div { class: "slots",
                        for (slot, (label, value)) in labels.into_iter().zip(values).enumerate() {
                            div { key: "{slot}", class: "slot",
                                p { class: "slot-label", "{label}" }
                                input {
                                    class: "answer-input",
                                    r#type: "text",
                                    placeholder: "Enter matching paragraph (e.g., A, B, C)",
                                    value: "{value}",
                                    oninput: {
                                        let id = id.clone();
                                        move |evt: FormEvent| set_slot(vm, &id, slot, evt.value())
                                    },
                                }
                            }
                        }
                    }
                },
                AnswerInput::Text { value } => rsx! {
                    if !reference_options.is_empty() {
                        ul { class: "reference-options",
                            for option in reference_options {
                                li { key: "{option}", "{option}" }
                            }
                        }
                    }
                    input {
                        class: "answer-input",
                        r#type: "text",
                        placeholder: "Your answer",
                        value: "{value}",
                        oninput: {
                            let id = id.clone();
                            move |evt: FormEvent| set_text(vm, &id, evt.value())
                        },
                    }
                },
            }
        }
    }
}
