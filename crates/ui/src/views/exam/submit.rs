use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::exams::CONFIRM_LABEL;

use crate::context::AppContext;
use crate::vm::{ExamOutcome, ExamVm};

use super::view::go_to_result;

#[component]
pub(super) fn SubmitModal(vm: Signal<Option<ExamVm>>) -> Element {
    let clock = use_context::<AppContext>().clock();
    let navigator = use_navigator();
    let Some(dialog) = vm.read().as_ref().and_then(ExamVm::pending_dialog) else {
        return rsx! {};
    };
    let mut vm = vm;

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog",
                h3 { "Submit test" }
                p { id: "submit-description", "{dialog.description()}" }
                p { class: "warning", "{dialog.warning()}" }
                div { class: "modal-actions",
                    button {
                        id: "cancel-submit",
                        onclick: move |_| {
                            if let Some(exam) = vm.write().as_mut() {
                                exam.cancel_submit();
                            }
                        },
                        "Cancel"
                    }
                    button {
                        id: "confirm-submit",
                        class: "primary",
                        onclick: move |_| {
                            let outcome = vm
                                .write()
                                .as_mut()
                                .and_then(|exam| exam.confirm_submit(clock.now()).ok());
                            if let Some(ExamOutcome::Submitted { route }) = outcome {
                                go_to_result(navigator, &route);
                            }
                        },
                        "{CONFIRM_LABEL}"
                    }
                }
            }
        }
    }
}
