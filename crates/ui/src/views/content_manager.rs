use dioxus::prelude::*;
use dioxus_router::Link;
use ielts_core::model::{
    AnswerValue, QuestionId, QuestionType, SectionId, Test, TestDifficulty, TestId, TestSkill,
    UserRole,
};
use services::content_service::DEFAULT_DURATION_MINUTES;
use services::{
    AccessDecision, QuestionDraft, SectionDraft, SessionProvider, TestDetails, TestFilters,
    TestSort,
};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{TestCardVm, map_test_cards};

const MANAGER_ROLES: [UserRole; 2] = [UserRole::Admin, UserRole::ContentManager];

const DIFFICULTIES: [TestDifficulty; 4] = [
    TestDifficulty::Easy,
    TestDifficulty::Medium,
    TestDifficulty::Hard,
    TestDifficulty::VeryHard,
];

const QUESTION_TYPES: [(QuestionType, &str); 8] = [
    (QuestionType::ShortAnswer, "Short answer"),
    (QuestionType::FillInTheBlanks, "Fill in the blanks"),
    (QuestionType::MultipleChoice, "Multiple choice"),
    (QuestionType::TrueFalseNotGiven, "True / False / Not given"),
    (QuestionType::YesNoNotGiven, "Yes / No / Not given"),
    (QuestionType::MatchingHeadings, "Matching headings"),
    (QuestionType::Matching, "Matching"),
    (QuestionType::SentenceCompletion, "Sentence completion"),
];

const OPTION_INPUTS: usize = 4;

fn takes_options(kind: QuestionType) -> bool {
    matches!(
        kind,
        QuestionType::MultipleChoice
            | QuestionType::MatchingHeadings
            | QuestionType::MatchingInformation
            | QuestionType::Matching
    )
}

/// Builds the draft from the add-question form. List-answer types take a
/// comma-separated correct answer.
fn question_draft(kind: QuestionType, text: &str, answer: &str, options: &[String]) -> QuestionDraft {
    let correct_answer = if kind.expects_list() {
        AnswerValue::list(answer.split(',').map(str::trim).filter(|part| !part.is_empty()))
    } else {
        AnswerValue::text(answer.trim())
    };
    let mut draft = QuestionDraft::new(kind, text, correct_answer);
    if takes_options(kind) {
        draft.options = options.to_vec();
    }
    draft
}

#[component]
pub fn ContentManagerView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = ctx.auth();

    let resource = use_resource(move || {
        let auth = auth.clone();
        async move { Ok::<_, ViewError>(auth.guard(&MANAGER_ROLES).await) }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page content-manager",
            h2 { "Content Manager" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(AccessDecision::Granted) => rsx! {
                    ContentPanel {}
                },
                ViewState::Ready(AccessDecision::RedirectToLogin) => rsx! {
                    div { class: "panel access-denied",
                        p { "Please sign in to manage practice tests." }
                        Link { to: Route::Login {}, "Go to sign in" }
                    }
                },
                ViewState::Ready(AccessDecision::RedirectToDashboard) => rsx! {
                    div { class: "panel access-denied",
                        p { "Only admins and content managers can edit practice tests." }
                        Link { to: Route::Home {}, "Back to dashboard" }
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
fn ContentPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();
    let mut tab = use_signal(|| None::<TestSkill>);
    let mut search = use_signal(String::new);
    let mut sort = use_signal(TestSort::default);
    let mut selected = use_signal(|| None::<TestId>);
    let mut status = use_signal(|| None::<String>);

    let content_for_list = content.clone();
    let mut resource = use_resource(move || {
        let content = content_for_list.clone();
        async move {
            let filters = TestFilters {
                skills: tab().into_iter().collect(),
                search: Some(search()),
                sort: sort(),
                ..TestFilters::default()
            };
            let tests = content
                .list(&filters)
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_test_cards(&tests))
        }
    });
    let state = view_state_from_resource(&resource);

    let on_delete = use_callback(move |id: TestId| {
        let content = content.clone();
        spawn(async move {
            match content.delete_test(&id).await {
                Ok(()) => {
                    status.set(Some(format!("Deleted {id}.")));
                    if selected.peek().as_ref() == Some(&id) {
                        selected.set(None);
                    }
                }
                Err(err) => status.set(Some(err.to_string())),
            }
            resource.restart();
        });
    });
    let on_changed = use_callback(move |message: String| {
        status.set(Some(message));
        resource.restart();
    });

    rsx! {
        nav { class: "section-tabs",
            button {
                class: if tab().is_none() { "tab active" } else { "tab" },
                onclick: move |_| tab.set(None),
                "All"
            }
            for skill in TestSkill::ALL {
                button {
                    key: "{skill}",
                    class: if tab() == Some(skill) { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(Some(skill)),
                    "{skill.label()}"
                }
            }
        }
        div { class: "filters",
            input {
                id: "content-search",
                r#type: "search",
                placeholder: "Search tests",
                value: "{search}",
                oninput: move |evt| search.set(evt.value()),
            }
            select {
                onchange: move |evt| {
                    if let Some(parsed) = TestSort::parse(&evt.value()) {
                        sort.set(parsed);
                    }
                },
                option { value: "catalog", "Default" }
                option { value: "newest", "Newest" }
                option { value: "oldest", "Oldest" }
                option { value: "a-z", "A-Z" }
            }
        }
        if let Some(message) = status() {
            p { class: "status", "{message}" }
        }
        CreateTestForm { on_changed }
        match state {
            ViewState::Idle => rsx! {
                p { "Idle" }
            },
            ViewState::Loading => rsx! {
                p { "Loading..." }
            },
            ViewState::Ready(cards) => rsx! {
                table { class: "content-table",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Skill" }
                            th { "Difficulty" }
                            th { "Content" }
                            th { "" }
                        }
                    }
                    tbody {
                        for card in cards {
                            ContentRow { key: "{card.id}", card, selected, on_delete }
                        }
                    }
                }
            },
            ViewState::Error(err) => rsx! {
                p { "{err.message()}" }
            },
        }
        if let Some(test_id) = selected() {
            TestEditor { key: "{test_id}", test_id, on_changed }
        }
    }
}

#[component]
fn ContentRow(
    card: TestCardVm,
    selected: Signal<Option<TestId>>,
    on_delete: Callback<TestId>,
) -> Element {
    let mut selected = selected;
    let edit_id = card.id.clone();
    let delete_id = card.id.clone();
    rsx! {
        tr {
            td { "{card.title}" }
            td { "{card.skill.label()}" }
            td { "{card.difficulty_label}" }
            td { "{card.questions_label}" }
            td {
                button { onclick: move |_| selected.set(Some(edit_id.clone())), "Edit" }
                button {
                    class: "danger",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn CreateTestForm(on_changed: Callback<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();
    let auth = ctx.auth();
    let mut skill = use_signal(|| TestSkill::Reading);
    let mut title = use_signal(String::new);
    let mut difficulty = use_signal(|| TestDifficulty::Medium);
    let mut duration = use_signal(|| DEFAULT_DURATION_MINUTES.to_string());

    let on_create = use_callback(move |()| {
        let content = content.clone();
        let auth = auth.clone();
        spawn(async move {
            let mut details = TestDetails::new(title());
            details.difficulty = difficulty();
            if let Ok(minutes) = duration().trim().parse::<u32>() {
                details.duration = minutes;
            }
            let author = auth
                .current_user()
                .await
                .map_or_else(String::new, |user| user.email);
            match content.create_test(skill(), details, &author).await {
                Ok(test) => {
                    title.set(String::new());
                    on_changed.call(format!("Created {}.", test.id()));
                }
                Err(err) => on_changed.call(err.to_string()),
            }
        });
    });

    rsx! {
        form { class: "create-test",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_create.call(());
            },
            h3 { "New test" }
            select {
                onchange: move |evt| {
                    if let Ok(parsed) = evt.value().parse::<TestSkill>() {
                        skill.set(parsed);
                    }
                },
                for value in TestSkill::ALL {
                    option { value: value.as_str(), selected: skill() == value, "{value.label()}" }
                }
            }
            input {
                id: "new-test-title",
                placeholder: "Title",
                value: "{title}",
                oninput: move |evt| title.set(evt.value()),
            }
            select {
                onchange: move |evt| {
                    if let Ok(parsed) = evt.value().parse::<TestDifficulty>() {
                        difficulty.set(parsed);
                    }
                },
                for value in DIFFICULTIES {
                    option { value: value.as_str(), selected: difficulty() == value, "{value.label()}" }
                }
            }
            input {
                r#type: "number",
                min: "1",
                value: "{duration}",
                oninput: move |evt| duration.set(evt.value()),
            }
            button { r#type: "submit", "Create" }
        }
    }
}

#[component]
fn TestEditor(test_id: TestId, on_changed: Callback<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let content = ctx.content();
    let mut section_title = use_signal(String::new);

    let id_for_load = test_id.clone();
    let mut resource = use_resource(move || {
        let catalog = catalog.clone();
        let id = id_for_load.clone();
        async move {
            catalog
                .get_test(&id)
                .await
                .map_err(|_| ViewError::Unknown)?
                .ok_or(ViewError::NotFound)
        }
    });
    let state = view_state_from_resource(&resource);

    let on_section_added = {
        let content = content.clone();
        let test_id = test_id.clone();
        use_callback(move |()| {
            let content = content.clone();
            let test_id = test_id.clone();
            spawn(async move {
                let draft = SectionDraft {
                    title: section_title(),
                    description: None,
                };
                match content.add_section(&test_id, draft).await {
                    Ok(section) => {
                        section_title.set(String::new());
                        on_changed.call(format!("Added {}.", section.title));
                    }
                    Err(err) => on_changed.call(err.to_string()),
                }
                resource.restart();
            });
        })
    };
    let on_section_removed = {
        let content = content.clone();
        let test_id = test_id.clone();
        use_callback(move |section_id: SectionId| {
            let content = content.clone();
            let test_id = test_id.clone();
            spawn(async move {
                match content.remove_section(&test_id, &section_id).await {
                    Ok(()) => on_changed.call(format!("Removed {section_id}.")),
                    Err(err) => on_changed.call(err.to_string()),
                }
                resource.restart();
            });
        })
    };
    let on_edited = use_callback(move |message: String| {
        on_changed.call(message);
        resource.restart();
    });

    rsx! {
        section { class: "test-editor",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(test) => rsx! {
                    h3 { "Editing {test.title()}" }
                    DetailsForm {
                        test_id: test_id.clone(),
                        details: TestDetails::from(test.meta()),
                        on_edited,
                    }
                    if let Test::Writing(writing) = &test {
                        ul {
                            for task in writing.tasks().iter() {
                                li { key: "{task.id}",
                                    strong { "{task.kind.label()}" }
                                    " ({task.word_count} words): {task.question}"
                                }
                            }
                        }
                    } else {
                        for section in test.sections().iter().cloned() {
                            SectionEditor {
                                key: "{section.id}",
                                test_id: test_id.clone(),
                                section_id: section.id.clone(),
                                title: section.title.clone(),
                                description: section.description.clone(),
                                questions: section
                                    .questions
                                    .iter()
                                    .map(|q| (q.id.clone(), q.text.clone()))
                                    .collect::<Vec<_>>(),
                                on_remove: on_section_removed,
                                on_edited,
                            }
                        }
                        form {
                            onsubmit: move |evt| {
                                evt.prevent_default();
                                on_section_added.call(());
                            },
                            input {
                                placeholder: "Section title",
                                value: "{section_title}",
                                oninput: move |evt| section_title.set(evt.value()),
                            }
                            button { r#type: "submit", "Add section" }
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
fn DetailsForm(test_id: TestId, details: TestDetails, on_edited: Callback<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();
    let mut title = use_signal(|| details.title.clone());
    let mut difficulty = use_signal(|| details.difficulty);
    let mut duration = use_signal(|| details.duration.to_string());
    let mut description = use_signal(|| details.description.clone().unwrap_or_default());
    let mut instructions = use_signal(|| details.instructions.clone());

    let on_save = use_callback(move |()| {
        let content = content.clone();
        let test_id = test_id.clone();
        let fallback_duration = details.duration;
        spawn(async move {
            let description = description();
            let updated = TestDetails {
                title: title(),
                difficulty: difficulty(),
                duration: duration().trim().parse().unwrap_or(fallback_duration),
                description: (!description.trim().is_empty()).then_some(description),
                instructions: instructions(),
            };
            match content.update_details(&test_id, updated).await {
                Ok(test) => on_edited.call(format!("Saved {}.", test.id())),
                Err(err) => on_edited.call(err.to_string()),
            }
        });
    });

    rsx! {
        form { class: "test-details",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_save.call(());
            },
            input {
                id: "details-title",
                placeholder: "Title",
                value: "{title}",
                oninput: move |evt| title.set(evt.value()),
            }
            select {
                onchange: move |evt| {
                    if let Ok(parsed) = evt.value().parse::<TestDifficulty>() {
                        difficulty.set(parsed);
                    }
                },
                for value in DIFFICULTIES {
                    option { value: value.as_str(), selected: difficulty() == value, "{value.label()}" }
                }
            }
            input {
                r#type: "number",
                min: "1",
                value: "{duration}",
                oninput: move |evt| duration.set(evt.value()),
            }
            textarea {
                placeholder: "Description",
                value: "{description}",
                oninput: move |evt| description.set(evt.value()),
            }
            textarea {
                placeholder: "Instructions",
                value: "{instructions}",
                oninput: move |evt| instructions.set(evt.value()),
            }
            button { r#type: "submit", "Save details" }
        }
    }
}

#[component]
fn SectionEditor(
    test_id: TestId,
    section_id: SectionId,
    title: String,
    description: Option<String>,
    questions: Vec<(QuestionId, String)>,
    on_remove: Callback<SectionId>,
    on_edited: Callback<String>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();
    let mut kind = use_signal(|| QuestionType::ShortAnswer);
    let mut text = use_signal(String::new);
    let mut answer = use_signal(String::new);
    let mut options = use_signal(|| vec![String::new(); OPTION_INPUTS]);
    let mut editing = use_signal(|| false);
    let mut edit_title = use_signal(|| title.clone());
    let mut edit_description = use_signal(|| description.clone().unwrap_or_default());

    let on_update = {
        let content = content.clone();
        let test_id = test_id.clone();
        let section_id = section_id.clone();
        use_callback(move |()| {
            let content = content.clone();
            let test_id = test_id.clone();
            let section_id = section_id.clone();
            spawn(async move {
                let draft = SectionDraft {
                    title: edit_title(),
                    description: Some(edit_description()),
                };
                match content.update_section(&test_id, &section_id, draft).await {
                    Ok(section) => {
                        editing.set(false);
                        on_edited.call(format!("Updated {}.", section.title));
                    }
                    Err(err) => on_edited.call(err.to_string()),
                }
            });
        })
    };

    let on_add = {
        let content = content.clone();
        let test_id = test_id.clone();
        let section_id = section_id.clone();
        use_callback(move |()| {
            let content = content.clone();
            let test_id = test_id.clone();
            let section_id = section_id.clone();
            spawn(async move {
                let draft = question_draft(kind(), &text(), &answer(), &options());
                match content.add_question(&test_id, &section_id, draft).await {
                    Ok(question) => {
                        text.set(String::new());
                        answer.set(String::new());
                        options.set(vec![String::new(); OPTION_INPUTS]);
                        on_edited.call(format!("Added question {}.", question.id));
                    }
                    Err(err) => on_edited.call(err.to_string()),
                }
            });
        })
    };
    let on_remove_question = {
        let test_id = test_id.clone();
        let section_id = section_id.clone();
        use_callback(move |question_id: QuestionId| {
            let content = content.clone();
            let test_id = test_id.clone();
            let section_id = section_id.clone();
            spawn(async move {
                match content
                    .remove_question(&test_id, &section_id, &question_id)
                    .await
                {
                    Ok(()) => on_edited.call(format!("Removed question {question_id}.")),
                    Err(err) => on_edited.call(err.to_string()),
                }
            });
        })
    };
    let remove_id = section_id.clone();

    rsx! {
        div { class: "section-editor",
            h4 {
                "{title}"
                button { onclick: move |_| editing.set(!editing()), "Edit section" }
                button {
                    class: "danger",
                    onclick: move |_| on_remove.call(remove_id.clone()),
                    "Remove section"
                }
            }
            if let Some(description) = description {
                p { class: "section-description", "{description}" }
            }
            if editing() {
                form { class: "edit-section",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        on_update.call(());
                    },
                    input {
                        placeholder: "Section title",
                        value: "{edit_title}",
                        oninput: move |evt| edit_title.set(evt.value()),
                    }
                    textarea {
                        placeholder: "Section description",
                        value: "{edit_description}",
                        oninput: move |evt| edit_description.set(evt.value()),
                    }
                    button { r#type: "submit", "Save section" }
                    button { r#type: "button", onclick: move |_| editing.set(false), "Cancel" }
                }
            }
            ul {
                for (id, question_text) in questions {
                    QuestionRow { key: "{id}", id, text: question_text, on_remove: on_remove_question }
                }
            }
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_add.call(());
                },
                select {
                    onchange: move |evt| {
                        if let Ok(parsed) = evt.value().parse::<QuestionType>() {
                            kind.set(parsed);
                        }
                    },
                    for (value, label) in QUESTION_TYPES {
                        option { value: value.as_str(), selected: kind() == value, "{label}" }
                    }
                }
                input {
                    placeholder: "Question text",
                    value: "{text}",
                    oninput: move |evt| text.set(evt.value()),
                }
                if takes_options(kind()) {
                    for (index, value) in options().into_iter().enumerate() {
                        input {
                            key: "{index}",
                            class: "option-input",
                            placeholder: format!("Option {}", index + 1),
                            value: "{value}",
                            oninput: move |evt| {
                                if let Some(slot) = options.write().get_mut(index) {
                                    *slot = evt.value();
                                }
                            },
                        }
                    }
                }
                input {
                    placeholder: "Correct answer",
                    value: "{answer}",
                    oninput: move |evt| answer.set(evt.value()),
                }
                button { r#type: "submit", "Add question" }
            }
        }
    }
}

#[component]
fn QuestionRow(id: QuestionId, text: String, on_remove: Callback<QuestionId>) -> Element {
    let remove_id = id.clone();
    rsx! {
        li {
            "{id}: {text}"
            button { onclick: move |_| on_remove.call(remove_id.clone()), "Remove" }
        }
    }
}
