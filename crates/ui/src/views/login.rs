use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use ielts_core::model::UserRole;
use services::{AuthError, SessionProvider};

use crate::context::AppContext;
use crate::routes::Route;

const ROLES: [(UserRole, &str); 3] = [
    (UserRole::Candidate, "Candidate"),
    (UserRole::ContentManager, "Content manager"),
    (UserRole::Admin, "Admin"),
];

fn sign_in_error(err: &AuthError) -> &'static str {
    match err {
        AuthError::User(_) => "Enter an email address.",
        _ => "Could not sign in. Please try again.",
    }
}

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut email = use_signal(String::new);
    let mut role = use_signal(|| UserRole::Candidate);
    let mut error = use_signal(|| None::<&'static str>);

    let auth_for_user = ctx.auth();
    let mut current = use_resource(move || {
        let auth = auth_for_user.clone();
        async move { auth.current_user().await }
    });
    let current_user = current.value().read().as_ref().cloned().flatten();

    let on_sign_in = {
        let auth = ctx.auth();
        use_callback(move |()| {
            let auth = auth.clone();
            spawn(async move {
                match auth.sign_in(&email(), role()).await {
                    Ok(_) => {
                        error.set(None);
                        navigator.push(Route::Home {});
                    }
                    Err(err) => error.set(Some(sign_in_error(&err))),
                }
            });
        })
    };

    let on_sign_out = {
        let auth = ctx.auth();
        use_callback(move |()| {
            let auth = auth.clone();
            spawn(async move {
                if auth.sign_out().await.is_err() {
                    error.set(Some("Could not sign out."));
                }
                current.restart();
            });
        })
    };

    rsx! {
        div { class: "page login",
            h2 { "Sign in" }
            if let Some(user) = current_user {
                p { "Signed in as {user.email} ({user.role})" }
                button { id: "sign-out", onclick: move |_| on_sign_out.call(()), "Sign out" }
            }
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_sign_in.call(());
                },
                label { r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { r#for: "login-role", "Role" }
                select {
                    id: "login-role",
                    onchange: move |evt| {
                        if let Ok(parsed) = evt.value().parse::<UserRole>() {
                            role.set(parsed);
                        }
                    },
                    for (value, label) in ROLES {
                        option { value: "{value}", selected: role() == value, "{label}" }
                    }
                }
                button { id: "sign-in", r#type: "submit", "Sign in" }
            }
            if let Some(message) = error() {
                p { class: "error", "{message}" }
            }
            p {
                "New here? "
                Link { to: Route::Register {}, "Create an account" }
            }
        }
    }
}
