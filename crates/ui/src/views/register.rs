use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::{AuthError, Registration, RegistrationError};

use crate::context::AppContext;
use crate::routes::Route;

fn register_error(err: &AuthError) -> &'static str {
    match err {
        AuthError::Registration(RegistrationError::EmptyName) => "Enter your full name.",
        AuthError::Registration(RegistrationError::InvalidEmail) => "Enter a valid email address.",
        AuthError::Registration(RegistrationError::EmptyPassword) => "Choose a password.",
        AuthError::Registration(RegistrationError::PasswordMismatch) => "Passwords do not match.",
        _ => "Could not create your account. Please try again.",
    }
}

#[component]
pub fn RegisterView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut form = use_signal(Registration::default);
    let mut error = use_signal(|| None::<&'static str>);

    let on_register = {
        let auth = ctx.auth();
        use_callback(move |()| {
            let auth = auth.clone();
            spawn(async move {
                let submitted = form.read().clone();
                match auth.register(&submitted).await {
                    Ok(_) => {
                        error.set(None);
                        navigator.push(Route::Home {});
                    }
                    Err(err) => error.set(Some(register_error(&err))),
                }
            });
        })
    };

    rsx! {
        div { class: "page login register",
            h2 { "Create Your Account" }
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_register.call(());
                },
                label { r#for: "register-name", "Full name" }
                input {
                    id: "register-name",
                    r#type: "text",
                    placeholder: "Enter your full name",
                    value: "{form.read().full_name}",
                    oninput: move |evt| form.write().full_name = evt.value(),
                }
                label { r#for: "register-email", "Email" }
                input {
                    id: "register-email",
                    r#type: "email",
                    placeholder: "Enter your email",
                    value: "{form.read().email}",
                    oninput: move |evt| form.write().email = evt.value(),
                }
                label { r#for: "register-password", "Password" }
                input {
                    id: "register-password",
                    r#type: "password",
                    value: "{form.read().password}",
                    oninput: move |evt| form.write().password = evt.value(),
                }
                label { r#for: "register-confirm", "Confirm password" }
                input {
                    id: "register-confirm",
                    r#type: "password",
                    value: "{form.read().confirm_password}",
                    oninput: move |evt| form.write().confirm_password = evt.value(),
                }
                button { id: "register", r#type: "submit", "Create account" }
            }
            if let Some(message) = error() {
                p { class: "error", "{message}" }
            }
            p {
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
